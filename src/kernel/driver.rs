use std::env;
use std::io::{self, BufRead, Write};
use std::path::Path;

use log::debug;

use super::memory::{AllocateError, DeallocateError};
use super::process_control_block::default_process_table;
use super::*;

use crate::io::{fs_ops, Console};

const MENU_PROMPT: &str = "\nEnter command (ls, cd, touch, rm, run, alloc, free, mem, exit): ";

/// Owns the whole simulated environment and dispatches REPL commands to
/// the subsystems. All mutable state lives here; nothing is global.
pub struct Driver<R> {
    console: Console<R>,
    memory: Memory,
    processes: Vec<ProcessControlBlock>,
    scheduler: Scheduler,
}

impl<R: BufRead> Driver<R> {
    pub fn new(reader: R) -> Driver<R> {
        Driver {
            console: Console::new(reader),
            memory: Memory::new(),
            processes: default_process_table(),
            scheduler: Scheduler::new(),
        }
    }

    /// Runs the command loop until `exit` or end of input. Failures of
    /// individual commands are reported and the loop keeps going; only a
    /// broken console ends it early.
    pub fn start(&mut self) -> io::Result<()> {
        loop {
            print!("{}", MENU_PROMPT);
            io::stdout().flush()?;

            let command = match self.console.read_token()? {
                Some(command) => command,
                None => break,
            };
            debug!("dispatching command: {}", command);

            match command.as_str() {
                "ls" => self.list_files(),
                "cd" => self.change_directory()?,
                "touch" => self.create_file()?,
                "rm" => self.remove_file()?,
                "run" => self.scheduler.run_all(&mut self.processes),
                "alloc" => self.allocate_memory()?,
                "free" => self.deallocate_memory()?,
                "mem" => self.display_memory(),
                "exit" => {
                    println!("Exiting program.");
                    break;
                }
                _ => println!("Invalid command"),
            }
        }

        Ok(())
    }

    fn list_files(&self) {
        let path = match env::current_dir() {
            Ok(path) => path,
            Err(err) => {
                report_error("current directory", &err);
                return;
            }
        };

        match fs_ops::list_files(&path) {
            Ok(names) => {
                for name in names {
                    println!("{}", name);
                }
            }
            Err(err) => report_error("list directory", &err),
        }
    }

    fn change_directory(&mut self) -> io::Result<()> {
        if let Some(path) = self.prompt_token("Enter path: ")? {
            if let Err(err) = fs_ops::change_directory(Path::new(&path)) {
                report_error("change directory", &err);
            }
        }
        Ok(())
    }

    fn create_file(&mut self) -> io::Result<()> {
        if let Some(filename) = self.prompt_token("Enter filename to create: ")? {
            match fs_ops::create_file(Path::new(&filename)) {
                Ok(()) => println!("File '{}' created successfully.", filename),
                Err(err) => report_error("create file", &err),
            }
        }
        Ok(())
    }

    fn remove_file(&mut self) -> io::Result<()> {
        if let Some(filename) = self.prompt_token("Enter filename to remove: ")? {
            match fs_ops::remove_file(Path::new(&filename)) {
                Ok(()) => println!("File '{}' removed successfully.", filename),
                Err(err) => report_error("remove file", &err),
            }
        }
        Ok(())
    }

    fn allocate_memory(&mut self) -> io::Result<()> {
        if let Some(size) = self.prompt_int("Enter memory size to allocate: ")? {
            match self.memory.allocate(size) {
                Ok(block_number) => {
                    println!("Allocated {} units of memory at block {}.", size, block_number)
                }
                Err(AllocateError::InvalidSize) => println!("Invalid memory size."),
                Err(AllocateError::TableFull) => {
                    println!("Memory allocation failed. Not enough memory.")
                }
            }
        }
        Ok(())
    }

    fn deallocate_memory(&mut self) -> io::Result<()> {
        if let Some(block_number) = self.prompt_int("Enter memory block number to free: ")? {
            match self.memory.deallocate(block_number) {
                Ok(()) => println!("Freed memory block {}.", block_number),
                Err(DeallocateError::OutOfRange) => println!("Invalid memory block number."),
                Err(DeallocateError::AlreadyFree) => {
                    println!("Memory block {} is already free.", block_number)
                }
            }
        }
        Ok(())
    }

    fn display_memory(&self) {
        println!("Memory Blocks:");
        println!("Block\tSize\tStatus");
        for (block_number, block) in self.memory.blocks().iter().enumerate() {
            let status = if block.is_free { "Free" } else { "Allocated" };
            println!("{}\t{}\t{}", block_number, block.size, status);
        }
    }

    fn prompt_token(&mut self, prompt: &str) -> io::Result<Option<String>> {
        print!("{}", prompt);
        io::stdout().flush()?;
        self.console.read_token()
    }

    /// Prompts for an integer argument. A token that is not an integer
    /// is reported and the rest of the input line is thrown away, as the
    /// menu contract requires.
    fn prompt_int(&mut self, prompt: &str) -> io::Result<Option<i64>> {
        let token = match self.prompt_token(prompt)? {
            Some(token) => token,
            None => return Ok(None),
        };

        match token.parse::<i64>() {
            Ok(value) => Ok(Some(value)),
            Err(_) => {
                eprintln!("Error: invalid input");
                self.console.discard_line();
                Ok(None)
            }
        }
    }
}

fn report_error(context: &str, err: &io::Error) {
    eprintln!("Error: {} ({})", context, err);
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use std::time::Duration;

    use super::*;

    fn driver_for(script: &str) -> Driver<Cursor<String>> {
        Driver::new(Cursor::new(script.to_string()))
    }

    #[test]
    fn test_driver_alloc_free_example_session() {
        let mut driver = driver_for("alloc\n10\nalloc\n20\nfree\n0\nexit\n");
        driver.start().unwrap();

        let blocks = driver.memory.blocks();
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].size, 10);
        assert!(blocks[0].is_free);
        assert_eq!(blocks[1].size, 20);
        assert!(!blocks[1].is_free);
    }

    #[test]
    fn test_driver_discards_line_after_bad_integer() {
        // "99" on the same line as the bad token must be thrown away.
        let mut driver = driver_for("alloc\nabc 99\nalloc\n7\nexit\n");
        driver.start().unwrap();

        let blocks = driver.memory.blocks();
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].size, 7);
    }

    #[test]
    fn test_driver_invalid_command_keeps_looping() {
        let mut driver = driver_for("bogus\nmem\nexit\n");
        assert!(driver.start().is_ok());
    }

    #[test]
    fn test_driver_run_terminates_every_process() {
        let mut driver = driver_for("run\nexit\n");
        driver.scheduler = Scheduler::with_time_unit(Duration::from_millis(1));
        driver.start().unwrap();

        assert_eq!(driver.processes.len(), 5);
        for pcb in &driver.processes {
            assert_eq!(pcb.state, ProcessState::Terminated);
        }
    }

    #[test]
    fn test_driver_ends_on_eof() {
        let mut driver = driver_for("");
        assert!(driver.start().is_ok());
    }
}
