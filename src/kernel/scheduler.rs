use std::thread;
use std::time::Duration;

use super::{ProcessControlBlock, ProcessState};

/// Runs the process table under the menu's "Round Robin" label. The
/// label is a known mismatch kept from the source material: each job
/// runs to completion on its own worker thread, joined before the next
/// job starts, with no time slicing.
pub(crate) struct Scheduler {
    time_unit: Duration,
}

impl Scheduler {
    pub fn new() -> Scheduler {
        Scheduler::with_time_unit(Duration::from_secs(1))
    }

    /// One burst-time unit of simulated execution. Tests shrink this to
    /// keep runs fast.
    pub fn with_time_unit(time_unit: Duration) -> Scheduler {
        Scheduler { time_unit }
    }

    /// Walks the table in order and runs every process not yet
    /// terminated. Strictly sequential: total wall time is the sum of
    /// the burst times.
    pub fn run_all(&self, processes: &mut [ProcessControlBlock]) {
        println!("Scheduling processes using Round Robin algorithm.");

        for pcb in processes.iter_mut() {
            if pcb.state != ProcessState::New && pcb.state != ProcessState::Ready {
                continue;
            }
            pcb.state = ProcessState::Ready;

            let time_unit = self.time_unit;
            thread::scope(|scope| {
                scope.spawn(move || Scheduler::execute_process(pcb, time_unit));
            });
        }
    }

    fn execute_process(pcb: &mut ProcessControlBlock, time_unit: Duration) {
        pcb.state = ProcessState::Running;
        println!("Process {} ({}) is running.", pcb.pid, pcb.name);

        thread::sleep(time_unit * pcb.burst_time);

        pcb.state = ProcessState::Terminated;
        println!("Process {} ({}) has terminated.", pcb.pid, pcb.name);
    }
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use super::*;

    #[test]
    fn test_scheduler_terminates_all_processes_sequentially() {
        let scheduler = Scheduler::with_time_unit(Duration::from_millis(5));
        let mut processes = vec![
            ProcessControlBlock::new(1, "A", 1),
            ProcessControlBlock::new(2, "B", 2),
            ProcessControlBlock::new(3, "C", 1),
        ];

        let started = Instant::now();
        scheduler.run_all(&mut processes);
        let elapsed = started.elapsed();

        for pcb in &processes {
            assert_eq!(pcb.state, ProcessState::Terminated);
        }
        // Sequential: at least the sum of bursts (4 units of 5ms).
        assert!(elapsed >= Duration::from_millis(20));
    }

    #[test]
    fn test_scheduler_skips_terminated_processes() {
        let scheduler = Scheduler::with_time_unit(Duration::from_millis(1));
        let mut processes = vec![
            ProcessControlBlock::new(1, "A", 1),
            ProcessControlBlock::new(2, "B", 1),
        ];
        processes[0].state = ProcessState::Terminated;

        scheduler.run_all(&mut processes);

        assert_eq!(processes[0].state, ProcessState::Terminated);
        assert_eq!(processes[1].state, ProcessState::Terminated);
    }

    #[test]
    fn test_scheduler_reruns_ready_processes() {
        let scheduler = Scheduler::with_time_unit(Duration::from_millis(1));
        let mut processes = vec![ProcessControlBlock::new(1, "A", 1)];
        processes[0].state = ProcessState::Ready;

        scheduler.run_all(&mut processes);

        assert_eq!(processes[0].state, ProcessState::Terminated);
    }
}
