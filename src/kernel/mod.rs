mod memory;
mod process_control_block;
mod scheduler;

use memory::Memory;
use process_control_block::{ProcessControlBlock, ProcessState};
use scheduler::Scheduler;

pub mod driver;

pub use driver::Driver;
