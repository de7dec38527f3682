/// Process lifecycle label. Written as a job moves through its life;
/// `Waiting` is part of the model but no code path ever enters it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum ProcessState {
    New,
    Ready,
    Running,
    #[allow(dead_code)]
    Waiting,
    Terminated,
}

/// The process control block. Holds process metadata.
pub(crate) struct ProcessControlBlock {
    pub pid: u32,
    pub name: String,
    pub state: ProcessState,
    pub burst_time: u32,
}

impl ProcessControlBlock {
    pub fn new(pid: u32, name: &str, burst_time: u32) -> ProcessControlBlock {
        ProcessControlBlock {
            pid,
            name: name.to_string(),
            state: ProcessState::New,
            burst_time,
        }
    }
}

/// The fixed table the `run` command schedules. Built once at startup,
/// never grows or shrinks.
pub(crate) fn default_process_table() -> Vec<ProcessControlBlock> {
    vec![
        ProcessControlBlock::new(1, "Process1", 5),
        ProcessControlBlock::new(2, "Process2", 3),
        ProcessControlBlock::new(3, "Process3", 4),
        ProcessControlBlock::new(4, "Process4", 2),
        ProcessControlBlock::new(5, "Process5", 1),
    ]
}
