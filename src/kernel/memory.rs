const MEMORY_SIZE: usize = 1024;

#[derive(Debug, PartialEq)]
pub(crate) enum AllocateError {
    InvalidSize,
    TableFull,
}

#[derive(Debug, PartialEq)]
pub(crate) enum DeallocateError {
    OutOfRange,
    AlreadyFree,
}

pub(crate) struct MemoryBlock {
    pub size: usize,
    pub is_free: bool,
    #[allow(dead_code)]
    pub start_address: usize,
}

/// Fixed-capacity table of simulated memory blocks. Blocks are addressed
/// by table index, never merged, and a freed block keeps its recorded
/// size, so freed space is only reused when a later request fits it.
pub(crate) struct Memory {
    blocks: Vec<MemoryBlock>,
}

impl Memory {
    pub fn new() -> Memory {
        Memory { blocks: Vec::new() }
    }

    /// First-fit scan over the table; appends a new block when no free
    /// block is large enough. Returns the index of the claimed block.
    pub fn allocate(&mut self, size: i64) -> Result<usize, AllocateError> {
        if size <= 0 || size as usize > MEMORY_SIZE {
            return Err(AllocateError::InvalidSize);
        }
        let size = size as usize;

        for (block_number, block) in self.blocks.iter_mut().enumerate() {
            if block.is_free && block.size >= size {
                block.is_free = false;
                return Ok(block_number);
            }
        }

        if self.blocks.len() >= MEMORY_SIZE {
            return Err(AllocateError::TableFull);
        }

        let block_number = self.blocks.len();
        self.blocks.push(MemoryBlock {
            size,
            is_free: false,
            // Carried over from the original scheme: collides for blocks
            // of differing sizes. Display-only, never dereferenced.
            start_address: block_number * size,
        });

        Ok(block_number)
    }

    pub fn deallocate(&mut self, block_number: i64) -> Result<(), DeallocateError> {
        if block_number < 0 || block_number as usize >= self.blocks.len() {
            return Err(DeallocateError::OutOfRange);
        }

        let block = &mut self.blocks[block_number as usize];
        if block.is_free {
            return Err(DeallocateError::AlreadyFree);
        }

        block.is_free = true;
        Ok(())
    }

    /// Every block ever appended, in index order.
    pub fn blocks(&self) -> &[MemoryBlock] {
        &self.blocks
    }
}
