use crate::error::{Corruption, Result, UnpackError};

/// Decompressed bytes with a hard ceiling on their length.
#[derive(Debug)]
pub struct OutputBuffer {
    data: Vec<u8>,
    capacity: usize,
}

impl OutputBuffer {
    pub fn with_capacity(capacity: usize) -> Self {
        // Grow on demand; the ceiling is usually a generous estimate.
        OutputBuffer {
            data: Vec::with_capacity(capacity.min(64 * 1024)),
            capacity,
        }
    }

    pub fn push(&mut self, byte: u8) -> Result<()> {
        if self.data.len() >= self.capacity {
            return Err(UnpackError::BufferOverflow {
                capacity: self.capacity,
            });
        }
        self.data.push(byte);
        Ok(())
    }

    /// Appends `count` bytes starting `offset` bytes behind the write
    /// position. Runs forward one byte at a time, so a copy that overlaps
    /// its own output repeats the bytes it just wrote. Offset 0 reads the
    /// unwritten slot under the cursor, which is zero.
    pub fn copy_back(&mut self, offset: usize, count: usize) -> Result<()> {
        let written = self.data.len();
        if offset > written {
            return Err(Corruption::OffsetOutOfRange { offset, written }.into());
        }

        let mut src = written - offset;
        for _ in 0..count {
            let byte = self.data.get(src).copied().unwrap_or(0);
            self.push(byte)?;
            src += 1;
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.data
    }
}
