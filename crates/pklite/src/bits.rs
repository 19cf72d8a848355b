use crate::error::{Result, UnpackError};

/// Reads the PKLITE bitstream: control and code bits come from a 16-bit
/// little-endian window, raw bytes come straight from the input.
#[derive(Debug, Clone)]
pub struct BitReader<'a> {
    input: &'a [u8],
    position: usize,
    window: u16,
    bits_consumed: u32,
}

impl<'a> BitReader<'a> {
    /// Loads the first window from `input[0..2]`.
    pub fn new(input: &'a [u8]) -> Result<Self> {
        let mut reader = BitReader {
            input,
            position: 0,
            window: 0,
            bits_consumed: 0,
        };
        reader.window = reader.next_word()?;
        Ok(reader)
    }

    pub fn next_bit(&mut self) -> Result<bool> {
        let bit = self.window & (1 << self.bits_consumed) != 0;
        self.bits_consumed += 1;

        if self.bits_consumed == 16 {
            self.window = self.next_word()?;
            self.bits_consumed = 0;
        }

        Ok(bit)
    }

    pub fn next_byte(&mut self) -> Result<u8> {
        let byte = *self
            .input
            .get(self.position)
            .ok_or(UnpackError::UnexpectedEndOfInput {
                position: self.position,
            })?;
        self.position += 1;
        Ok(byte)
    }

    fn next_word(&mut self) -> Result<u16> {
        let low = self.next_byte()?;
        let high = self.next_byte()?;
        Ok(u16::from_le_bytes([low, high]))
    }

    /// Bits already taken from the current window, 0 through 15.
    pub fn bits_consumed(&self) -> u32 {
        self.bits_consumed
    }

    /// Index of the next raw byte.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn window(&self) -> u16 {
        self.window
    }
}
