//! Little-endian reads over any [`io::Read`], for DOS-era headers and streams.

use std::io;
use std::io::{Result, Seek, SeekFrom};

pub trait ByteReader: io::Read {
    fn read_u8(&mut self) -> Result<u8> {
        let mut buf = [0u8; 1];
        self.read_exact(&mut buf)?;
        Ok(buf[0])
    }
    fn read_u16_le(&mut self) -> Result<u16> {
        let mut buf = [0u8; 2];
        self.read_exact(&mut buf)?;
        Ok(u16::from_le_bytes(buf))
    }
    fn read_i16_le(&mut self) -> Result<i16> {
        let mut buf = [0u8; 2];
        self.read_exact(&mut buf)?;
        Ok(i16::from_le_bytes(buf))
    }
    fn read_u32_le(&mut self) -> Result<u32> {
        let mut buf = [0u8; 4];
        self.read_exact(&mut buf)?;
        Ok(u32::from_le_bytes(buf))
    }
}

impl<R: io::Read + ?Sized> ByteReader for R {}

/// Reads at an absolute offset, then puts the reader back at the start.
pub trait ReadAt: ByteReader + Seek {
    fn read_i16_le_at(&mut self, offset: u64) -> Result<i16> {
        self.seek(SeekFrom::Start(offset))?;
        let value = self.read_i16_le();
        self.rewind()?;
        value
    }
}

impl<R: io::Read + Seek + ?Sized> ReadAt for R {}
