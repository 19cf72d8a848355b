//! Builds PKLITE streams from instructions, laid out the way the reader
//! consumes them.

#![allow(dead_code)]

use std::io;
use std::sync::{Arc, Mutex};

use pklite::tables::{LENGTH_TREE, OFFSET_TREE, SENTINEL_LENGTH};
use tracing_subscriber::fmt::MakeWriter;

/// Collects formatted log lines so tests can assert on them.
#[derive(Clone, Default)]
pub struct LogCapture(Arc<Mutex<Vec<u8>>>);

impl LogCapture {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogCapture {
    type Writer = LogCapture;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

pub struct StreamBuilder {
    bytes: Vec<u8>,
    /// Where the current window will be written.
    window_at: usize,
    window: u16,
    bits: u32,
}

impl Default for StreamBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl StreamBuilder {
    pub fn new() -> Self {
        StreamBuilder {
            bytes: vec![0, 0],
            window_at: 0,
            window: 0,
            bits: 0,
        }
    }

    /// Bits consumed in the window once the next control bit is read.
    pub fn bits_after_control(&self) -> u32 {
        (self.bits + 1) % 16
    }

    pub fn bit(&mut self, bit: bool) -> &mut Self {
        if bit {
            self.window |= 1 << self.bits;
        }
        self.bits += 1;
        if self.bits == 16 {
            self.flush_window();
            // The reader loads the next window as soon as this one is spent.
            self.window_at = self.bytes.len();
            self.bytes.extend_from_slice(&[0, 0]);
            self.window = 0;
            self.bits = 0;
        }
        self
    }

    pub fn code(&mut self, code: &[bool]) -> &mut Self {
        for &b in code {
            self.bit(b);
        }
        self
    }

    pub fn raw(&mut self, byte: u8) -> &mut Self {
        self.bytes.push(byte);
        self
    }

    pub fn literal(&mut self, byte: u8) -> &mut Self {
        self.bit(false).raw(byte)
    }

    /// A literal that decodes to `plain` when decryption is on.
    pub fn encrypted_literal(&mut self, plain: u8) -> &mut Self {
        let key = (16 - self.bits_after_control()) as u8;
        self.literal(plain ^ key)
    }

    fn length(&mut self, value: u8) -> &mut Self {
        let code = LENGTH_TREE.code_for(value).expect("length code");
        self.code(&code)
    }

    fn offset_high(&mut self, value: u8) -> &mut Self {
        let code = OFFSET_TREE.code_for(value).expect("offset code");
        self.code(&code)
    }

    /// Copy `count` bytes from `offset` bytes back.
    pub fn copy(&mut self, offset: u16, count: usize) -> &mut Self {
        assert!((2..=25 + 0xfd).contains(&count), "escape bytes 0xfe and 0xff are reserved");
        self.bit(true);
        if count < usize::from(SENTINEL_LENGTH) {
            self.length(count as u8);
        } else {
            self.length(SENTINEL_LENGTH)
                .raw((count - usize::from(SENTINEL_LENGTH)) as u8);
        }
        let [low, high] = offset.to_le_bytes();
        if count == 2 {
            assert_eq!(high, 0, "two-byte copies carry only a low offset byte");
        } else {
            assert!(high < 32, "offset high byte is coded in five bits");
            self.offset_high(high);
        }
        self.raw(low)
    }

    pub fn skip(&mut self) -> &mut Self {
        self.bit(true).length(SENTINEL_LENGTH).raw(0xfe)
    }

    pub fn end(&mut self) -> &mut Self {
        self.bit(true).length(SENTINEL_LENGTH).raw(0xff)
    }

    fn flush_window(&mut self) {
        self.bytes[self.window_at..self.window_at + 2].copy_from_slice(&self.window.to_le_bytes());
    }

    pub fn build(&mut self) -> Vec<u8> {
        self.flush_window();
        self.bytes.clone()
    }
}
