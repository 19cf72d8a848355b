use tracing::{debug, trace};

use crate::bits::BitReader;
use crate::error::Result;
use crate::output::OutputBuffer;
use crate::tables::{LENGTH_TREE, OFFSET_TREE, SENTINEL_LENGTH};

/// Output ceiling used when the caller has no better estimate (4 MiB).
pub const DEFAULT_CAPACITY: usize = 4 << 20;

/// Escape bytes that follow the sentinel length.
const SKIP_MARKER: u8 = 0xfe;
const END_MARKER: u8 = 0xff;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnpackOptions {
    /// Maximum number of bytes the output may hold.
    pub capacity: usize,
    /// XOR each literal with a key derived from the bit position.
    pub decrypt: bool,
}

impl Default for UnpackOptions {
    fn default() -> Self {
        UnpackOptions {
            capacity: DEFAULT_CAPACITY,
            decrypt: false,
        }
    }
}

impl UnpackOptions {
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn decrypt(mut self, decrypt: bool) -> Self {
        self.decrypt = decrypt;
        self
    }
}

/// Decompresses a PKLITE stream. `compressed` starts at the first bit
/// window; the byte count is the length of the returned buffer.
pub fn unpack(compressed: &[u8], capacity: usize, decrypt: bool) -> Result<Vec<u8>> {
    unpack_with(compressed, &UnpackOptions { capacity, decrypt })
}

pub fn unpack_with(compressed: &[u8], options: &UnpackOptions) -> Result<Vec<u8>> {
    let span = tracing::debug_span!(
        "unpack",
        input_len = compressed.len(),
        capacity = options.capacity,
        decrypt = options.decrypt
    );
    let _guard = span.enter();

    let mut session = Session {
        bits: BitReader::new(compressed)?,
        output: OutputBuffer::with_capacity(options.capacity),
        decrypt: options.decrypt,
    };
    session.run()?;

    debug!(
        consumed = session.bits.position(),
        written = session.output.len(),
        "end of stream marker reached"
    );
    Ok(session.output.into_inner())
}

/// State of a single decode call.
struct Session<'a> {
    bits: BitReader<'a>,
    output: OutputBuffer,
    decrypt: bool,
}

enum Step {
    Continue,
    Done,
}

impl Session<'_> {
    fn run(&mut self) -> Result<()> {
        loop {
            trace!(
                position = self.bits.position(),
                window = format_args!("{:016b}", self.bits.window()),
                bits_consumed = self.bits.bits_consumed(),
                "next instruction"
            );

            let step = if self.bits.next_bit()? {
                self.duplicate()?
            } else {
                self.literal()?
            };

            if let Step::Done = step {
                return Ok(());
            }
        }
    }

    fn duplicate(&mut self) -> Result<Step> {
        let length = LENGTH_TREE.decode(&mut self.bits)?;

        let count = if length == SENTINEL_LENGTH {
            match self.bits.next_byte()? {
                SKIP_MARKER => {
                    debug!(position = self.bits.position(), "skip marker");
                    return Ok(Step::Continue);
                }
                END_MARKER => return Ok(Step::Done),
                extra => usize::from(extra) + usize::from(SENTINEL_LENGTH),
            }
        } else {
            usize::from(length)
        };

        let high = if count != 2 {
            OFFSET_TREE.decode(&mut self.bits)?
        } else {
            0
        };
        let low = self.bits.next_byte()?;
        let offset = usize::from(u16::from_le_bytes([low, high]));

        trace!(offset, count, "copy");
        self.output.copy_back(offset, count)?;
        Ok(Step::Continue)
    }

    fn literal(&mut self) -> Result<Step> {
        let mut byte = self.bits.next_byte()?;
        if self.decrypt {
            // The key is taken after the control bit, so it runs 1..=16.
            byte ^= (16 - self.bits.bits_consumed()) as u8;
        }
        self.output.push(byte)?;
        Ok(Step::Continue)
    }
}
