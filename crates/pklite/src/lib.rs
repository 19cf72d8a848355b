//! Decompression of DOS executables packed with PKLITE.
//!
//! The compressed region interleaves a bitstream, read in 16-bit
//! little-endian windows, with raw bytes. Each instruction starts with a
//! control bit: 0 appends one literal byte (optionally decrypted), 1 copies
//! a run of earlier output whose length and offset are prefix coded.
//!
//! ```
//! // literal 'A', then the end-of-stream escape
//! let compressed = [0b0011_1010, 0x00, b'A', 0xff];
//! let image = pklite::unpack(&compressed, 64, false)?;
//! assert_eq!(image, b"A");
//! # Ok::<(), pklite::UnpackError>(())
//! ```

pub mod bits;
pub mod error;
pub mod header;
pub mod output;
pub mod tables;
pub mod tree;
pub mod unpack;

pub use error::{Corruption, Result, UnpackError};
pub use header::{estimate_length, estimate_length_from_bytes};
pub use unpack::{DEFAULT_CAPACITY, UnpackOptions, unpack, unpack_with};
