//! Error types for the binary codec.

use qore_ir::IrError;
use thiserror::Error;

/// Errors raised while encoding or decoding a `.qore` stream.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum CodecError {
    /// A circuit dimension does not fit its fixed-width field.
    #[error("{field} {value} exceeds format capacity {max}")]
    CapacityExceeded {
        /// Which field overflowed.
        field: &'static str,
        /// The offending value.
        value: u64,
        /// Largest encodable value.
        max: u64,
    },

    /// The stream does not start with the format magic.
    #[error("Bad magic: expected \"QORE\", found {found:02x?}")]
    BadMagic {
        /// The first four bytes of the stream.
        found: [u8; 4],
    },

    /// The stream was written by a newer (or unknown) format version.
    #[error("Unsupported format version {found} (this build reads version {supported})")]
    UnsupportedVersion {
        /// Version declared by the stream.
        found: u16,
        /// Version this build understands.
        supported: u16,
    },

    /// Fewer bytes remain than the current field requires.
    #[error("Truncated stream at offset {offset}: need {needed} bytes, {available} available")]
    TruncatedStream {
        /// Byte offset where the read started.
        offset: usize,
        /// Bytes required.
        needed: usize,
        /// Bytes left in the stream.
        available: usize,
    },

    /// An instruction record starts with an unassigned opcode.
    #[error("Instruction {index}: unknown opcode {opcode:#04x}")]
    UnknownOpcode {
        /// The opcode byte.
        opcode: u8,
        /// Instruction index.
        index: usize,
    },

    /// Header fields are readable but inconsistent.
    #[error("Malformed header: {0}")]
    MalformedHeader(String),

    /// The checksum trailer does not match the instruction stream.
    #[error("Checksum mismatch: stream carries {found:02x?}, computed {expected:02x?}")]
    ChecksumMismatch {
        /// Checksum computed over the records.
        expected: [u8; 8],
        /// Checksum stored in the trailer.
        found: [u8; 8],
    },

    /// Bytes remain after the last record (and trailer).
    #[error("{count} trailing bytes after end of stream")]
    TrailingBytes {
        /// Number of unread bytes.
        count: usize,
    },

    /// A structurally readable record violates circuit invariants.
    #[error("Instruction {index}: {source}")]
    InvalidCircuit {
        /// Instruction index.
        index: usize,
        /// The violated invariant.
        #[source]
        source: IrError,
    },
}

/// Result type for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;
