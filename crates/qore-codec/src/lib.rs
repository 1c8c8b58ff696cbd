//! Binary `.qore` Encoder and Decoder
//!
//! This crate turns a validated [`Circuit`](qore_ir::Circuit) into a compact,
//! versioned byte stream and back.
//!
//! # Format
//!
//! A fixed header (magic `QORE`, version, flags, gate-set tag, qubit and
//! instruction counts) is followed by one record per instruction: the gate's
//! opcode and then its target indices, control indices and parameters, with
//! no length fields since every count is implied by the opcode. An optional
//! truncated SHA-256 trailer guards the record bytes. See [`format`] for the
//! byte layout.
//!
//! Encoding is deterministic: the same circuit always yields the same bytes,
//! on any platform.
//!
//! # Example: Round-Trip
//!
//! ```rust
//! use qore_codec::{decode, encode};
//! use qore_ir::Circuit;
//!
//! let circuit = Circuit::ghz(4).unwrap();
//! let bytes = encode(&circuit).unwrap();
//!
//! assert_eq!(&bytes[..4], b"QORE");
//! assert_eq!(decode(&bytes).unwrap(), circuit);
//! ```
//!
//! # Example: Text Listing
//!
//! ```rust
//! use qore_codec::emit_text;
//! use qore_ir::Circuit;
//!
//! let text = emit_text(&Circuit::bell().unwrap());
//! assert!(text.contains("op not [1] [0]"));
//! ```

pub mod format;

mod error;
mod reader;
mod text;
mod writer;

pub use error::{CodecError, CodecResult};
pub use format::{MAGIC, MAX_QUBITS, VERSION};
pub use reader::decode;
pub use text::emit_text;
pub use writer::{EncodeOptions, encode, encode_with};
