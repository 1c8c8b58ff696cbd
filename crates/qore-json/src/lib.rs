//! JSON Circuit Documents for qore
//!
//! This crate turns the JSON circuit description produced by upstream tooling
//! (the IonQ `ionq.circuit.v0` dialect) into a validated [`Circuit`], and
//! writes circuits back out in the same dialect.
//!
//! Decoding is all-or-nothing: either every instruction passes validation and
//! a [`Circuit`] is returned, or the first offending instruction is reported
//! by index and nothing is built.
//!
//! # Document Shape
//!
//! ```json
//! {
//!   "format": "ionq.circuit.v0",
//!   "gateset": "qis",
//!   "qubits": 2,
//!   "circuit": [
//!     { "gate": "h", "targets": [0] },
//!     { "gate": "cnot", "targets": [1], "controls": [0] },
//!     { "gate": "rz", "target": 1, "rotation": 0.25 }
//!   ]
//! }
//! ```
//!
//! Each record names a `gate` and supplies operands through `target`/`targets`,
//! `control`/`controls` (a number or an array), or a positional `qubits` array
//! (controls first, then targets). Parameters come from `rotation` or `params`.
//! Nested arrays inside `circuit` are operation groups and are flattened.
//!
//! # Example: Decoding
//!
//! ```rust
//! use qore_json::parse_str;
//!
//! let circuit = parse_str(r#"{
//!     "gateset": "qis",
//!     "qubits": 2,
//!     "circuit": [
//!         {"gate": "H", "targets": [0]},
//!         {"gate": "CNOT", "targets": [1], "controls": [0]}
//!     ]
//! }"#).unwrap();
//!
//! assert_eq!(circuit.num_qubits(), 2);
//! assert_eq!(circuit.len(), 2);
//! ```
//!
//! # Example: Round-Trip
//!
//! ```rust
//! use qore_ir::Circuit;
//! use qore_json::{parse_str, to_string};
//!
//! let circuit = Circuit::ghz(3).unwrap();
//! let json = to_string(&circuit).unwrap();
//! assert_eq!(parse_str(&json).unwrap(), circuit);
//! ```

mod decoder;
mod document;
mod emitter;
mod error;

pub use decoder::{from_value, parse, parse_str};
pub use document::{CircuitDocument, InstructionRecord, OneOrMany, Operand};
pub use emitter::{DOCUMENT_FORMAT, to_document, to_string, to_string_pretty};
pub use error::{JsonError, JsonResult};

#[doc(no_inline)]
pub use qore_ir::Circuit;
