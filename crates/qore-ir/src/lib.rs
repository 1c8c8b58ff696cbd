//! Qore Circuit Model
//!
//! This crate provides the in-memory representation of quantum circuits that
//! the rest of the qore stack decodes into and encodes from.
//!
//! # Overview
//!
//! A [`Circuit`] is an immutable, validated value: a gate-set tag, a fixed
//! qubit register size and an ordered list of [`GateApplication`]s. The only
//! way to obtain one is through [`CircuitBuilder`], which checks every
//! instruction as it is appended, so a circuit that exists is always valid.
//!
//! # Core Components
//!
//! - **Gates**: [`GateKind`], the closed set of supported operations, each with
//!   a fixed target, control and parameter arity and a stable opcode
//! - **Registry**: [`GateRegistry`] for resolving gate names and opcodes
//! - **Qubits**: [`QubitId`] for addressing the register
//! - **Instructions**: [`GateApplication`] combining a gate with its operands
//! - **Circuit**: [`Circuit`] and its [`CircuitBuilder`]
//!
//! # Example: Building a Bell Pair
//!
//! ```rust
//! use qore_ir::{Circuit, QubitId};
//!
//! let mut builder = Circuit::builder("qis", 2).unwrap();
//! builder.h(QubitId(0)).unwrap();
//! builder.cnot(QubitId(0), QubitId(1)).unwrap();
//! let circuit = builder.build();
//!
//! assert_eq!(circuit.num_qubits(), 2);
//! assert_eq!(circuit.len(), 2);
//! assert_eq!(circuit.depth(), 2);
//! ```
//!
//! # Example: Resolving Gate Names
//!
//! ```rust
//! use qore_ir::{GateKind, registry};
//!
//! assert_eq!(registry::lookup("CNOT"), Some(GateKind::Cnot));
//! assert_eq!(registry::lookup("cx"), Some(GateKind::Cnot));
//! assert_eq!(registry::lookup("warp"), None);
//! ```
//!
//! # Supported Gates
//!
//! | Gate | Targets | Controls | Params |
//! |------|---------|----------|--------|
//! | `h`, `x`, `y`, `z`, `not` | 1 | 0 | 0 |
//! | `s`, `si`, `t`, `ti`, `v`, `vi` | 1 | 0 | 0 |
//! | `rx`, `ry`, `rz` | 1 | 0 | 1 |
//! | `cnot`, `cz` | 1 | 1 | 0 |
//! | `cp` | 1 | 1 | 1 |
//! | `swap` | 2 | 0 | 0 |
//! | `xx`, `yy`, `zz` | 2 | 0 | 1 |
//! | `cswap` | 2 | 1 | 0 |
//! | `toffoli` | 1 | 2 | 0 |
//! | `measure` | 1 | 0 | 0 |

pub mod circuit;
pub mod error;
pub mod gate;
pub mod instruction;
pub mod qubit;
pub mod registry;

pub use circuit::{Circuit, CircuitBuilder, DEFAULT_GATESET};
pub use error::{IrError, IrResult};
pub use gate::{GateKind, GateSignature, OperandRole};
pub use instruction::GateApplication;
pub use qubit::QubitId;
pub use registry::GateRegistry;
