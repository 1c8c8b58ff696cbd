//! Error types for the IR crate.

use crate::gate::OperandRole;
use crate::qubit::QubitId;
use thiserror::Error;

/// Errors that can occur while building a circuit.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum IrError {
    /// A circuit needs at least one qubit.
    #[error("Circuit must have at least one qubit, got {0}")]
    InvalidQubitCount(u32),

    /// Qubit index is outside the circuit register.
    #[error("Qubit {qubit} out of range for a {num_qubits}-qubit circuit (gate: {gate_name})")]
    QubitOutOfRange {
        /// The offending qubit.
        qubit: QubitId,
        /// Register size of the circuit.
        num_qubits: u32,
        /// Gate the qubit was passed to.
        gate_name: &'static str,
    },

    /// Gate was given the wrong number of operands.
    #[error("Gate '{gate_name}' requires {expected} {role}, got {got}")]
    ArityMismatch {
        /// Name of the gate.
        gate_name: &'static str,
        /// Which operand list is wrong.
        role: OperandRole,
        /// Declared arity.
        expected: usize,
        /// Provided count.
        got: usize,
    },

    /// The same qubit is used twice within one gate application.
    #[error("Duplicate qubit {qubit} in operation (gate: {gate_name})")]
    DuplicateQubit {
        /// The duplicate qubit.
        qubit: QubitId,
        /// Name of the gate.
        gate_name: &'static str,
    },

    /// Gate parameter is NaN or infinite.
    #[error("Gate '{gate_name}' parameter {value} is not finite")]
    NonFiniteParameter {
        /// Name of the gate.
        gate_name: &'static str,
        /// The rejected value.
        value: f64,
    },
}

/// Result type for IR operations.
pub type IrResult<T> = Result<T, IrError>;
