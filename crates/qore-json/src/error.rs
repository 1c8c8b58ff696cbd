//! Error types for the JSON decoder.

use qore_ir::{IrError, OperandRole};
use thiserror::Error;

/// Errors that can occur while decoding a circuit document.
///
/// Every instruction-level error carries the zero-based `index` of the
/// offending instruction in the flattened `circuit` sequence.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum JsonError {
    /// Input is not syntactically valid JSON.
    #[error("Invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// `gateset`, `qubits` or `circuit` is missing or has the wrong shape.
    #[error("Invalid header: {0}")]
    InvalidHeader(String),

    /// Gate name is not in the registry.
    #[error("Instruction {index}: unknown gate '{name}'")]
    UnknownGate {
        /// The unresolved name, as written.
        name: String,
        /// Instruction index.
        index: usize,
    },

    /// Operand or parameter count differs from the gate's declaration.
    #[error("Instruction {index}: gate '{gate}' expects {expected} {role}, got {actual}")]
    ArityMismatch {
        /// Instruction index.
        index: usize,
        /// Resolved gate name.
        gate: &'static str,
        /// Which operand list is wrong.
        role: OperandRole,
        /// Declared arity.
        expected: usize,
        /// Provided count.
        actual: usize,
    },

    /// Operand lies outside `[0, qubits)`.
    #[error("Instruction {index}: qubit {operand} out of range for {qubits} qubits")]
    QubitOutOfRange {
        /// Instruction index.
        index: usize,
        /// The operand as written.
        operand: i128,
        /// Declared register size.
        qubits: u32,
    },

    /// A qubit appears in more than one operand slot.
    #[error("Instruction {index}: qubit {qubit} is used more than once")]
    OverlappingOperands {
        /// Instruction index.
        index: usize,
        /// The repeated qubit.
        qubit: u32,
    },

    /// Record is not an object, lacks `gate`, or mixes operand conventions.
    #[error("Instruction {index}: {message}")]
    MalformedInstruction {
        /// Instruction index.
        index: usize,
        /// What is wrong with the record.
        message: String,
    },

    /// IR error during circuit construction.
    #[error("Circuit error: {0}")]
    Circuit(#[from] IrError),
}

impl JsonError {
    /// Instruction index the error refers to, if any.
    pub fn index(&self) -> Option<usize> {
        match self {
            JsonError::UnknownGate { index, .. }
            | JsonError::ArityMismatch { index, .. }
            | JsonError::QubitOutOfRange { index, .. }
            | JsonError::OverlappingOperands { index, .. }
            | JsonError::MalformedInstruction { index, .. } => Some(*index),
            _ => None,
        }
    }
}

/// Result type for JSON decoding.
pub type JsonResult<T> = Result<T, JsonError>;
