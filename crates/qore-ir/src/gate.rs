//! Quantum gate kinds.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Static description of a gate: its name, opcode and operand shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GateSignature {
    /// Canonical lower-case name.
    pub name: &'static str,
    /// Stable numeric identifier used by the binary format.
    pub opcode: u8,
    /// Number of target qubits.
    pub num_targets: usize,
    /// Number of control qubits.
    pub num_controls: usize,
    /// Number of numeric parameters.
    pub num_params: usize,
}

impl GateSignature {
    const fn new(
        name: &'static str,
        opcode: u8,
        num_targets: usize,
        num_controls: usize,
        num_params: usize,
    ) -> Self {
        Self {
            name,
            opcode,
            num_targets,
            num_controls,
            num_params,
        }
    }
}

/// The closed set of operations a circuit may contain.
///
/// The set follows the IonQ `qis` gate set. Opcodes are part of the `.qore`
/// format contract and must never be renumbered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GateKind {
    // Single-qubit Clifford+T gates
    /// Hadamard gate.
    H,
    /// Pauli-X gate.
    X,
    /// Pauli-Y gate.
    Y,
    /// Pauli-Z gate.
    Z,
    /// S gate (sqrt(Z)).
    S,
    /// S-dagger gate.
    Si,
    /// T gate (fourth root of Z).
    T,
    /// T-dagger gate.
    Ti,
    /// V gate (sqrt(X)).
    V,
    /// V-dagger gate.
    Vi,

    // Single-qubit rotations
    /// Rotation around X axis.
    Rx,
    /// Rotation around Y axis.
    Ry,
    /// Rotation around Z axis.
    Rz,

    /// NOT gate, the uncontrolled form of `cnot`.
    Not,

    // Controlled gates
    /// Controlled-NOT gate.
    Cnot,
    /// Controlled-Z gate.
    Cz,
    /// Controlled phase rotation.
    Cp,

    // Two-qubit gates
    /// SWAP gate.
    Swap,
    /// XX Ising interaction.
    Xx,
    /// YY Ising interaction.
    Yy,
    /// ZZ Ising interaction.
    Zz,
    /// Controlled SWAP (Fredkin) gate.
    Cswap,

    /// Doubly-controlled NOT (Toffoli) gate.
    Toffoli,

    /// Computational-basis measurement.
    Measure,
}

impl GateKind {
    /// Every gate kind, in opcode order.
    pub const ALL: [GateKind; 24] = [
        GateKind::H,
        GateKind::X,
        GateKind::Y,
        GateKind::Z,
        GateKind::S,
        GateKind::Si,
        GateKind::T,
        GateKind::Ti,
        GateKind::V,
        GateKind::Vi,
        GateKind::Rx,
        GateKind::Ry,
        GateKind::Rz,
        GateKind::Not,
        GateKind::Cnot,
        GateKind::Cz,
        GateKind::Cp,
        GateKind::Swap,
        GateKind::Xx,
        GateKind::Yy,
        GateKind::Zz,
        GateKind::Cswap,
        GateKind::Toffoli,
        GateKind::Measure,
    ];

    /// Get the static signature of this gate.
    pub const fn signature(self) -> GateSignature {
        match self {
            GateKind::H => GateSignature::new("h", 0x01, 1, 0, 0),
            GateKind::X => GateSignature::new("x", 0x02, 1, 0, 0),
            GateKind::Y => GateSignature::new("y", 0x03, 1, 0, 0),
            GateKind::Z => GateSignature::new("z", 0x04, 1, 0, 0),
            GateKind::S => GateSignature::new("s", 0x05, 1, 0, 0),
            GateKind::Si => GateSignature::new("si", 0x06, 1, 0, 0),
            GateKind::T => GateSignature::new("t", 0x07, 1, 0, 0),
            GateKind::Ti => GateSignature::new("ti", 0x08, 1, 0, 0),
            GateKind::V => GateSignature::new("v", 0x09, 1, 0, 0),
            GateKind::Vi => GateSignature::new("vi", 0x0A, 1, 0, 0),
            GateKind::Rx => GateSignature::new("rx", 0x0B, 1, 0, 1),
            GateKind::Ry => GateSignature::new("ry", 0x0C, 1, 0, 1),
            GateKind::Rz => GateSignature::new("rz", 0x0D, 1, 0, 1),
            GateKind::Not => GateSignature::new("not", 0x0E, 1, 0, 0),
            GateKind::Cnot => GateSignature::new("cnot", 0x10, 1, 1, 0),
            GateKind::Cz => GateSignature::new("cz", 0x11, 1, 1, 0),
            GateKind::Cp => GateSignature::new("cp", 0x12, 1, 1, 1),
            GateKind::Swap => GateSignature::new("swap", 0x20, 2, 0, 0),
            GateKind::Xx => GateSignature::new("xx", 0x21, 2, 0, 1),
            GateKind::Yy => GateSignature::new("yy", 0x22, 2, 0, 1),
            GateKind::Zz => GateSignature::new("zz", 0x23, 2, 0, 1),
            GateKind::Cswap => GateSignature::new("cswap", 0x24, 2, 1, 0),
            GateKind::Toffoli => GateSignature::new("toffoli", 0x30, 1, 2, 0),
            GateKind::Measure => GateSignature::new("measure", 0x40, 1, 0, 0),
        }
    }

    /// Get the name of this gate.
    #[inline]
    pub const fn name(self) -> &'static str {
        self.signature().name
    }

    /// Get the opcode of this gate.
    #[inline]
    pub const fn opcode(self) -> u8 {
        self.signature().opcode
    }

    /// Number of target qubits.
    #[inline]
    pub const fn num_targets(self) -> usize {
        self.signature().num_targets
    }

    /// Number of control qubits.
    #[inline]
    pub const fn num_controls(self) -> usize {
        self.signature().num_controls
    }

    /// Number of numeric parameters.
    #[inline]
    pub const fn num_params(self) -> usize {
        self.signature().num_params
    }

    /// Total number of qubits this gate touches.
    #[inline]
    pub const fn num_qubits(self) -> usize {
        self.num_targets() + self.num_controls()
    }

    /// Check if this gate takes parameters.
    pub const fn is_parameterized(self) -> bool {
        self.num_params() > 0
    }

    /// Check if this gate has control operands.
    pub const fn is_controlled(self) -> bool {
        self.num_controls() > 0
    }

    /// Declared arity for one operand list.
    pub const fn arity(self, role: OperandRole) -> usize {
        match role {
            OperandRole::Targets => self.num_targets(),
            OperandRole::Controls => self.num_controls(),
            OperandRole::Params => self.num_params(),
        }
    }
}

impl fmt::Display for GateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One of the three operand lists of a gate application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperandRole {
    /// Target qubits.
    Targets,
    /// Control qubits.
    Controls,
    /// Numeric parameters.
    Params,
}

impl fmt::Display for OperandRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperandRole::Targets => f.write_str("targets"),
            OperandRole::Controls => f.write_str("controls"),
            OperandRole::Params => f.write_str("parameters"),
        }
    }
}
