//! Circuits and the validating circuit builder.

use std::collections::BTreeMap;

use rustc_hash::FxHashMap;

use crate::error::{IrError, IrResult};
use crate::gate::GateKind;
use crate::instruction::GateApplication;
use crate::qubit::QubitId;

/// Gate-set tag used when the input does not name one.
pub const DEFAULT_GATESET: &str = "qis";

/// An immutable quantum circuit.
///
/// Instruction order is execution order. Every instruction only references
/// qubits below [`num_qubits`](Self::num_qubits).
#[derive(Debug, Clone, PartialEq)]
pub struct Circuit {
    gateset: String,
    num_qubits: u32,
    instructions: Vec<GateApplication>,
}

impl Circuit {
    /// Start building a circuit over `num_qubits` qubits.
    pub fn builder(gateset: impl Into<String>, num_qubits: u32) -> IrResult<CircuitBuilder> {
        CircuitBuilder::new(gateset, num_qubits)
    }

    /// The originating gate-set identifier.
    pub fn gateset(&self) -> &str {
        &self.gateset
    }

    /// Register size.
    pub fn num_qubits(&self) -> u32 {
        self.num_qubits
    }

    /// Instructions in execution order.
    pub fn instructions(&self) -> &[GateApplication] {
        &self.instructions
    }

    /// Number of instructions.
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// Check if the circuit has no instructions.
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Iterate over instructions in execution order.
    pub fn iter(&self) -> std::slice::Iter<'_, GateApplication> {
        self.instructions.iter()
    }

    /// Instruction count per gate name.
    pub fn gate_counts(&self) -> BTreeMap<&'static str, usize> {
        let mut counts = BTreeMap::new();
        for app in &self.instructions {
            *counts.entry(app.name()).or_insert(0) += 1;
        }
        counts
    }

    /// Number of layers when every instruction waits for all of its qubits.
    pub fn depth(&self) -> usize {
        let mut layer: FxHashMap<QubitId, usize> = FxHashMap::default();
        let mut depth = 0;
        for app in &self.instructions {
            let next = app
                .qubits()
                .map(|q| layer.get(&q).copied().unwrap_or(0))
                .max()
                .unwrap_or(0)
                + 1;
            for q in app.qubits() {
                layer.insert(q, next);
            }
            depth = depth.max(next);
        }
        depth
    }

    /// Highest qubit referenced by any instruction.
    pub fn max_qubit_used(&self) -> Option<QubitId> {
        self.instructions.iter().flat_map(GateApplication::qubits).max()
    }

    /// Create a Bell-pair circuit.
    pub fn bell() -> IrResult<Self> {
        let mut builder = Self::builder(DEFAULT_GATESET, 2)?;
        builder.h(QubitId(0))?.cnot(QubitId(0), QubitId(1))?;
        Ok(builder.build())
    }

    /// Create an n-qubit GHZ circuit.
    pub fn ghz(n: u32) -> IrResult<Self> {
        let mut builder = Self::builder(DEFAULT_GATESET, n)?;
        builder.h(QubitId(0))?;
        for i in 1..n {
            builder.cnot(QubitId(i - 1), QubitId(i))?;
        }
        Ok(builder.build())
    }
}

impl<'a> IntoIterator for &'a Circuit {
    type Item = &'a GateApplication;
    type IntoIter = std::slice::Iter<'a, GateApplication>;

    fn into_iter(self) -> Self::IntoIter {
        self.instructions.iter()
    }
}

/// Builder that validates each instruction as it is appended.
///
/// A failed append leaves the builder unchanged. Dropping the builder
/// discards everything; only [`build`](Self::build) yields a [`Circuit`].
#[derive(Debug, Clone)]
pub struct CircuitBuilder {
    gateset: String,
    num_qubits: u32,
    instructions: Vec<GateApplication>,
}

impl CircuitBuilder {
    /// Create a builder for a register of `num_qubits` qubits.
    pub fn new(gateset: impl Into<String>, num_qubits: u32) -> IrResult<Self> {
        if num_qubits == 0 {
            return Err(IrError::InvalidQubitCount(num_qubits));
        }
        Ok(Self {
            gateset: gateset.into(),
            num_qubits,
            instructions: vec![],
        })
    }

    /// Reserve space for `additional` more instructions.
    pub fn reserve(&mut self, additional: usize) {
        self.instructions.reserve(additional);
    }

    /// Append an already-constructed gate application.
    pub fn apply(&mut self, app: GateApplication) -> IrResult<&mut Self> {
        app.check_range(self.num_qubits)?;
        self.instructions.push(app);
        Ok(self)
    }

    /// Append a gate with explicit operand lists.
    pub fn gate(
        &mut self,
        kind: GateKind,
        targets: impl IntoIterator<Item = QubitId>,
        controls: impl IntoIterator<Item = QubitId>,
        params: impl IntoIterator<Item = f64>,
    ) -> IrResult<&mut Self> {
        self.apply(GateApplication::new(kind, targets, controls, params)?)
    }

    fn single(&mut self, kind: GateKind, qubit: QubitId) -> IrResult<&mut Self> {
        self.gate(kind, [qubit], [], [])
    }

    fn rotation(&mut self, kind: GateKind, theta: f64, qubit: QubitId) -> IrResult<&mut Self> {
        self.gate(kind, [qubit], [], [theta])
    }

    // =========================================================================
    // Single-qubit gates
    // =========================================================================

    /// Apply Hadamard gate.
    pub fn h(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.single(GateKind::H, qubit)
    }

    /// Apply Pauli-X gate.
    pub fn x(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.single(GateKind::X, qubit)
    }

    /// Apply Pauli-Y gate.
    pub fn y(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.single(GateKind::Y, qubit)
    }

    /// Apply Pauli-Z gate.
    pub fn z(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.single(GateKind::Z, qubit)
    }

    /// Apply S gate.
    pub fn s(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.single(GateKind::S, qubit)
    }

    /// Apply S-dagger gate.
    pub fn si(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.single(GateKind::Si, qubit)
    }

    /// Apply T gate.
    pub fn t(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.single(GateKind::T, qubit)
    }

    /// Apply T-dagger gate.
    pub fn ti(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.single(GateKind::Ti, qubit)
    }

    /// Apply V (sqrt(X)) gate.
    pub fn v(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.single(GateKind::V, qubit)
    }

    /// Apply V-dagger gate.
    pub fn vi(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.single(GateKind::Vi, qubit)
    }

    /// Apply NOT gate.
    pub fn not(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.single(GateKind::Not, qubit)
    }

    /// Apply Rx rotation gate.
    pub fn rx(&mut self, theta: f64, qubit: QubitId) -> IrResult<&mut Self> {
        self.rotation(GateKind::Rx, theta, qubit)
    }

    /// Apply Ry rotation gate.
    pub fn ry(&mut self, theta: f64, qubit: QubitId) -> IrResult<&mut Self> {
        self.rotation(GateKind::Ry, theta, qubit)
    }

    /// Apply Rz rotation gate.
    pub fn rz(&mut self, theta: f64, qubit: QubitId) -> IrResult<&mut Self> {
        self.rotation(GateKind::Rz, theta, qubit)
    }

    /// Apply measurement.
    pub fn measure(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.single(GateKind::Measure, qubit)
    }

    // =========================================================================
    // Controlled gates
    // =========================================================================

    /// Apply CNOT gate.
    pub fn cnot(&mut self, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.gate(GateKind::Cnot, [target], [control], [])
    }

    /// Apply CZ gate.
    pub fn cz(&mut self, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.gate(GateKind::Cz, [target], [control], [])
    }

    /// Apply controlled phase gate.
    pub fn cp(&mut self, theta: f64, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.gate(GateKind::Cp, [target], [control], [theta])
    }

    /// Apply Toffoli gate.
    pub fn toffoli(&mut self, c1: QubitId, c2: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.gate(GateKind::Toffoli, [target], [c1, c2], [])
    }

    /// Apply Fredkin (CSWAP) gate.
    pub fn cswap(&mut self, control: QubitId, t1: QubitId, t2: QubitId) -> IrResult<&mut Self> {
        self.gate(GateKind::Cswap, [t1, t2], [control], [])
    }

    // =========================================================================
    // Two-qubit gates
    // =========================================================================

    /// Apply SWAP gate.
    pub fn swap(&mut self, q1: QubitId, q2: QubitId) -> IrResult<&mut Self> {
        self.gate(GateKind::Swap, [q1, q2], [], [])
    }

    /// Apply XX interaction.
    pub fn xx(&mut self, theta: f64, q1: QubitId, q2: QubitId) -> IrResult<&mut Self> {
        self.gate(GateKind::Xx, [q1, q2], [], [theta])
    }

    /// Apply YY interaction.
    pub fn yy(&mut self, theta: f64, q1: QubitId, q2: QubitId) -> IrResult<&mut Self> {
        self.gate(GateKind::Yy, [q1, q2], [], [theta])
    }

    /// Apply ZZ interaction.
    pub fn zz(&mut self, theta: f64, q1: QubitId, q2: QubitId) -> IrResult<&mut Self> {
        self.gate(GateKind::Zz, [q1, q2], [], [theta])
    }

    /// Register size.
    pub fn num_qubits(&self) -> u32 {
        self.num_qubits
    }

    /// Number of instructions appended so far.
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// Check if nothing has been appended yet.
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Finish building.
    pub fn build(self) -> Circuit {
        Circuit {
            gateset: self.gateset,
            num_qubits: self.num_qubits,
            instructions: self.instructions,
        }
    }
}
