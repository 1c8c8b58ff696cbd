//! Gate applications: a gate kind bound to its operands.

use crate::error::{IrError, IrResult};
use crate::gate::{GateKind, OperandRole};
use crate::qubit::QubitId;

/// One instruction of a circuit.
///
/// Operand counts always match the gate's signature, no qubit appears twice
/// and every parameter is finite. Register bounds are checked by
/// [`CircuitBuilder`](crate::CircuitBuilder), which knows the register size.
#[derive(Debug, Clone, PartialEq)]
pub struct GateApplication {
    kind: GateKind,
    targets: Vec<QubitId>,
    controls: Vec<QubitId>,
    params: Vec<f64>,
}

impl GateApplication {
    /// Create a gate application, checking arity, operand overlap and
    /// parameter finiteness.
    pub fn new(
        kind: GateKind,
        targets: impl IntoIterator<Item = QubitId>,
        controls: impl IntoIterator<Item = QubitId>,
        params: impl IntoIterator<Item = f64>,
    ) -> IrResult<Self> {
        let app = Self {
            kind,
            targets: targets.into_iter().collect(),
            controls: controls.into_iter().collect(),
            params: params.into_iter().collect(),
        };
        app.check_arity(OperandRole::Targets, app.targets.len())?;
        app.check_arity(OperandRole::Controls, app.controls.len())?;
        app.check_arity(OperandRole::Params, app.params.len())?;

        if let Some(qubit) = app.first_duplicate() {
            return Err(IrError::DuplicateQubit {
                qubit,
                gate_name: kind.name(),
            });
        }
        if let Some(&value) = app.params.iter().find(|p| !p.is_finite()) {
            return Err(IrError::NonFiniteParameter {
                gate_name: kind.name(),
                value,
            });
        }
        Ok(app)
    }

    /// Create an uncontrolled, unparameterized gate application.
    pub fn simple(kind: GateKind, targets: impl IntoIterator<Item = QubitId>) -> IrResult<Self> {
        Self::new(kind, targets, [], [])
    }

    fn check_arity(&self, role: OperandRole, got: usize) -> IrResult<()> {
        let expected = self.kind.arity(role);
        if got == expected {
            Ok(())
        } else {
            Err(IrError::ArityMismatch {
                gate_name: self.kind.name(),
                role,
                expected,
                got,
            })
        }
    }

    fn first_duplicate(&self) -> Option<QubitId> {
        // At most three qubits per application.
        let qubits: Vec<QubitId> = self.qubits().collect();
        qubits
            .iter()
            .enumerate()
            .find(|(i, q)| qubits[..*i].contains(q))
            .map(|(_, q)| *q)
    }

    /// Check every operand against a register of `num_qubits`.
    pub(crate) fn check_range(&self, num_qubits: u32) -> IrResult<()> {
        match self.qubits().find(|q| q.0 >= num_qubits) {
            Some(qubit) => Err(IrError::QubitOutOfRange {
                qubit,
                num_qubits,
                gate_name: self.kind.name(),
            }),
            None => Ok(()),
        }
    }

    /// The gate being applied.
    #[inline]
    pub fn kind(&self) -> GateKind {
        self.kind
    }

    /// Target qubits, in order.
    #[inline]
    pub fn targets(&self) -> &[QubitId] {
        &self.targets
    }

    /// Control qubits, in order.
    #[inline]
    pub fn controls(&self) -> &[QubitId] {
        &self.controls
    }

    /// Numeric parameters, in order.
    #[inline]
    pub fn params(&self) -> &[f64] {
        &self.params
    }

    /// All qubits touched: controls first, then targets.
    pub fn qubits(&self) -> impl Iterator<Item = QubitId> + '_ {
        self.controls.iter().chain(self.targets.iter()).copied()
    }

    /// Get the name of the gate.
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }
}
