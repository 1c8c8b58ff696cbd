//! [`Circuit`] → JSON document emission.

use qore_ir::{Circuit, GateApplication};

use crate::document::{CircuitDocument, InstructionRecord, OneOrMany, Operand};
use crate::error::JsonResult;

/// Format tag written into emitted documents.
pub const DOCUMENT_FORMAT: &str = "ionq.circuit.v0";

/// Convert a circuit into its canonical document form.
///
/// Records always use the plural `targets`/`controls` keys; `rotation` is a
/// bare number for single-parameter gates.
pub fn to_document(circuit: &Circuit) -> CircuitDocument {
    CircuitDocument {
        format: Some(DOCUMENT_FORMAT.to_string()),
        gateset: circuit.gateset().to_string(),
        qubits: circuit.num_qubits(),
        circuit: circuit.iter().map(to_record).collect(),
    }
}

fn to_record(app: &GateApplication) -> InstructionRecord {
    let indices = |qubits: &[qore_ir::QubitId]| -> Vec<Operand> {
        qubits.iter().map(|q| Operand::from(q.0)).collect()
    };

    InstructionRecord {
        gate: app.name().to_string(),
        targets: Some(OneOrMany::Many(indices(app.targets()))),
        controls: (!app.controls().is_empty()).then(|| OneOrMany::Many(indices(app.controls()))),
        rotation: (!app.params().is_empty()).then(|| OneOrMany::from_vec(app.params().to_vec())),
        ..InstructionRecord::default()
    }
}

/// Emit a circuit as compact JSON.
pub fn to_string(circuit: &Circuit) -> JsonResult<String> {
    Ok(serde_json::to_string(&to_document(circuit))?)
}

/// Emit a circuit as indented JSON.
pub fn to_string_pretty(circuit: &Circuit) -> JsonResult<String> {
    Ok(serde_json::to_string_pretty(&to_document(circuit))?)
}
