//! JSON document → [`Circuit`] decoding and validation.

use qore_ir::{Circuit, GateApplication, GateKind, OperandRole, QubitId, registry};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::document::{InstructionRecord, Operand};
use crate::error::{JsonError, JsonResult};

/// Decode a circuit from raw JSON bytes.
pub fn parse(input: &[u8]) -> JsonResult<Circuit> {
    let value: Value = serde_json::from_slice(input)?;
    from_value(&value)
}

/// Decode a circuit from a JSON string.
pub fn parse_str(input: &str) -> JsonResult<Circuit> {
    let value: Value = serde_json::from_str(input)?;
    from_value(&value)
}

/// Decode a circuit from an already-parsed JSON value.
pub fn from_value(value: &Value) -> JsonResult<Circuit> {
    let header = Header::read(value)?;

    let mut records = Vec::new();
    flatten(header.circuit, &mut records);

    let mut builder = Circuit::builder(header.gateset, header.qubits)?;
    builder.reserve(records.len());
    for (index, record) in records.into_iter().enumerate() {
        builder.apply(decode_instruction(index, record, header.qubits)?)?;
    }
    Ok(builder.build())
}

/// The validated top-level fields of a document.
struct Header<'a> {
    gateset: &'a str,
    qubits: u32,
    circuit: &'a [Value],
}

impl<'a> Header<'a> {
    fn read(value: &'a Value) -> JsonResult<Self> {
        let object = value
            .as_object()
            .ok_or_else(|| invalid_header("document is not a JSON object"))?;

        let gateset = match field(object, "gateset")? {
            Value::String(s) => s.as_str(),
            other => return Err(invalid_header(format!("'gateset' must be a string, got {other}"))),
        };

        let qubits = field(object, "qubits")?;
        let qubits = qubits
            .as_u64()
            .filter(|&n| n > 0)
            .and_then(|n| u32::try_from(n).ok())
            .ok_or_else(|| {
                invalid_header(format!("'qubits' must be a positive integer, got {qubits}"))
            })?;

        let circuit = field(object, "circuit")?
            .as_array()
            .ok_or_else(|| invalid_header("'circuit' must be an array"))?;

        Ok(Self {
            gateset,
            qubits,
            circuit,
        })
    }
}

fn field<'a>(object: &'a Map<String, Value>, name: &str) -> JsonResult<&'a Value> {
    object
        .get(name)
        .ok_or_else(|| invalid_header(format!("missing '{name}'")))
}

fn invalid_header(message: impl Into<String>) -> JsonError {
    JsonError::InvalidHeader(message.into())
}

/// Flatten nested operation groups, preserving order.
fn flatten<'a>(values: &'a [Value], out: &mut Vec<&'a Value>) {
    for value in values {
        match value {
            Value::Array(group) => flatten(group, out),
            other => out.push(other),
        }
    }
}

/// Validate one record: resolve, check shape, arity, range, then overlap.
fn decode_instruction(index: usize, value: &Value, qubits: u32) -> JsonResult<GateApplication> {
    let name = value
        .get("gate")
        .and_then(Value::as_str)
        .ok_or_else(|| JsonError::MalformedInstruction {
            index,
            message: "record must be an object with a string 'gate'".into(),
        })?;

    let kind = registry::lookup(name).ok_or_else(|| JsonError::UnknownGate {
        name: name.to_string(),
        index,
    })?;

    let record = InstructionRecord::deserialize(value).map_err(|e| {
        JsonError::MalformedInstruction {
            index,
            message: e.to_string(),
        }
    })?;

    let operands = record
        .operands(kind)
        .map_err(|message| JsonError::MalformedInstruction { index, message })?;

    check_arity(index, kind, OperandRole::Targets, operands.targets.len())?;
    check_arity(index, kind, OperandRole::Controls, operands.controls.len())?;
    check_arity(index, kind, OperandRole::Params, operands.params.len())?;

    let targets = to_qubits(index, &operands.targets, qubits)?;
    let controls = to_qubits(index, &operands.controls, qubits)?;

    let mut seen: Vec<QubitId> = Vec::with_capacity(kind.num_qubits());
    for &qubit in controls.iter().chain(targets.iter()) {
        if seen.contains(&qubit) {
            return Err(JsonError::OverlappingOperands {
                index,
                qubit: qubit.0,
            });
        }
        seen.push(qubit);
    }

    Ok(GateApplication::new(
        kind,
        targets,
        controls,
        operands.params,
    )?)
}

fn check_arity(index: usize, kind: GateKind, role: OperandRole, actual: usize) -> JsonResult<()> {
    let expected = kind.arity(role);
    if expected == actual {
        Ok(())
    } else {
        Err(JsonError::ArityMismatch {
            index,
            gate: kind.name(),
            role,
            expected,
            actual,
        })
    }
}

fn to_qubits(index: usize, operands: &[Operand], qubits: u32) -> JsonResult<Vec<QubitId>> {
    operands
        .iter()
        .map(|&Operand(operand)| {
            u32::try_from(operand)
                .ok()
                .filter(|&q| q < qubits)
                .map(QubitId)
                .ok_or(JsonError::QubitOutOfRange {
                    index,
                    operand,
                    qubits,
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bell_document() {
        let circuit = from_value(&json!({
            "format": "ionq.circuit.v0",
            "gateset": "qis",
            "qubits": 2,
            "circuit": [
                {"gate": "H", "targets": [0]},
                {"gate": "CNOT", "targets": [1], "controls": [0]}
            ]
        }))
        .unwrap();

        assert_eq!(circuit, Circuit::bell().unwrap());
    }

    #[test]
    fn test_header_errors() {
        let cases = [
            json!([]),
            json!({"qubits": 2, "circuit": []}),
            json!({"gateset": 7, "qubits": 2, "circuit": []}),
            json!({"gateset": "qis", "circuit": []}),
            json!({"gateset": "qis", "qubits": 0, "circuit": []}),
            json!({"gateset": "qis", "qubits": -3, "circuit": []}),
            json!({"gateset": "qis", "qubits": 2.5, "circuit": []}),
            json!({"gateset": "qis", "qubits": "2", "circuit": []}),
            json!({"gateset": "qis", "qubits": 5_000_000_000u64, "circuit": []}),
            json!({"gateset": "qis", "qubits": 2}),
            json!({"gateset": "qis", "qubits": 2, "circuit": {}}),
        ];
        for case in cases {
            let err = from_value(&case).unwrap_err();
            assert!(matches!(err, JsonError::InvalidHeader(_)), "{case}: {err}");
        }
    }

    #[test]
    fn test_flatten_groups() {
        let values = json!([{"a": 1}, [{"b": 2}, [{"c": 3}]], {"d": 4}]);
        let mut out = Vec::new();
        flatten(values.as_array().unwrap(), &mut out);
        assert_eq!(out.len(), 4);
        assert_eq!(out[2], &json!({"c": 3}));
    }

    #[test]
    fn test_range_checked_before_overlap() {
        let err = decode_instruction(
            0,
            &json!({"gate": "cnot", "targets": [5], "controls": [5]}),
            2,
        )
        .unwrap_err();
        assert!(matches!(err, JsonError::QubitOutOfRange { operand: 5, .. }));
    }

    #[test]
    fn test_gate_name_resolved_before_shape() {
        let err = decode_instruction(1, &json!({"gate": "warp", "targets": [0.5]}), 2).unwrap_err();
        assert!(matches!(err, JsonError::UnknownGate { index: 1, ref name } if name == "warp"));

        let err = decode_instruction(1, &json!({"gate": 3, "targets": [0]}), 2).unwrap_err();
        assert!(matches!(err, JsonError::MalformedInstruction { index: 1, .. }));
    }

    #[test]
    fn test_arity_checked_before_range() {
        let err = decode_instruction(3, &json!({"gate": "swap", "targets": [9]}), 2).unwrap_err();
        assert!(matches!(
            err,
            JsonError::ArityMismatch { index: 3, role: OperandRole::Targets, expected: 2, actual: 1, .. }
        ));
    }
}
