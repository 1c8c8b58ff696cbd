//! Serde model of the JSON circuit document.

use std::fmt;

use qore_ir::GateKind;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A qubit operand exactly as written: any JSON integer, signed or not.
///
/// Range is checked against the register after deserialization, so negative
/// and oversized indices surface as out-of-range errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operand(pub i128);

impl From<u32> for Operand {
    fn from(qubit: u32) -> Self {
        Operand(i128::from(qubit))
    }
}

impl Serialize for Operand {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if let Ok(v) = i64::try_from(self.0) {
            serializer.serialize_i64(v)
        } else if let Ok(v) = u64::try_from(self.0) {
            serializer.serialize_u64(v)
        } else {
            Err(serde::ser::Error::custom("operand outside the JSON integer range"))
        }
    }
}

impl<'de> Deserialize<'de> for Operand {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct OperandVisitor;

        impl Visitor<'_> for OperandVisitor {
            type Value = Operand;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an integer qubit index")
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Operand, E> {
                Ok(Operand(i128::from(v)))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Operand, E> {
                Ok(Operand(i128::from(v)))
            }
        }

        deserializer.deserialize_any(OperandVisitor)
    }
}

/// A value written either bare or as an array: `1` or `[1, 2]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    /// A single bare value.
    One(T),
    /// An array of values.
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    /// Flatten into a vector.
    pub fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::One(v) => vec![v],
            OneOrMany::Many(vs) => vs,
        }
    }

    /// Pick the compact form: bare for exactly one element.
    pub fn from_vec(mut values: Vec<T>) -> Self {
        if values.len() == 1 {
            if let Some(v) = values.pop() {
                return OneOrMany::One(v);
            }
        }
        OneOrMany::Many(values)
    }
}

/// A complete circuit document, as emitted by [`to_document`](crate::to_document).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircuitDocument {
    /// Informational format tag; ignored on input.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// Gate-set identifier.
    pub gateset: String,
    /// Register size.
    pub qubits: u32,
    /// Instructions in execution order.
    pub circuit: Vec<InstructionRecord>,
}

/// One gate instruction record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InstructionRecord {
    /// Gate name, resolved case-insensitively.
    pub gate: String,
    /// Single target (IonQ style).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<OneOrMany<Operand>>,
    /// Target list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub targets: Option<OneOrMany<Operand>>,
    /// Single control (IonQ style).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control: Option<OneOrMany<Operand>>,
    /// Control list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub controls: Option<OneOrMany<Operand>>,
    /// Positional operands: controls first, then targets.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qubits: Option<Vec<Operand>>,
    /// Rotation angle(s).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<OneOrMany<f64>>,
    /// Parameter list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Vec<f64>>,
}

/// Operands of a record after the naming conventions have been resolved.
#[derive(Debug, Default, PartialEq)]
pub(crate) struct Operands {
    pub targets: Vec<Operand>,
    pub controls: Vec<Operand>,
    pub params: Vec<f64>,
}

impl InstructionRecord {
    /// Resolve the operand conventions for a gate of kind `kind`.
    ///
    /// Fails with a message when the record mixes conventions.
    pub(crate) fn operands(&self, kind: GateKind) -> Result<Operands, String> {
        let params = pick("rotation", self.rotation.clone(), "params", self.params.clone())?;

        if let Some(qubits) = &self.qubits {
            if self.target.is_some()
                || self.targets.is_some()
                || self.control.is_some()
                || self.controls.is_some()
            {
                return Err("'qubits' cannot be combined with target or control fields".into());
            }
            let split = kind.num_controls().min(qubits.len());
            return Ok(Operands {
                controls: qubits[..split].to_vec(),
                targets: qubits[split..].to_vec(),
                params,
            });
        }

        Ok(Operands {
            targets: pick("target", self.target.clone(), "targets", self.targets.clone())?,
            controls: pick("control", self.control.clone(), "controls", self.controls.clone())?,
            params,
        })
    }
}

fn pick<T, U>(
    first_name: &str,
    first: Option<OneOrMany<T>>,
    second_name: &str,
    second: Option<U>,
) -> Result<Vec<T>, String>
where
    U: Into<OneOrMany<T>>,
{
    match (first, second) {
        (Some(_), Some(_)) => Err(format!(
            "'{first_name}' and '{second_name}' cannot both be given"
        )),
        (Some(v), None) => Ok(v.into_vec()),
        (None, Some(v)) => Ok(v.into().into_vec()),
        (None, None) => Ok(vec![]),
    }
}

impl<T> From<Vec<T>> for OneOrMany<T> {
    fn from(values: Vec<T>) -> Self {
        OneOrMany::Many(values)
    }
}
