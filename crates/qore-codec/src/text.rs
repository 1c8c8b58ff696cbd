//! Human-readable qore listing.
//!
//! The listing is an inspection aid and the input format of older qore
//! tooling. It is not parsed back; the binary stream is the interchange
//! format.
//!
//! ```text
//! // max qubit 2
//! // ops count 4
//! // gateset qis
//! alloc [2]
//! op h [0] []
//! op not [1] [0]
//! free
//! ```

use qore_ir::{Circuit, GateApplication, GateKind, QubitId};

/// Render a circuit as a qore text listing.
pub fn emit_text(circuit: &Circuit) -> String {
    let mut listing = Listing::default();

    let max_qubit = circuit.max_qubit_used().map_or(0, |q| q.0 + 1);
    listing.line(&format!("// max qubit {max_qubit}"));
    listing.line(&format!("// ops count {}", circuit.len() + 2));
    listing.line(&format!("// gateset {}", circuit.gateset()));
    listing.line(&format!("alloc [{}]", circuit.num_qubits()));
    for app in circuit {
        listing.instruction(app);
    }
    listing.line("free");

    listing.output
}

#[derive(Default)]
struct Listing {
    output: String,
}

impl Listing {
    fn line(&mut self, line: &str) {
        self.output.push_str(line);
        self.output.push('\n');
    }

    fn instruction(&mut self, app: &GateApplication) {
        if app.kind() == GateKind::Measure {
            self.line(&format!("measure {}", brackets(app.targets())));
            return;
        }

        let mut line = format!(
            "op {} {} {}",
            mnemonic(app.kind()),
            brackets(app.targets()),
            brackets(app.controls())
        );
        for param in app.params() {
            line.push(' ');
            line.push_str(&param.to_string());
        }
        self.line(&line);
    }
}

/// Controlled Pauli gates are written as their base gate plus controls.
fn mnemonic(kind: GateKind) -> &'static str {
    match kind {
        GateKind::Cnot | GateKind::Toffoli => "not",
        GateKind::Cz | GateKind::Cp => "z",
        other => other.name(),
    }
}

fn brackets(qubits: &[QubitId]) -> String {
    let inner: Vec<String> = qubits.iter().map(|q| q.0.to_string()).collect();
    format!("[{}]", inner.join(","))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bell_listing() {
        let text = emit_text(&Circuit::bell().unwrap());
        assert_eq!(
            text,
            "// max qubit 2\n\
             // ops count 4\n\
             // gateset qis\n\
             alloc [2]\n\
             op h [0] []\n\
             op not [1] [0]\n\
             free\n"
        );
    }

    #[test]
    fn test_controlled_mnemonics_and_params() {
        let mut builder = Circuit::builder("qis", 4).unwrap();
        builder
            .toffoli(QubitId(0), QubitId(1), QubitId(2))
            .unwrap()
            .cp(0.5, QubitId(3), QubitId(0))
            .unwrap()
            .zz(-1.25, QubitId(1), QubitId(2))
            .unwrap()
            .measure(QubitId(3))
            .unwrap();
        let text = emit_text(&builder.build());
        let ops: Vec<&str> = text.lines().skip(4).collect();

        assert_eq!(
            ops,
            [
                "op not [2] [0,1]",
                "op z [0] [3] 0.5",
                "op zz [1,2] [] -1.25",
                "measure [3]",
                "free",
            ]
        );
    }

    #[test]
    fn test_empty_circuit() {
        let text = emit_text(&Circuit::builder("qis", 3).unwrap().build());
        assert!(text.starts_with("// max qubit 0\n// ops count 2\n"));
        assert!(text.ends_with("alloc [3]\nfree\n"));
    }
}
