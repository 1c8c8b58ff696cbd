//! Shared helpers for CLI commands.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use console::style;

use qore_ir::Circuit;

/// Load a circuit from a JSON circuit document.
pub fn load_circuit(path: &str) -> Result<Circuit> {
    let bytes = read_input(path)?;
    qore_json::parse(&bytes).map_err(|e| anyhow::anyhow!("Decode error in {path}: {e}"))
}

/// Load a circuit from a binary `.qore` stream.
pub fn load_qore(path: &str) -> Result<Circuit> {
    let bytes = read_input(path)?;
    qore_codec::decode(&bytes).map_err(|e| anyhow::anyhow!("Invalid .qore stream {path}: {e}"))
}

fn read_input(path: &str) -> Result<Vec<u8>> {
    if !Path::new(path).exists() {
        anyhow::bail!("File not found: {path}");
    }
    fs::read(path).with_context(|| format!("Failed to read file: {path}"))
}

/// Default output path: the input with its extension replaced.
pub fn default_output_path(input: &str, text: bool) -> PathBuf {
    let extension = if text { "qore.txt" } else { "qore" };
    Path::new(input).with_extension(extension)
}

/// Print the shape of a circuit.
pub fn print_summary(circuit: &Circuit) {
    println!(
        "  Gateset: {}  Qubits: {}  Instructions: {}  Depth: {}",
        style(circuit.gateset()).yellow(),
        circuit.num_qubits(),
        circuit.len(),
        circuit.depth()
    );

    let counts = circuit.gate_counts();
    if !counts.is_empty() {
        let listed: Vec<String> = counts
            .iter()
            .map(|(name, count)| format!("{name}×{count}"))
            .collect();
        println!("  Gates:   {}", listed.join(", "));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_path() {
        assert_eq!(default_output_path("bell.json", false), PathBuf::from("bell.qore"));
        assert_eq!(
            default_output_path("dir/bell.json", true),
            PathBuf::from("dir/bell.qore.txt")
        );
        assert_eq!(default_output_path("noext", false), PathBuf::from("noext.qore"));
    }

    #[test]
    fn test_missing_input() {
        let err = load_circuit("/nonexistent/circuit.json").unwrap_err();
        assert!(err.to_string().contains("File not found"));
    }
}
