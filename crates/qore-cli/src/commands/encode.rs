//! Encode command implementation.

use anyhow::{Context, Result};
use console::style;
use std::fs;

use qore_codec::{EncodeOptions, emit_text, encode_with};

use super::common::{default_output_path, load_circuit, print_summary};

/// Resolved encoder settings (flags merged over configuration).
#[derive(Debug, Clone, Copy)]
pub struct Settings {
    pub text: bool,
    pub checksum: bool,
}

/// Execute the encode command.
pub fn execute(input: &str, output: Option<&str>, settings: Settings) -> Result<()> {
    println!(
        "{} Encoding {}",
        style("→").cyan().bold(),
        style(input).green()
    );

    let circuit = load_circuit(input)?;
    tracing::info!(
        qubits = circuit.num_qubits(),
        instructions = circuit.len(),
        gateset = circuit.gateset(),
        "decoded circuit document"
    );
    print_summary(&circuit);

    let output_path = output.map_or_else(
        || default_output_path(input, settings.text),
        std::path::PathBuf::from,
    );

    let bytes = if settings.text {
        emit_text(&circuit).into_bytes()
    } else {
        let options = EncodeOptions::default().with_checksum(settings.checksum);
        encode_with(&circuit, options).map_err(|e| anyhow::anyhow!("Encode error: {e}"))?
    };
    tracing::debug!(bytes = bytes.len(), text = settings.text, "encoded circuit");

    fs::write(&output_path, &bytes)
        .with_context(|| format!("Failed to write file: {}", output_path.display()))?;

    println!("{} Encoding complete", style("✓").green().bold());
    println!(
        "  Output: {} ({} bytes)",
        style(output_path.display()).green(),
        bytes.len()
    );

    Ok(())
}
