//! Decode command implementation.

use anyhow::Result;
use clap::ValueEnum;
use console::style;

use qore_codec::emit_text;

use super::common::{load_qore, print_summary};

/// How a decoded stream is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DecodeFormat {
    /// Header fields and gate counts
    Summary,
    /// The equivalent JSON circuit document
    Json,
    /// The qore text listing
    Text,
}

/// Execute the decode command.
pub fn execute(input: &str, format: DecodeFormat) -> Result<()> {
    let circuit = load_qore(input)?;
    tracing::info!(
        qubits = circuit.num_qubits(),
        instructions = circuit.len(),
        "decoded .qore stream"
    );

    match format {
        DecodeFormat::Summary => {
            println!("{} {}", style("✓").green().bold(), style(input).green());
            print_summary(&circuit);
        }
        DecodeFormat::Json => {
            let json = qore_json::to_string_pretty(&circuit)
                .map_err(|e| anyhow::anyhow!("Emit error: {e}"))?;
            println!("{json}");
        }
        DecodeFormat::Text => print!("{}", emit_text(&circuit)),
    }

    Ok(())
}
