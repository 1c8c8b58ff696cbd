//! Gates command implementation.

use console::style;

use qore_ir::GateRegistry;

/// Execute the gates command.
pub fn execute() {
    let registry = GateRegistry::global();

    println!("{} Supported gates:\n", style("qore").cyan().bold());
    println!(
        "  {:<8} {:>6}  {:>7}  {:>8}  {:>6}",
        style("Gate").bold(),
        style("Opcode").bold(),
        style("Targets").bold(),
        style("Controls").bold(),
        style("Params").bold()
    );

    for sig in registry.signatures() {
        println!(
            "  {:<8} {:>6}  {:>7}  {:>8}  {:>6}",
            style(sig.name).green(),
            format!("{:#04x}", sig.opcode),
            sig.num_targets,
            sig.num_controls,
            sig.num_params
        );
    }

    println!();
    let aliases: Vec<String> = registry
        .aliases()
        .map(|(alias, kind)| format!("{alias} → {}", kind.name()))
        .collect();
    println!("  Aliases: {}", style(aliases.join(", ")).dim());
    println!("  Names are matched case-insensitively.");
}
