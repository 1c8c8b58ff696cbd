//! Version command implementation.

use console::style;

/// Execute the version command.
pub fn execute() {
    let version = env!("CARGO_PKG_VERSION");

    println!(
        "{} {} - quantum circuit encoder",
        style("qore").cyan().bold(),
        style(format!("v{version}")).yellow()
    );
    println!();
    println!("Format:     .qore v{}", qore_codec::VERSION);
    println!();
    println!("Components:");
    println!("  qore-ir     Circuit model and gate registry");
    println!("  qore-json   JSON circuit documents");
    println!("  qore-codec  Binary encoder and decoder");
    println!("  qore-cli    Command-line interface");
    println!();
    println!(
        "Repository: {}",
        style("https://github.com/hiq-lab/qore").underlined()
    );
    println!("License:    {}", style("Apache-2.0").dim());
}
