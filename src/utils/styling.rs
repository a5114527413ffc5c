//! Terminal styling for help text and status lines

use console::style;
use std::path::Path;

/// Style a switch name the way it is typed, e.g. `--from`.
fn switch(name: &str) -> String {
    style(format!("--{}", name)).green().bold().to_string()
}

/// Description shown next to each required conversion switch.
fn describe(name: &str) -> &'static str {
    match name {
        "from" => "(yaml|json)",
        "in" => "source file",
        "out" => "destination file",
        _ => "",
    }
}

/// Build the usage text.
///
/// Lists the switch syntax, then every switch a conversion requires.
pub fn help_text(version: &str) -> String {
    let mut text = String::new();
    text.push_str(&format!(
        "{} {}\n",
        style("yamljson").cyan().bold(),
        style(format!("v{}", version)).dim()
    ));
    text.push_str("Convert a file between JSON and YAML\n\n");
    text.push_str(&format!(
        "Usage: yamljson {}:<json|yaml> {}:<path> {}:<path>\n\n",
        switch("from"),
        switch("in"),
        switch("out")
    ));
    text.push_str(&format!("Switch format: {}: value\n", switch("switch")));
    text.push_str("Expected switches:\n");
    for name in ["from", "in", "out"] {
        text.push_str(&format!("  {}: {}\n", switch(name), describe(name)));
    }
    text
}

/// Print the usage text to stdout.
pub fn print_help(version: &str) {
    print!("{}", help_text(version));
}

/// Print the line announcing a conversion, e.g.
/// `Converting JSON data.json to YAML data.yaml`.
pub fn print_conversion_status(source: &str, input: &Path, target: &str, output: &Path) {
    println!(
        "{} Converting {} {} to {} {}",
        style("◆").cyan().bold(),
        source,
        style(input.display()).dim(),
        target,
        style(output.display()).dim()
    );
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("{} {}", style("✓").green().bold(), style(message).green());
}
