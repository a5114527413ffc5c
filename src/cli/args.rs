//! Command-line argument definitions using clap

use clap::Parser;

use super::switches::SwitchMap;

/// yamljson - Convert a file between JSON and YAML
///
/// Switches use the form `--name:value`, e.g.
/// `yamljson --from:json --in:data.json --out:data.yaml`.
#[derive(Parser, Debug)]
#[command(name = "yamljson")]
#[command(author, version, about, long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
#[command(allow_hyphen_values = true)]
pub struct Cli {
    /// Raw `--name:value` switches, passed through verbatim
    #[arg(num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
    pub switches: Vec<String>,
}

impl Cli {
    /// Parse the collected tokens into a switch map.
    pub fn switch_map(&self) -> SwitchMap {
        SwitchMap::parse(&self.switches)
    }
}
