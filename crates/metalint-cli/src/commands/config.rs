//! Config command - print the effective configuration of a standard.

use std::path::PathBuf;

use metalint::StandardKind;

pub fn run(
    standard: StandardKind,
    config: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = super::load_config(standard, config.as_deref())?;
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}
