use anyhow::Result;

use crate::config::CliConfig;

pub fn execute(config: &CliConfig) -> Result<()> {
    println!("{}", config.display_as_json()?);
    Ok(())
}
