use anyhow::Result;
use eventdir_core::{EventDir, EventDirConfig};

pub fn run(eventdir: &EventDir) -> Result<()> {
    println!("# {}", EventDirConfig::config_path()?.display());
    print!("{}", eventdir.config().to_toml()?);
    Ok(())
}
