use anyhow::Result;
use eventdir_core::EventDir;

pub async fn run(eventdir: &EventDir) -> Result<()> {
    let _lock = eventdir.lock()?;
    eventdir.init().await?;

    println!("Initialized {}", eventdir.data_path().display());
    Ok(())
}
