use anyhow::Result;
use eventdir_core::EventDir;

pub async fn run(eventdir: &EventDir, id: &str) -> Result<()> {
    let _lock = eventdir.lock()?;
    eventdir.events().delete(id).await?;

    println!("Event deleted");
    Ok(())
}
