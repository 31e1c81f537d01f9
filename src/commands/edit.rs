use anyhow::Result;
use eventdir_core::EventDir;

use super::EventArgs;
use crate::render::Render;

/// Replaces the whole event: fields not given here are dropped.
pub async fn run(eventdir: &EventDir, id: &str, event: EventArgs) -> Result<()> {
    let _lock = eventdir.lock()?;
    let updated = eventdir.events().update(id, Some(event.into_input())).await?;

    println!("Replaced {}", updated.id);
    println!("{}", updated.render());
    Ok(())
}
