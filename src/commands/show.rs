use anyhow::Result;
use eventdir_core::EventDir;

use crate::render::Render;

pub async fn run(eventdir: &EventDir, id: &str) -> Result<()> {
    let event = eventdir.events().get(id).await?;
    println!("{}", event.render());
    Ok(())
}
