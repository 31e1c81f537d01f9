use anyhow::Result;
use chrono::Local;
use eventdir_core::EventDir;

use super::EventArgs;
use crate::render::Render;

pub async fn run(eventdir: &EventDir, mut event: EventArgs) -> Result<()> {
    // Default to "now" so quick entries only need the descriptive fields
    let now = Local::now();
    event
        .date
        .get_or_insert_with(|| now.format("%Y-%m-%d").to_string());
    event
        .time
        .get_or_insert_with(|| now.format("%H:%M").to_string());

    let _lock = eventdir.lock()?;
    let created = eventdir.events().create(Some(event.into_input())).await?;

    println!("Created {}", created.id);
    println!("{}", created.render());
    Ok(())
}
