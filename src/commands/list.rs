use anyhow::Result;
use eventdir_core::{EventDir, ListQuery};
use owo_colors::OwoColorize;

use crate::render::Render;

pub async fn run(eventdir: &EventDir, search: Option<String>, max: Option<usize>) -> Result<()> {
    let query = ListQuery { search, max };
    let events = eventdir.events().list(&query).await?;

    if events.is_empty() {
        println!("{}", "No events found".dimmed());
        return Ok(());
    }

    for event in &events {
        println!("{}", event.render());
    }

    Ok(())
}
