use anyhow::Result;
use eventdir_core::EventDir;
use owo_colors::OwoColorize;

use crate::render::Render;

pub async fn run(eventdir: &EventDir) -> Result<()> {
    let images = eventdir.images().list().await?;

    if images.is_empty() {
        println!("{}", "No images in catalog".dimmed());
        return Ok(());
    }

    for image in &images {
        println!("{}", image.render());
    }

    Ok(())
}
