//! Terminal rendering for eventdir types.
//!
//! Extension traits that add colored output to eventdir-core types using
//! owo_colors.

use eventdir_core::{Event, EventSummary, ImageMeta};
use owo_colors::OwoColorize;
use serde_json::Value;

pub trait Render {
    fn render(&self) -> String;
}

impl Render for EventSummary {
    fn render(&self) -> String {
        format!(
            "{}  {}  {} {}",
            self.date.dimmed(),
            self.title.bold(),
            format!("@ {}", self.location).cyan(),
            format!("[{}]", self.id).dimmed()
        )
    }
}

impl Render for Event {
    fn render(&self) -> String {
        let f = &self.fields;
        let mut lines = vec![
            f.title.bold().to_string(),
            format!("  {}  {}", "id".dimmed(), self.id),
            format!("  {}  {} {}", "when".dimmed(), f.date, f.time),
            format!("  {}  {}", "where".dimmed(), f.location),
            format!("  {}  {}", "image".dimmed(), f.image),
        ];

        for (key, value) in &f.extra {
            lines.push(format!("  {}  {}", key.dimmed(), display_value(value)));
        }

        if !f.description.is_empty() {
            lines.push(String::new());
            lines.push(format!("  {}", f.description));
        }

        lines.join("\n")
    }
}

impl Render for ImageMeta {
    fn render(&self) -> String {
        match self.extra.get("caption") {
            Some(caption) => format!("{}  {}", self.path, display_value(caption).dimmed()),
            None => self.path.clone(),
        }
    }
}

/// Strings print bare; everything else prints as JSON.
fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
