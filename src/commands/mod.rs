pub mod config;
pub mod delete;
pub mod edit;
pub mod images;
pub mod init;
pub mod list;
pub mod new;
pub mod show;

use anyhow::{Result, anyhow};
use clap::Args;
use eventdir_core::EventInput;
use serde_json::Value;

/// Event fields shared by `new` and `edit`.
#[derive(Args, Debug, Default)]
pub struct EventArgs {
    /// Event title
    #[arg(short, long)]
    pub title: Option<String>,

    /// Event description
    #[arg(short, long)]
    pub description: Option<String>,

    /// Event location
    #[arg(short, long)]
    pub location: Option<String>,

    /// Image path, as listed by `eventdir images`
    #[arg(short, long)]
    pub image: Option<String>,

    /// Date (e.g. "2025-03-20")
    #[arg(long)]
    pub date: Option<String>,

    /// Time (e.g. "15:00")
    #[arg(long)]
    pub time: Option<String>,

    /// Extra field as key=value; the value is parsed as JSON when possible
    #[arg(short, long = "field", value_parser = parse_field)]
    pub fields: Vec<(String, Value)>,
}

impl EventArgs {
    /// Build the input sent to the store. Missing fields are left out so the
    /// store reports them.
    pub fn into_input(self) -> EventInput {
        let mut input = EventInput::new();

        for (key, value) in self.fields {
            input = input.with(key, value);
        }

        let named = [
            ("title", self.title),
            ("description", self.description),
            ("location", self.location),
            ("image", self.image),
            ("date", self.date),
            ("time", self.time),
        ];
        for (key, value) in named {
            if let Some(value) = value {
                input = input.with(key, value);
            }
        }

        input
    }
}

fn parse_field(s: &str) -> Result<(String, Value)> {
    let (key, raw) = s
        .split_once('=')
        .ok_or_else(|| anyhow!("Expected key=value, got '{}'", s))?;

    if key.is_empty() {
        anyhow::bail!("Field name cannot be empty in '{}'", s);
    }

    let value = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
    Ok((key.to_string(), value))
}
