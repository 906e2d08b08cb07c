use clap::ValueEnum;
use console::style;
use serde::Serialize;

use crate::error::{Result, TrackError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Styled text for terminals
    #[default]
    Human,
    /// One JSON document per command
    Json,
}

impl OutputFormat {
    pub const fn is_machine(self) -> bool {
        matches!(self, Self::Json)
    }
}

pub fn emit_json<T: Serialize>(value: &T) -> Result<()> {
    let payload = serde_json::to_string_pretty(value)
        .map_err(|err| TrackError::Serialization(format!("serialize output: {err}")))?;
    println!("{payload}");
    Ok(())
}

/// JSON body printed on stdout when a command fails in robot mode.
pub fn error_json(err: &TrackError) -> serde_json::Value {
    serde_json::json!({
        "error": true,
        "code": err.code(),
        "message": err.to_string(),
    })
}

pub struct HumanLayout {
    lines: Vec<String>,
    key_width: usize,
}

impl Default for HumanLayout {
    fn default() -> Self {
        Self::new()
    }
}

impl HumanLayout {
    pub const fn new() -> Self {
        Self {
            lines: Vec::new(),
            key_width: 16,
        }
    }

    pub fn title(&mut self, text: &str) -> &mut Self {
        self.lines.push(style(text).bold().to_string());
        self.lines.push(String::new());
        self
    }

    pub fn section(&mut self, text: &str) -> &mut Self {
        self.lines.push(style(text).bold().to_string());
        self.lines.push("-".repeat(text.len().max(3)));
        self
    }

    pub fn kv(&mut self, key: &str, value: &str) -> &mut Self {
        let padded = format!("{key:width$}", width = self.key_width);
        self.lines
            .push(format!("{} {value}", style(padded).dim()));
        self
    }

    /// Like `kv`, rendering `None` as a dash.
    pub fn kv_opt(&mut self, key: &str, value: Option<&str>) -> &mut Self {
        self.kv(key, value.unwrap_or("-"))
    }

    pub fn bullet(&mut self, text: &str) -> &mut Self {
        self.lines.push(format!("- {text}"));
        self
    }

    pub fn blank(&mut self) -> &mut Self {
        self.lines.push(String::new());
        self
    }

    pub fn push_line(&mut self, line: impl Into<String>) -> &mut Self {
        self.lines.push(line.into());
        self
    }

    pub fn build(self) -> String {
        self.lines.join("\n")
    }
}

pub fn emit_human(layout: HumanLayout) {
    println!("{}", layout.build());
}
