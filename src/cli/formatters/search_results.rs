//! Search results formatter
//!
//! Human mode renders an aligned table; JSON mode prints the bare
//! `{ "results": [...] }` envelope.

use console::style;
use serde::Serialize;

use crate::cli::output::{HumanLayout, OutputFormat, emit_human, emit_json};
use crate::error::Result;
use crate::search::{MatchSource, SearchResult};

/// Search results collection for formatted display
#[derive(Debug, Clone)]
pub struct SearchResults {
    pub query: String,
    pub results: Vec<SearchResult>,
    pub duration_ms: Option<u64>,
}

#[derive(Serialize)]
struct SearchResponseJson<'a> {
    results: &'a [SearchResult],
}

impl SearchResults {
    pub fn new(query: impl Into<String>, results: Vec<SearchResult>) -> Self {
        Self {
            query: query.into(),
            results,
            duration_ms: None,
        }
    }

    #[must_use]
    pub const fn with_duration(mut self, duration_ms: u64) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }

    pub fn emit(&self, format: OutputFormat) -> Result<()> {
        match format {
            OutputFormat::Json => emit_json(&SearchResponseJson {
                results: &self.results,
            }),
            OutputFormat::Human => {
                emit_human(self.to_layout());
                Ok(())
            }
        }
    }

    fn to_layout(&self) -> HumanLayout {
        let mut layout = HumanLayout::new();

        if self.results.is_empty() {
            layout.push_line(format!("No orders match \"{}\"", self.query));
            return layout;
        }

        let header = match self.duration_ms {
            Some(ms) => format!("{} result(s) for \"{}\" ({ms} ms)", self.results.len(), self.query),
            None => format!("{} result(s) for \"{}\"", self.results.len(), self.query),
        };
        layout.title(&header);
        layout.push_line(
            style(format!(
                "{:<6} {:<6} {:<10} {:<18} {:<14} {:<14} {:<8} {}",
                "score", "match", "code", "tray type", "make", "dimensions", "size", "status"
            ))
            .dim()
            .to_string(),
        );
        for result in &self.results {
            layout.push_line(result_row(result));
        }
        layout
    }
}

fn result_row(result: &SearchResult) -> String {
    let r = &result.record;
    let score = result
        .score
        .map_or_else(|| "-".to_string(), |s| format!("{s:.2}"));
    let source = match result.source {
        MatchSource::Fuzzy => style("fuzzy").yellow().to_string(),
        MatchSource::Exact => style("exact").green().to_string(),
    };
    let code = r.order_code.clone().unwrap_or_else(|| format!("#{}", r.id));
    format!(
        "{score:<6} {source:<6} {code:<10} {:<18} {:<14} {:<14} {:<8} {}",
        r.tray_type.as_deref().unwrap_or("-"),
        r.make.as_deref().unwrap_or("-"),
        r.dimensions.as_deref().unwrap_or("-"),
        r.size.as_deref().unwrap_or("-"),
        r.status,
    )
}
