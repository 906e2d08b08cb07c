//! tt search - Hybrid substring + fuzzy order search

use std::time::Instant;

use clap::Args;
use tracing::debug;

use crate::app::AppContext;
use crate::cli::formatters::search_results::SearchResults;
use crate::error::Result;
use crate::search::SearchEngine;

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Search query (trimmed; blank returns nothing)
    pub query: String,
}

pub fn run(ctx: &AppContext, args: &SearchArgs) -> Result<()> {
    let started = Instant::now();
    let engine = SearchEngine::with_config(ctx.db.as_ref(), ctx.config.search.clone());
    let results = engine.search(&args.query)?;

    let elapsed = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
    debug!(query = %args.query, count = results.len(), elapsed_ms = elapsed);

    SearchResults::new(args.query.trim(), results)
        .with_duration(elapsed)
        .emit(ctx.output_format)
}
