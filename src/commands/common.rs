//! Helpers shared across commands: opening the store and text formatting.

use std::path::PathBuf;

use serde::Serialize;
use tracing::debug;

use crate::{
    cli::types::StatCategory,
    storage::SqliteStore,
    Result,
};

use super::resolve_db_path;

/// Open the SQLite store the CLI works against.
pub fn open_store(db: Option<PathBuf>) -> Result<SqliteStore> {
    let path = resolve_db_path(db)?;
    debug!(path = %path.display(), "opening store");
    Ok(SqliteStore::open(&path)?)
}

/// Rate stat in box-score style: `.267`, `1.024`.
pub fn format_rate(value: f64) -> String {
    let s = format!("{value:.3}");
    match s.strip_prefix("0.") {
        Some(rest) => format!(".{rest}"),
        None => s,
    }
}

/// A category value at the category's display precision.
pub fn format_category_value(category: StatCategory, value: f64) -> String {
    match category {
        StatCategory::BattingAverage
        | StatCategory::OnBasePercentage
        | StatCategory::SluggingPercentage
        | StatCategory::Ops => format_rate(value),
        _ => format!("{:.*}", category.precision(), value),
    }
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
