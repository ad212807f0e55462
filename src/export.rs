//! Export and Query Helpers
//!
//! Stateless functions over the persisted collection. Each call reads the
//! storage again, so results always match the last saved state and never a
//! stale in-memory copy.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::config::STORAGE_KEY;
use crate::error::{FeedbackError, FeedbackResult};
use crate::feedback_store::read_collection;
use crate::models::{ExportFile, FeedbackRecord, FeedbackStats};
use crate::storage::FeedbackStorage;

const CSV_HEADER: [&str; 6] = ["Name", "Email", "Company", "Rating", "Message", "Date"];

/// Persisted collection, treating unreadable data as empty
pub fn load_persisted<S: FeedbackStorage + ?Sized>(storage: &S) -> Vec<FeedbackRecord> {
    read_collection(storage).unwrap_or_else(|err| {
        log::warn!("Reading feedback for export failed: {}", err);
        Vec::new()
    })
}

fn export_file_name(today: NaiveDate, extension: &str) -> String {
    format!("feedbacks_{}.{}", today.format("%Y-%m-%d"), extension)
}

/// Pretty-printed JSON of the stored collection
pub fn export_json<S: FeedbackStorage + ?Sized>(storage: &S, today: NaiveDate) -> FeedbackResult<ExportFile> {
    let records = load_persisted(storage);
    let contents = serde_json::to_string_pretty(&records)
        .map_err(|e| FeedbackError::Serialization(e.to_string()))?;
    Ok(ExportFile {
        file_name: export_file_name(today, "json"),
        mime_type: "application/json",
        contents,
    })
}

fn csv_quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

/// Comma-separated export, one row per record in stored order
pub fn export_csv<S: FeedbackStorage + ?Sized>(storage: &S, today: NaiveDate) -> FeedbackResult<ExportFile> {
    let records = load_persisted(storage);
    if records.is_empty() {
        return Err(FeedbackError::NothingToExport);
    }

    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(CSV_HEADER.join(","));
    for record in &records {
        lines.push(
            [
                csv_quote(&record.name),
                csv_quote(&record.email),
                csv_quote(&record.company),
                record.rating.to_string(),
                csv_quote(&record.message),
                csv_quote(&record.created_date),
            ]
            .join(","),
        );
    }

    Ok(ExportFile {
        file_name: export_file_name(today, "csv"),
        mime_type: "text/csv;charset=utf-8;",
        contents: lines.join("\n"),
    })
}

/// Count, mean rating and per-rating histogram
pub fn feedback_stats<S: FeedbackStorage + ?Sized>(storage: &S) -> FeedbackStats {
    let records = load_persisted(storage);
    if records.is_empty() {
        return FeedbackStats {
            total: 0,
            average: 0.0,
            distribution: BTreeMap::new(),
        };
    }

    let total = records.len();
    let sum: u32 = records.iter().map(|r| u32::from(r.rating)).sum();
    let average = (f64::from(sum) / total as f64 * 100.0).round() / 100.0;

    let distribution = (1..=5u8)
        .map(|rating| (rating, records.iter().filter(|r| r.rating == rating).count()))
        .collect();

    FeedbackStats {
        total,
        average,
        distribution,
    }
}

fn matches_keyword(record: &FeedbackRecord, needle: &str) -> bool {
    record.name.to_lowercase().contains(needle)
        || record.company.to_lowercase().contains(needle)
        || record.message.to_lowercase().contains(needle)
}

/// Case-insensitive substring match on name, company or message
pub fn search_feedbacks<S: FeedbackStorage + ?Sized>(storage: &S, keyword: &str) -> Vec<FeedbackRecord> {
    let needle = keyword.to_lowercase();
    load_persisted(storage)
        .into_iter()
        .filter(|r| matches_keyword(r, &needle))
        .collect()
}

/// Records rated at least `min_rating`, order preserved
pub fn filter_feedbacks_by_rating<S: FeedbackStorage + ?Sized>(storage: &S, min_rating: u8) -> Vec<FeedbackRecord> {
    load_persisted(storage)
        .into_iter()
        .filter(|r| r.rating >= min_rating)
        .collect()
}

/// Keyword search and minimum rating in a single pass, order preserved
pub fn query_feedbacks<S: FeedbackStorage + ?Sized>(storage: &S, keyword: &str, min_rating: u8) -> Vec<FeedbackRecord> {
    let needle = keyword.to_lowercase();
    load_persisted(storage)
        .into_iter()
        .filter(|r| r.rating >= min_rating && matches_keyword(r, &needle))
        .collect()
}

/// Remove the persisted collection once `confirm` agrees.
///
/// Returns whether anything was cleared. The caller must reload its view.
pub fn clear_all_feedbacks<S, F>(storage: &S, confirm: F) -> FeedbackResult<bool>
where
    S: FeedbackStorage + ?Sized,
    F: FnOnce() -> bool,
{
    if !confirm() {
        return Ok(false);
    }
    storage.remove(STORAGE_KEY)?;
    log::info!("Cleared all feedback");
    Ok(true)
}
