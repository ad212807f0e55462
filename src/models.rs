//! Feedback Models
//!
//! Data structures persisted in local storage and shown on the page.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One submitted review (persisted shape)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackRecord {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub company: String,
    pub rating: u8,
    pub message: String,
    #[serde(rename = "createdDate")]
    pub created_date: String,
}

/// Raw form values before validation. `rating == 0` means unset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedbackInput {
    pub name: String,
    pub email: String,
    pub company: String,
    pub rating: u8,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    pub fn class(self) -> &'static str {
        match self {
            NoticeKind::Success => "notification success",
            NoticeKind::Error => "notification error",
        }
    }
}

/// Transient message shown in the notification area
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: u32,
    pub message: String,
    pub kind: NoticeKind,
}

/// Aggregate numbers over the stored collection
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedbackStats {
    pub total: usize,
    /// Mean rating rounded to two decimals
    pub average: f64,
    /// Count per rating value (1..=5); empty when there are no records
    pub distribution: BTreeMap<u8, usize>,
}

/// A generated file ready to be offered for download
#[derive(Debug, Clone, PartialEq)]
pub struct ExportFile {
    pub file_name: String,
    pub mime_type: &'static str,
    pub contents: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_uses_camel_case_date_key() {
        let record = FeedbackRecord {
            id: 1,
            name: "Ana".to_string(),
            email: String::new(),
            company: "Acme".to_string(),
            rating: 4,
            message: "Nice".to_string(),
            created_date: "October 16, 2026".to_string(),
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["createdDate"], "October 16, 2026");
        assert!(json.get("created_date").is_none());
    }
}
