//! Feedback Store
//!
//! Owns the in-memory collection and keeps it in sync with the persisted
//! blob. Every accepted submission is prepended and the whole collection is
//! written back before anything is re-rendered.

use crate::clock::{format_display_date, Clock, DateFormat, SystemClock};
use crate::config::{DEFAULT_COMPANY, STORAGE_KEY};
use crate::error::{FeedbackError, FeedbackResult, ValidationError};
use crate::models::{FeedbackInput, FeedbackRecord, NoticeKind};
use crate::notify::{LogNotifier, Notifier};
use crate::render::render_feedback_list;
use crate::storage::FeedbackStorage;

const SUBMIT_SUCCESS: &str = "Feedback sent successfully!";

/// Read and parse the collection stored under the feedback key.
///
/// Absent key is an empty collection; unparsable content is `CorruptData`.
pub fn read_collection<S: FeedbackStorage + ?Sized>(storage: &S) -> FeedbackResult<Vec<FeedbackRecord>> {
    match storage.get(STORAGE_KEY)? {
        None => Ok(Vec::new()),
        Some(blob) => serde_json::from_str(&blob).map_err(|e| FeedbackError::CorruptData(e.to_string())),
    }
}

/// Check a raw submission. Rating is checked before the name.
pub fn validate(input: &FeedbackInput) -> Result<(), ValidationError> {
    match input.rating {
        0 => return Err(ValidationError::RatingMissing),
        1..=5 => {}
        other => return Err(ValidationError::RatingOutOfRange(other)),
    }
    if input.name.trim().is_empty() {
        return Err(ValidationError::NameMissing);
    }
    Ok(())
}

pub struct FeedbackStore<S: FeedbackStorage> {
    storage: S,
    records: Vec<FeedbackRecord>,
    clock: Box<dyn Clock>,
    date_format: DateFormat,
    notifier: Box<dyn Notifier>,
    last_id: i64,
    load_warning: Option<FeedbackError>,
}

impl<S: FeedbackStorage> FeedbackStore<S> {
    /// Create the store and load whatever is persisted.
    ///
    /// A missing backend or an unreadable blob leaves the collection empty;
    /// the cause is kept in `load_warning`.
    pub fn open(storage: S) -> Self {
        let mut store = Self {
            storage,
            records: Vec::new(),
            clock: Box::new(SystemClock),
            date_format: format_display_date,
            notifier: Box::new(LogNotifier),
            last_id: 0,
            load_warning: None,
        };
        store.reload();
        store
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn with_notifier(mut self, notifier: impl Notifier + 'static) -> Self {
        self.notifier = Box::new(notifier);
        self
    }

    pub fn with_date_format(mut self, date_format: DateFormat) -> Self {
        self.date_format = date_format;
        self
    }

    /// Current collection, newest first
    pub fn records(&self) -> &[FeedbackRecord] {
        &self.records
    }

    pub fn load_warning(&self) -> Option<&FeedbackError> {
        self.load_warning.as_ref()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn load(&self) -> FeedbackResult<Vec<FeedbackRecord>> {
        read_collection(&self.storage)
    }

    /// Replace the in-memory collection with the persisted one
    pub fn reload(&mut self) {
        match self.load() {
            Ok(records) => {
                log::info!("Loaded {} feedback records", records.len());
                self.records = records;
                self.load_warning = None;
            }
            Err(err) => {
                log::warn!("Starting with an empty feedback list: {}", err);
                self.records = Vec::new();
                self.load_warning = Some(err);
            }
        }
        self.last_id = self.records.iter().map(|r| r.id).max().unwrap_or(0);
    }

    /// Overwrite the persisted blob with the full collection
    pub fn save(&self) -> FeedbackResult<()> {
        let blob = serde_json::to_string(&self.records)
            .map_err(|e| FeedbackError::Serialization(e.to_string()))?;
        self.storage.set(STORAGE_KEY, &blob)
    }

    /// Validate, prepend and persist a submission.
    ///
    /// On any failure the collection is left as it was and an error notice
    /// is emitted.
    pub fn submit(&mut self, input: FeedbackInput) -> FeedbackResult<FeedbackRecord> {
        if let Err(err) = validate(&input) {
            log::debug!("Rejected submission: {:?}", err);
            self.notify(&err.to_string(), NoticeKind::Error);
            return Err(err.into());
        }

        let record = self.build_record(input);
        self.records.insert(0, record.clone());

        if let Err(err) = self.save() {
            log::error!("Failed to persist feedback {}: {}", record.id, err);
            self.records.remove(0);
            self.notify(&err.to_string(), NoticeKind::Error);
            return Err(err);
        }

        log::info!("Stored feedback {} ({} total)", record.id, self.records.len());
        self.notify(SUBMIT_SUCCESS, NoticeKind::Success);
        Ok(record)
    }

    pub fn render(&self) -> String {
        render_feedback_list(&self.records)
    }

    pub fn notify(&self, message: &str, kind: NoticeKind) {
        self.notifier.notify(message, kind);
    }

    fn build_record(&mut self, input: FeedbackInput) -> FeedbackRecord {
        let now = self.clock.now();
        // Timestamp ids, bumped so two submissions in one millisecond stay distinct
        let stamp = now.timestamp_millis();
        let id = self.last_id.checked_add(1).map_or(stamp, |next| stamp.max(next));
        self.last_id = id;

        let company = input.company.trim();
        FeedbackRecord {
            id,
            name: input.name.trim().to_string(),
            email: input.email.trim().to_string(),
            company: if company.is_empty() { DEFAULT_COMPANY.to_string() } else { company.to_string() },
            rating: input.rating,
            message: input.message.trim().to_string(),
            created_date: (self.date_format)(&now),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::tests::FixedClock;
    use crate::notify::tests::RecordingNotifier;
    use crate::storage::MemoryStorage;
    use std::rc::Rc;

    fn input(name: &str, rating: u8, message: &str) -> FeedbackInput {
        FeedbackInput {
            name: name.to_string(),
            rating,
            message: message.to_string(),
            ..Default::default()
        }
    }

    fn setup(storage: &MemoryStorage) -> (FeedbackStore<&MemoryStorage>, Rc<FixedClock>, Rc<RecordingNotifier>) {
        let clock = Rc::new(FixedClock::at(2026, 10, 16));
        let notifier = Rc::new(RecordingNotifier::default());
        let store = FeedbackStore::open(storage)
            .with_clock(clock.clone())
            .with_notifier(notifier.clone());
        (store, clock, notifier)
    }

    #[test]
    fn test_open_empty_storage() {
        let storage = MemoryStorage::new();
        let (store, _, _) = setup(&storage);

        assert!(store.records().is_empty());
        assert!(store.load_warning().is_none());
    }

    #[test]
    fn test_submit_example_record() {
        let storage = MemoryStorage::new();
        let (mut store, _, notifier) = setup(&storage);

        let created = store.submit(input("Ana", 5, "Great")).expect("submit failed");

        let first = &store.records()[0];
        assert_eq!(first, &created);
        assert_eq!(first.name, "Ana");
        assert_eq!(first.rating, 5);
        assert_eq!(first.message, "Great");
        assert_eq!(first.company, "Not specified");
        assert_eq!(first.created_date, "October 16, 2026");
        assert_eq!(notifier.kinds(), vec![NoticeKind::Success]);
    }

    #[test]
    fn test_valid_submissions_prepend() {
        let storage = MemoryStorage::new();
        let (mut store, clock, _) = setup(&storage);

        for rating in 1..=5u8 {
            let before = store.records().len();
            clock.advance_ms(10);
            store.submit(input(&format!("User {}", rating), rating, "ok")).unwrap();
            assert_eq!(store.records().len(), before + 1);
            assert_eq!(store.records()[0].rating, rating);
        }
        assert_eq!(store.records()[4].name, "User 1");
    }

    #[test]
    fn test_unset_rating_is_rejected() {
        let storage = MemoryStorage::new();
        let (mut store, _, notifier) = setup(&storage);
        store.submit(input("Ana", 4, "first")).unwrap();

        let result = store.submit(input("Luis", 0, "no stars"));

        assert_eq!(result, Err(FeedbackError::Validation(ValidationError::RatingMissing)));
        assert_eq!(store.records().len(), 1);
        assert_eq!(notifier.kinds(), vec![NoticeKind::Success, NoticeKind::Error]);
        assert_eq!(notifier.last_message().as_deref(), Some("Please select a rating"));
    }

    #[test]
    fn test_out_of_range_and_blank_name_rejected() {
        let storage = MemoryStorage::new();
        let (mut store, _, _) = setup(&storage);

        assert!(matches!(
            store.submit(input("Ana", 6, "")),
            Err(FeedbackError::Validation(ValidationError::RatingOutOfRange(6)))
        ));
        assert!(matches!(
            store.submit(input("   ", 3, "")),
            Err(FeedbackError::Validation(ValidationError::NameMissing))
        ));
        assert!(store.records().is_empty());
        assert_eq!(storage.get(STORAGE_KEY).unwrap(), None);
    }

    #[test]
    fn test_fields_are_trimmed() {
        let storage = MemoryStorage::new();
        let (mut store, _, _) = setup(&storage);

        let record = store
            .submit(FeedbackInput {
                name: "  Ana ".to_string(),
                email: " ana@example.com ".to_string(),
                company: "  Acme  ".to_string(),
                rating: 4,
                message: " Nice ".to_string(),
            })
            .unwrap();

        assert_eq!(record.name, "Ana");
        assert_eq!(record.email, "ana@example.com");
        assert_eq!(record.company, "Acme");
        assert_eq!(record.message, "Nice");
    }

    #[test]
    fn test_whitespace_company_gets_placeholder() {
        let storage = MemoryStorage::new();
        let (mut store, _, _) = setup(&storage);

        let mut raw = input("Ana", 3, "");
        raw.company = "   ".to_string();
        assert_eq!(store.submit(raw).unwrap().company, DEFAULT_COMPANY);
    }

    #[test]
    fn test_ids_unique_with_frozen_clock() {
        let storage = MemoryStorage::new();
        let (mut store, _, _) = setup(&storage);

        let a = store.submit(input("A", 1, "")).unwrap();
        let b = store.submit(input("B", 2, "")).unwrap();
        assert_eq!(b.id, a.id + 1);
    }

    #[test]
    fn test_submit_persists_before_returning() {
        let storage = MemoryStorage::new();
        let (mut store, _, _) = setup(&storage);
        store.submit(input("Ana", 5, "Great")).unwrap();

        let persisted = read_collection(&storage).unwrap();
        assert_eq!(persisted.as_slice(), store.records());
    }

    #[test]
    fn test_save_then_fresh_load_round_trip() {
        let storage = MemoryStorage::new();
        let saved = {
            let (mut store, clock, _) = setup(&storage);
            store.submit(input("Ana", 5, "Great")).unwrap();
            clock.advance_ms(1_000);
            store.submit(input("Luis", 2, "Meh \"really\"")).unwrap();
            store.save().unwrap();
            store.records().to_vec()
        };

        let (reopened, _, _) = setup(&storage);
        assert_eq!(reopened.records(), saved.as_slice());
        assert_eq!(reopened.records()[0].name, "Luis");
    }

    #[test]
    fn test_corrupt_blob_falls_back_to_empty() {
        let storage = MemoryStorage::new().with_entry(STORAGE_KEY, "{not json");
        let (store, _, _) = setup(&storage);

        assert!(store.records().is_empty());
        assert!(matches!(store.load_warning(), Some(FeedbackError::CorruptData(_))));
    }

    #[test]
    fn test_failed_persist_rolls_back() {
        let storage = MemoryStorage::read_only();
        let (mut store, _, notifier) = setup(&storage);

        let result = store.submit(input("Ana", 5, "Great"));

        assert!(matches!(result, Err(FeedbackError::StorageUnavailable(_))));
        assert!(store.records().is_empty());
        assert_eq!(notifier.kinds(), vec![NoticeKind::Error]);
    }

    #[test]
    fn test_new_ids_continue_after_loaded_records() {
        let storage = MemoryStorage::new();
        let blob = r#"[{"id":9999999999999,"name":"Old","email":"","company":"Acme","rating":3,"message":"","createdDate":"May 1, 2026"}]"#;
        storage.set(STORAGE_KEY, blob).unwrap();
        let (mut store, _, _) = setup(&storage);

        let created = store.submit(input("New", 4, "")).unwrap();
        assert_eq!(created.id, 10_000_000_000_000);
    }

    #[test]
    fn test_id_after_maximum_loaded_id_does_not_overflow() {
        let storage = MemoryStorage::new();
        let blob = format!(
            r#"[{{"id":{},"name":"Old","email":"","company":"Acme","rating":3,"message":"","createdDate":"May 1, 2026"}}]"#,
            i64::MAX
        );
        storage.set(STORAGE_KEY, &blob).unwrap();
        let (mut store, clock, _) = setup(&storage);

        let created = store.submit(input("New", 4, "")).unwrap();
        assert_eq!(created.id, clock.now().timestamp_millis());
        assert_eq!(store.records().len(), 2);
    }

    #[test]
    fn test_free_form_email_and_empty_message_accepted() {
        let storage = MemoryStorage::new();
        let (mut store, _, notifier) = setup(&storage);

        let mut raw = input("Ana", 4, "");
        raw.email = "not an address".to_string();
        let created = store.submit(raw).unwrap();

        assert_eq!(created.email, "not an address");
        assert_eq!(created.message, "");
        assert_eq!(notifier.kinds(), vec![NoticeKind::Success]);
    }

    #[test]
    fn test_reload_after_external_clear() {
        let storage = MemoryStorage::new();
        let (mut store, _, _) = setup(&storage);
        store.submit(input("Ana", 5, "Great")).unwrap();

        storage.remove(STORAGE_KEY).unwrap();
        store.reload();

        assert!(store.records().is_empty());
        assert!(store.render().contains("empty-message"));
    }

    #[test]
    fn test_custom_date_format() {
        fn iso(at: &chrono::DateTime<chrono::Local>) -> String {
            at.format("%Y-%m-%d").to_string()
        }
        let storage = MemoryStorage::new();
        let (store, _, _) = setup(&storage);
        let mut store = store.with_date_format(iso);

        assert_eq!(store.submit(input("Ana", 5, "")).unwrap().created_date, "2026-10-16");
    }
}
