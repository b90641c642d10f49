//! Key/value settings, such as the logo printed on reports.
//!
//! Entries are upserted by key and last write wins. Reading a key that was
//! never written yields `None`, not an error.

use std::future::Future;
use std::sync::Arc;

use serde::Serialize;

use crate::error::BookkeepingError;

/// Key under which the report logo (base64 image) is stored.
pub const LOGO_KEY: &str = "logo";

/// Repository trait for settings persistence.
///
/// This trait is implemented by the db crate to provide actual database operations.
pub trait SettingsRepository: Send + Sync {
    /// Returns the stored value, or `None` if the key was never written.
    fn find_value(
        &self,
        key: &str,
    ) -> impl Future<Output = Result<Option<String>, BookkeepingError>> + Send;

    /// Inserts or overwrites the entry for its key.
    fn upsert(&self, entry: SettingEntry) -> impl Future<Output = Result<(), BookkeepingError>> + Send;
}

/// Unvalidated client input for a setting.
#[derive(Debug, Clone, Default)]
pub struct SettingDraft {
    /// Setting key.
    pub key: Option<String>,
    /// Setting value.
    pub value: Option<String>,
}

/// A validated setting entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SettingEntry {
    key: String,
    value: String,
}

impl SettingEntry {
    /// Setting key, trimmed and non-empty.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Setting value, stored as given.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl TryFrom<SettingDraft> for SettingEntry {
    type Error = BookkeepingError;

    fn try_from(draft: SettingDraft) -> Result<Self, Self::Error> {
        let key = draft
            .key
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .ok_or(BookkeepingError::MissingField("key"))?;
        let value = draft.value.ok_or(BookkeepingError::MissingField("value"))?;
        Ok(Self { key, value })
    }
}

/// Settings service.
pub struct SettingsService<R: SettingsRepository> {
    repo: Arc<R>,
}

impl<R: SettingsRepository> SettingsService<R> {
    /// Create a new settings service.
    #[must_use]
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Reads a setting.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the lookup fails. A missing key is `Ok(None)`.
    pub async fn get(&self, key: &str) -> Result<Option<String>, BookkeepingError> {
        self.repo.find_value(key).await
    }

    /// Validates and writes a setting.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a blank key or missing value, or a storage error.
    pub async fn put(&self, draft: SettingDraft) -> Result<SettingEntry, BookkeepingError> {
        let entry = SettingEntry::try_from(draft)?;
        self.repo.upsert(entry.clone()).await?;
        Ok(entry)
    }
}
