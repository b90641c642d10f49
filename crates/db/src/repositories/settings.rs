//! Settings repository: one row per key, upserted.

use cajachica_core::BookkeepingError;
use cajachica_core::settings::{SettingEntry, SettingsRepository as SettingsRepoTrait};
use sea_orm::sea_query::OnConflict;
use sea_orm::{DatabaseConnection, EntityTrait, Set};

use super::storage_error;
use crate::entities::settings;

/// Settings repository backed by the `settings` table.
#[derive(Debug, Clone)]
pub struct SettingsRepository {
    db: DatabaseConnection,
}

impl SettingsRepository {
    /// Creates a new settings repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl SettingsRepoTrait for SettingsRepository {
    async fn find_value(&self, key: &str) -> Result<Option<String>, BookkeepingError> {
        let model = settings::Entity::find_by_id(key.to_owned())
            .one(&self.db)
            .await
            .map_err(storage_error)?;

        Ok(model.map(|m| m.value))
    }

    async fn upsert(&self, entry: SettingEntry) -> Result<(), BookkeepingError> {
        let active_model = settings::ActiveModel {
            key: Set(entry.key().to_owned()),
            value: Set(entry.value().to_owned()),
        };

        settings::Entity::insert(active_model)
            .on_conflict(
                OnConflict::column(settings::Column::Key)
                    .update_column(settings::Column::Value)
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .map_err(storage_error)?;

        tracing::debug!(key = entry.key(), "Setting saved");
        Ok(())
    }
}
