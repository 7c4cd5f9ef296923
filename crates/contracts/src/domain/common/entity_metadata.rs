use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Метаданные экземпляра агрегата (жизненный цикл записи)
///
/// Отметки времени ставит удалённый сервис; у нового DTO их нет.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntityMetadata {
    /// Дата создания записи
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Дата последнего обновления
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl EntityMetadata {
    pub fn created_display(&self) -> String {
        format_date(self.created_at)
    }

    pub fn updated_display(&self) -> String {
        format_date(self.updated_at)
    }
}

/// `dd.mm.yyyy`, либо `-`, если сервис не прислал отметку времени
pub fn format_date(value: Option<DateTime<Utc>>) -> String {
    value
        .map(|dt| dt.format("%d.%m.%Y").to_string())
        .unwrap_or_else(|| "-".to_string())
}
