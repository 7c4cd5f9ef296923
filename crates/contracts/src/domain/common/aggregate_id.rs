use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Трейт для типов идентификаторов агрегатов
///
/// Удалённый сервис нумерует записи целыми ключами, поэтому все ID
/// являются обёртками над `i64`.
pub trait AggregateId:
    Clone + Copy + PartialEq + Eq + Hash + Serialize + DeserializeOwned + std::fmt::Debug
{
    /// Целочисленный ключ в том виде, в каком его видит сервис
    fn value(&self) -> i64;

    /// Преобразовать ID в строку (сегменты пути, значения select)
    fn as_string(&self) -> String {
        self.value().to_string()
    }

    /// Создать ID из строки
    fn from_string(s: &str) -> Result<Self, String>;
}

impl AggregateId for i64 {
    fn value(&self) -> i64 {
        *self
    }

    fn from_string(s: &str) -> Result<Self, String> {
        s.trim()
            .parse::<i64>()
            .map_err(|e| format!("Invalid id '{}': {}", s, e))
    }
}

/// Объявляет newtype-идентификатор над `i64` со стандартными преобразованиями.
#[macro_export]
macro_rules! aggregate_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
            serde::Serialize, serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl $crate::domain::common::AggregateId for $name {
            fn value(&self) -> i64 {
                self.0
            }

            fn from_string(s: &str) -> Result<Self, String> {
                <i64 as $crate::domain::common::AggregateId>::from_string(s).map(Self)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}
