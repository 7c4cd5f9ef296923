/// Трейт для корня агрегата
///
/// Каждая запись сервиса: корень агрегата со своим идентификатором и
/// ресурсом в REST API.
pub trait AggregateRoot {
    /// Тип идентификатора агрегата
    type Id: PartialEq + Copy;

    /// Получить ID записи
    fn id(&self) -> Self::Id;

    /// Сегмент ресурса удалённого сервиса (например, "hoteles")
    fn collection_name() -> &'static str;

    /// Имя списка для UI (множественное число)
    fn list_name() -> &'static str;
}

/// Запись с данным ID, если она есть в списке
pub fn find_by_id<T: AggregateRoot>(items: &[T], id: T::Id) -> Option<&T> {
    items.iter().find(|item| item.id() == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row(i64);

    impl AggregateRoot for Row {
        type Id = i64;

        fn id(&self) -> i64 {
            self.0
        }

        fn collection_name() -> &'static str {
            "filas"
        }

        fn list_name() -> &'static str {
            "Filas"
        }
    }

    #[test]
    fn test_find_by_id() {
        let rows = vec![Row(1), Row(2)];
        assert_eq!(find_by_id(&rows, 2).map(|r| r.0), Some(2));
        assert!(find_by_id(&rows, 3).is_none());
    }
}
