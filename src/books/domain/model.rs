use chrono::{DateTime, Utc};
use uuid::Uuid;
use serde::{Deserialize, Serialize};

// BookEntity abstracts a single stored book record, the identifier is assigned
// when the record is built for insertion and stays opaque to callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookEntity {
    pub book_id: String,
    pub title: String,
    pub author: String,
    pub publish_year: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BookEntity {
    pub fn new(title: &str, author: &str, publish_year: i64) -> Self {
        Self {
            book_id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            author: author.to_string(),
            publish_year,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::model::BookEntity;

    #[tokio::test]
    async fn test_should_build_books() {
        let book = BookEntity::new("Dune", "Herbert", 1965);
        assert_eq!("Dune", book.title.as_str());
        assert_eq!("Herbert", book.author.as_str());
        assert_eq!(1965, book.publish_year);
        assert!(!book.book_id.is_empty());
    }

    #[tokio::test]
    async fn test_should_assign_unique_ids() {
        let first = BookEntity::new("Dune", "Herbert", 1965);
        let second = BookEntity::new("Dune", "Herbert", 1965);
        assert_ne!(first.book_id, second.book_id);
    }
}
