use chrono::{DateTime, Utc};
use uuid::Uuid;
use serde::{Deserialize, Serialize};

// BookDto is the wire representation of a book record, field names follow the
// json contract of the http api (camelCase).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookDto {
    pub book_id: String,
    pub title: String,
    pub author: String,
    pub publish_year: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BookDto {
    pub fn new(title: &str, author: &str, publish_year: i64) -> BookDto {
        BookDto {
            book_id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            author: author.to_string(),
            publish_year,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }
}
