use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::command::{BOOK_NOT_FOUND_MESSAGE, REQUIRED_FIELDS_MESSAGE};
use crate::catalog::domain::CatalogService;
use crate::core::bookstore::BookStoreError;
use crate::core::command::{Command, CommandError};

pub(crate) const BOOK_UPDATED_MESSAGE: &str = "Book updated successfully";

pub(crate) struct UpdateBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl UpdateBookCommand {
    pub(crate) fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UpdateBookCommandRequest {
    // taken from the request path, not the body
    #[serde(default)]
    pub(crate) book_id: String,
    pub(crate) title: Option<String>,
    pub(crate) author: Option<String>,
    pub(crate) publish_year: Option<i64>,
}

impl UpdateBookCommandRequest {
    pub fn new(book_id: &str, title: &str, author: &str, publish_year: i64) -> Self {
        Self {
            book_id: book_id.to_string(),
            title: Some(title.to_string()),
            author: Some(author.to_string()),
            publish_year: Some(publish_year),
        }
    }

    pub fn build_book(&self) -> Result<BookDto, CommandError> {
        match (&self.title, &self.author, self.publish_year) {
            (Some(title), Some(author), Some(publish_year))
            if !title.is_empty() && !author.is_empty() => {
                let mut book = BookDto::new(title.as_str(), author.as_str(), publish_year);
                book.book_id = self.book_id.to_string();
                Ok(book)
            }
            _ => {
                Err(CommandError::Validation {
                    message: REQUIRED_FIELDS_MESSAGE.to_string(),
                    reason_code: None,
                })
            }
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct UpdateBookCommandResponse {
    pub message: String,
}

impl UpdateBookCommandResponse {
    pub fn new() -> Self {
        Self {
            message: BOOK_UPDATED_MESSAGE.to_string(),
        }
    }
}

#[async_trait]
impl Command<UpdateBookCommandRequest, UpdateBookCommandResponse> for UpdateBookCommand {
    async fn execute(&self, req: UpdateBookCommandRequest) -> Result<UpdateBookCommandResponse, CommandError> {
        let book = req.build_book()?;
        match self.catalog_service.update_book(&book).await {
            Ok(()) => Ok(UpdateBookCommandResponse::new()),
            Err(BookStoreError::NotFound { .. }) => {
                Err(CommandError::NotFound { message: BOOK_NOT_FOUND_MESSAGE.to_string() })
            }
            Err(err) => Err(CommandError::from(err)),
        }
    }
}
