use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::catalog::command::BOOK_NOT_FOUND_MESSAGE;
use crate::catalog::domain::CatalogService;
use crate::core::bookstore::BookStoreError;
use crate::core::command::{Command, CommandError};

pub(crate) const BOOK_DELETED_MESSAGE: &str = "Book deleted successfully";

pub(crate) struct RemoveBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl RemoveBookCommand {
    pub(crate) fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RemoveBookCommandRequest {
    pub(crate) book_id: String,
}

impl RemoveBookCommandRequest {
    pub fn new(book_id: String) -> Self {
        Self {
            book_id,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct RemoveBookCommandResponse {
    pub message: String,
}

impl RemoveBookCommandResponse {
    pub fn new() -> Self {
        Self {
            message: BOOK_DELETED_MESSAGE.to_string(),
        }
    }
}

#[async_trait]
impl Command<RemoveBookCommandRequest, RemoveBookCommandResponse> for RemoveBookCommand {
    async fn execute(&self, req: RemoveBookCommandRequest) -> Result<RemoveBookCommandResponse, CommandError> {
        match self.catalog_service.remove_book(req.book_id.as_str()).await {
            Ok(()) => Ok(RemoveBookCommandResponse::new()),
            Err(BookStoreError::NotFound { .. }) => {
                Err(CommandError::NotFound { message: BOOK_NOT_FOUND_MESSAGE.to_string() })
            }
            Err(err) => Err(CommandError::from(err)),
        }
    }
}
