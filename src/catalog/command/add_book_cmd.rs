use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::command::REQUIRED_FIELDS_MESSAGE;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct AddBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl AddBookCommand {
    pub(crate) fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AddBookCommandRequest {
    pub(crate) title: Option<String>,
    pub(crate) author: Option<String>,
    pub(crate) publish_year: Option<i64>,
}

impl AddBookCommandRequest {
    pub fn new(title: &str, author: &str, publish_year: i64) -> Self {
        Self {
            title: Some(title.to_string()),
            author: Some(author.to_string()),
            publish_year: Some(publish_year),
        }
    }

    pub fn build_book(&self) -> Result<BookDto, CommandError> {
        match (&self.title, &self.author, self.publish_year) {
            (Some(title), Some(author), Some(publish_year))
            if !title.is_empty() && !author.is_empty() => {
                Ok(BookDto::new(title.as_str(), author.as_str(), publish_year))
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
#[serde(transparent)]
pub(crate) struct AddBookCommandResponse {
    pub book: BookDto,
}

impl AddBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand {
    async fn execute(&self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        let book = req.build_book()?;
        self.catalog_service.add_book(&book).await.map_err(CommandError::from).map(AddBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::command::REQUIRED_FIELDS_MESSAGE;
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;

    async fn create_test_command() -> AddBookCommand {
        let svc = factory::create_catalog_service(&Configuration::new("books"), RepositoryStore::InMemory).await;
        AddBookCommand::new(svc)
    }

    #[tokio::test]
    async fn test_should_run_add_book() {
        let cmd = create_test_command().await;

        let res = cmd.execute(AddBookCommandRequest::new("Dune", "Herbert", 1965))
            .await.expect("should add book");
        assert_eq!("Dune", res.book.title.as_str());
        assert_eq!("Herbert", res.book.author.as_str());
        assert_eq!(1965, res.book.publish_year);
        assert!(!res.book.book_id.is_empty());
    }

    #[tokio::test]
    async fn test_should_fail_add_book_without_title() {
        let cmd = create_test_command().await;

        let req = AddBookCommandRequest {
            title: None,
            author: Some("Herbert".to_string()),
            publish_year: Some(1965),
        };
        match cmd.execute(req).await {
            Err(CommandError::Validation { message, .. }) => {
                assert_eq!(REQUIRED_FIELDS_MESSAGE, message.as_str());
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_should_fail_add_book_with_empty_author() {
        let cmd = create_test_command().await;

        let req = AddBookCommandRequest {
            title: Some("Dune".to_string()),
            author: Some("".to_string()),
            publish_year: Some(1965),
        };
        assert!(matches!(cmd.execute(req).await, Err(CommandError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_should_fail_add_book_without_publish_year() {
        let cmd = create_test_command().await;

        let req = AddBookCommandRequest {
            title: Some("Dune".to_string()),
            author: Some("Herbert".to_string()),
            publish_year: None,
        };
        assert!(matches!(cmd.execute(req).await, Err(CommandError::Validation { .. })));
    }
}
