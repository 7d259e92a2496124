use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct GetBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl GetBookCommand {
    pub(crate) fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct GetBookCommandRequest {
    pub(crate) book_id: String,
}

impl GetBookCommandRequest {
    pub fn new(book_id: String) -> Self {
        Self {
            book_id,
        }
    }
}

// An unknown identifier is not an error here, the caller receives a null body
// with a success status. Update/Delete treat the same situation as NotFound.
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub(crate) struct GetBookCommandResponse {
    pub book: Option<BookDto>,
}

impl GetBookCommandResponse {
    pub fn new(book: Option<BookDto>) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<GetBookCommandRequest, GetBookCommandResponse> for GetBookCommand {
    async fn execute(&self, req: GetBookCommandRequest) -> Result<GetBookCommandResponse, CommandError> {
        self.catalog_service.find_book_by_id(req.book_id.as_str())
            .await.map_err(CommandError::from).map(GetBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest};
    use crate::catalog::domain::CatalogService;
    use crate::catalog::factory;
    use crate::core::command::Command;
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;

    async fn create_test_service() -> Arc<dyn CatalogService> {
        factory::create_catalog_service(&Configuration::new("books"), RepositoryStore::InMemory).await
    }

    #[tokio::test]
    async fn test_should_run_get_book() {
        let svc = create_test_service().await;
        let add_cmd = AddBookCommand::new(svc.clone());
        let get_cmd = GetBookCommand::new(svc);

        let res = add_cmd.execute(AddBookCommandRequest::new("Dune", "Herbert", 1965))
            .await.expect("should add book");
        let loaded = get_cmd.execute(GetBookCommandRequest::new(res.book.book_id.to_string()))
            .await.expect("should get book");
        let book = loaded.book.expect("book should exist");
        assert_eq!("Dune", book.title.as_str());
        assert_eq!("Herbert", book.author.as_str());
        assert_eq!(1965, book.publish_year);
    }

    #[tokio::test]
    async fn test_should_run_get_book_for_unknown_id() {
        let get_cmd = GetBookCommand::new(create_test_service().await);

        let loaded = get_cmd.execute(GetBookCommandRequest::new("no-such-id".to_string()))
            .await.expect("should not fail");
        assert_eq!(None, loaded.book);
        let json = serde_json::to_string(&loaded).expect("should serialize");
        assert_eq!("null", json.as_str());
    }
}
