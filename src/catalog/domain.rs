pub mod service;

use async_trait::async_trait;
use crate::books::dto::BookDto;
use crate::core::bookstore::BookStoreResult;

#[async_trait]
pub trait CatalogService: Sync + Send {
    async fn add_book(&self, book: &BookDto) -> BookStoreResult<BookDto>;
    async fn find_all_books(&self) -> BookStoreResult<Vec<BookDto>>;
    async fn find_book_by_id(&self, id: &str) -> BookStoreResult<Option<BookDto>>;
    async fn update_book(&self, book: &BookDto) -> BookStoreResult<()>;
    async fn remove_book(&self, id: &str) -> BookStoreResult<()>;
}
