pub mod ddb_book_repository;
pub mod mem_book_repository;

use async_trait::async_trait;
use crate::books::domain::model::BookEntity;
use crate::core::bookstore::BookStoreResult;
use crate::core::repository::Repository;

#[async_trait]
pub trait BookRepository: Repository<BookEntity> {
    // returns the entire collection of books
    async fn find_all(&self) -> BookStoreResult<Vec<BookEntity>>;
}
