use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::bookstore::{BookStoreError, BookStoreResult};
use crate::core::repository::Repository;

// MemBookRepository keeps the collection in process memory, it backs tests and
// offers the same conditional semantics as the DynamoDB repository.
#[derive(Debug)]
pub struct MemBookRepository {
    books: RwLock<HashMap<String, BookEntity>>,
}

impl MemBookRepository {
    pub(crate) fn new() -> Self {
        Self {
            books: RwLock::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl Repository<BookEntity> for MemBookRepository {
    async fn create(&self, entity: &BookEntity) -> BookStoreResult<usize> {
        let mut books = self.books.write().await;
        if books.contains_key(entity.book_id.as_str()) {
            return Err(BookStoreError::database(
                format!("book already exists for {}", entity.book_id).as_str(), None, false));
        }
        books.insert(entity.book_id.clone(), entity.clone());
        Ok(1)
    }

    async fn update(&self, entity: &BookEntity) -> BookStoreResult<usize> {
        let mut books = self.books.write().await;
        match books.get_mut(entity.book_id.as_str()) {
            Some(existing) => {
                existing.title = entity.title.clone();
                existing.author = entity.author.clone();
                existing.publish_year = entity.publish_year;
                existing.updated_at = Utc::now();
                Ok(1)
            }
            None => {
                Err(BookStoreError::not_found(
                    format!("book not found for {}", entity.book_id).as_str()))
            }
        }
    }

    async fn get(&self, id: &str) -> BookStoreResult<Option<BookEntity>> {
        Ok(self.books.read().await.get(id).cloned())
    }

    async fn delete(&self, id: &str) -> BookStoreResult<usize> {
        match self.books.write().await.remove(id) {
            Some(_) => Ok(1),
            None => Err(BookStoreError::not_found(
                format!("book not found for {}", id).as_str())),
        }
    }
}

#[async_trait]
impl BookRepository for MemBookRepository {
    async fn find_all(&self) -> BookStoreResult<Vec<BookEntity>> {
        Ok(self.books.read().await.values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::model::BookEntity;
    use crate::books::repository::BookRepository;
    use crate::books::repository::mem_book_repository::MemBookRepository;
    use crate::core::bookstore::BookStoreError;
    use crate::core::repository::Repository;

    #[tokio::test]
    async fn test_should_create_get_books() {
        let books_repo = MemBookRepository::new();
        let book = BookEntity::new("test book", "test author", 1999);
        let size = books_repo.create(&book).await.expect("should create book");
        assert_eq!(1, size);

        let loaded = books_repo.get(book.book_id.as_str()).await
            .expect("should return book").expect("book should exist");
        assert_eq!(book.book_id, loaded.book_id);
        assert_eq!(book.title, loaded.title);
    }

    #[tokio::test]
    async fn test_should_fail_creating_duplicate_books() {
        let books_repo = MemBookRepository::new();
        let book = BookEntity::new("test book", "test author", 1999);
        let _ = books_repo.create(&book).await.expect("should create book");
        let res = books_repo.create(&book).await;
        assert!(matches!(res, Err(BookStoreError::Database { .. })));
    }

    #[tokio::test]
    async fn test_should_create_update_books() {
        let books_repo = MemBookRepository::new();
        let mut book = BookEntity::new("test book", "test author", 1999);
        let _ = books_repo.create(&book).await.expect("should create book");

        book.title = "new title".to_string();
        book.publish_year = 2005;
        let size = books_repo.update(&book).await.expect("should update book");
        assert_eq!(1, size);

        let loaded = books_repo.get(book.book_id.as_str()).await
            .expect("should return book").expect("book should exist");
        assert_eq!("new title", loaded.title.as_str());
        assert_eq!(2005, loaded.publish_year);
    }

    #[tokio::test]
    async fn test_should_fail_updating_unknown_books() {
        let books_repo = MemBookRepository::new();
        let book = BookEntity::new("test book", "test author", 1999);
        let res = books_repo.update(&book).await;
        assert!(matches!(res, Err(BookStoreError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_should_return_none_for_unknown_books() {
        let books_repo = MemBookRepository::new();
        let loaded = books_repo.get("no-such-id").await.expect("should not fail");
        assert_eq!(None, loaded);
    }

    #[tokio::test]
    async fn test_should_create_find_all_books() {
        let books_repo = MemBookRepository::new();
        for i in 0..5 {
            let book = BookEntity::new(format!("title_{}", i).as_str(),
                                       format!("author_{}", i).as_str(), 1900 + i);
            let _ = books_repo.create(&book).await.expect("should create book");
        }
        let res = books_repo.find_all().await.expect("should return books");
        assert_eq!(5, res.len());
    }

    #[tokio::test]
    async fn test_should_create_delete_books() {
        let books_repo = MemBookRepository::new();
        let book = BookEntity::new("test book", "test author", 1999);
        let _ = books_repo.create(&book).await.expect("should create book");

        let deleted = books_repo.delete(book.book_id.as_str()).await.expect("should delete book");
        assert_eq!(1, deleted);

        let loaded = books_repo.get(book.book_id.as_str()).await.expect("should not fail");
        assert_eq!(None, loaded);

        let res = books_repo.delete(book.book_id.as_str()).await;
        assert!(matches!(res, Err(BookStoreError::NotFound { .. })));
    }
}
