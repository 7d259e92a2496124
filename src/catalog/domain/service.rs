use async_trait::async_trait;
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::core::bookstore::BookStoreResult;

pub(crate) struct CatalogServiceImpl {
    book_repository: Box<dyn BookRepository>,
}

impl CatalogServiceImpl {
    pub(crate) fn new(book_repository: Box<dyn BookRepository>) -> Self {
        Self {
            book_repository,
        }
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn add_book(&self, book: &BookDto) -> BookStoreResult<BookDto> {
        let entity = BookEntity::from(book);
        self.book_repository.create(&entity).await.map(|_| BookDto::from(&entity))
    }

    async fn find_all_books(&self) -> BookStoreResult<Vec<BookDto>> {
        let books = self.book_repository.find_all().await?;
        Ok(books.iter().map(BookDto::from).collect())
    }

    async fn find_book_by_id(&self, id: &str) -> BookStoreResult<Option<BookDto>> {
        self.book_repository.get(id).await.map(|book| book.as_ref().map(BookDto::from))
    }

    async fn update_book(&self, book: &BookDto) -> BookStoreResult<()> {
        self.book_repository.update(&BookEntity::from(book)).await.map(|_| ())
    }

    async fn remove_book(&self, id: &str) -> BookStoreResult<()> {
        self.book_repository.delete(id).await.map(|_| ())
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            book_id: other.book_id.to_string(),
            title: other.title.to_string(),
            author: other.author.to_string(),
            publish_year: other.publish_year,
            created_at: other.created_at,
            updated_at: other.updated_at,
        }
    }
}

impl From<&BookDto> for BookEntity {
    fn from(other: &BookDto) -> Self {
        Self {
            book_id: other.book_id.to_string(),
            title: other.title.to_string(),
            author: other.author.to_string(),
            publish_year: other.publish_year,
            created_at: other.created_at,
            updated_at: other.updated_at,
        }
    }
}
