use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::types::AttributeValue;
use chrono::Utc;

use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::bookstore::{BookStoreError, BookStoreResult};
use crate::core::repository::Repository;
use crate::utils::ddb::{parse_date_attribute, parse_item, parse_number_attribute, parse_string_attribute, string_date};

#[derive(Debug)]
pub struct DDBBookRepository {
    client: Client,
    table_name: String,
}

impl DDBBookRepository {
    pub(crate) fn new(client: Client, table_name: &str) -> Self {
        Self {
            client,
            table_name: table_name.to_string(),
        }
    }
}

#[async_trait]
impl Repository<BookEntity> for DDBBookRepository {
    async fn create(&self, entity: &BookEntity) -> BookStoreResult<usize> {
        let table_name: &str = self.table_name.as_ref();
        let val = serde_json::to_value(entity)?;
        self.client
            .put_item()
            .table_name(table_name)
            .condition_expression("attribute_not_exists(book_id)")
            .set_item(Some(parse_item(val)?))
            .send()
            .await.map(|_| 1).map_err(BookStoreError::from)
    }

    async fn update(&self, entity: &BookEntity) -> BookStoreResult<usize> {
        let now = Utc::now();
        let table_name: &str = self.table_name.as_ref();

        self.client
            .update_item()
            .table_name(table_name)
            .key("book_id", AttributeValue::S(entity.book_id.clone()))
            .update_expression("SET title = :title, author = :author, publish_year = :publish_year, updated_at = :updated_at")
            .expression_attribute_values(":title", AttributeValue::S(entity.title.to_string()))
            .expression_attribute_values(":author", AttributeValue::S(entity.author.to_string()))
            .expression_attribute_values(":publish_year", AttributeValue::N(entity.publish_year.to_string()))
            .expression_attribute_values(":updated_at", string_date(now))
            .condition_expression("attribute_exists(book_id)")
            .send()
            .await.map(|_| 1).map_err(BookStoreError::from)
    }

    async fn get(&self, id: &str) -> BookStoreResult<Option<BookEntity>> {
        let table_name: &str = self.table_name.as_ref();
        self.client
            .get_item()
            .table_name(table_name)
            .consistent_read(true)
            .key("book_id", AttributeValue::S(id.to_string()))
            .send()
            .await.map_err(BookStoreError::from).map(|out| {
            out.item().map(map_to_book)
        })
    }

    async fn delete(&self, id: &str) -> BookStoreResult<usize> {
        let table_name: &str = self.table_name.as_ref();
        self.client.delete_item()
            .table_name(table_name)
            .key("book_id", AttributeValue::S(id.to_string()))
            .condition_expression("attribute_exists(book_id)")
            .send()
            .await.map(|_| 1).map_err(BookStoreError::from)
    }
}

#[async_trait]
impl BookRepository for DDBBookRepository {
    async fn find_all(&self) -> BookStoreResult<Vec<BookEntity>> {
        let table_name: &str = self.table_name.as_ref();
        let mut books = vec![];
        let mut exclusive_start_key: Option<HashMap<String, AttributeValue>> = None;
        // a single scan page caps out at 1MB, keep scanning until the store
        // reports no further pages
        loop {
            let out = self.client
                .scan()
                .table_name(table_name)
                .consistent_read(false)
                .set_exclusive_start_key(exclusive_start_key)
                .send()
                .await.map_err(BookStoreError::from)?;
            if let Some(items) = out.items.as_ref() {
                books.extend(items.iter().map(map_to_book));
            }
            match out.last_evaluated_key() {
                Some(key) => {
                    exclusive_start_key = Some(key.clone());
                }
                None => {
                    return Ok(books);
                }
            }
        }
    }
}

fn map_to_book(map: &HashMap<String, AttributeValue>) -> BookEntity {
    BookEntity {
        book_id: parse_string_attribute("book_id", map).unwrap_or(String::from("")),
        title: parse_string_attribute("title", map).unwrap_or(String::from("")),
        author: parse_string_attribute("author", map).unwrap_or(String::from("")),
        publish_year: parse_number_attribute("publish_year", map),
        created_at: parse_date_attribute("created_at", map).unwrap_or(Utc::now()),
        updated_at: parse_date_attribute("updated_at", map).unwrap_or(Utc::now()),
    }
}
