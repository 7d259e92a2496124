use std::collections::HashMap;
use std::time::Duration;
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::config::{Credentials, Region};
use aws_sdk_dynamodb::error::SdkError;
use aws_sdk_dynamodb::operation::delete_item::DeleteItemError;
use aws_sdk_dynamodb::operation::get_item::GetItemError;
use aws_sdk_dynamodb::operation::put_item::PutItemError;
use aws_sdk_dynamodb::operation::scan::ScanError;
use aws_sdk_dynamodb::operation::update_item::UpdateItemError;
use aws_sdk_dynamodb::types::{AttributeDefinition, AttributeValue, KeySchemaElement, KeyType, ProvisionedThroughput, ScalarAttributeType, TableStatus};
use chrono::{DateTime, Utc};
use serde_json::Value;
use crate::core::bookstore::{BookStoreError, BookStoreResult};
use crate::core::repository::RepositoryStore;

pub(crate) async fn create_table(client: &Client,
                                 table_name: &str, pk: &str) -> BookStoreResult<()> {
    match client
        .create_table()
        .table_name(table_name)
        .key_schema(
            KeySchemaElement::builder()
                .attribute_name(pk)
                .key_type(KeyType::Hash)
                .build(),
        )
        .attribute_definitions(
            AttributeDefinition::builder()
                .attribute_name(pk)
                .attribute_type(ScalarAttributeType::S)
                .build(),
        )
        .provisioned_throughput(
            ProvisionedThroughput::builder()
                .read_capacity_units(10)
                .write_capacity_units(10)
                .build(),
        )
        .send()
        .await
    {
        Ok(_k) => {
            wait_until_table_status_is_not(client, table_name, TableStatus::Creating).await;
            Ok(())
        }
        Err(err) => {
            Err(BookStoreError::database(format!("failed to create {} table due to {}",
                                                 table_name, err).as_str(), None, false))
        }
    }
}

pub(crate) async fn delete_table(client: &Client, table_name: &str) -> BookStoreResult<()> {
    match client.delete_table().table_name(table_name).send().await {
        Ok(_k) => {
            wait_until_table_status_is_not(client, table_name, TableStatus::Deleting).await;
            Ok(())
        }
        Err(err) => {
            Err(BookStoreError::database(format!("failed to delete {} table due to {}",
                                                 table_name, err).as_str(), None, false))
        }
    }
}

async fn wait_until_table_status_is_not(client: &Client, table_name: &str, other_status: TableStatus) {
    for _i in 0..30 {
        match describe_table(client, table_name).await {
            Ok(status) => {
                if status != other_status {
                    return;
                }
            }
            Err(_err) => {}
        }
        tokio::time::sleep(Duration::from_secs(1)).await;
    }
}

async fn describe_table(client: &Client, table_name: &str) -> BookStoreResult<TableStatus> {
    match client
        .describe_table()
        .table_name(table_name)
        .send()
        .await
    {
        Ok(out) => {
            if let Some(table) = out.table() {
                if let Some(status) = table.table_status() {
                    return Ok(status.clone());
                }
            }
            Err(BookStoreError::runtime(format!("failed to describe {} table",
                                                table_name).as_str(), None))
        }
        Err(err) => {
            Err(BookStoreError::database(format!("failed to describe {} table due to {}",
                                                 table_name, err).as_str(), None, false))
        }
    }
}

pub(crate) fn parse_item(value: Value) -> Result<HashMap<String, AttributeValue>, String> {
    match value_to_item(value) {
        AttributeValue::M(map) => Ok(map),
        other => Err(format!("failed to parse{:?}", other)),
    }
}

pub(crate) fn parse_string_attribute(name: &str, map: &HashMap<String, AttributeValue>) -> Option<String> {
    if let Some(AttributeValue::S(str)) = map.get(name) {
        return Some(str.clone());
    }
    None
}

pub(crate) fn parse_date_attribute(name: &str, map: &HashMap<String, AttributeValue>) -> Option<DateTime<Utc>> {
    if let Some(AttributeValue::S(str)) = map.get(name) {
        // e.g. 2023-05-14T04:40:35.726029+00:00
        if let Ok(date) = DateTime::parse_from_rfc3339(str) {
            return Some(date.with_timezone(&Utc));
        }
    }
    None
}

pub(crate) fn string_date(date: DateTime<Utc>) -> AttributeValue {
    AttributeValue::S(date.to_rfc3339())
}

pub(crate) fn parse_number_attribute(name: &str, map: &HashMap<String, AttributeValue>) -> i64 {
    if let Some(AttributeValue::N(str)) = map.get(name) {
        if let Ok(n) = str.parse::<i64>() {
            return n;
        }
    }
    0
}

fn value_to_item(value: Value) -> AttributeValue {
    match value {
        Value::Null => AttributeValue::Null(true),
        Value::Bool(b) => AttributeValue::Bool(b),
        Value::Number(n) => AttributeValue::N(n.to_string()),
        Value::String(s) => AttributeValue::S(s),
        Value::Array(a) => AttributeValue::L(a.into_iter().map(value_to_item).collect()),
        Value::Object(o) => {
            AttributeValue::M(o.into_iter().map(|(k, v)| (k, value_to_item(v))).collect())
        }
    }
}

// helper method to build db-client, the local flavor targets dynamodb-local
// (see https://docs.aws.amazon.com/sdk-for-rust/latest/dg/dynamodb-local.html)
pub async fn build_db_client(store: RepositoryStore) -> Client {
    match store {
        RepositoryStore::DynamoDB => {
            //Get config from environment.
            let config = aws_config::load_from_env().await;
            //Create the DynamoDB client.
            Client::new(&config)
        }
        _ => {
            let endpoint = std::env::var("DYNAMODB_ENDPOINT")
                .unwrap_or_else(|_| "http://localhost:8000".to_string());
            let dynamodb_local_config = aws_sdk_dynamodb::Config::builder()
                .region(Region::new("local"))
                .endpoint_url(endpoint)
                .credentials_provider(
                    Credentials::new("AKIDLOCALSTACK", "localstacksecret", None, None, "faked"))
                .build();
            Client::from_conf(dynamodb_local_config)
        }
    }
}

// required to enable CloudWatch error logging by the runtime
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        // disable printing the name of the module in every log line.
        .with_target(false)
        // this needs to be set to false, otherwise ANSI color codes will
        // show up in a confusing manner in CloudWatch logs.
        .with_ansi(false)
        // disabling time is handy because CloudWatch will add the ingestion time.
        .without_time()
        .json()
        .init();
}

impl From<SdkError<PutItemError>> for BookStoreError {
    fn from(err: SdkError<PutItemError>) -> Self {
        let (retryable, reason) = retryable_sdk_error(&err);
        BookStoreError::database(format!("{:?}", err).as_str(), reason, retryable)
    }
}

impl From<SdkError<UpdateItemError>> for BookStoreError {
    fn from(err: SdkError<UpdateItemError>) -> Self {
        // the update is conditional on the item existing already
        if let SdkError::ServiceError(ctx) = &err {
            if ctx.err().is_conditional_check_failed_exception() {
                return BookStoreError::not_found(format!("no item to update {:?}", err).as_str());
            }
        }
        let (retryable, reason) = retryable_sdk_error(&err);
        BookStoreError::database(format!("{:?}", err).as_str(), reason, retryable)
    }
}

impl From<SdkError<DeleteItemError>> for BookStoreError {
    fn from(err: SdkError<DeleteItemError>) -> Self {
        // the delete is conditional on the item existing already
        if let SdkError::ServiceError(ctx) = &err {
            if ctx.err().is_conditional_check_failed_exception() {
                return BookStoreError::not_found(format!("no item to delete {:?}", err).as_str());
            }
        }
        let (retryable, reason) = retryable_sdk_error(&err);
        BookStoreError::database(format!("{:?}", err).as_str(), reason, retryable)
    }
}

impl From<SdkError<GetItemError>> for BookStoreError {
    fn from(err: SdkError<GetItemError>) -> Self {
        let (retryable, reason) = retryable_sdk_error(&err);
        BookStoreError::database(format!("{:?}", err).as_str(), reason, retryable)
    }
}

impl From<SdkError<ScanError>> for BookStoreError {
    fn from(err: SdkError<ScanError>) -> Self {
        let (retryable, reason) = retryable_sdk_error(&err);
        BookStoreError::database(format!("{:?}", err).as_str(), reason, retryable)
    }
}

fn retryable_sdk_error<T>(err: &SdkError<T>) -> (bool, Option<String>) {
    match err {
        SdkError::ConstructionFailure(_) => { (false, Some("ConstructionFailure".to_string())) }
        SdkError::TimeoutError(_) => { (true, Some("TimeoutError".to_string())) }
        SdkError::DispatchFailure(_) => { (true, Some("DispatchFailure".to_string())) }
        SdkError::ResponseError { .. } => { (true, Some("ResponseError".to_string())) }
        SdkError::ServiceError(ctx) => {
            (ctx.raw().http().status().is_server_error(), Some(ctx.raw().http().status().to_string()))
        }
        _ => { (true, Some("Unknown".to_string())) }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use serde_json::json;
    use crate::utils::ddb::{parse_date_attribute, parse_item, parse_number_attribute, parse_string_attribute, string_date};

    #[tokio::test]
    async fn test_should_parse_item_attributes() {
        let map = parse_item(json!({
            "book_id": "id-1",
            "title": "test book",
            "publish_year": 1965,
        })).expect("should parse item");
        assert_eq!(Some("id-1".to_string()), parse_string_attribute("book_id", &map));
        assert_eq!(Some("test book".to_string()), parse_string_attribute("title", &map));
        assert_eq!(1965, parse_number_attribute("publish_year", &map));
        assert_eq!(None, parse_string_attribute("author", &map));
        assert_eq!(0, parse_number_attribute("missing", &map));
    }

    #[tokio::test]
    async fn test_should_round_trip_date_attribute() {
        let now = Utc::now();
        let map = std::collections::HashMap::from([("created_at".to_string(), string_date(now))]);
        assert_eq!(Some(now), parse_date_attribute("created_at", &map));
        assert_eq!(None, parse_date_attribute("updated_at", &map));
    }
}
