use std::sync::Arc;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde_json::Value;
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest, AddBookCommandResponse};
use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest, GetBookCommandResponse};
use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest, ListBooksCommandResponse};
use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest, RemoveBookCommandResponse};
use crate::catalog::command::update_book_cmd::{UpdateBookCommand, UpdateBookCommandRequest, UpdateBookCommandResponse};
use crate::catalog::domain::CatalogService;
use crate::catalog::factory;
use crate::core::command::Command;
use crate::core::controller::{json_to_server_error, ServerError};
use crate::core::domain::Configuration;
use crate::core::repository::RepositoryStore;

// AppState carries the injected catalog service so every request shares the
// same persistence collaborator.
#[derive(Clone)]
pub struct AppState {
    pub config: Configuration,
    pub service: Arc<dyn CatalogService>,
}

impl AppState {
    pub async fn new(table_name: &str, store: RepositoryStore) -> AppState {
        let config = Configuration::new(table_name);
        let service = factory::create_catalog_service(&config, store).await;
        AppState {
            config,
            service,
        }
    }
}

pub fn create_routes(state: AppState) -> Router<(), lambda_http::Body> {
    Router::new()
        .route("/books", post(add_book).get(list_books))
        .route("/books/:id",
               get(find_book_by_id).put(update_book).delete(remove_book))
        .with_state(state)
}

pub(crate) async fn add_book(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<(StatusCode, Json<AddBookCommandResponse>), ServerError> {
    let req: AddBookCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let res = AddBookCommand::new(state.service.clone()).execute(req).await?;
    Ok((StatusCode::CREATED, Json(res)))
}

pub(crate) async fn list_books(
    State(state): State<AppState>) -> Result<Json<ListBooksCommandResponse>, ServerError> {
    let res = ListBooksCommand::new(state.service.clone()).execute(ListBooksCommandRequest {}).await?;
    Ok(Json(res))
}

pub(crate) async fn find_book_by_id(
    State(state): State<AppState>,
    Path(book_id): Path<String>) -> Result<Json<GetBookCommandResponse>, ServerError> {
    let req = GetBookCommandRequest { book_id };
    let res = GetBookCommand::new(state.service.clone()).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn update_book(
    State(state): State<AppState>,
    Path(book_id): Path<String>,
    json: Json<Value>) -> Result<Json<UpdateBookCommandResponse>, ServerError> {
    let mut req: UpdateBookCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    req.book_id = book_id;
    let res = UpdateBookCommand::new(state.service.clone()).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn remove_book(
    State(state): State<AppState>,
    Path(book_id): Path<String>) -> Result<Json<RemoveBookCommandResponse>, ServerError> {
    let req = RemoveBookCommandRequest { book_id };
    let res = RemoveBookCommand::new(state.service.clone()).execute(req).await?;
    Ok(Json(res))
}
