use lambda_http::{run, Error};
use bookstore::catalog::controller::{create_routes, AppState};
use bookstore::core::repository::RepositoryStore;
use bookstore::utils::ddb::setup_tracing;

// See https://docs.aws.amazon.com/lambda/latest/dg/lambda-rust.html
// https://docs.aws.amazon.com/lambda/latest/dg/rust-http-events.html

const DEV_MODE: bool = true;

#[tokio::main]
async fn main() -> Result<(), Error> {
    setup_tracing();

    let state = if DEV_MODE {
        std::env::set_var("AWS_LAMBDA_FUNCTION_NAME", "_");
        std::env::set_var("AWS_LAMBDA_FUNCTION_MEMORY_SIZE", "4096"); // 200MB
        std::env::set_var("AWS_LAMBDA_FUNCTION_VERSION", "1");
        std::env::set_var("AWS_LAMBDA_RUNTIME_API", "http://[::]:9000/.rt");
        AppState::new("books", RepositoryStore::LocalDynamoDB).await
    } else {
        AppState::new("books", RepositoryStore::DynamoDB).await
    };
    tracing::info!("books api serving table {}", state.config.table_name.as_str());

    let app = create_routes(state);

    run(app).await
}
