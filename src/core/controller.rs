use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;
use crate::core::command::CommandError;

// ServerError carries the status code and the message echoed back to the caller,
// every failure is rendered as a `{"message": ...}` json body.
#[derive(Debug)]
pub struct ServerError {
    pub status: StatusCode,
    pub message: String,
}

impl ServerError {
    pub fn new(status: StatusCode, message: String) -> Self {
        Self {
            status,
            message,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "message": self.message }))).into_response()
    }
}

pub fn json_to_server_error(err: serde_json::Error) -> ServerError {
    ServerError::new(StatusCode::BAD_REQUEST, format!("{}", err))
}

impl From<CommandError> for ServerError {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::Validation { message, .. } => {
                ServerError::new(StatusCode::BAD_REQUEST, message)
            }
            CommandError::Serialization { message } => {
                ServerError::new(StatusCode::BAD_REQUEST, message)
            }
            CommandError::NotFound { message } => {
                ServerError::new(StatusCode::NOT_FOUND, message)
            }
            CommandError::Database { message, .. } => {
                tracing::error!("database failure: {}", message);
                ServerError::new(StatusCode::INTERNAL_SERVER_ERROR, message)
            }
            CommandError::Runtime { message, .. } => {
                tracing::error!("runtime failure: {}", message);
                ServerError::new(StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use crate::core::command::CommandError;
    use crate::core::controller::ServerError;

    #[tokio::test]
    async fn test_should_map_validation_error_to_bad_request() {
        let err = ServerError::from(CommandError::Validation {
            message: "Send all required fields: title, author, publishYear".to_string(),
            reason_code: None,
        });
        assert_eq!(StatusCode::BAD_REQUEST, err.status);
        assert_eq!("Send all required fields: title, author, publishYear", err.message.as_str());
    }

    #[tokio::test]
    async fn test_should_map_not_found_error_to_not_found() {
        let err = ServerError::from(CommandError::NotFound { message: "Book not found".to_string() });
        assert_eq!(StatusCode::NOT_FOUND, err.status);
        assert_eq!("Book not found", err.message.as_str());
    }

    #[tokio::test]
    async fn test_should_map_database_error_to_internal_server_error() {
        let err = ServerError::from(CommandError::Database {
            message: "connection refused".to_string(),
            reason_code: None,
            retryable: false,
        });
        assert_eq!(StatusCode::INTERNAL_SERVER_ERROR, err.status);
        assert_eq!("connection refused", err.message.as_str());
    }

    #[tokio::test]
    async fn test_should_render_error_as_response() {
        let err = ServerError::from(CommandError::NotFound { message: "Book not found".to_string() });
        let res = err.into_response();
        assert_eq!(StatusCode::NOT_FOUND, res.status());
    }
}
