use thiserror::Error;

#[derive(Debug, Error)]
pub enum CampayApiError {
    #[error("Could not initialize client: {0}")]
    Initialization(String),
    #[error("Could not reach the payment provider: {0}")]
    RequestError(String),
    #[error("Could not deserialize JSON: {0}")]
    JsonError(String),
    #[error("Collection request failed. Error {status}. {message}")]
    QueryError { status: u16, message: String },
}
