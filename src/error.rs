use super::constant::{CONNECTION_ERROR_MESSAGE, UNKNOWN_ERROR_MESSAGE};

use serde_json::Value;

use std::fmt::Display;

/// Result for API calls from [`Lovense`](super::Lovense)
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    /// Errors reported by the Lovense app or server
    Api(ApiError),
    /// Errors from [`Lovense`](super::Lovense)
    Client(ClientError),
    /// The request could not be completed, or the reply was not json
    Connection(reqwest::Error),
    /// The reply was json, but not a Lovense reply
    Reply(Value),
    /// Error processing json command
    Json(serde_json::Error),
}

impl Error {
    pub fn is_api(&self) -> bool {
        matches!(self, Error::Api(_))
    }

    pub fn is_client(&self) -> bool {
        matches!(self, Error::Client(_))
    }

    /// The request failed or the reply could not be understood
    pub fn is_connection(&self) -> bool {
        matches!(self, Error::Connection(_) | Error::Reply(_))
    }

    pub fn is_serde(&self) -> bool {
        matches!(self, Error::Json(_))
    }

    /// Status code of the error. Anything not reported by Lovense is [`Status::Custom`].
    pub fn status(&self) -> Status {
        match self {
            Self::Api(e) => e.status(),
            _ => Status::Custom,
        }
    }

    /// Human readable message
    pub fn message(&self) -> String {
        match self {
            Self::Api(e) => e.message(),
            Self::Client(e) => e.to_string(),
            Self::Connection(_) | Self::Reply(_) => CONNECTION_ERROR_MESSAGE.to_string(),
            Self::Json(e) => e.to_string(),
        }
    }

    /// Raw diagnostic content. For api errors this is the reply body.
    pub fn content(&self) -> Value {
        match self {
            Self::Api(e) => e.content().clone(),
            Self::Client(_) => Value::Null,
            Self::Connection(e) => Value::String(e.to_string()),
            Self::Reply(body) => body.clone(),
            Self::Json(e) => Value::String(e.to_string()),
        }
    }

    pub(crate) fn server_only(operation: &'static str) -> Error {
        ClientError::ServerOnly(operation).into()
    }
}

impl From<ApiError> for Error {
    fn from(e: ApiError) -> Self {
        Error::Api(e)
    }
}

impl From<ClientError> for Error {
    fn from(e: ClientError) -> Self {
        Error::Client(e)
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Error {
        Error::Connection(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::Json(e)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Api(e) => write!(f, "{}", e),
            Self::Client(e) => write!(f, "{}", e),
            Self::Connection(e) => write!(f, "{}: {}", CONNECTION_ERROR_MESSAGE, e),
            Self::Reply(body) => write!(f, "{}: unexpected reply {}", CONNECTION_ERROR_MESSAGE, body),
            Self::Json(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for Error {}

/// Status codes returned by the Lovense app and server
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Not a Lovense status. Used for connection and client errors.
    Custom,
    InvalidCommand,
    ToyNotFound,
    ToyNotConnected,
    ToyDoesntSupportCommand,
    InvalidParameter,
    HttpServerNotStarted,
    InvalidToken,
    PermissionDenied,
    InvalidUserId,
    ServerError,
    AppOffline,
    /// Any code without a known meaning
    Other(i64),
}

impl Status {
    pub fn code(self) -> i64 {
        match self {
            Self::Custom => 0,
            Self::InvalidCommand => 400,
            Self::ToyNotFound => 401,
            Self::ToyNotConnected => 402,
            Self::ToyDoesntSupportCommand => 403,
            Self::InvalidParameter => 404,
            Self::HttpServerNotStarted => 500,
            Self::InvalidToken => 501,
            Self::PermissionDenied => 502,
            Self::InvalidUserId => 503,
            Self::ServerError => 506,
            Self::AppOffline => 507,
            Self::Other(code) => code,
        }
    }

    /// Canonical message for a known status
    pub fn description(self) -> Option<&'static str> {
        match self {
            Self::InvalidCommand => Some("Invalid Command"),
            Self::ToyNotFound => Some("Toy Not Found"),
            Self::ToyNotConnected => Some("Toy Not Connected"),
            Self::ToyDoesntSupportCommand => Some("Toy Doesn't Support This Command"),
            Self::InvalidParameter => Some("Invalid Parameter"),
            Self::HttpServerNotStarted => Some("HTTP server not started or disabled"),
            Self::InvalidToken => Some("Invalid Token"),
            Self::PermissionDenied => Some("Permission Denied"),
            Self::InvalidUserId => Some("Invalid User ID"),
            Self::ServerError => Some("Server Error"),
            Self::AppOffline => Some("Lovense APP Offline"),
            Self::Custom | Self::Other(_) => None,
        }
    }
}

impl From<i64> for Status {
    fn from(code: i64) -> Status {
        match code {
            0 => Self::Custom,
            400 => Self::InvalidCommand,
            401 => Self::ToyNotFound,
            402 => Self::ToyNotConnected,
            403 => Self::ToyDoesntSupportCommand,
            404 => Self::InvalidParameter,
            500 => Self::HttpServerNotStarted,
            501 => Self::InvalidToken,
            502 => Self::PermissionDenied,
            503 => Self::InvalidUserId,
            506 => Self::ServerError,
            507 => Self::AppOffline,
            other => Self::Other(other),
        }
    }
}

impl Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Error reported by the Lovense app or server
#[derive(Debug, Clone)]
pub struct ApiError {
    status: Status,
    message: Option<String>,
    content: Value,
}

impl ApiError {
    pub(crate) fn new(status: Status, message: Option<String>, content: Value) -> Self {
        Self {
            status,
            message,
            content,
        }
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// The table message for a known status, otherwise the message Lovense sent
    pub fn message(&self) -> String {
        match (self.status.description(), &self.message) {
            (Some(description), _) => description.to_string(),
            (None, Some(message)) => message.clone(),
            (None, None) => UNKNOWN_ERROR_MESSAGE.to_string(),
        }
    }

    pub fn content(&self) -> &Value {
        &self.content
    }
}

impl Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "[{}] {}", self.status, self.message())
    }
}

#[derive(Debug)]
pub enum ClientError {
    /// Operation is only available with a server connection
    ServerOnly(&'static str),
}

impl Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self {
            Self::ServerOnly(operation) => {
                write!(f, "'{}' requires a server connection", operation)
            }
        }
    }
}
