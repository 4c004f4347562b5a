use crate::constant::{DEFAULT_TIMEOUT, LOVENSE_SERVER_BASE_URL};

use serde::{Deserialize, Serialize};

use std::time::Duration;

/// How commands reach the toys
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Connection {
    /// Directly to the Lovense app on the same network
    Local,
    /// Relayed through the Lovense server with developer credentials
    Server(Credentials),
}

impl Connection {
    pub fn server<T: Into<String>, U: Into<String>>(token: T, uid: U) -> Self {
        Connection::Server(Credentials::new(token, uid))
    }

    pub fn is_local(&self) -> bool {
        matches!(self, Connection::Local)
    }

    pub fn credentials(&self) -> Option<&Credentials> {
        match self {
            Connection::Local => None,
            Connection::Server(credentials) => Some(credentials),
        }
    }
}

/// Developer credentials for the server API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Lovense developer token
    pub token: String,
    /// User id on your application
    pub uid: String,
    /// User name on your application
    pub uname: Option<String>,
}

impl Credentials {
    pub fn new<T: Into<String>, U: Into<String>>(token: T, uid: U) -> Self {
        Self {
            token: token.into(),
            uid: uid.into(),
            uname: None,
        }
    }

    pub fn uname<S: Into<String>>(mut self, uname: S) -> Self {
        self.uname = Some(uname.into());
        self
    }
}

/// Platform the Lovense app is running on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Pc,
    Ios,
    Android,
    #[serde(other)]
    Unknown,
}

impl Default for Platform {
    fn default() -> Self {
        Platform::Unknown
    }
}

/// Which Lovense app answered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AppType {
    Connect,
    Remote,
    #[serde(other)]
    Unknown,
}

/// Client settings
#[derive(Debug, Clone)]
pub struct Config {
    /// Request timeout
    pub timeout: Duration,
    /// Accept self signed certificates from the local app
    pub danger_accept_invalid_certs: bool,
    /// Base of the server API, ending with `/`
    pub server_base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT),
            danger_accept_invalid_certs: false,
            server_base_url: LOVENSE_SERVER_BASE_URL.to_string(),
        }
    }
}
