use super::toy::{decode_toys, Toy};
use super::{AppType, Platform};
use crate::error::{ApiError, Error, Result, Status};

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Reply envelope from the Lovense app or server
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Response {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    result: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    code: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    data: Option<Value>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    kind: Option<String>,
    #[serde(skip)]
    raw: Value,
}

impl Response {
    /// A reply fails when `result` is false or `type` is anything but "OK"
    pub fn is_success(&self) -> bool {
        self.result != Some(false) && self.kind.as_deref().map_or(true, |kind| kind == "OK")
    }

    pub fn code(&self) -> Option<i64> {
        self.code
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn data(&self) -> Option<&Value> {
        self.data.as_ref()
    }

    /// Platform of the answering app, if reported
    pub fn platform(&self) -> Option<Platform> {
        self.data_field("platform")
    }

    /// Which app answered, if reported
    pub fn app_type(&self) -> Option<AppType> {
        self.data_field("appType")
    }

    fn data_field<T: serde::de::DeserializeOwned>(&self, field: &str) -> Option<T> {
        self.data
            .as_ref()
            .and_then(|data| data.get(field))
            .and_then(|value| serde_json::from_value(value.clone()).ok())
    }

    /// Reply body as received
    pub fn raw(&self) -> &Value {
        &self.raw
    }

    fn error(self) -> ApiError {
        ApiError::new(Status::from(self.code.unwrap_or(0)), self.message, self.raw)
    }

    /// Toy list carried by a `GetToys` reply. A reply without one is an error.
    pub(crate) fn into_toys(self) -> Result<Vec<Toy>> {
        let toys = self
            .data
            .as_ref()
            .and_then(|data| data.get("toys"))
            .filter(|toys| !toys.is_null())
            .cloned();
        match toys {
            Some(toys) => decode_toys(toys),
            None => {
                log::warn!(target: "lovense::response", "Reply carries no toys");
                Err(self.error().into())
            }
        }
    }
}

/// Check a decoded reply body against the envelope rules
pub(crate) fn process(body: Value) -> Result<Response> {
    let mut response: Response = match body {
        Value::Object(_) => match serde_json::from_value(body.clone()) {
            Ok(response) => response,
            Err(e) => {
                log::warn!(target: "lovense::response", "Malformed reply: {}", e);
                return Err(Error::Reply(body));
            }
        },
        _ => {
            log::warn!(target: "lovense::response", "Reply is not an object: {}", body);
            return Err(Error::Reply(body));
        }
    };
    response.raw = body;

    if !response.is_success() {
        log::warn!(
            target: "lovense::response",
            "Command failed with code {:?}: {:?}",
            response.code,
            response.message
        );
        return Err(response.error().into());
    }

    Ok(response)
}
