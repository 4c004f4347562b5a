use super::endpoint::qr_code_url;
use super::toy::decode_toys;
use super::{Lovense, Platform};
use crate::constant::QR_API_VERSION;
use crate::error::{ApiError, Error, Result, Status};

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// QR code a user scans with the Lovense app to pair with your application
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct QrCode {
    pub code: i64,
    #[serde(default)]
    pub message: Option<String>,
    pub result: bool,
    pub data: QrData,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct QrData {
    /// Url of the QR code image
    pub qr: String,
    /// Pairing code, an alternative to scanning the image
    pub code: String,
}

/// Payload Lovense posts to your callback url once a user has scanned the QR code
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CallbackData {
    #[serde(default)]
    pub uid: String,
    #[serde(default)]
    pub utoken: String,
    /// Domain of the Lovense app on the user's network
    pub domain: String,
    #[serde(default)]
    pub http_port: Option<u16>,
    #[serde(default)]
    pub ws_port: Option<u16>,
    pub https_port: u16,
    #[serde(default)]
    pub wss_port: Option<u16>,
    #[serde(default)]
    pub platform: Platform,
    #[serde(default)]
    pub app_version: Option<String>,
    #[serde(default)]
    pub version: Option<Value>,
    /// Toys keyed by toy id
    #[serde(default)]
    pub toys: Option<Value>,
}

#[derive(Serialize)]
struct QrRequest<'a> {
    token: &'a str,
    uid: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    uname: Option<&'a str>,
    v: u8,
}

impl Lovense {
    /// Request a pairing QR code from the Lovense server.
    ///
    /// A callback url must be set on the developer dashboard. Once the user scans
    /// the code, pass the callback payload to
    /// [`set_connect_callback_data()`](Self::set_connect_callback_data).
    pub async fn get_qr_code(&self) -> Result<QrCode> {
        let credentials = self
            .inner
            .connection
            .credentials()
            .ok_or_else(|| Error::server_only("get_qr_code"))?;

        let url = qr_code_url(&self.inner.config.server_base_url);
        log::debug!(target: "lovense::pair", "Requesting QR code from {}", url);

        let res = self
            .inner
            .client
            .post(&url)
            .json(&QrRequest {
                token: &credentials.token,
                uid: &credentials.uid,
                uname: credentials.uname.as_deref(),
                v: QR_API_VERSION,
            })
            .send()
            .await?;
        let http_status = res.status();
        let body: Value = res.json().await?;

        if !http_status.is_success() || body.get("result") == Some(&Value::Bool(false)) {
            log::warn!(
                target: "lovense::pair",
                "QR code request failed with http status {}",
                http_status
            );
            return Err(ApiError::new(
                Status::from(body["code"].as_i64().unwrap_or(0)),
                body["message"].as_str().map(str::to_string),
                body,
            )
            .into());
        }

        Ok(serde_json::from_value(body)?)
    }

    /// Use the payload of a pairing callback.
    ///
    /// Points the local address at the user's app and, if the payload lists
    /// toys, replaces the cached toys. Nothing changes when the toys can't be
    /// decoded.
    pub fn set_connect_callback_data(&self, data: CallbackData) -> Result<()> {
        let toys = data.toys.map(decode_toys).transpose()?;

        self.set_local_domain(data.domain);
        self.set_local_connect_port(data.https_port);
        if let Some(toys) = toys {
            self.inner.toys.replace(toys);
        }
        log::debug!(
            target: "lovense::pair",
            "Callback data applied, commands go to {}",
            self.command_url()
        );
        Ok(())
    }
}
