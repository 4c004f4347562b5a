use super::{init_logger, Requests};

use serde_json::{json, Value};
use warp::{http::StatusCode, Filter};

use std::net::SocketAddr;

pub const DEV_TOKEN: &str = "dev-token";
pub const USER_ID: &str = "user-1";

/// Stand-in for the Lovense server. Plain http, mounted under `/api/lan/`.
///
/// `/broken/` answers everything with html.
pub struct MockServer {
    addr: SocketAddr,
    requests: Requests,
}

impl MockServer {
    pub async fn serve() -> Self {
        init_logger();

        let requests = Requests::default();

        let command = warp::post()
            .and(warp::path!("api" / "lan" / "v2" / "command"))
            .and(warp::body::json())
            .map({
                let requests = requests.clone();
                move |body: Value| {
                    let reply = command_reply(&body);
                    requests.lock().unwrap().push(body);
                    warp::reply::json(&reply)
                }
            });

        let qr_code = warp::post()
            .and(warp::path!("api" / "lan" / "getQrCode"))
            .and(warp::body::json())
            .map({
                let requests = requests.clone();
                move |body: Value| {
                    let (reply, status) = qr_reply(&body);
                    requests.lock().unwrap().push(body);
                    warp::reply::with_status(warp::reply::json(&reply), status)
                }
            });

        let broken = warp::path("broken").map(|| "<html>Bad Gateway</html>");

        let (addr, server) = warp::serve(
            command
                .or(qr_code)
                .or(broken)
                .with(warp::log("test::mock_server")),
        )
        .bind_ephemeral(([127, 0, 0, 1], 0));
        tokio::spawn(server);
        log::info!(target: "test::mock_server", "Serving on {}", addr);

        Self { addr, requests }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}/api/lan/", self.addr)
    }

    pub fn broken_url(&self) -> String {
        format!("http://{}/broken/", self.addr)
    }

    pub fn requests(&self) -> Vec<Value> {
        self.requests.lock().unwrap().clone()
    }
}

fn authorized(body: &Value) -> bool {
    body["token"] == DEV_TOKEN && body["uid"] == USER_ID
}

fn command_reply(body: &Value) -> Value {
    if !authorized(body) {
        return json!({"result": false, "code": 501, "message": "Invalid token"});
    }
    match body["command"].as_str() {
        Some("Function") | Some("Pattern") | Some("Preset") => {
            json!({"result": true, "code": 200, "message": "Success"})
        }
        _ => json!({"result": false, "code": 400, "message": "Invalid command"}),
    }
}

fn qr_reply(body: &Value) -> (Value, StatusCode) {
    if !authorized(body) || body["v"] != 2 {
        return (
            json!({"code": 501, "message": "Invalid token", "result": false}),
            StatusCode::BAD_REQUEST,
        );
    }
    (
        json!({
            "code": 0,
            "message": "Success",
            "result": true,
            "data": {
                "qr": "https://apps.lovense.com/UploadFiles/qr/20220106/xxx.jpg",
                "code": "8UPCP3"
            }
        }),
        StatusCode::OK,
    )
}
