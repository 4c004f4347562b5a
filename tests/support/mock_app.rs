use super::{init_logger, toy_map, Requests};

use serde_json::{json, Value};
use warp::Filter;

use std::net::SocketAddr;

/// Stand-in for the Lovense app on the local network. Serves `/command` over https.
pub struct MockApp {
    addr: SocketAddr,
    requests: Requests,
}

impl MockApp {
    pub async fn serve() -> Self {
        init_logger();

        let requests = Requests::default();
        let api = warp::post()
            .and(warp::path("command"))
            .and(warp::path::end())
            .and(warp::body::json())
            .map({
                let requests = requests.clone();
                move |body: Value| {
                    let reply = reply(&body);
                    requests.lock().unwrap().push(body);
                    warp::reply::json(&reply)
                }
            })
            .with(warp::log("test::mock_app"));

        let cert = rcgen::generate_simple_self_signed(vec![
            "127.0.0.1".to_string(),
            "localhost".to_string(),
        ])
        .unwrap();
        let pkey = cert.serialize_private_key_pem();
        let cert = cert.serialize_pem().unwrap();

        let (addr, server) = warp::serve(api)
            .tls()
            .key(pkey)
            .cert(cert)
            .bind_ephemeral(([127, 0, 0, 1], 0));
        tokio::spawn(server);
        log::info!(target: "test::mock_app", "Serving on {}", addr);

        Self { addr, requests }
    }

    pub fn port(&self) -> u16 {
        self.addr.port()
    }

    pub fn requests(&self) -> Vec<Value> {
        self.requests.lock().unwrap().clone()
    }
}

fn reply(body: &Value) -> Value {
    match body["command"].as_str() {
        Some("GetToys") => json!({
            "code": 200,
            "type": "OK",
            "data": {
                "toys": toy_map().to_string(),
                "platform": "android",
                "appType": "remote"
            }
        }),
        Some("Function") | Some("Pattern") | Some("Preset") => match body["toy"].as_str() {
            Some(id) if toy_map().get(id).is_none() => json!({"code": 401, "type": "error"}),
            _ => json!({"code": 200, "type": "OK"}),
        },
        _ => json!({"code": 400, "type": "error"}),
    }
}
