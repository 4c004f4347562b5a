#![allow(dead_code)]

mod mock_app;
mod mock_server;

pub use mock_app::MockApp;
pub use mock_server::{MockServer, DEV_TOKEN, USER_ID};

use lovense::{Config, Connection, Credentials, Lovense, Platform};
use serde_json::{json, Value};

use std::sync::{Arc, Mutex};

/// Request bodies received by a mock, in order
pub type Requests = Arc<Mutex<Vec<Value>>>;

pub fn init_logger() {
    if let Err(e) = pretty_env_logger::try_init() {
        log::warn!(target: "test::support", "Logger init() returned '{}'", e);
    }
}

/// Toys known to the mock app, keyed by id the way Lovense sends them
pub fn toy_map() -> Value {
    json!({
        "ff922f7fd345": {"id": "ff922f7fd345", "name": "lush", "nickName": "", "status": "1"},
        "c31e6e4e3a07": {"id": "c31e6e4e3a07", "name": "edge", "nickName": "left", "status": "0"},
        "a0b1c2d3e4f5": {"id": "a0b1c2d3e4f5", "name": "nora", "nickName": "", "status": "1"}
    })
}

pub fn toy_ids() -> Vec<String> {
    vec![
        "ff922f7fd345".to_string(),
        "c31e6e4e3a07".to_string(),
        "a0b1c2d3e4f5".to_string(),
    ]
}

/// Local client pointed at a mock app
pub fn local_client(app: &MockApp) -> Lovense {
    let lovense = Lovense::with_config(
        Connection::Local,
        Config {
            danger_accept_invalid_certs: true,
            ..Config::default()
        },
    )
    .unwrap();
    lovense.set_platform(Platform::Android);
    lovense.set_local_domain("localhost");
    lovense.set_local_connect_port(app.port());
    lovense
}

/// Server client pointed at a mock server
pub fn server_client(server: &MockServer, token: &str) -> Lovense {
    server_client_at(server.base_url(), token)
}

pub fn server_client_at(base_url: String, token: &str) -> Lovense {
    Lovense::with_config(
        Connection::Server(Credentials::new(token, USER_ID).uname("tester")),
        Config {
            server_base_url: base_url,
            ..Config::default()
        },
    )
    .unwrap()
}

/// A local port nothing listens on
pub fn closed_port() -> u16 {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap().port()
}
