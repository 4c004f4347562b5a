mod support;
use support::{server_client, server_client_at, MockServer, DEV_TOKEN, USER_ID};

use lovense::{Action, ActionKind, Connection, ExecuteOptions, Lovense, Status, Toy};

#[tokio::test]
async fn fetch_toys_uses_cache() {
    let server = MockServer::serve().await;
    let lovense = server_client(&server, DEV_TOKEN);

    assert!(lovense.fetch_toys().await.unwrap().is_empty());

    let toys = vec![Toy::new("a1", "lush", "", true), Toy::new("b2", "max", "", false)];
    lovense.set_toys(toys.clone());
    assert_eq!(lovense.fetch_toys().await.unwrap(), toys);

    assert!(server.requests().is_empty());
}

#[tokio::test]
async fn execute_actions() {
    let server = MockServer::serve().await;
    let lovense = server_client(&server, DEV_TOKEN);

    let res = lovense
        .execute_actions(
            ExecuteOptions::all().duration(30.0).stop_previous(true),
            Action::new(ActionKind::Suction, 12),
        )
        .await
        .unwrap();
    assert!(res.is_success());
    assert_eq!(res.message(), Some("Success"));

    let body = &server.requests()[0];
    assert_eq!(body["command"], "Function");
    assert_eq!(body["action"], "Suction:12");
    assert_eq!(body["timeSec"], 30);
    assert_eq!(body["stopPrevious"], 1);
    assert_eq!(body["token"], DEV_TOKEN);
    assert_eq!(body["uid"], USER_ID);
    assert_eq!(body["apiVer"], 1);
}

#[tokio::test]
async fn invalid_token() {
    let server = MockServer::serve().await;
    let lovense = server_client(&server, "wrong-token");

    let err = lovense.stop_actions(Some("a1")).await.unwrap_err();
    assert!(err.is_api());
    assert_eq!(err.status(), Status::InvalidToken);
    assert_eq!(err.message(), "Invalid Token");
    assert_eq!(err.content()["message"], "Invalid token");
}

#[tokio::test]
async fn qr_code() {
    let server = MockServer::serve().await;
    let lovense = server_client(&server, DEV_TOKEN);

    let qr = lovense.get_qr_code().await.unwrap();
    assert!(qr.result);
    assert_eq!(qr.code, 0);
    assert_eq!(qr.data.code, "8UPCP3");
    assert!(qr.data.qr.starts_with("https://"));

    let body = &server.requests()[0];
    assert_eq!(
        *body,
        serde_json::json!({"token": DEV_TOKEN, "uid": USER_ID, "uname": "tester", "v": 2})
    );
}

#[tokio::test]
async fn qr_code_rejected() {
    let server = MockServer::serve().await;
    let lovense = server_client(&server, "wrong-token");

    let err = lovense.get_qr_code().await.unwrap_err();
    assert!(err.is_api());
    assert_eq!(err.status().code(), 501);
    assert_eq!(err.content()["result"], false);
}

#[tokio::test]
async fn qr_code_needs_server() {
    let lovense = Lovense::new(Connection::Local).unwrap();

    let err = lovense.get_qr_code().await.unwrap_err();
    assert!(err.is_client());
    assert_eq!(err.status(), Status::Custom);
}

#[tokio::test]
async fn html_reply() {
    let server = MockServer::serve().await;
    let lovense = server_client_at(server.broken_url(), DEV_TOKEN);

    let err = lovense.stop_actions(None).await.unwrap_err();
    assert!(err.is_connection());
    assert_eq!(err.status().code(), 0);
    assert_eq!(err.message(), "Error while connecting to Lovense Server");

    let err = lovense.get_qr_code().await.unwrap_err();
    assert!(err.is_connection());
}
