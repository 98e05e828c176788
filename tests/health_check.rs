mod common;

#[tokio::test]
async fn health_check_works() {
    let (app, _store) = common::spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .get(&format!("{}/health_check", &app.address))
        .send()
        .await
        .expect("Failed to execute request.");

    assert!(response.status().is_success());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!("healthy", body["status"]);
    assert_eq!("healthy", body["components"]["document_store"]["status"]);
}

#[tokio::test]
async fn health_check_reports_lost_store() {
    let (app, store) = common::spawn_app().await;
    store.set_reachable(false);

    let response = reqwest::Client::new()
        .get(&format!("{}/health_check", &app.address))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(503, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!("unhealthy", body["status"]);
}

#[tokio::test]
async fn store_failure_is_reported_as_internal() {
    let (app, store) = common::spawn_app().await;
    store.set_reachable(false);

    let response = app.graphql("{ products { _id } }", serde_json::json!({})).await;

    assert_eq!(Some("INTERNAL"), common::error_code(&response));
    assert_eq!("Internal error", response["errors"][0]["message"]);
}
