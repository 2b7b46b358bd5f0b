mod common;

#[tokio::test]
async fn health_check_works() {
    let app = common::spawn_app_without_database().await;
    let client = reqwest::Client::new();

    let response = client
        .get(&format!("{}/health_check", &app.address))
        .send()
        .await
        .expect("Failed to execute request.");

    assert!(response.status().is_success());
    assert_eq!(Some(0), response.content_length());
}

#[tokio::test]
async fn unknown_route_answers_with_json_error() {
    let app = common::spawn_app_without_database().await;
    let client = reqwest::Client::new();

    let response = client
        .get(&format!("{}/coffee-beans", &app.address))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(404, response.status().as_u16());
    let body: serde_json::Value = response.json().await.expect("Response should be valid JSON");
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], 404);
}
