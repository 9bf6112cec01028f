use crate::helper::spawn_app;

#[tokio::test]
async fn health_check_ok() {
    let app = spawn_app().await;

    let resp = app
        .api_client
        .get(&format!("{}/health_check", &app.address))
        .send()
        .await
        .expect("fail to execute request");

    assert!(resp.status().is_success());
    assert_eq!(Some(0), resp.content_length());
}
