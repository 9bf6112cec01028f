use crate::helper::spawn_app;

#[tokio::test]
async fn index_greets_with_a_json_message() {
    let app = spawn_app().await;

    let resp = app
        .api_client
        .get(&format!("http://127.0.0.1:{}/", app.port))
        .send()
        .await
        .expect("fail to execute request");

    assert_eq!(resp.status().as_u16(), 200);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["message"], "Loan eligibility service");
}
