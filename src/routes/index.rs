use actix_web::HttpResponse;

pub async fn index() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({ "message": "Loan eligibility service" }))
}
