use actix_web::error::JsonPayloadError;
use actix_web::http::StatusCode;
use actix_web::{web, HttpMessage, HttpRequest, HttpResponse, ResponseError};
use tracing_actix_web::RootSpan;

use crate::domain::{Applicant, EligibilityPolicy};

#[tracing::instrument(
    name = "Evaluating loan eligibility",
    skip(applicant, policy, root_span),
    fields(
        applicant_age = %applicant.age,
        employment_status = %applicant.employment_status
    ),
)]
pub async fn loan_eligibility(
    applicant: web::Json<Applicant>,
    policy: web::Data<EligibilityPolicy>,
    root_span: RootSpan,
) -> HttpResponse {
    let decision = policy.evaluate(&applicant.into_inner());
    root_span.record("eligible", decision.eligible);
    tracing::info!(eligible = decision.eligible, "Eligibility decided");

    HttpResponse::Ok().json(decision)
}

/// A request body that never reached the eligibility rule.
#[derive(thiserror::Error, Debug)]
pub enum PayloadRejection {
    #[error("Request body must be sent as application/json")]
    UnsupportedMediaType,
    #[error("Invalid applicant: {0}")]
    InvalidApplicant(serde_json::Error),
    #[error("Unreadable request body: {0}")]
    Unreadable(JsonPayloadError),
}

impl From<JsonPayloadError> for PayloadRejection {
    fn from(e: JsonPayloadError) -> Self {
        match e {
            JsonPayloadError::ContentType => PayloadRejection::UnsupportedMediaType,
            JsonPayloadError::Deserialize(e) => PayloadRejection::InvalidApplicant(e),
            other => PayloadRejection::Unreadable(other),
        }
    }
}

impl ResponseError for PayloadRejection {
    fn status_code(&self) -> StatusCode {
        match self {
            PayloadRejection::UnsupportedMediaType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            PayloadRejection::InvalidApplicant(_) => StatusCode::UNPROCESSABLE_ENTITY,
            PayloadRejection::Unreadable(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .json(serde_json::json!({ "detail": self.to_string() }))
    }
}

pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    let rejection = PayloadRejection::from(err);
    if let Some(root_span) = req.extensions().get::<RootSpan>() {
        root_span.record("rejection", tracing::field::display(&rejection));
    }
    tracing::warn!(path = %req.path(), error = %rejection, "Rejected request body");
    rejection.into()
}
