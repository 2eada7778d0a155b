use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use portfolio_shared::{
    ValidationError,
    contact::{ContactSubmission, SubmissionResult},
};

use crate::routes::AppState;

/// POST /api/contact
///
/// A body that does not decode into four strings is answered like a
/// submission with missing fields.
pub async fn action(
    State(app_state): State<AppState>,
    input: Result<Json<ContactSubmission>, JsonRejection>,
) -> impl IntoResponse {
    let result: SubmissionResult = match input {
        Ok(Json(input)) => app_state.contact_command.submit_contact(input).await.into(),
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Unreadable contact payload");
            SubmissionResult::from(ValidationError::MissingFields)
        }
    };

    let status = match &result {
        SubmissionResult::Success { .. } => StatusCode::OK,
        SubmissionResult::ValidationError { .. } => StatusCode::BAD_REQUEST,
        SubmissionResult::DispatchError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    };

    (status, Json(result.body()))
}
