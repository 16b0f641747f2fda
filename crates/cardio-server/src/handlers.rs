//! Request handlers for the screening flow.
//!
//! Logging discipline: handlers record field names, counts, and outcomes,
//! never submitted values. The per-request id from [`RequestContext`] ties
//! the receipt, validation, encoding, and prediction records together.

use axum::extract::{Form, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use tracing::{debug, error, info, warn};

use cardio_encode::encode;
use cardio_model::RawRequest;
use cardio_validate::validate_request;

use crate::pages;
use crate::request::RequestContext;
use crate::state::AppState;

pub(crate) async fn homepage(State(state): State<AppState>) -> Html<String> {
    debug!("rendering screening form");
    Html(pages::form_page(state.schema()))
}

pub(crate) async fn predict(
    State(state): State<AppState>,
    Form(raw): Form<RawRequest>,
) -> Response {
    let ctx = RequestContext::new();
    info!(
        request_id = %ctx.id(),
        parameters = raw.len(),
        "screening submission received"
    );

    if let Err(rejection) = validate_request(state.schema(), &raw) {
        warn!(request_id = %ctx.id(), %rejection, "submission rejected");
        return (
            StatusCode::BAD_REQUEST,
            Html(pages::error_page(&rejection.to_string())),
        )
            .into_response();
    }
    debug!(request_id = %ctx.id(), "submission validated");

    let features = match encode(state.schema(), &raw) {
        Ok(features) => features,
        Err(error) => {
            error!(request_id = %ctx.id(), %error, "encoding failed after validation");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html(pages::failure_page()),
            )
                .into_response();
        }
    };
    debug!(request_id = %ctx.id(), columns = features.len(), "submission encoded");

    let prediction = state.classifier().predict(&features);
    info!(
        request_id = %ctx.id(),
        label = prediction.label(),
        "prediction complete"
    );

    (StatusCode::OK, Html(pages::result_page(prediction))).into_response()
}
