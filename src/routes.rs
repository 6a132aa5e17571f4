use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Form, Json,
};
use serde::Deserialize;

use crate::{error::AppError, query::ReviewQuery, state::AppState};

#[derive(Deserialize)]
pub struct ReviewParams {
    location: Option<String>,
    start_date: Option<String>,
    end_date: Option<String>,
}

pub async fn get_reviews(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ReviewParams>,
) -> Result<impl IntoResponse, AppError> {
    let results = state.engine.query(&ReviewQuery {
        location: params.location,
        start_date: params.start_date,
        end_date: params.end_date,
    })?;

    Ok(Json(results))
}

#[derive(Deserialize)]
pub struct SubmitForm {
    #[serde(rename = "Location")]
    location: Option<String>,

    #[serde(rename = "ReviewBody")]
    review_body: Option<String>,
}

pub async fn post_review(
    State(state): State<Arc<AppState>>,
    Form(form): Form<SubmitForm>,
) -> Result<impl IntoResponse, AppError> {
    let created = state
        .pipeline
        .submit(form.location.as_deref(), form.review_body.as_deref())?;

    Ok((StatusCode::CREATED, Json(created)))
}
