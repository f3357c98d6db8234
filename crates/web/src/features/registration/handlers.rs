use axum::{
    Form,
    extract::{State, rejection::FormRejection},
    response::{IntoResponse, Redirect, Response},
};
use storage::Database;

use crate::error::{WebError, WebResult};
use crate::templates::{HtmlTemplate, IndexTemplate, RegistrantsTemplate};

use super::{form::RegisterForm, services, sports::SPORT_CATEGORIES};

/// Registration form
pub async fn index() -> impl IntoResponse {
    HtmlTemplate(IndexTemplate {
        categories: SPORT_CATEGORIES,
    })
}

/// Validate and store a submission, then redirect to the listing so a
/// refresh does not resubmit the form.
pub async fn register(
    State(db): State<Database>,
    form: Result<Form<Vec<(String, String)>>, FormRejection>,
) -> WebResult<Response> {
    let Form(fields) = form?;
    let form = RegisterForm::from_fields(fields);
    form.check().map_err(WebError::Validation)?;

    let id = services::create_registrant(db.pool(), &form.name, &form.sport).await?;
    tracing::info!(id, sport = %form.sport, "Registrant created");

    Ok(Redirect::to("/registrants").into_response())
}

/// Every stored registrant
pub async fn list_registrants(State(db): State<Database>) -> WebResult<Response> {
    let registrants = services::list_registrants(db.pool()).await?;

    Ok(HtmlTemplate(RegistrantsTemplate { registrants }).into_response())
}
