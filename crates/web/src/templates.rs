use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use storage::models::Registrant;

use crate::features::registration::sports::SportCategory;

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub categories: &'static [SportCategory],
}

#[derive(Template)]
#[template(path = "registrants.html")]
pub struct RegistrantsTemplate {
    pub registrants: Vec<Registrant>,
}

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub message: String,
}

/// Renders an Askama template as an HTML response.
pub struct HtmlTemplate<T>(pub T);

impl<T> IntoResponse for HtmlTemplate<T>
where
    T: Template,
{
    fn into_response(self) -> Response {
        match self.0.render() {
            Ok(rendered) => Html(rendered).into_response(),
            Err(err) => {
                tracing::error!(error = %err, "Template render failed");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}
