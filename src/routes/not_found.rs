use askama::Template;
use axum::{http::StatusCode, response::Html};

use super::views::{render, NoticeView, RedirectView};
use crate::domain::SiteError;

#[derive(Template)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub notice: Option<NoticeView>,
    pub redirect: Option<RedirectView>,
}

#[tracing::instrument(name = "Not found", skip_all)]
pub async fn not_found() -> Result<(StatusCode, Html<String>), SiteError> {
    let page = render(&NotFoundTemplate {
        notice: None,
        redirect: None,
    })?;
    Ok((StatusCode::NOT_FOUND, page))
}
