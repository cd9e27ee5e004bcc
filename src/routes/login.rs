use askama::Template;
use axum::{extract::State, http::StatusCode, response::Html};
use axum_extra::extract::Form;
use color_eyre::eyre::eyre;
use secrecy::Secret;
use serde::Deserialize;

use super::views::{render, Feedback, NoticeView, RedirectView};
use crate::{
    domain::{AuthenticatorError, Credentials, FormError, SiteError},
    utils::constants::{MOCK_LOGIN_EMAIL, MOCK_LOGIN_PASSWORD},
    AppState,
};

#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub notice: Option<NoticeView>,
    pub redirect: Option<RedirectView>,
    pub email: String,
    pub test_email: &'static str,
    pub test_password: &'static str,
}

impl LoginTemplate {
    fn new(email: String, feedback: Feedback) -> Self {
        Self {
            notice: feedback.notice,
            redirect: feedback.redirect,
            email,
            test_email: MOCK_LOGIN_EMAIL,
            test_password: MOCK_LOGIN_PASSWORD,
        }
    }
}

#[derive(Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    pub password: Secret<String>,
}

#[tracing::instrument(name = "Login page", skip_all)]
pub async fn login_page() -> Result<Html<String>, SiteError> {
    render(&LoginTemplate::new(String::new(), Feedback::none()))
}

#[tracing::instrument(name = "Login", skip_all)]
pub async fn login(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> Result<(StatusCode, Html<String>), SiteError> {
    let credentials = Credentials::new(&form.email, form.password);

    let outcome = match state.authenticator.authenticate(&credentials).await {
        Ok(()) => Ok(Credentials::accepted()),
        Err(AuthenticatorError::InvalidCredentials) => {
            Err(FormError::IncorrectCredentials)
        }
        Err(e) => return Err(SiteError::UnexpectedError(eyre!(e))),
    };

    // The password is never rendered back.
    let feedback = Feedback::from_outcome(&outcome);
    let status = feedback.status;
    Ok((status, render(&LoginTemplate::new(credentials.email, feedback))?))
}
