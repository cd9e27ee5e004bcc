use askama::Template;
use axum::{http::StatusCode, response::Html};
use axum_extra::extract::Form;
use serde::Deserialize;

use super::{
    forms::is_checked,
    views::{
        experience_options, render, Feedback, NoticeView, RedirectView,
        SelectOption,
    },
};
use crate::domain::{Experience, FormError, PersonalDetails, SiteError};

/// Personal data fields as rendered back into the sign-up forms.
pub struct PersonalDetailsView {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub birth_date: String,
    pub address: String,
    pub experience_options: Vec<SelectOption>,
    pub goals: String,
    pub medical_conditions: String,
    pub agree_terms: bool,
    pub agree_marketing: bool,
}

impl From<&PersonalDetails> for PersonalDetailsView {
    fn from(details: &PersonalDetails) -> Self {
        Self {
            name: details.name.clone(),
            email: details.email.clone(),
            phone: details.phone.clone(),
            birth_date: details.birth_date.clone(),
            address: details.address.clone(),
            experience_options: experience_options(details.experience),
            goals: details.goals.clone(),
            medical_conditions: details.medical_conditions.clone(),
            agree_terms: details.agree_terms,
            agree_marketing: details.agree_marketing,
        }
    }
}

#[derive(Template)]
#[template(path = "sign_up.html")]
pub struct SignUpTemplate {
    pub notice: Option<NoticeView>,
    pub redirect: Option<RedirectView>,
    pub details: PersonalDetailsView,
}

#[derive(Debug, Default, Deserialize)]
pub struct SignUpForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub birth_date: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub goals: String,
    #[serde(default)]
    pub medical_conditions: String,
    pub agree_terms: Option<String>,
    pub agree_marketing: Option<String>,
}

impl SignUpForm {
    pub fn details(&self) -> Result<PersonalDetails, FormError> {
        Ok(PersonalDetails {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            birth_date: self.birth_date.clone(),
            address: self.address.clone(),
            experience: Experience::parse_optional(&self.experience)?,
            goals: self.goals.clone(),
            medical_conditions: self.medical_conditions.clone(),
            agree_terms: is_checked(&self.agree_terms),
            agree_marketing: is_checked(&self.agree_marketing),
        })
    }
}

#[tracing::instrument(name = "Sign-up page", skip_all)]
pub async fn sign_up_page() -> Result<Html<String>, SiteError> {
    render(&SignUpTemplate {
        notice: None,
        redirect: None,
        details: PersonalDetailsView::from(&PersonalDetails::default()),
    })
}

#[tracing::instrument(name = "Sign-up route handler", skip_all)]
pub async fn sign_up(
    Form(form): Form<SignUpForm>,
) -> Result<(StatusCode, Html<String>), SiteError> {
    let (details, feedback) = match form.details() {
        Ok(details) => {
            let feedback = Feedback::from_outcome(&details.submit());
            (details, feedback)
        }
        Err(error) => (PersonalDetails::default(), Feedback::rejected(&error)),
    };

    let template = SignUpTemplate {
        notice: feedback.notice,
        redirect: feedback.redirect,
        details: PersonalDetailsView::from(&details),
    };
    Ok((feedback.status, render(&template)?))
}
