use askama::Template;
use axum::{extract::State, http::StatusCode, response::Html};
use axum_extra::extract::Form;
use serde::Deserialize;

use super::{
    forms::is_checked,
    views::{render, Feedback, NoticeView, RedirectView},
};
use crate::{
    domain::{
        Accepted, Checkout, FormError, PaymentAction, PaymentDetails,
        PaymentMethod, SiteError,
    },
    AppState,
};

pub struct MethodView {
    pub action: String,
    pub label: &'static str,
    pub selected: bool,
}

/// Payment form state shared by both payment pages.
pub struct PaymentView {
    pub action_path: &'static str,
    pub method: &'static str,
    pub methods: Vec<MethodView>,
    pub credit_card: bool,
    pub pix: bool,
    pub card_number: String,
    pub card_name: String,
    pub expiry_date: String,
    pub cvv: String,
    pub pix_key: String,
    pub agree_terms: bool,
}

impl PaymentView {
    fn new(checkout: Checkout, details: &PaymentDetails) -> Self {
        Self {
            action_path: checkout.route().path(),
            method: details.method.map(|m| m.as_str()).unwrap_or_default(),
            methods: PaymentMethod::ALL
                .into_iter()
                .map(|method| MethodView {
                    action: format!("method-{}", method.as_str()),
                    label: method.label(),
                    selected: details.method == Some(method),
                })
                .collect(),
            credit_card: details.method == Some(PaymentMethod::CreditCard),
            pix: details.method == Some(PaymentMethod::Pix),
            card_number: details.card_number.clone(),
            card_name: details.card_name.clone(),
            expiry_date: details.expiry_date.clone(),
            cvv: details.cvv.clone(),
            pix_key: details.pix_key.clone(),
            agree_terms: details.agree_terms,
        }
    }
}

pub struct PlanView {
    pub name: String,
    pub price: String,
    pub description: String,
    pub features: Vec<String>,
}

#[derive(Template)]
#[template(path = "payment_gym.html")]
pub struct PaymentGymTemplate {
    pub notice: Option<NoticeView>,
    pub redirect: Option<RedirectView>,
    pub plans: Vec<PlanView>,
    pub payment: PaymentView,
}

#[derive(Template)]
#[template(path = "payment_tournament.html")]
pub struct PaymentTournamentTemplate {
    pub notice: Option<NoticeView>,
    pub redirect: Option<RedirectView>,
    pub tournament_name: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub team_name: String,
    pub team_size: u64,
    pub price_per_person: String,
    pub total_price: String,
    pub payment: PaymentView,
}

#[derive(Debug, Deserialize)]
pub struct PaymentForm {
    pub action: String,
    #[serde(default)]
    pub method: String,
    #[serde(default)]
    pub card_number: String,
    #[serde(default)]
    pub card_name: String,
    #[serde(default)]
    pub expiry_date: String,
    #[serde(default)]
    pub cvv: String,
    #[serde(default)]
    pub pix_key: String,
    pub agree_terms: Option<String>,
}

impl PaymentForm {
    fn details(&self) -> Result<PaymentDetails, FormError> {
        Ok(PaymentDetails {
            method: PaymentMethod::parse_optional(&self.method)?,
            card_number: self.card_number.clone(),
            card_name: self.card_name.clone(),
            expiry_date: self.expiry_date.clone(),
            cvv: self.cvv.clone(),
            pix_key: self.pix_key.clone(),
            agree_terms: is_checked(&self.agree_terms),
        })
    }
}

fn gym_template(
    state: &AppState,
    details: &PaymentDetails,
    feedback: Feedback,
) -> PaymentGymTemplate {
    PaymentGymTemplate {
        notice: feedback.notice,
        redirect: feedback.redirect,
        plans: state
            .content_store
            .membership_plans()
            .iter()
            .map(|plan| PlanView {
                name: plan.name.clone(),
                price: plan.price.to_string(),
                description: plan.description.clone(),
                features: plan.features.clone(),
            })
            .collect(),
        payment: PaymentView::new(Checkout::GymMembership, details),
    }
}

fn tournament_template(
    state: &AppState,
    details: &PaymentDetails,
    feedback: Feedback,
) -> PaymentTournamentTemplate {
    let tournament = state.content_store.featured_tournament();
    let team = state.content_store.registered_team();
    PaymentTournamentTemplate {
        notice: feedback.notice,
        redirect: feedback.redirect,
        tournament_name: tournament.name.clone(),
        date: crate::domain::short_date(&tournament.date),
        time: tournament.time_label(),
        location: tournament.location.clone(),
        team_name: team.roster.team_name().to_owned(),
        team_size: tournament.team_size,
        price_per_person: tournament.price_per_person.to_string(),
        total_price: tournament.total_price().to_string(),
        payment: PaymentView::new(Checkout::TournamentEntry, details),
    }
}

/// Applies a payment form action. Only `submit` reaches the gateway.
#[tracing::instrument(name = "Processing payment form", skip_all)]
async fn process(
    state: &AppState,
    checkout: Checkout,
    form: &PaymentForm,
) -> Result<(PaymentDetails, Feedback), SiteError> {
    let parsed = form
        .action
        .parse::<PaymentAction>()
        .map_err(FormError::from)
        .and_then(|action| Ok((action, form.details()?)));

    let (details, outcome) = match parsed {
        Ok((PaymentAction::SelectMethod(method), mut details)) => {
            details.method = Some(method);
            (details, None)
        }
        Ok((PaymentAction::Submit, details)) => {
            let outcome = submit(state, checkout, &details).await?;
            (details, Some(outcome))
        }
        Err(error) => (PaymentDetails::default(), Some(Err(error))),
    };

    let feedback = match outcome {
        Some(outcome) => Feedback::from_outcome(&outcome),
        None => Feedback::none(),
    };
    Ok((details, feedback))
}

async fn submit(
    state: &AppState,
    checkout: Checkout,
    details: &PaymentDetails,
) -> Result<Result<Accepted, FormError>, SiteError> {
    let method = match details.validate() {
        Ok(method) => method,
        Err(error) => return Ok(Err(error)),
    };

    state
        .payment_gateway
        .approve(checkout, method)
        .await
        .map_err(SiteError::UnexpectedError)?;

    Ok(Ok(checkout.approved()))
}

#[tracing::instrument(name = "Gym payment page", skip_all)]
pub async fn payment_gym_page(
    State(state): State<AppState>,
) -> Result<Html<String>, SiteError> {
    render(&gym_template(
        &state,
        &PaymentDetails::default(),
        Feedback::none(),
    ))
}

#[tracing::instrument(name = "Gym payment route handler", skip_all)]
pub async fn payment_gym(
    State(state): State<AppState>,
    Form(form): Form<PaymentForm>,
) -> Result<(StatusCode, Html<String>), SiteError> {
    let (details, feedback) =
        process(&state, Checkout::GymMembership, &form).await?;
    let status = feedback.status;
    Ok((status, render(&gym_template(&state, &details, feedback))?))
}

#[tracing::instrument(name = "Tournament payment page", skip_all)]
pub async fn payment_tournament_page(
    State(state): State<AppState>,
) -> Result<Html<String>, SiteError> {
    render(&tournament_template(
        &state,
        &PaymentDetails::default(),
        Feedback::none(),
    ))
}

#[tracing::instrument(name = "Tournament payment route handler", skip_all)]
pub async fn payment_tournament(
    State(state): State<AppState>,
    Form(form): Form<PaymentForm>,
) -> Result<(StatusCode, Html<String>), SiteError> {
    let (details, feedback) =
        process(&state, Checkout::TournamentEntry, &form).await?;
    let status = feedback.status;
    Ok((status, render(&tournament_template(&state, &details, feedback))?))
}
