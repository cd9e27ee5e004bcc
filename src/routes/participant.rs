use askama::Template;
use axum::{
    extract::State,
    response::{Html, Redirect},
};

use super::views::{render, NoticeView, RedirectView};
use crate::{
    domain::{short_date, RegisteredTeam, Route, SiteError},
    utils::constants::LOGOUT_REDIRECT,
    AppState,
};

pub struct ParticipantMemberView {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: &'static str,
    pub experience: &'static str,
}

#[derive(Template)]
#[template(path = "participant.html")]
pub struct ParticipantTemplate {
    pub notice: Option<NoticeView>,
    pub redirect: Option<RedirectView>,
    pub team_name: String,
    pub category: String,
    pub registration_date: String,
    pub status: String,
    pub payment_status: String,
    pub members: Vec<ParticipantMemberView>,
    pub tournament_name: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub address: String,
    pub price_per_person: String,
    pub total_price: String,
    pub description: String,
    pub rules: Vec<String>,
    pub edit_team_path: &'static str,
    pub payment_path: &'static str,
}

#[tracing::instrument(name = "Participant page", skip_all)]
pub async fn participant_page(
    State(state): State<AppState>,
) -> Result<Html<String>, SiteError> {
    let team = state.content_store.registered_team();
    let tournament = state.content_store.featured_tournament();

    render(&ParticipantTemplate {
        notice: None,
        redirect: None,
        team_name: team.roster.team_name().to_owned(),
        category: team.category.clone(),
        registration_date: short_date(&team.registration_date),
        status: team.status.clone(),
        payment_status: team.payment_status.clone(),
        members: team
            .roster
            .members()
            .iter()
            .enumerate()
            .map(|(index, member)| ParticipantMemberView {
                name: member.name.clone(),
                email: member.email.clone(),
                phone: member.phone.clone(),
                role: RegisteredTeam::role_of(index),
                experience: member
                    .experience
                    .map(|experience| experience.label())
                    .unwrap_or_default(),
            })
            .collect(),
        tournament_name: tournament.name.clone(),
        date: short_date(&tournament.date),
        time: tournament.time_label(),
        location: tournament.location.clone(),
        address: tournament.address.clone(),
        price_per_person: tournament.price_per_person.to_string(),
        total_price: tournament.total_price().to_string(),
        description: tournament.description.clone(),
        rules: tournament.rules.clone(),
        edit_team_path: Route::EditTeam.path(),
        payment_path: Route::PaymentTournament.path(),
    })
}

/// There is no session to end; leaving the participant area goes home,
/// where the landing page confirms the logout.
#[tracing::instrument(name = "Logout", skip_all)]
pub async fn logout() -> Redirect {
    Redirect::to(LOGOUT_REDIRECT)
}
