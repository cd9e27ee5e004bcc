use askama::Template;
use axum::{extract::State, http::StatusCode, response::Html};
use axum_extra::extract::Form;
use serde::Deserialize;

use super::{
    forms::{is_checked, parse_roster, MemberColumns},
    views::{
        category_options, experience_options, render, Feedback, NoticeView,
        RedirectView, RosterView, SelectOption,
    },
};
use crate::{
    domain::{
        EntryAction, EntryMode, Experience, FormError, IndividualEntry,
        SiteError, TournamentCategory, TournamentEntry,
    },
    AppState,
};

#[derive(Template)]
#[template(path = "tournament_sign_up.html")]
pub struct TournamentSignUpTemplate {
    pub notice: Option<NoticeView>,
    pub redirect: Option<RedirectView>,
    pub tournament_name: String,
    pub team_mode: bool,
    pub mode: &'static str,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub category_options: Vec<SelectOption>,
    pub experience_options: Vec<SelectOption>,
    pub roster: RosterView,
    pub agree_terms: bool,
}

impl TournamentSignUpTemplate {
    fn new(tournament_name: &str, entry: &TournamentEntry, feedback: Feedback) -> Self {
        Self {
            notice: feedback.notice,
            redirect: feedback.redirect,
            tournament_name: tournament_name.to_owned(),
            team_mode: entry.mode == EntryMode::Team,
            mode: entry.mode.as_str(),
            name: entry.individual.name.clone(),
            email: entry.individual.email.clone(),
            phone: entry.individual.phone.clone(),
            category_options: category_options(entry.individual.category),
            experience_options: experience_options(
                entry.individual.experience,
            ),
            roster: RosterView::from(&entry.roster),
            agree_terms: entry.agree_terms,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct TournamentSignUpForm {
    pub action: String,
    #[serde(default)]
    pub mode: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub experience: String,
    pub agree_terms: Option<String>,
    #[serde(default)]
    pub team_name: String,
    #[serde(default)]
    pub member_id: Vec<String>,
    #[serde(default)]
    pub member_name: Vec<String>,
    #[serde(default)]
    pub member_email: Vec<String>,
    #[serde(default)]
    pub member_phone: Vec<String>,
    #[serde(default)]
    pub member_experience: Vec<String>,
}

impl TournamentSignUpForm {
    fn entry(&self) -> Result<TournamentEntry, FormError> {
        let roster = parse_roster(
            &self.team_name,
            MemberColumns {
                ids: &self.member_id,
                names: &self.member_name,
                emails: &self.member_email,
                phones: &self.member_phone,
                experiences: &self.member_experience,
            },
        )?;

        Ok(TournamentEntry {
            mode: self.mode.parse()?,
            individual: IndividualEntry {
                name: self.name.clone(),
                email: self.email.clone(),
                phone: self.phone.clone(),
                category: TournamentCategory::parse_optional(&self.category)?,
                experience: Experience::parse_optional(&self.experience)?,
            },
            roster,
            agree_terms: is_checked(&self.agree_terms),
        })
    }
}

#[tracing::instrument(name = "Tournament sign-up page", skip_all)]
pub async fn tournament_sign_up_page(
    State(state): State<AppState>,
) -> Result<Html<String>, SiteError> {
    let tournament = state.content_store.featured_tournament();
    render(&TournamentSignUpTemplate::new(
        &tournament.name,
        &TournamentEntry::default(),
        Feedback::none(),
    ))
}

#[tracing::instrument(name = "Tournament sign-up route handler", skip_all)]
pub async fn tournament_sign_up(
    State(state): State<AppState>,
    Form(form): Form<TournamentSignUpForm>,
) -> Result<(StatusCode, Html<String>), SiteError> {
    let parsed = form
        .action
        .parse::<EntryAction>()
        .map_err(FormError::from)
        .and_then(|action| Ok((action, form.entry()?)));

    let (entry, feedback) = match parsed {
        Ok((EntryAction::SelectMode(mode), mut entry)) => {
            entry.mode = mode;
            (entry, Feedback::none())
        }
        Ok((EntryAction::AddMember, mut entry)) => {
            entry.roster.add();
            (entry, Feedback::none())
        }
        Ok((EntryAction::RemoveMember(index), mut entry)) => {
            entry.roster.remove(index);
            (entry, Feedback::none())
        }
        Ok((EntryAction::Submit, entry)) => {
            let feedback = Feedback::from_outcome(&entry.submit());
            (entry, feedback)
        }
        Err(error) => (TournamentEntry::default(), Feedback::rejected(&error)),
    };

    let tournament = state.content_store.featured_tournament();
    let status = feedback.status;
    let template =
        TournamentSignUpTemplate::new(&tournament.name, &entry, feedback);
    Ok((status, render(&template)?))
}
