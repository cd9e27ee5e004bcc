use askama::Template;
use axum::{extract::State, http::StatusCode, response::Html};
use axum_extra::extract::Form;
use serde::Deserialize;

use super::{
    forms::{parse_roster, MemberColumns},
    views::{render, Feedback, NoticeView, RedirectView, RosterView},
};
use crate::{
    domain::{EditorAction, FormError, Roster, SiteError},
    AppState,
};

#[derive(Template)]
#[template(path = "edit_team.html")]
pub struct EditTeamTemplate {
    pub notice: Option<NoticeView>,
    pub redirect: Option<RedirectView>,
    pub roster: RosterView,
}

#[derive(Debug, Deserialize)]
pub struct EditTeamForm {
    pub action: String,
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

impl EditTeamForm {
    fn roster(&self) -> Result<Roster, FormError> {
        Ok(parse_roster(
            &self.team_name,
            MemberColumns {
                ids: &self.member_id,
                names: &self.member_name,
                emails: &self.member_email,
                phones: &self.member_phone,
                experiences: &self.member_experience,
            },
        )?)
    }
}

/// Opens the editor seeded with the registered team.
#[tracing::instrument(name = "Edit team page", skip_all)]
pub async fn edit_team_page(
    State(state): State<AppState>,
) -> Result<Html<String>, SiteError> {
    let roster = state.content_store.registered_team().roster.clone();
    render(&EditTeamTemplate {
        notice: None,
        redirect: None,
        roster: RosterView::from(&roster),
    })
}

#[tracing::instrument(name = "Edit team route handler", skip_all)]
pub async fn edit_team(
    State(state): State<AppState>,
    Form(form): Form<EditTeamForm>,
) -> Result<(StatusCode, Html<String>), SiteError> {
    let parsed = form
        .action
        .parse::<EditorAction>()
        .map_err(FormError::from)
        .and_then(|action| Ok((action, form.roster()?)));

    let (roster, feedback) = match parsed {
        Ok((EditorAction::AddMember, mut roster)) => {
            roster.add();
            (roster, Feedback::none())
        }
        Ok((EditorAction::RemoveMember(index), mut roster)) => {
            roster.remove(index);
            (roster, Feedback::none())
        }
        Ok((EditorAction::Save, roster)) => {
            let feedback = Feedback::from_outcome(&roster.save());
            (roster, feedback)
        }
        // A form we cannot read back starts over from the registered team.
        Err(error) => (
            state.content_store.registered_team().roster.clone(),
            Feedback::rejected(&error),
        ),
    };
    tracing::debug!("team editor holds {} members", roster.len());

    let template = EditTeamTemplate {
        notice: feedback.notice,
        redirect: feedback.redirect,
        roster: RosterView::from(&roster),
    };
    Ok((feedback.status, render(&template)?))
}
