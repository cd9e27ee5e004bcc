use askama::Template;
use axum::{http::StatusCode, response::Html};
use tracing::Level;

use crate::{
    domain::{
        Accepted, Experience, FormError, Notice, Roster, SiteError,
        TournamentCategory, MAX_TEAM_MEMBERS,
    },
    log_error_chain,
};

pub fn render<T: Template>(template: &T) -> Result<Html<String>, SiteError> {
    Ok(Html(template.render()?))
}

pub struct NoticeView {
    pub title: String,
    pub description: String,
    pub destructive: bool,
}

impl From<&Notice> for NoticeView {
    fn from(notice: &Notice) -> Self {
        Self {
            title: notice.title.clone(),
            description: notice.description.clone(),
            destructive: notice.is_destructive(),
        }
    }
}

pub struct RedirectView {
    pub url: &'static str,
    pub seconds: String,
}

/// Notice, pending redirect and status code for a rendered form page.
pub struct Feedback {
    pub notice: Option<NoticeView>,
    pub redirect: Option<RedirectView>,
    pub status: StatusCode,
}

impl Feedback {
    pub fn none() -> Self {
        Self {
            notice: None,
            redirect: None,
            status: StatusCode::OK,
        }
    }

    pub fn notice(notice: &Notice) -> Self {
        Self {
            notice: Some(NoticeView::from(notice)),
            redirect: None,
            status: StatusCode::OK,
        }
    }

    pub fn accepted(accepted: &Accepted) -> Self {
        Self {
            notice: Some(NoticeView::from(&accepted.notice)),
            redirect: Some(RedirectView {
                url: accepted.redirect.to.path(),
                seconds: accepted.redirect.delay_seconds(),
            }),
            status: StatusCode::OK,
        }
    }

    pub fn rejected(error: &FormError) -> Self {
        log_error_chain(error, Level::DEBUG);
        Self {
            notice: Some(NoticeView::from(&error.notice())),
            redirect: None,
            status: rejection_status(error),
        }
    }

    pub fn from_outcome(outcome: &Result<Accepted, FormError>) -> Self {
        match outcome {
            Ok(accepted) => Self::accepted(accepted),
            Err(error) => Self::rejected(error),
        }
    }
}

pub fn rejection_status(error: &FormError) -> StatusCode {
    match error {
        FormError::IncorrectCredentials => StatusCode::UNAUTHORIZED,
        _ => StatusCode::BAD_REQUEST,
    }
}

pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

pub fn experience_options(selected: Option<Experience>) -> Vec<SelectOption> {
    Experience::ALL
        .into_iter()
        .map(|experience| SelectOption {
            value: experience.as_str(),
            label: experience.label(),
            selected: selected == Some(experience),
        })
        .collect()
}

pub fn category_options(
    selected: Option<TournamentCategory>,
) -> Vec<SelectOption> {
    TournamentCategory::ALL
        .into_iter()
        .map(|category| SelectOption {
            value: category.as_str(),
            label: category.label(),
            selected: selected == Some(category),
        })
        .collect()
}

pub struct MemberView {
    pub position: usize,
    pub remove_action: String,
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub experience_options: Vec<SelectOption>,
}

pub struct RosterView {
    pub team_name: String,
    pub members: Vec<MemberView>,
    pub count: usize,
    pub max: usize,
    pub can_add: bool,
    pub can_remove: bool,
}

impl From<&Roster> for RosterView {
    fn from(roster: &Roster) -> Self {
        Self {
            team_name: roster.team_name().to_owned(),
            members: roster
                .members()
                .iter()
                .enumerate()
                .map(|(index, member)| MemberView {
                    position: index + 1,
                    remove_action: format!("remove-{index}"),
                    id: member.id.as_ref().to_string(),
                    name: member.name.clone(),
                    email: member.email.clone(),
                    phone: member.phone.clone(),
                    experience_options: experience_options(member.experience),
                })
                .collect(),
            count: roster.len(),
            max: MAX_TEAM_MEMBERS,
            can_add: roster.can_add(),
            can_remove: roster.can_remove(),
        }
    }
}
