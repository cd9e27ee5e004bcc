use std::str::FromStr;

use super::{
    Accepted, DelayedRedirect, FormError, Member, MemberField, Notice, Route,
    ValidationError,
};
use crate::utils::constants::delays;

pub const MIN_TEAM_MEMBERS: usize = 1;
pub const MAX_TEAM_MEMBERS: usize = 4;

/// Team name plus the ordered members being edited on a page.
///
/// The member count always stays within `MIN_TEAM_MEMBERS..=MAX_TEAM_MEMBERS`;
/// field completeness is only checked by [`Roster::validate`].
#[derive(Debug, Clone, PartialEq)]
pub struct Roster {
    team_name: String,
    members: Vec<Member>,
}

impl Roster {
    pub fn new(
        team_name: &str,
        members: Vec<Member>,
    ) -> Result<Self, ValidationError> {
        match members.len() {
            x if x < MIN_TEAM_MEMBERS => Err(ValidationError::new(
                "A team needs at least 1 member".to_string(),
            )),
            x if x > MAX_TEAM_MEMBERS => Err(ValidationError::new(format!(
                "A team has at most {MAX_TEAM_MEMBERS} members"
            ))),
            _ => {
                for (index, member) in members.iter().enumerate() {
                    if members[..index].iter().any(|m| m.id == member.id) {
                        return Err(ValidationError::new(format!(
                            "Duplicate member ID: {}",
                            member.id.as_ref()
                        )));
                    }
                }
                Ok(Self {
                    team_name: team_name.to_owned(),
                    members,
                })
            }
        }
    }

    /// Empty team name and a single blank member.
    pub fn blank() -> Self {
        Self {
            team_name: String::new(),
            members: vec![Member::blank()],
        }
    }

    pub fn team_name(&self) -> &str {
        &self.team_name
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn set_team_name(&mut self, team_name: &str) {
        self.team_name = team_name.to_owned();
    }

    pub fn can_add(&self) -> bool {
        self.members.len() < MAX_TEAM_MEMBERS
    }

    pub fn can_remove(&self) -> bool {
        self.members.len() > MIN_TEAM_MEMBERS
    }

    /// Appends a blank member. Returns false when the team is already full.
    pub fn add(&mut self) -> bool {
        if !self.can_add() {
            return false;
        }
        self.members.push(Member::blank());
        true
    }

    /// Drops the member at `index`. Returns false when the team would be
    /// left empty or there is no such member.
    pub fn remove(&mut self, index: usize) -> bool {
        if !self.can_remove() || index >= self.members.len() {
            return false;
        }
        self.members.remove(index);
        true
    }

    pub fn update(
        &mut self,
        index: usize,
        field: MemberField,
        value: &str,
    ) -> Result<(), ValidationError> {
        let member = self.members.get_mut(index).ok_or_else(|| {
            ValidationError::new(format!("No member at position {index}"))
        })?;
        member.set(field, value)
    }

    pub fn is_complete(&self) -> bool {
        !self.team_name.is_empty()
            && self.members.iter().all(Member::is_complete)
    }

    pub fn validate(&self) -> Result<(), FormError> {
        if self.is_complete() {
            Ok(())
        } else {
            Err(FormError::IncompleteTeam)
        }
    }

    /// Nothing is stored: a complete roster only earns the success notice
    /// and the trip back to the participant area.
    #[tracing::instrument(name = "Saving roster", skip_all)]
    pub fn save(&self) -> Result<Accepted, FormError> {
        self.validate()?;
        tracing::debug!(
            "roster '{}' saved with {} members",
            self.team_name,
            self.members.len()
        );

        Ok(Accepted {
            notice: Notice::success(
                "Equipe atualizada com sucesso! 🏆",
                "Os dados da sua equipe foram salvos com sucesso!",
            ),
            redirect: DelayedRedirect::new(
                Route::Participant,
                delays::EDIT_TEAM,
            ),
        })
    }
}

/// Buttons on the team editor form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorAction {
    AddMember,
    RemoveMember(usize),
    Save,
}

impl FromStr for EditorAction {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "add" => Ok(EditorAction::AddMember),
            "save" => Ok(EditorAction::Save),
            other => parse_remove(other)
                .map(EditorAction::RemoveMember)
                .ok_or_else(|| {
                    ValidationError::new(format!("Unknown action: {other}"))
                }),
        }
    }
}

/// Reads the index out of a `remove-<index>` button value.
pub fn parse_remove(action: &str) -> Option<usize> {
    action.strip_prefix("remove-")?.parse().ok()
}
