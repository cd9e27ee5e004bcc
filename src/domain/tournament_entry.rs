use std::str::FromStr;

use super::{
    parse_remove, Accepted, DelayedRedirect, Experience, FormError, Notice,
    Roster, Route, TournamentCategory, ValidationError,
};
use crate::utils::constants::delays;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EntryMode {
    #[default]
    Individual,
    Team,
}

impl EntryMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryMode::Individual => "individual",
            EntryMode::Team => "team",
        }
    }
}

impl FromStr for EntryMode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "individual" => Ok(EntryMode::Individual),
            "team" => Ok(EntryMode::Team),
            other => Err(ValidationError::new(format!(
                "Unknown entry mode: {other}"
            ))),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct IndividualEntry {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub category: Option<TournamentCategory>,
    pub experience: Option<Experience>,
}

impl IndividualEntry {
    /// Experience is optional for individual athletes.
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty()
            && !self.email.is_empty()
            && !self.phone.is_empty()
            && self.category.is_some()
    }
}

/// State of the tournament sign-up page. Both the individual fields and the
/// team roster are kept while the user toggles modes.
#[derive(Debug, Clone, PartialEq)]
pub struct TournamentEntry {
    pub mode: EntryMode,
    pub individual: IndividualEntry,
    pub roster: Roster,
    pub agree_terms: bool,
}

impl Default for TournamentEntry {
    fn default() -> Self {
        Self {
            mode: EntryMode::default(),
            individual: IndividualEntry::default(),
            roster: Roster::blank(),
            agree_terms: false,
        }
    }
}

impl TournamentEntry {
    pub fn submit(&self) -> Result<Accepted, FormError> {
        if !self.agree_terms {
            return Err(FormError::TermsNotAccepted);
        }

        match self.mode {
            EntryMode::Team => self.roster.validate()?,
            EntryMode::Individual if !self.individual.is_complete() => {
                return Err(FormError::IncompleteEntry)
            }
            EntryMode::Individual => (),
        }

        Ok(Accepted {
            notice: Notice::success(
                "Inscrição no torneio realizada! 🏆",
                "Prepare-se para o desafio da selva! Redirecionando para o pagamento...",
            ),
            redirect: DelayedRedirect::new(
                Route::PaymentTournament,
                delays::TOURNAMENT_SIGN_UP,
            ),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryAction {
    SelectMode(EntryMode),
    AddMember,
    RemoveMember(usize),
    Submit,
}

impl FromStr for EntryAction {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mode-individual" => Ok(EntryAction::SelectMode(EntryMode::Individual)),
            "mode-team" => Ok(EntryAction::SelectMode(EntryMode::Team)),
            "add" => Ok(EntryAction::AddMember),
            "submit" => Ok(EntryAction::Submit),
            other => parse_remove(other)
                .map(EntryAction::RemoveMember)
                .ok_or_else(|| {
                    ValidationError::new(format!("Unknown action: {other}"))
                }),
        }
    }
}
