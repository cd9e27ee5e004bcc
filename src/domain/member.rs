use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::{Experience, MemberId, ValidationError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub id: MemberId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub experience: Option<Experience>,
}

impl Member {
    pub fn new(
        name: &str,
        email: &str,
        phone: &str,
        experience: Option<Experience>,
    ) -> Self {
        Self {
            id: MemberId::default(),
            name: name.to_owned(),
            email: email.to_owned(),
            phone: phone.to_owned(),
            experience,
        }
    }

    pub fn blank() -> Self {
        Self::new("", "", "", None)
    }

    pub fn with_id(mut self, id: MemberId) -> Self {
        self.id = id;
        self
    }

    /// All four fields are required before a roster can be saved.
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty()
            && !self.email.is_empty()
            && !self.phone.is_empty()
            && self.experience.is_some()
    }

    pub fn set(
        &mut self,
        field: MemberField,
        value: &str,
    ) -> Result<(), ValidationError> {
        match field {
            MemberField::Name => self.name = value.to_owned(),
            MemberField::Email => self.email = value.to_owned(),
            MemberField::Phone => self.phone = value.to_owned(),
            MemberField::Experience => {
                self.experience = Experience::parse_optional(value)?
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberField {
    Name,
    Email,
    Phone,
    Experience,
}

impl FromStr for MemberField {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(MemberField::Name),
            "email" => Ok(MemberField::Email),
            "phone" => Ok(MemberField::Phone),
            "experience" => Ok(MemberField::Experience),
            other => Err(ValidationError::new(format!(
                "Unknown member field: {other}"
            ))),
        }
    }
}
