use crate::domain::{
    Member, MemberField, MemberId, Roster, ValidationError,
};

/// Member inputs as submitted: one entry per member in display order.
pub struct MemberColumns<'a> {
    pub ids: &'a [String],
    pub names: &'a [String],
    pub emails: &'a [String],
    pub phones: &'a [String],
    pub experiences: &'a [String],
}

/// Rebuilds the roster a page was showing from its submitted inputs.
pub fn parse_roster(
    team_name: &str,
    columns: MemberColumns<'_>,
) -> Result<Roster, ValidationError> {
    let count = columns.ids.len();
    let lengths = [
        columns.names.len(),
        columns.emails.len(),
        columns.phones.len(),
        columns.experiences.len(),
    ];
    if lengths.iter().any(|len| *len != count) {
        return Err(ValidationError::new(
            "Team member fields do not line up".to_string(),
        ));
    }

    let members = columns
        .ids
        .iter()
        .map(|id| MemberId::parse(id).map(|id| Member::blank().with_id(id)))
        .collect::<Result<Vec<_>, _>>()?;
    let mut roster = Roster::new(team_name, members)?;

    for index in 0..count {
        roster.update(index, MemberField::Name, &columns.names[index])?;
        roster.update(index, MemberField::Email, &columns.emails[index])?;
        roster.update(index, MemberField::Phone, &columns.phones[index])?;
        roster.update(
            index,
            MemberField::Experience,
            &columns.experiences[index],
        )?;
    }

    Ok(roster)
}

/// Unchecked checkboxes are left out of the form body.
pub fn is_checked(value: &Option<String>) -> bool {
    value.is_some()
}
