use chrono::NaiveDate;
use color_eyre::eyre::{Result, WrapErr};
use serde::Deserialize;

use crate::domain::{
    ContentStore, FeaturedTournament, GalleryItem, Member, MembershipPlan,
    RegisteredTeam, Roster, Tournament,
};

/// Site content bundled into the binary.
pub const BUNDLED_CONTENT: &str = include_str!("../../../content/site.json");

/// Content loaded once from JSON and served from memory.
#[derive(Debug)]
pub struct StaticContentStore {
    tournaments: Vec<Tournament>,
    gallery: Vec<GalleryItem>,
    membership_plans: Vec<MembershipPlan>,
    featured_tournament: FeaturedTournament,
    registered_team: RegisteredTeam,
}

#[derive(Deserialize)]
struct ContentFile {
    tournaments: Vec<Tournament>,
    gallery: Vec<GalleryItem>,
    membership_plans: Vec<MembershipPlan>,
    featured_tournament: FeaturedTournament,
    registered_team: RegisteredTeamRecord,
}

#[derive(Deserialize)]
struct RegisteredTeamRecord {
    team_name: String,
    category: String,
    registration_date: NaiveDate,
    status: String,
    payment_status: String,
    members: Vec<Member>,
}

impl StaticContentStore {
    pub fn from_json(json: &str) -> Result<Self> {
        let content: ContentFile = serde_json::from_str(json)
            .wrap_err("failed to parse site content")?;

        let team = content.registered_team;
        let roster = Roster::new(&team.team_name, team.members)
            .wrap_err("invalid registered team")?;

        Ok(Self {
            tournaments: content.tournaments,
            gallery: content.gallery,
            membership_plans: content.membership_plans,
            featured_tournament: content.featured_tournament,
            registered_team: RegisteredTeam {
                roster,
                category: team.category,
                registration_date: team.registration_date,
                status: team.status,
                payment_status: team.payment_status,
            },
        })
    }

    pub fn bundled() -> Result<Self> {
        Self::from_json(BUNDLED_CONTENT)
    }
}

impl ContentStore for StaticContentStore {
    fn tournaments(&self) -> &[Tournament] {
        &self.tournaments
    }

    fn gallery(&self) -> &[GalleryItem] {
        &self.gallery
    }

    fn membership_plans(&self) -> &[MembershipPlan] {
        &self.membership_plans
    }

    fn featured_tournament(&self) -> &FeaturedTournament {
        &self.featured_tournament
    }

    fn registered_team(&self) -> &RegisteredTeam {
        &self.registered_team
    }
}
