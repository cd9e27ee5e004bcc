use super::{
    FeaturedTournament, GalleryItem, MembershipPlan, RegisteredTeam,
    Tournament,
};

/// Read-only source of the marketing content and mocked records.
pub trait ContentStore {
    fn tournaments(&self) -> &[Tournament];
    fn gallery(&self) -> &[GalleryItem];
    fn membership_plans(&self) -> &[MembershipPlan];
    fn featured_tournament(&self) -> &FeaturedTournament;
    fn registered_team(&self) -> &RegisteredTeam;
}
