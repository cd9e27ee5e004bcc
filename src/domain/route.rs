/// Pages of the site, in navigation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Login,
    SignUp,
    TournamentSignUp,
    PaymentGym,
    PaymentTournament,
    Participant,
    EditTeam,
}

impl Route {
    pub const ALL: [Route; 8] = [
        Route::Home,
        Route::Login,
        Route::SignUp,
        Route::TournamentSignUp,
        Route::PaymentGym,
        Route::PaymentTournament,
        Route::Participant,
        Route::EditTeam,
    ];

    pub const fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Login => "/login",
            Route::SignUp => "/signup",
            Route::TournamentSignUp => "/tournament-signup",
            Route::PaymentGym => "/payment-gym",
            Route::PaymentTournament => "/payment-tournament",
            Route::Participant => "/participant",
            Route::EditTeam => "/edit-team",
        }
    }
}

#[test]
fn test_paths_are_unique() {
    let mut paths: Vec<&str> = Route::ALL.iter().map(Route::path).collect();
    paths.sort();
    paths.dedup();
    assert_eq!(paths.len(), Route::ALL.len());
}
