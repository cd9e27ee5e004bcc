mod edit_team;
mod forms;
mod index;
mod login;
mod not_found;
mod participant;
mod payment;
mod sign_up;
mod tournament_sign_up;
mod views;

pub use edit_team::*;
pub use index::*;
pub use login::*;
pub use not_found::*;
pub use participant::*;
pub use payment::*;
pub use sign_up::*;
pub use tournament_sign_up::*;
