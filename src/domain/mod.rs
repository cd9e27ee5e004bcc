mod carousel;
mod content;
mod credentials;
mod data_stores;
mod error;
mod experience;
mod member;
mod member_id;
mod money;
mod notice;
mod payment;
mod roster;
mod route;
mod sign_up;
mod tournament_entry;

pub use carousel::*;
pub use content::*;
pub use credentials::*;
pub use data_stores::*;
pub use error::*;
pub use experience::*;
pub use member::*;
pub use member_id::*;
pub use money::*;
pub use notice::*;
pub use payment::*;
pub use roster::*;
pub use route::*;
pub use sign_up::*;
pub use tournament_entry::*;
