pub mod competition;
pub mod profile;
pub mod session;

pub use competition::{COMPETITIONS_TABLE, NewCompetition};
pub use profile::{PROFILES_TABLE, Profile};
pub use session::{AccessToken, AuthUser, Session};
