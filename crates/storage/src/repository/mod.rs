pub mod competition;
pub mod profile;
pub mod session;
