pub mod competitions;
pub mod profile;
pub mod status;
