use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

pub const PROFILES_TABLE: &str = "profiles";

/// Row of the `profiles` table, keyed by the auth user id.
///
/// Every optional column is serialized, so an upsert clears the columns the
/// owner emptied instead of leaving stale values behind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Profile {
    pub id: Uuid,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<String>,
    pub athlete_status: Option<String>,
    pub profile_identity: Option<String>,
}

impl Profile {
    /// Column list requested when reading a profile back.
    pub const COLUMNS: &'static str = "id,date_of_birth,gender,athlete_status,profile_identity";
}
