use serde::{Deserialize, Serialize};

use super::enums::Degree;

/// One directory record: an advocate plus every specialty they hold.
///
/// Serialized in camelCase for the API; `specialties` is deduplicated
/// and carries no ordering guarantee.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Advocate {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub city: String,
    pub degree: Degree,
    pub years_of_experience: u32,
    pub phone_number: i64,
    pub email: String,
    pub background: String,
    pub specialties: Vec<String>,
}

impl Advocate {
    /// "First Last", used by the client-side name refinement.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Insert payload for seeding. The id is assigned by the store.
#[derive(Debug, Clone)]
pub struct NewAdvocate {
    pub first_name: String,
    pub last_name: String,
    pub city: String,
    pub degree: Degree,
    pub years_of_experience: u32,
    pub phone_number: i64,
    pub email: String,
    pub background: String,
}
