use serde::{Deserialize, Serialize};

/// A catalog entry: a labeled area of expertise an advocate may hold.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Specialty {
    pub id: i64,
    pub name: String,
}
