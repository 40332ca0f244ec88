pub mod advocates;
pub mod cities;
pub mod health;
pub mod health_concerns;
