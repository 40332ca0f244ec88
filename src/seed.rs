//! Synthetic directory data. Offline utility, not part of the serving
//! contract: `carepath-seed` populates the three tables, `--reset`
//! clears them.

use rand::seq::SliceRandom;
use rand::Rng;
use rusqlite::Connection;

use crate::db::repository::{find_or_create_specialty, insert_advocate, link_specialty};
use crate::db::DatabaseError;
use crate::models::{Degree, NewAdvocate};

pub const DEFAULT_ADVOCATE_COUNT: usize = 100;

/// The fixed specialty catalog.
pub const SPECIALTY_CATALOG: [&str; 26] = [
    "Bipolar",
    "LGBTQ",
    "Medication/Prescribing",
    "Suicide History/Attempts",
    "General Mental Health (anxiety, depression, stress, grief, life transitions)",
    "Men's issues",
    "Relationship Issues (family, friends, couple, etc)",
    "Trauma & PTSD",
    "Personality disorders",
    "Personal growth",
    "Substance use/abuse",
    "Pediatrics",
    "Women's issues (post-partum, infertility, family planning)",
    "Chronic pain",
    "Weight loss & nutrition",
    "Eating disorders",
    "Diabetic Diet and nutrition",
    "Coaching (leadership, career, academic and wellness)",
    "Life coaching",
    "Obsessive-compulsive disorders",
    "Neuropsychological evaluations & testing (ADHD testing)",
    "Attention and Hyperactivity (ADHD)",
    "Sleep issues",
    "Schizophrenia and psychotic disorders",
    "Learning disorders",
    "Domestic abuse",
];

const FIRST_NAMES: [&str; 20] = [
    "Sarah", "Michael", "Emma", "James", "Lisa", "David", "Maria", "Daniel", "Aisha", "Thomas",
    "Grace", "Kevin", "Nina", "Robert", "Priya", "Carlos", "Hannah", "Victor", "Yuki", "Omar",
];

const LAST_NAMES: [&str; 20] = [
    "Johnson", "Chen", "Rodriguez", "Williams", "Park", "Thompson", "Garcia", "Kim", "Patel",
    "Brown", "Nguyen", "Davis", "Martinez", "Okafor", "Silva", "Anderson", "Ivanova", "Haddad",
    "Tanaka", "Miller",
];

const CITIES: [&str; 20] = [
    "New York, NY",
    "San Francisco, CA",
    "Austin, TX",
    "Boston, MA",
    "Seattle, WA",
    "Denver, CO",
    "Chicago, IL",
    "Los Angeles, CA",
    "Miami, FL",
    "Atlanta, GA",
    "Portland, OR",
    "Minneapolis, MN",
    "Nashville, TN",
    "Phoenix, AZ",
    "Philadelphia, PA",
    "Washington, DC",
    "San Diego, CA",
    "Dallas, TX",
    "Houston, TX",
    "Charlotte, NC",
];

/// Insert the specialty catalog plus `count` synthetic advocates, each
/// holding 1..=4 distinct random specialties. Idempotent for the
/// catalog; advocates are appended on every run.
pub fn seed_directory(conn: &Connection, count: usize) -> Result<(), DatabaseError> {
    let mut rng = rand::thread_rng();

    let mut specialty_ids = Vec::with_capacity(SPECIALTY_CATALOG.len());
    for name in SPECIALTY_CATALOG {
        specialty_ids.push(find_or_create_specialty(conn, name)?.id);
    }
    tracing::info!(specialties = specialty_ids.len(), "Specialty catalog seeded");

    for i in 0..count {
        let advocate = synthesize_advocate(&mut rng, i);
        let id = insert_advocate(conn, &advocate)?;

        let mut pool = specialty_ids.clone();
        pool.shuffle(&mut rng);
        for specialty_id in pool.into_iter().take(rng.gen_range(1..=4)) {
            link_specialty(conn, id, specialty_id)?;
        }
    }
    tracing::info!(advocates = count, "Advocates seeded");

    Ok(())
}

fn synthesize_advocate(rng: &mut impl Rng, index: usize) -> NewAdvocate {
    let first = *FIRST_NAMES.choose(rng).unwrap();
    let last = *LAST_NAMES.choose(rng).unwrap();
    let degree = *Degree::ALL.choose(rng).unwrap();
    let years = rng.gen_range(1..=30);

    NewAdvocate {
        first_name: first.to_string(),
        last_name: last.to_string(),
        city: CITIES.choose(rng).unwrap().to_string(),
        degree,
        years_of_experience: years,
        phone_number: rng.gen_range(1_000_000_000..=9_999_999_999_i64),
        // Index suffix keeps emails unique across duplicate name draws.
        email: format!("{first}.{last}.{index}@advocates.example.com").to_lowercase(),
        background: format!(
            "{first} is a {} advocate with {years} years of experience helping \
             patients navigate treatment options and coordinate their care.",
            degree.as_str()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::{list_specialties, search_advocates};
    use crate::db::sqlite::open_memory_database;
    use crate::models::AdvocateFilter;

    #[test]
    fn seed_populates_catalog_and_advocates() {
        let conn = open_memory_database().unwrap();
        seed_directory(&conn, 25).unwrap();

        assert_eq!(list_specialties(&conn).unwrap().len(), SPECIALTY_CATALOG.len());
        let advocates = search_advocates(&conn, &AdvocateFilter::default()).unwrap();
        assert_eq!(advocates.len(), 25);
        for advocate in &advocates {
            let count = advocate.specialties.len();
            assert!((1..=4).contains(&count), "got {count} specialties");
            assert!(advocate.years_of_experience >= 1);
        }
    }

    #[test]
    fn seeded_emails_are_unique() {
        let conn = open_memory_database().unwrap();
        seed_directory(&conn, 50).unwrap();
        let advocates = search_advocates(&conn, &AdvocateFilter::default()).unwrap();
        let mut emails: Vec<&str> = advocates.iter().map(|a| a.email.as_str()).collect();
        emails.sort();
        emails.dedup();
        assert_eq!(emails.len(), 50);
    }

    #[test]
    fn catalog_seed_is_idempotent() {
        let conn = open_memory_database().unwrap();
        seed_directory(&conn, 1).unwrap();
        seed_directory(&conn, 1).unwrap();
        assert_eq!(list_specialties(&conn).unwrap().len(), SPECIALTY_CATALOG.len());
    }
}
