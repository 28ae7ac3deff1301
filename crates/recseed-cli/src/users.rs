//! Synthetic user generator
//!
//! Produces fixture users for the catalog: sequential ids, names and
//! countries drawn uniformly at random from small fixed lists, and an email
//! derived from the chosen name. Nothing here is a validated identity;
//! duplicate name pairs yield duplicate emails and that is fine.

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use serde_json::{json, Map, Value};

const FIRST_NAMES: &[&str] = &[
    "Ana", "Mihai", "Ioana", "Andrei", "Elena", "Radu", "Maria", "Vlad", "Carmen", "Alex",
    "Stefania", "Bogdan", "Dan", "Cristina", "Toma", "Andrada", "Anca", "Edi", "Matei", "Marius",
];

const LAST_NAMES: &[&str] = &[
    "Popescu", "Ionescu", "Georgescu", "Dumitrescu", "Stan", "Tudor", "Rusu", "Marin", "Enache",
    "Iliescu", "Apostol", "Tanasescu", "Pana", "Gheorghe", "Stanila", "Catana", "Mihai",
    "Marinescu", "Enachescu", "Ilie",
];

const COUNTRIES: &[&str] = &["Romania", "Italy", "France", "Germany", "Spain"];

/// A generated fixture user, ready to be upserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    /// Sequential id, `user-1` .. `user-N`
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub age: i64,
    pub country: String,
}

impl UserRecord {
    /// Property values map for the upsert request.
    pub fn values(&self) -> Map<String, Value> {
        let mut values = Map::new();
        values.insert("FirstName".to_string(), json!(self.first_name));
        values.insert("LastName".to_string(), json!(self.last_name));
        values.insert("Email".to_string(), json!(self.email));
        values.insert("Age".to_string(), json!(self.age));
        values.insert("Country".to_string(), json!(self.country));
        values
    }
}

/// Generate `n` fixture users with ids `user-1` .. `user-n`.
///
/// A seed makes the draw reproducible; without one the generator seeds
/// itself from the OS.
pub fn generate(n: usize, seed: Option<u64>) -> Vec<UserRecord> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    (1..=n)
        .map(|i| {
            let first_name = *FIRST_NAMES.choose(&mut rng).unwrap_or(&FIRST_NAMES[0]);
            let last_name = *LAST_NAMES.choose(&mut rng).unwrap_or(&LAST_NAMES[0]);
            let email = format!(
                "{}.{}@example.com",
                first_name.to_lowercase(),
                last_name.to_lowercase()
            );
            let country = *COUNTRIES.choose(&mut rng).unwrap_or(&COUNTRIES[0]);

            UserRecord {
                id: format!("user-{}", i),
                first_name: first_name.to_string(),
                last_name: last_name.to_string(),
                email,
                age: rng.random_range(18..60),
                country: country.to_string(),
            }
        })
        .collect()
}
