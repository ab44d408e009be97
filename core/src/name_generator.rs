//! Deterministic names for generated employees, candidates and projects.
//!
//! Same RNG seed = same names. Lists are short on purpose: generated
//! workforces are test fixtures and demo data, not a census.

use crate::rng::EngineRng;

pub struct NameGenerator;

impl NameGenerator {
    /// "First Last".
    pub fn full_name(rng: &mut EngineRng) -> String {
        let first = Self::pick(rng, FIRST_NAMES);
        let last = Self::pick(rng, LAST_NAMES);
        format!("{first} {last}")
    }

    /// Working title for a game project, e.g. "Silent Harbor".
    pub fn project_title(rng: &mut EngineRng) -> String {
        let adjective = Self::pick(rng, TITLE_ADJECTIVES);
        let noun = Self::pick(rng, TITLE_NOUNS);
        format!("{adjective} {noun}")
    }

    fn pick(rng: &mut EngineRng, names: &'static [&'static str]) -> &'static str {
        rng.pick(names).copied().unwrap_or("Unnamed")
    }
}

const FIRST_NAMES: &[&str] = &[
    "Aiko", "Ben", "Carla", "Dmitri", "Elena", "Farid", "Greta", "Hiro",
    "Ines", "Jonas", "Kenji", "Lena", "Mateo", "Nadia", "Oskar", "Priya",
    "Quentin", "Rosa", "Sven", "Tara", "Umar", "Vera", "Wei", "Ximena",
    "Yuki", "Zoe", "Amara", "Bruno", "Chloe", "Diego", "Emil", "Freya",
    "Goran", "Hana", "Ivo", "Julia", "Kofi", "Lucia", "Mika", "Nils",
    "Olga", "Pavel", "Ren", "Sofia", "Tomas", "Uma", "Viktor", "Wren",
];

const LAST_NAMES: &[&str] = &[
    "Abe", "Becker", "Castro", "Dubois", "Eriksen", "Fischer", "Gallo", "Hayashi",
    "Ivanova", "Jensen", "Kowalski", "Lindqvist", "Moreau", "Nakamura", "Okafor", "Petrov",
    "Quinn", "Rossi", "Santos", "Tanaka", "Ueda", "Varga", "Weber", "Xu",
    "Yilmaz", "Zhang", "Alvarez", "Brandt", "Costa", "Dalton", "Engel", "Ferreira",
    "Grant", "Holm", "Ishikawa", "Jovanovic", "Kato", "Larsen", "Mendez", "Novak",
];

const TITLE_ADJECTIVES: &[&str] = &[
    "Silent", "Crimson", "Hollow", "Radiant", "Forgotten", "Iron", "Neon", "Lost",
    "Frozen", "Endless", "Hidden", "Broken", "Golden", "Shattered", "Wild", "Last",
];

const TITLE_NOUNS: &[&str] = &[
    "Harbor", "Kingdom", "Signal", "Frontier", "Garden", "Circuit", "Tide", "Citadel",
    "Orbit", "Lantern", "Archive", "Voyage", "Engine", "Summit", "Canyon", "Echo",
];
