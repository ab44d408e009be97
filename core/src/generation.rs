//! Synthetic workforce generation.
//!
//! Builds a reproducible `WorkforceSnapshot` from a seed: employees drawn
//! from the `Roster` stream, projects and their requests from the
//! `Projects` stream. Same seed, same sizes, same snapshot.
//!
//! Recruitment candidates are generated against a posting with
//! `generate_candidates`, normally from the `Candidates` stream.
//!
//! SALARY MODEL:
//!   base salary by specialty level (1..=10), times a position multiplier
//!   (Programmer 1.2, Artist 1.1, Designer 1.0, Sound Engineer 0.9,
//!   Customer Service 0.8), then ±10% jitter, rounded to the nearest 100.
//!
//! EXPERIENCE BANDS (years, by specialty level):
//!   1–2: 0–1   3–4: 1–3   5–6: 3–6   7–8: 5–10   9–10: 8–15
//!
//! CANDIDATES (per posting):
//!   level       70% uniform within the posting's skill bounds, otherwise
//!               the midpoint of the bounds ±2, clamped to 1..=10
//!   experience  drawn from the level's band, clamped to the posting's bounds
//!   age         22 + experience + (-2..=4), clamped to the posting's bounds
//!   salary      min + (max - min) × (level + experience) / 20, then
//!               -1000..+1999, clamped to [min, max]. Without a ceiling the
//!               employee salary model is used instead.
//!   availability 80% Available, 15% Interviewing, 5% Hired

use crate::{
    name_generator::NameGenerator,
    person::{Availability, Person},
    project::{DevelopmentPhase, Project, StaffingRequest, Theme},
    requirement::{Priority, RequirementSpec},
    rng::{EngineRng, RngBank, RngSlot},
    schedule::WorkSchedule,
    skills::{Position, Skill, SkillProfile, SKILL_MAX, SKILL_MIN},
    snapshot::WorkforceSnapshot,
    types::Salary,
};
use chrono::{NaiveTime, Weekday};

/// Base monthly salary for specialty levels 1..=10.
const BASE_SALARY: [Salary; 10] = [
    2_500, 3_000, 4_000, 5_000, 6_500, 8_000, 10_000, 12_000, 13_500, 15_000,
];

/// Relative frequency of specialty levels 1..=10. Mid levels dominate.
const LEVEL_WEIGHTS: [u32; 10] = [6, 10, 15, 17, 16, 13, 10, 7, 4, 2];

/// Relative frequency of positions, in `Position::ALL` order.
const POSITION_WEIGHTS: [u32; 5] = [30, 20, 22, 15, 13];

const PHASES: [DevelopmentPhase; 4] = [
    DevelopmentPhase::Design,
    DevelopmentPhase::ArtSound,
    DevelopmentPhase::Programming,
    DevelopmentPhase::FullProduction,
];
const PHASE_WEIGHTS: [u32; 4] = [3, 3, 3, 1];

const PRIORITIES: [Priority; 4] = [Priority::Low, Priority::Normal, Priority::High, Priority::Urgent];
const PRIORITY_WEIGHTS: [u32; 4] = [2, 5, 2, 1];

pub fn position_multiplier(position: Position) -> f64 {
    match position {
        Position::Programmer      => 1.2,
        Position::Artist          => 1.1,
        Position::Designer        => 1.0,
        Position::SoundEngineer   => 0.9,
        Position::CustomerService => 0.8,
    }
}

/// Expected monthly salary for a specialist, before jitter.
pub fn expected_salary(position: Position, level: u8) -> Salary {
    let idx = (level.max(SKILL_MIN) as usize - 1).min(BASE_SALARY.len() - 1);
    (BASE_SALARY[idx] as f64 * position_multiplier(position)).round() as Salary
}

/// Inclusive experience band (years) for a specialty level.
pub fn experience_band(level: u8) -> (u32, u32) {
    match level {
        0..=2 => (0, 1),
        3..=4 => (1, 3),
        5..=6 => (3, 6),
        7..=8 => (5, 10),
        _ => (8, 15),
    }
}

pub fn generate_snapshot(seed: u64, pool_size: usize, project_count: usize) -> WorkforceSnapshot {
    let bank = RngBank::new(seed);
    let mut roster_rng = bank.for_slot(RngSlot::Roster);
    let mut project_rng = bank.for_slot(RngSlot::Projects);

    let employees: Vec<Person> = (1..=pool_size)
        .map(|n| generate_person(&mut roster_rng, format!("e-{n:06}")))
        .collect();
    let requests: Vec<StaffingRequest> = (1..=project_count)
        .map(|n| generate_request(&mut project_rng, format!("p-{n:04}")))
        .collect();

    log::info!(
        "generation: seed {seed} -> {} employees, {} projects",
        employees.len(),
        requests.len()
    );

    WorkforceSnapshot {
        seed: Some(seed),
        employees,
        requests,
    }
}

/// One person with a random position, level, salary and schedule.
pub fn generate_person(rng: &mut EngineRng, id: String) -> Person {
    let position = Position::ALL[rng.weighted_index(&POSITION_WEIGHTS)];
    let level = rng.weighted_index(&LEVEL_WEIGHTS) as u8 + SKILL_MIN;

    let skills = skill_profile(rng, position, level);
    let salary = jittered_salary(rng, position, level);

    let (lo, hi) = experience_band(level);
    let experience = rng.range_inclusive(lo, hi);
    let age = 22 + experience + rng.range_inclusive(0, 6);

    let schedule = match rng.next_u64_below(20) {
        0..=13 => Some(WorkSchedule::office_hours()),
        14..=16 => Some(evening_shift()),
        _ => None,
    };

    Person {
        id,
        name: NameGenerator::full_name(rng),
        position,
        skills,
        salary,
        age: Some(age),
        experience_years: experience,
        availability: Availability::Available,
        schedule,
    }
}

/// `count` candidates for one posting, ids `c-0001` upwards, in draw order.
/// Ranking them is the matcher's job.
pub fn generate_candidates(rng: &mut EngineRng, posting: &RequirementSpec, count: usize) -> Vec<Person> {
    let candidates: Vec<Person> = (1..=count)
        .map(|n| generate_candidate(rng, posting, format!("c-{n:04}")))
        .collect();
    log::debug!(
        "generation: {} candidates for {:?} (skill {}..={})",
        candidates.len(),
        posting.position,
        posting.min_skill_level,
        posting.max_skill_level
    );
    candidates
}

fn generate_candidate(rng: &mut EngineRng, posting: &RequirementSpec, id: String) -> Person {
    let position = posting
        .position
        .unwrap_or_else(|| Position::ALL[rng.weighted_index(&POSITION_WEIGHTS)]);

    let (min_level, max_level) = (posting.min_skill_level, posting.max_skill_level);
    let level = if rng.chance(0.7) {
        rng.range_inclusive(min_level as u32, max_level as u32) as u8
    } else {
        let mid = min_level as i32 + (max_level as i32 - min_level as i32) / 2;
        let deviation = rng.range_inclusive(0, 4) as i32 - 2;
        (mid + deviation).clamp(SKILL_MIN as i32, SKILL_MAX as i32) as u8
    };

    let skills = skill_profile(rng, position, level);

    let (lo, hi) = experience_band(level);
    let mut experience = rng.range_inclusive(lo, hi);
    if let Some(min) = posting.min_experience {
        experience = experience.max(min);
    }
    if let Some(max) = posting.max_experience {
        experience = experience.min(max);
    }

    let mut age = (22 + experience + rng.range_inclusive(0, 6)).saturating_sub(2);
    if let Some(min) = posting.min_age {
        age = age.max(min);
    }
    if let Some(max) = posting.max_age {
        age = age.min(max);
    }

    let salary = match posting.max_salary {
        Some(max) => {
            let min = posting.min_salary.min(max);
            let span = (max - min) as u64;
            let base = min as i64 + (span * (level as u64 + experience as u64) / 20) as i64;
            let variation = rng.range_inclusive(0, 2_999) as i64 - 1_000;
            (base + variation).clamp(min as i64, max as i64) as Salary
        }
        None => jittered_salary(rng, position, level),
    };

    let availability = match rng.next_u64_below(100) {
        0..=79 => Availability::Available,
        80..=94 => Availability::Interviewing,
        _ => Availability::Hired,
    };

    Person {
        id,
        name: NameGenerator::full_name(rng),
        position,
        skills,
        salary,
        age: Some(age),
        experience_years: experience,
        availability,
        schedule: None,
    }
}

/// Specialist profile with off-specialty skills at or below half the
/// specialty level.
fn skill_profile(rng: &mut EngineRng, position: Position, level: u8) -> SkillProfile {
    let side_cap = (level / 2).max(SKILL_MIN) as u32;
    let mut skills = SkillProfile::specialist(position, level);
    for skill in Skill::ALL {
        if skill != position.specialty() {
            skills.set(skill, rng.range_inclusive(SKILL_MIN as u32, side_cap) as u8);
        }
    }
    skills
}

/// Expected salary ±10%, rounded to the nearest 100.
fn jittered_salary(rng: &mut EngineRng, position: Position, level: u8) -> Salary {
    let jitter = 0.9 + rng.next_f64() * 0.2;
    ((expected_salary(position, level) as f64 * jitter) / 100.0).round() as Salary * 100
}

fn generate_request(rng: &mut EngineRng, id: String) -> StaffingRequest {
    let title = NameGenerator::project_title(rng);
    let theme = rng.pick(&Theme::ALL).copied().unwrap_or(Theme::Casual);
    let phase = PHASES[rng.weighted_index(&PHASE_WEIGHTS)];
    let priority = PRIORITIES[rng.weighted_index(&PRIORITY_WEIGHTS)];

    let mut criteria = RequirementSpec::default().with_priority(priority);
    if rng.chance(0.3) {
        let min = rng.range_inclusive(2, 6) as u8;
        criteria = criteria.with_skill_range(min, 10);
    }
    if rng.chance(0.25) {
        let cap = rng.range_inclusive(80, 160) * 100;
        criteria = criteria.with_salary_range(0, cap);
    }

    StaffingRequest::new(Project::new(id, title, theme, phase)).with_criteria(criteria)
}

/// Monday to Friday, 14:00 to 22:00.
fn evening_shift() -> WorkSchedule {
    WorkSchedule::new(
        vec![Weekday::Mon, Weekday::Tue, Weekday::Wed, Weekday::Thu, Weekday::Fri],
        NaiveTime::from_hms_opt(14, 0, 0).unwrap_or_default(),
        NaiveTime::from_hms_opt(22, 0, 0).unwrap_or_default(),
    )
}
