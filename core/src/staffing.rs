//! Phase quota checks.
//!
//! The verdict is a pure function of (phase quotas, roster). Shortfalls are
//! structured records; turning them into text happens only in `render`,
//! and nothing ever parses that text back.

use crate::{
    error::{EngineError, EngineResult},
    person::Person,
    project::PhaseSpec,
    skills::Position,
};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shortfall {
    pub position: Position,
    pub required: u32,
    pub current:  u32,
}

impl Shortfall {
    pub fn missing(&self) -> u32 {
        self.required.saturating_sub(self.current)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum StaffingVerdict {
    Satisfied,
    Unsatisfied { shortfalls: Vec<Shortfall> },
}

impl StaffingVerdict {
    pub fn is_satisfied(&self) -> bool {
        matches!(self, Self::Satisfied)
    }

    pub fn shortfalls(&self) -> &[Shortfall] {
        match self {
            Self::Satisfied => &[],
            Self::Unsatisfied { shortfalls } => shortfalls,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StaffingValidator;

impl StaffingValidator {
    pub fn new() -> Self {
        Self
    }

    /// Count roster members by primary position and compare each count to
    /// the phase quota. Fails on a phase with no quotas or a roster that
    /// lists the same person twice.
    pub fn validate(&self, phase: &PhaseSpec, roster: &[Person]) -> EngineResult<StaffingVerdict> {
        phase.validate()?;
        let mut seen = BTreeSet::new();
        for person in roster {
            if !seen.insert(person.id.as_str()) {
                return Err(EngineError::DuplicatePerson { person_id: person.id.clone() });
            }
        }
        Ok(self.check(phase, roster.iter()))
    }

    /// Verdict without input validation, for callers that already did it.
    pub(crate) fn check<'a>(
        &self,
        phase: &PhaseSpec,
        roster: impl Iterator<Item = &'a Person>,
    ) -> StaffingVerdict {
        let counts = position_counts(roster);
        let shortfalls: Vec<Shortfall> = phase
            .required_positions()
            .filter_map(|(position, required)| {
                let current = counts.get(&position).copied().unwrap_or(0);
                (current < required).then_some(Shortfall { position, required, current })
            })
            .collect();

        if shortfalls.is_empty() {
            StaffingVerdict::Satisfied
        } else {
            StaffingVerdict::Unsatisfied { shortfalls }
        }
    }

    /// Human-readable shortfall message, scoped to the current phase.
    ///
    /// Shortfalls for positions the phase does not require are dropped, so a
    /// stale record from an earlier phase never reaches the user. When some
    /// required positions already have people, the message opens with what
    /// is staffed:
    ///
    ///   "already staffed: 1 × Programmer; still need: 4 × Programmer, 5 × Artist"
    ///
    /// otherwise it is just the "still need: ..." list.
    pub fn render(&self, phase: &PhaseSpec, roster: &[Person], shortfalls: &[Shortfall]) -> String {
        let needs: Vec<String> = shortfalls
            .iter()
            .filter(|s| phase.requires(s.position) && s.missing() > 0)
            .map(|s| format!("{} × {}", s.missing(), s.position))
            .collect();

        if needs.is_empty() {
            return "staffing complete".into();
        }

        let counts = position_counts(roster.iter());
        let staffed: Vec<String> = phase
            .required_positions()
            .filter_map(|(position, _)| {
                counts
                    .get(&position)
                    .filter(|n| **n > 0)
                    .map(|n| format!("{n} × {position}"))
            })
            .collect();

        if staffed.is_empty() {
            format!("still need: {}", needs.join(", "))
        } else {
            format!(
                "already staffed: {}; still need: {}",
                staffed.join(", "),
                needs.join(", ")
            )
        }
    }
}

fn position_counts<'a>(roster: impl Iterator<Item = &'a Person>) -> BTreeMap<Position, u32> {
    let mut counts = BTreeMap::new();
    for person in roster {
        *counts.entry(person.position).or_insert(0) += 1;
    }
    counts
}
