//! Person-vs-requirement fit scoring.
//!
//! Two hard filters come first: the requirement's position (when set) and
//! its salary ceiling (inclusive). A person failing either gets score 0.0
//! and an `Eligibility` naming the reason. Everyone else gets a weighted
//! mean of three sub-scores, each in [0, 1]:
//!
//!   specialty fit   rises linearly up to the minimum level, then closes the
//!                   remaining gap to 1.0 with diminishing returns; levels
//!                   above the requirement's maximum lose a little.
//!   salary headroom 1 - salary / ceiling, linear.
//!   experience fit  1.0 inside the age/experience bounds, linear falloff
//!                   outside, floor 0.
//!
//! Ranking order is (score desc, specialty level desc, person id asc) and
//! never depends on input order.

use crate::{
    config::FitWeights,
    error::EngineResult,
    person::Person,
    requirement::RequirementSpec,
    skills::Position,
    types::{PersonId, Salary},
};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Eligibility {
    Eligible,
    PositionMismatch { required: Position, actual: Position },
    SalaryAboveCap { salary: Salary, cap: Salary },
}

impl Eligibility {
    pub fn is_eligible(&self) -> bool {
        matches!(self, Self::Eligible)
    }

    pub fn describe(&self) -> String {
        match self {
            Self::Eligible => "eligible".into(),
            Self::PositionMismatch { required, actual } => {
                format!("position {actual} does not match required {required}")
            }
            Self::SalaryAboveCap { salary, cap } => {
                format!("salary {salary} exceeds ceiling {cap}")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub person_id:       PersonId,
    pub eligibility:     Eligibility,
    pub specialty_level: u8,
    pub specialty_fit:   f64,
    pub salary_headroom: f64,
    pub experience_fit:  f64,
    /// Weighted score in [0, 1]; 0.0 whenever ineligible.
    pub score:           f64,
}

impl ScoreBreakdown {
    pub fn is_eligible(&self) -> bool {
        self.eligibility.is_eligible()
    }
}

/// Deterministic ranking order: score desc, specialty level desc, id asc.
pub fn rank_order(a: &ScoreBreakdown, b: &ScoreBreakdown) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| b.specialty_level.cmp(&a.specialty_level))
        .then_with(|| a.person_id.cmp(&b.person_id))
}

#[derive(Debug, Clone, Default)]
pub struct FitScorer {
    weights: FitWeights,
}

impl FitScorer {
    pub fn new(weights: FitWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &FitWeights {
        &self.weights
    }

    /// Score one person against one requirement. Fails only on malformed
    /// input (skill levels or requirement bounds out of range).
    pub fn score(&self, person: &Person, req: &RequirementSpec) -> EngineResult<ScoreBreakdown> {
        person.validate()?;
        req.validate()?;
        Ok(self.evaluate(person, req))
    }

    /// All eligible people, best first.
    pub fn rank(&self, people: &[Person], req: &RequirementSpec) -> EngineResult<Vec<ScoreBreakdown>> {
        req.validate()?;
        let mut ranked = Vec::with_capacity(people.len());
        for person in people {
            person.validate()?;
            let breakdown = self.evaluate(person, req);
            if breakdown.is_eligible() {
                ranked.push(breakdown);
            }
        }
        ranked.sort_by(rank_order);
        Ok(ranked)
    }

    /// Scoring without input validation. Callers must have validated both
    /// sides already.
    pub(crate) fn evaluate(&self, person: &Person, req: &RequirementSpec) -> ScoreBreakdown {
        let specialty_level = person.specialty_level();
        let eligibility = self.eligibility(person, req);

        if !eligibility.is_eligible() {
            return ScoreBreakdown {
                person_id: person.id.clone(),
                eligibility,
                specialty_level,
                specialty_fit: 0.0,
                salary_headroom: 0.0,
                experience_fit: 0.0,
                score: 0.0,
            };
        }

        let w = &self.weights;
        let specialty_fit = self.specialty_fit(specialty_level, req);
        let salary_headroom = salary_headroom(person.salary, req.max_salary);
        let experience_fit = self.experience_fit(person, req);

        let weight_sum = w.specialty_weight + w.salary_weight + w.experience_weight;
        let raw = if weight_sum > 0.0 {
            (w.specialty_weight * specialty_fit
                + w.salary_weight * salary_headroom
                + w.experience_weight * experience_fit)
                / weight_sum
        } else {
            0.0
        };

        ScoreBreakdown {
            person_id: person.id.clone(),
            eligibility,
            specialty_level,
            specialty_fit,
            salary_headroom,
            experience_fit,
            score: clamp_unit(raw),
        }
    }

    fn eligibility(&self, person: &Person, req: &RequirementSpec) -> Eligibility {
        if let Some(required) = req.position {
            if person.position != required {
                return Eligibility::PositionMismatch { required, actual: person.position };
            }
        }
        if let Some(cap) = req.max_salary {
            if person.salary > cap {
                return Eligibility::SalaryAboveCap { salary: person.salary, cap };
            }
        }
        Eligibility::Eligible
    }

    fn specialty_fit(&self, level: u8, req: &RequirementSpec) -> f64 {
        let w = &self.weights;
        let min = req.min_skill_level.max(1) as f64;
        let level_f = level as f64;

        if level_f < min {
            return clamp_unit(w.at_minimum_score * level_f / min);
        }

        let excess = level_f - min;
        let fit = w.at_minimum_score
            + (1.0 - w.at_minimum_score) * (1.0 - (1.0 - w.above_minimum_gain).powf(excess));

        if level > req.max_skill_level {
            let over = (level - req.max_skill_level) as f64;
            let penalised = (fit - w.overqualified_penalty_per_level * over).max(w.overqualified_floor);
            return clamp_unit(penalised.min(fit));
        }
        clamp_unit(fit)
    }

    fn experience_fit(&self, person: &Person, req: &RequirementSpec) -> f64 {
        let falloff = self.weights.bound_falloff_per_year;
        let mut parts = Vec::with_capacity(2);

        if req.min_experience.is_some() || req.max_experience.is_some() {
            parts.push(bound_fit(person.experience_years, req.min_experience, req.max_experience, falloff));
        }
        if let Some(age) = person.age {
            if req.min_age.is_some() || req.max_age.is_some() {
                parts.push(bound_fit(age, req.min_age, req.max_age, falloff));
            }
        }

        if parts.is_empty() {
            1.0
        } else {
            parts.iter().sum::<f64>() / parts.len() as f64
        }
    }
}

fn salary_headroom(salary: Salary, cap: Option<Salary>) -> f64 {
    match cap {
        None | Some(0) => 1.0,
        Some(cap) => clamp_unit(1.0 - salary as f64 / cap as f64),
    }
}

fn bound_fit(value: u32, lo: Option<u32>, hi: Option<u32>, falloff: f64) -> f64 {
    let distance = match (lo, hi) {
        (Some(lo), _) if value < lo => lo - value,
        (_, Some(hi)) if value > hi => value - hi,
        _ => 0,
    };
    clamp_unit(1.0 - distance as f64 * falloff)
}

/// Clamp to [0, 1], mapping NaN to 0.
pub(crate) fn clamp_unit(x: f64) -> f64 {
    if x.is_nan() {
        0.0
    } else {
        x.clamp(0.0, 1.0)
    }
}
