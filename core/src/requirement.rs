//! Requirement specifications.
//!
//! One shape serves both a recruitment posting and a project's per-position
//! staffing need: hard filters (position, salary ceiling), soft targets
//! (skill, age and experience bounds) and bookkeeping (headcount, priority,
//! auto-approve threshold).

use crate::{
    error::{EngineError, EngineResult},
    skills::{Position, SKILL_MAX, SKILL_MIN},
    types::Salary,
};
use serde::{Deserialize, Serialize};

/// Staffing priority. Ordering is ascending urgency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    #[default]
    Normal,
    High,
    Urgent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequirementSpec {
    /// Hard filter when set.
    #[serde(default)]
    pub position:       Option<Position>,
    pub min_skill_level: u8,
    pub max_skill_level: u8,
    /// Informational floor; never filters.
    #[serde(default)]
    pub min_salary:     Salary,
    /// Hard ceiling when set, inclusive.
    #[serde(default)]
    pub max_salary:     Option<Salary>,
    #[serde(default)]
    pub min_age:        Option<u32>,
    #[serde(default)]
    pub max_age:        Option<u32>,
    #[serde(default)]
    pub min_experience: Option<u32>,
    #[serde(default)]
    pub max_experience: Option<u32>,
    pub target_count:   u32,
    #[serde(default)]
    pub priority:       Priority,
    pub auto_approve_threshold: f64,
}

impl Default for RequirementSpec {
    fn default() -> Self {
        Self {
            position:        None,
            min_skill_level: SKILL_MIN,
            max_skill_level: SKILL_MAX,
            min_salary:      0,
            max_salary:      None,
            min_age:         None,
            max_age:         None,
            min_experience:  None,
            max_experience:  None,
            target_count:    1,
            priority:        Priority::Normal,
            auto_approve_threshold: 0.9,
        }
    }
}

impl RequirementSpec {
    pub fn for_position(position: Position) -> Self {
        Self { position: Some(position), ..Self::default() }
    }

    pub fn with_skill_range(mut self, min: u8, max: u8) -> Self {
        self.min_skill_level = min;
        self.max_skill_level = max;
        self
    }

    pub fn with_salary_range(mut self, min: Salary, max: Salary) -> Self {
        self.min_salary = min;
        self.max_salary = Some(max);
        self
    }

    pub fn with_experience_range(mut self, min: u32, max: u32) -> Self {
        self.min_experience = Some(min);
        self.max_experience = Some(max);
        self
    }

    pub fn with_age_range(mut self, min: u32, max: u32) -> Self {
        self.min_age = Some(min);
        self.max_age = Some(max);
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_auto_approve(mut self, threshold: f64) -> Self {
        self.auto_approve_threshold = threshold;
        self
    }

    /// The same bounds narrowed to one position. Used by the allocator to
    /// turn a project-wide criterion into a per-quota one.
    pub fn narrowed_to(&self, position: Position) -> Self {
        Self { position: Some(position), ..self.clone() }
    }

    pub fn validate(&self) -> EngineResult<()> {
        let invalid = |reason: String| Err(EngineError::InvalidRequirement { reason });

        let skill_range = SKILL_MIN..=SKILL_MAX;
        if !skill_range.contains(&self.min_skill_level) || !skill_range.contains(&self.max_skill_level) {
            return invalid(format!(
                "skill bounds {}..={} outside {SKILL_MIN}..={SKILL_MAX}",
                self.min_skill_level, self.max_skill_level
            ));
        }
        if self.min_skill_level > self.max_skill_level {
            return invalid(format!(
                "min skill {} above max skill {}",
                self.min_skill_level, self.max_skill_level
            ));
        }
        if let Some(max) = self.max_salary {
            if self.min_salary > max {
                return invalid(format!("min salary {} above max salary {max}", self.min_salary));
            }
        }
        if let (Some(lo), Some(hi)) = (self.min_age, self.max_age) {
            if lo > hi {
                return invalid(format!("min age {lo} above max age {hi}"));
            }
        }
        if let (Some(lo), Some(hi)) = (self.min_experience, self.max_experience) {
            if lo > hi {
                return invalid(format!("min experience {lo} above max experience {hi}"));
            }
        }
        if self.target_count == 0 {
            return invalid("target count must be at least 1".into());
        }
        if !(0.0..=1.0).contains(&self.auto_approve_threshold) {
            return invalid(format!(
                "auto-approve threshold {} outside [0, 1]",
                self.auto_approve_threshold
            ));
        }
        Ok(())
    }

    // ── Templates ──────────────────────────────────────────────

    pub fn junior_programmer() -> Self {
        Self::for_position(Position::Programmer)
            .with_skill_range(1, 3)
            .with_salary_range(5_000, 8_000)
            .with_experience_range(0, 2)
    }

    pub fn senior_programmer() -> Self {
        Self::for_position(Position::Programmer)
            .with_skill_range(7, 10)
            .with_salary_range(12_000, 20_000)
            .with_experience_range(5, 15)
    }

    pub fn artist() -> Self {
        Self::for_position(Position::Artist)
            .with_skill_range(3, 8)
            .with_salary_range(6_000, 12_000)
            .with_experience_range(1, 10)
    }

    pub fn designer() -> Self {
        Self::for_position(Position::Designer)
            .with_skill_range(2, 7)
            .with_salary_range(5_500, 11_000)
            .with_experience_range(0, 8)
    }

    pub const TEMPLATE_NAMES: [&'static str; 4] =
        ["junior_programmer", "senior_programmer", "artist", "designer"];

    /// Template by name, as listed in `TEMPLATE_NAMES`.
    pub fn template(name: &str) -> Option<Self> {
        match name {
            "junior_programmer" => Some(Self::junior_programmer()),
            "senior_programmer" => Some(Self::senior_programmer()),
            "artist"            => Some(Self::artist()),
            "designer"          => Some(Self::designer()),
            _ => None,
        }
    }

    pub fn templates() -> Vec<Self> {
        vec![
            Self::junior_programmer(),
            Self::senior_programmer(),
            Self::artist(),
            Self::designer(),
        ]
    }
}
