//! Employees and candidates.

use crate::{
    error::EngineResult,
    schedule::WorkSchedule,
    skills::{Position, Skill, SkillProfile},
    types::{PersonId, Salary},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Availability {
    Available,
    Interviewing,
    Hired,
    Working,
}

/// An employee or an external candidate. The engine treats both the same;
/// only the caller knows which list a person came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub id:               PersonId,
    pub name:             String,
    pub position:         Position,
    pub skills:           SkillProfile,
    pub salary:           Salary,
    #[serde(default)]
    pub age:              Option<u32>,
    #[serde(default)]
    pub experience_years: u32,
    pub availability:     Availability,
    #[serde(default)]
    pub schedule:         Option<WorkSchedule>,
}

impl Person {
    /// An available specialist with flat 1s outside their specialty.
    pub fn specialist(
        id: impl Into<PersonId>,
        name: impl Into<String>,
        position: Position,
        level: u8,
        salary: Salary,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            position,
            skills: SkillProfile::specialist(position, level),
            salary,
            age: None,
            experience_years: 0,
            availability: Availability::Available,
            schedule: None,
        }
    }

    pub fn with_age(mut self, age: u32) -> Self {
        self.age = Some(age);
        self
    }

    pub fn with_experience(mut self, years: u32) -> Self {
        self.experience_years = years;
        self
    }

    pub fn with_schedule(mut self, schedule: WorkSchedule) -> Self {
        self.schedule = Some(schedule);
        self
    }

    pub fn specialty(&self) -> Skill {
        self.position.specialty()
    }

    pub fn specialty_level(&self) -> u8 {
        self.skills.level(self.specialty())
    }

    pub fn skill(&self, skill: Skill) -> u8 {
        self.skills.level(skill)
    }

    pub fn total_skill_points(&self) -> u32 {
        self.skills.total()
    }

    pub fn validate(&self) -> EngineResult<()> {
        self.skills.validate(&self.id)
    }
}
