use crate::types::{PersonId, ProjectId};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Person '{person_id}' has {skill} level {level}, expected 1..=10")]
    SkillOutOfRange {
        person_id: PersonId,
        skill: &'static str,
        level: u8,
    },

    #[error("Phase '{phase}' declares no required positions")]
    EmptyPhase { phase: String },

    #[error("Allocation requested with an empty pool")]
    EmptyPool,

    #[error("Person '{person_id}' appears more than once in the input")]
    DuplicatePerson { person_id: PersonId },

    #[error("Project '{project_id}' lists unknown person '{person_id}' on its roster")]
    UnknownPerson {
        project_id: ProjectId,
        person_id: PersonId,
    },

    #[error("Project '{project_id}' appears more than once in the input")]
    DuplicateProject { project_id: ProjectId },

    #[error("Invalid requirement: {reason}")]
    InvalidRequirement { reason: String },

    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },
}

pub type EngineResult<T> = Result<T, EngineError>;
