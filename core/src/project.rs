//! Projects, development phases and themes.

use crate::{
    error::{EngineError, EngineResult},
    requirement::{Priority, RequirementSpec},
    skills::Position,
    types::{PersonId, ProjectId},
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DevelopmentPhase {
    Design,
    ArtSound,
    Programming,
    /// Whole-team production: five of every core position.
    FullProduction,
}

impl DevelopmentPhase {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Design         => "design",
            Self::ArtSound       => "art_sound",
            Self::Programming    => "programming",
            Self::FullProduction => "full_production",
        }
    }

    pub fn quotas(&self) -> BTreeMap<Position, u32> {
        match self {
            Self::Design => [(Position::Designer, 1)].into(),
            Self::ArtSound => [(Position::Artist, 1), (Position::SoundEngineer, 1)].into(),
            Self::Programming => [(Position::Programmer, 1)].into(),
            Self::FullProduction => Position::CORE.iter().map(|p| (*p, 5)).collect(),
        }
    }

    /// Design → ArtSound → Programming → done.
    /// FullProduction is a single-stage plan.
    pub fn next(&self) -> Option<Self> {
        match self {
            Self::Design         => Some(Self::ArtSound),
            Self::ArtSound       => Some(Self::Programming),
            Self::Programming    => None,
            Self::FullProduction => None,
        }
    }
}

/// The staffing quotas a project needs right now.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseSpec {
    pub name:   String,
    pub quotas: BTreeMap<Position, u32>,
}

impl PhaseSpec {
    pub fn new(name: impl Into<String>, quotas: impl IntoIterator<Item = (Position, u32)>) -> Self {
        Self {
            name: name.into(),
            quotas: quotas.into_iter().collect(),
        }
    }

    pub fn required(&self, position: Position) -> u32 {
        self.quotas.get(&position).copied().unwrap_or(0)
    }

    pub fn requires(&self, position: Position) -> bool {
        self.required(position) > 0
    }

    /// Quotas in the fixed position order, zero quotas skipped.
    pub fn required_positions(&self) -> impl Iterator<Item = (Position, u32)> + '_ {
        self.quotas
            .iter()
            .filter(|(_, n)| **n > 0)
            .map(|(p, n)| (*p, *n))
    }

    pub fn validate(&self) -> EngineResult<()> {
        if self.required_positions().next().is_none() {
            return Err(EngineError::EmptyPhase { phase: self.name.clone() });
        }
        Ok(())
    }
}

impl From<DevelopmentPhase> for PhaseSpec {
    fn from(phase: DevelopmentPhase) -> Self {
        Self::new(phase.name(), phase.quotas())
    }
}

/// Required specialty levels per core development position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeAffinity {
    pub programmer: u8,
    pub designer:   u8,
    pub artist:     u8,
}

impl ThemeAffinity {
    pub fn level_for(&self, position: Position) -> Option<u8> {
        match position {
            Position::Programmer => Some(self.programmer),
            Position::Designer   => Some(self.designer),
            Position::Artist     => Some(self.artist),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    Action,
    Adventure,
    Rpg,
    Strategy,
    Simulation,
    Puzzle,
    Racing,
    Sports,
    Horror,
    Casual,
    Shooter,
    Moba,
}

impl Theme {
    pub const ALL: [Theme; 12] = [
        Theme::Action,
        Theme::Adventure,
        Theme::Rpg,
        Theme::Strategy,
        Theme::Simulation,
        Theme::Puzzle,
        Theme::Racing,
        Theme::Sports,
        Theme::Horror,
        Theme::Casual,
        Theme::Shooter,
        Theme::Moba,
    ];

    pub fn affinity(&self) -> ThemeAffinity {
        let (programmer, designer, artist) = match self {
            Self::Action     => (5, 2, 4),
            Self::Adventure  => (4, 5, 4),
            Self::Rpg        => (4, 5, 4),
            Self::Strategy   => (4, 5, 3),
            Self::Simulation => (5, 4, 3),
            Self::Puzzle     => (5, 4, 2),
            Self::Racing     => (5, 2, 4),
            Self::Sports     => (4, 2, 4),
            Self::Horror     => (4, 4, 5),
            Self::Casual     => (3, 3, 3),
            Self::Shooter    => (5, 2, 4),
            Self::Moba       => (5, 4, 4),
        };
        ThemeAffinity { programmer, designer, artist }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id:    ProjectId,
    pub name:  String,
    pub theme: Theme,
    pub phase: PhaseSpec,
    /// People already committed to the project before this run. They must
    /// be present in the allocation pool and count toward its quotas.
    #[serde(default)]
    pub roster: Vec<PersonId>,
}

impl Project {
    pub fn new(id: impl Into<ProjectId>, name: impl Into<String>, theme: Theme, phase: impl Into<PhaseSpec>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            theme,
            phase: phase.into(),
            roster: Vec::new(),
        }
    }

    pub fn with_roster(mut self, roster: impl IntoIterator<Item = impl Into<PersonId>>) -> Self {
        self.roster = roster.into_iter().map(Into::into).collect();
        self
    }
}

/// One entry of an allocation request: a project and the bounds every
/// person placed on it must respect (position is filled in per quota).
/// The criteria's priority decides the order projects are staffed in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffingRequest {
    pub project:  Project,
    #[serde(default)]
    pub criteria: RequirementSpec,
}

impl StaffingRequest {
    pub fn new(project: Project) -> Self {
        Self {
            project,
            criteria: RequirementSpec::default(),
        }
    }

    pub fn priority(&self) -> Priority {
        self.criteria.priority
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.criteria.priority = priority;
        self
    }

    /// Replace the criteria wholesale, priority included.
    pub fn with_criteria(mut self, criteria: RequirementSpec) -> Self {
        self.criteria = criteria;
        self
    }
}
