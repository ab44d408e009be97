//! Skill vectors and positions.
//!
//! Every person carries exactly five skill levels. The level matching the
//! person's Position is their *specialty*; it drives every score in the
//! engine.

use crate::{
    error::{EngineError, EngineResult},
    types::PersonId,
};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const SKILL_MIN: u8 = 1;
pub const SKILL_MAX: u8 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Skill {
    Development,
    Design,
    Art,
    Music,
    Service,
}

impl Skill {
    pub const ALL: [Skill; 5] = [
        Skill::Development,
        Skill::Design,
        Skill::Art,
        Skill::Music,
        Skill::Service,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Design      => "design",
            Self::Art         => "art",
            Self::Music       => "music",
            Self::Service     => "service",
        }
    }
}

/// Job position. Declaration order is the fixed order the allocator
/// walks a phase's quotas in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Position {
    Programmer,
    Designer,
    Artist,
    SoundEngineer,
    CustomerService,
}

impl Position {
    pub const ALL: [Position; 5] = [
        Position::Programmer,
        Position::Designer,
        Position::Artist,
        Position::SoundEngineer,
        Position::CustomerService,
    ];

    /// The four positions that build the game itself.
    pub const CORE: [Position; 4] = [
        Position::Programmer,
        Position::Designer,
        Position::Artist,
        Position::SoundEngineer,
    ];

    pub fn specialty(&self) -> Skill {
        match self {
            Self::Programmer      => Skill::Development,
            Self::Designer        => Skill::Design,
            Self::Artist          => Skill::Art,
            Self::SoundEngineer   => Skill::Music,
            Self::CustomerService => Skill::Service,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Programmer      => "Programmer",
            Self::Designer        => "Designer",
            Self::Artist          => "Artist",
            Self::SoundEngineer   => "Sound Engineer",
            Self::CustomerService => "Customer Service",
        }
    }

    /// Customer service staff do not contribute to development output.
    pub fn is_development(&self) -> bool {
        !matches!(self, Self::CustomerService)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SkillProfile {
    pub development: u8,
    pub design:      u8,
    pub art:         u8,
    pub music:       u8,
    pub service:     u8,
}

impl SkillProfile {
    pub fn new(development: u8, design: u8, art: u8, music: u8, service: u8) -> Self {
        Self { development, design, art, music, service }
    }

    /// A profile at `level` in the position's specialty and 1 elsewhere.
    pub fn specialist(position: Position, level: u8) -> Self {
        let mut profile = Self::new(SKILL_MIN, SKILL_MIN, SKILL_MIN, SKILL_MIN, SKILL_MIN);
        profile.set(position.specialty(), level);
        profile
    }

    pub fn level(&self, skill: Skill) -> u8 {
        match skill {
            Skill::Development => self.development,
            Skill::Design      => self.design,
            Skill::Art         => self.art,
            Skill::Music       => self.music,
            Skill::Service     => self.service,
        }
    }

    pub fn set(&mut self, skill: Skill, level: u8) {
        match skill {
            Skill::Development => self.development = level,
            Skill::Design      => self.design = level,
            Skill::Art         => self.art = level,
            Skill::Music       => self.music = level,
            Skill::Service     => self.service = level,
        }
    }

    pub fn total(&self) -> u32 {
        Skill::ALL.iter().map(|s| self.level(*s) as u32).sum()
    }

    /// Fails with `SkillOutOfRange` on the first level outside 1..=10.
    pub fn validate(&self, person_id: &PersonId) -> EngineResult<()> {
        for skill in Skill::ALL {
            let level = self.level(skill);
            if !(SKILL_MIN..=SKILL_MAX).contains(&level) {
                return Err(EngineError::SkillOutOfRange {
                    person_id: person_id.clone(),
                    skill: skill.name(),
                    level,
                });
            }
        }
        Ok(())
    }
}
