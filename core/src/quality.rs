//! Team quality scoring: the 0–10 composite for a staffed project.
//!
//! Five independent terms, summed and clamped to [0, max_total]:
//!
//!   1. Skill sum     Σ specialty levels / (reference_level × reference_team_size),
//!                    capped at 1, times skill_sum_cap. Four level-5 core
//!                    specialists give exactly skill_sum_cap (4.5).
//!   2. Composition   composition_bonus (1.2) iff every core position
//!                    (Programmer, Designer, Artist, Sound Engineer) is present.
//!                    Binary, no partial credit.
//!   3. Theme match   For Programmer, Designer and Artist: average specialty
//!                    level / theme affinity level, capped at 1, weighted by
//!                    affinity. Missing positions contribute 0. Max 1.0.
//!   4. Balance       max(0, balance_bonus_max - weight × stddev(levels)).
//!                    Zero for rosters of one or fewer.
//!   5. Elite         elite_bonus_max × proportion of members at level ≥ 4,
//!                    paid only once that proportion reaches 80%. Monotonic
//!                    in the proportion; 100% elite pays the full 0.5.
//!
//! Customer service staff are excluded from every term.
//!
//! With the reference values the best four-person team scores
//! 4.5 + 1.2 + 1.0 + 0.5 + 0.5 = 7.7.

use crate::{
    config::QualityConfig,
    error::EngineResult,
    person::Person,
    project::Theme,
    skills::Position,
    types::PersonId,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberContribution {
    pub person_id:       PersonId,
    pub name:            String,
    pub position:        Position,
    pub specialty_level: u8,
    /// Share of the uncapped skill-sum term.
    pub contribution:    f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QualityTier {
    Excellent,
    Good,
    Average,
    Poor,
}

impl QualityTier {
    pub fn from_total(total: f64) -> Self {
        match total {
            t if t >= 8.0 => Self::Excellent,
            t if t >= 6.0 => Self::Good,
            t if t >= 4.0 => Self::Average,
            _ => Self::Poor,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityScore {
    pub skill_sum:         f64,
    pub composition_bonus: f64,
    pub theme_bonus:       f64,
    pub balance_bonus:     f64,
    pub elite_bonus:       f64,
    pub total:             f64,
    pub tier:              QualityTier,
    pub contributions:     Vec<MemberContribution>,
}

impl QualityScore {
    /// Sum of the five terms before clamping.
    pub fn raw_sum(&self) -> f64 {
        self.skill_sum + self.composition_bonus + self.theme_bonus + self.balance_bonus + self.elite_bonus
    }
}

#[derive(Debug, Clone, Default)]
pub struct TeamQualityScorer {
    config: QualityConfig,
}

impl TeamQualityScorer {
    /// Scorer over a validated config. Rejects configs whose terms could
    /// go negative or divide by zero.
    pub fn new(config: QualityConfig) -> EngineResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// For configs already checked by `EngineConfig::validate`.
    pub(crate) fn from_validated(config: QualityConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &QualityConfig {
        &self.config
    }

    pub fn score_team(&self, roster: &[Person], theme: Theme) -> EngineResult<QualityScore> {
        for person in roster {
            person.validate()?;
        }
        Ok(self.evaluate(roster, theme))
    }

    pub(crate) fn evaluate(&self, roster: &[Person], theme: Theme) -> QualityScore {
        let cfg = &self.config;
        let team: Vec<&Person> = roster.iter().filter(|p| p.position.is_development()).collect();

        let per_level = cfg.skill_sum_cap / (cfg.reference_level as f64 * cfg.reference_team_size as f64);
        let contributions: Vec<MemberContribution> = team
            .iter()
            .map(|p| MemberContribution {
                person_id:       p.id.clone(),
                name:            p.name.clone(),
                position:        p.position,
                specialty_level: p.specialty_level(),
                contribution:    per_level * p.specialty_level() as f64,
            })
            .collect();

        let skill_sum = contributions
            .iter()
            .map(|c| c.contribution)
            .sum::<f64>()
            .min(cfg.skill_sum_cap);
        let composition_bonus = self.composition_bonus(&team);
        let theme_bonus = self.theme_bonus(&team, theme);
        let balance_bonus = self.balance_bonus(&team);
        let elite_bonus = self.elite_bonus(&team);

        let raw = skill_sum + composition_bonus + theme_bonus + balance_bonus + elite_bonus;
        let total = if raw.is_nan() { 0.0 } else { raw.clamp(0.0, cfg.max_total) };

        log::debug!(
            "quality: {} members, theme {:?} -> skill {skill_sum:.2} + comp {composition_bonus:.2} \
             + theme {theme_bonus:.2} + balance {balance_bonus:.2} + elite {elite_bonus:.2} = {total:.2}",
            team.len(),
            theme
        );

        QualityScore {
            skill_sum,
            composition_bonus,
            theme_bonus,
            balance_bonus,
            elite_bonus,
            total,
            tier: QualityTier::from_total(total),
            contributions,
        }
    }

    fn composition_bonus(&self, team: &[&Person]) -> f64 {
        let complete = Position::CORE
            .iter()
            .all(|pos| team.iter().any(|p| p.position == *pos));
        if complete {
            self.config.composition_bonus
        } else {
            0.0
        }
    }

    fn theme_bonus(&self, team: &[&Person], theme: Theme) -> f64 {
        let affinity = theme.affinity();
        let mut weighted = 0.0;
        let mut weight_total = 0.0;

        for position in [Position::Programmer, Position::Designer, Position::Artist] {
            let target = affinity.level_for(position).unwrap_or(0) as f64;
            if target <= 0.0 {
                continue;
            }
            weight_total += target;

            let levels: Vec<f64> = team
                .iter()
                .filter(|p| p.position == position)
                .map(|p| p.specialty_level() as f64)
                .collect();
            if levels.is_empty() {
                continue;
            }
            let avg = levels.iter().sum::<f64>() / levels.len() as f64;
            weighted += (avg / target).min(1.0) * target;
        }

        if weight_total <= 0.0 {
            return 0.0;
        }
        (self.config.theme_bonus_max * weighted / weight_total).clamp(0.0, self.config.theme_bonus_max)
    }

    fn balance_bonus(&self, team: &[&Person]) -> f64 {
        if team.len() <= 1 {
            return 0.0;
        }
        let levels: Vec<f64> = team.iter().map(|p| p.specialty_level() as f64).collect();
        let n = levels.len() as f64;
        let mean = levels.iter().sum::<f64>() / n;
        let variance = levels.iter().map(|l| (l - mean).powi(2)).sum::<f64>() / n;
        let stddev = variance.sqrt();

        let max = self.config.balance_bonus_max;
        (max - self.config.balance_stddev_weight * stddev).clamp(0.0, max)
    }

    fn elite_bonus(&self, team: &[&Person]) -> f64 {
        if team.is_empty() {
            return 0.0;
        }
        let elite = team
            .iter()
            .filter(|p| p.specialty_level() >= self.config.elite_level)
            .count();
        let ratio = elite as f64 / team.len() as f64;
        if ratio >= self.config.elite_ratio_threshold {
            self.config.elite_bonus_max * ratio
        } else {
            0.0
        }
    }
}
