//! Recruitment matching: external candidates against a posting.
//!
//! The fit score comes straight from `FitScorer`. The recruitment
//! probability is a monotonic curve of that score:
//!
//!   p = fit ^ fit_exponent × reputation × competitiveness
//!
//! where competitiveness falls linearly from 1.0 to (1 - penalty) as the
//! candidate's salary climbs from `competitiveness_start × ceiling` up to the
//! ceiling itself. A candidate asking that much is likely weighing other
//! offers. The result is clamped to [0, 1].
//!
//! Matching never hires anyone; `roll_hire` is offered for callers that
//! want a seeded accept/decline decision.

use crate::{
    config::RecruitmentModel,
    error::EngineResult,
    fit_scorer::{clamp_unit, rank_order, FitScorer, ScoreBreakdown},
    person::Person,
    requirement::RequirementSpec,
    rng::EngineRng,
    types::{PersonId, Salary},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MatchGrade {
    S,
    A,
    B,
    C,
    D,
}

impl MatchGrade {
    pub fn from_score(score: f64) -> Self {
        match score {
            s if s >= 0.9 => Self::S,
            s if s >= 0.8 => Self::A,
            s if s >= 0.7 => Self::B,
            s if s >= 0.6 => Self::C,
            _ => Self::D,
        }
    }

    pub fn recommendation(&self) -> &'static str {
        match self {
            Self::S => "strongly recommended: meets every requirement, hire now",
            Self::A => "recommended: meets the core requirements",
            Self::B => "possible: partial fit, needs a closer look",
            Self::C => "marginal: barely fits, hire with caution",
            Self::D => "not recommended: does not meet the basic requirements",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub candidate_id:     PersonId,
    /// Fit score in [0, 1].
    pub score:            f64,
    /// Chance the candidate accepts an offer, in [0, 1].
    pub probability:      f64,
    pub auto_approve_met: bool,
    pub grade:            MatchGrade,
    pub breakdown:        ScoreBreakdown,
}

impl MatchResult {
    pub fn is_eligible(&self) -> bool {
        self.breakdown.is_eligible()
    }
}

#[derive(Debug, Clone, Default)]
pub struct RecruitmentMatcher {
    scorer: FitScorer,
    model:  RecruitmentModel,
}

impl RecruitmentMatcher {
    pub fn new(scorer: FitScorer, model: RecruitmentModel) -> Self {
        Self { scorer, model }
    }

    /// Override the reputation modifier supplied by the economy side.
    pub fn with_reputation(mut self, modifier: f64) -> Self {
        self.model.reputation_modifier = if modifier.is_finite() { modifier.max(0.0) } else { 0.0 };
        self
    }

    pub fn match_candidate(&self, candidate: &Person, config: &RequirementSpec) -> EngineResult<MatchResult> {
        let breakdown = self.scorer.score(candidate, config)?;
        Ok(self.build_result(candidate, config, breakdown))
    }

    /// Every candidate, best first. Ineligible candidates sink to the bottom
    /// with score 0 rather than disappearing.
    pub fn rank_candidates(
        &self,
        candidates: &[Person],
        config: &RequirementSpec,
    ) -> EngineResult<Vec<MatchResult>> {
        config.validate()?;
        let mut results = Vec::with_capacity(candidates.len());
        for candidate in candidates {
            candidate.validate()?;
            let breakdown = self.scorer.evaluate(candidate, config);
            results.push(self.build_result(candidate, config, breakdown));
        }
        results.sort_by(|a, b| rank_order(&a.breakdown, &b.breakdown));
        log::debug!(
            "recruitment: ranked {} candidates, {} eligible",
            results.len(),
            results.iter().filter(|r| r.is_eligible()).count()
        );
        Ok(results)
    }

    /// Bernoulli accept/decline draw at the match's probability.
    /// Ineligible matches always decline.
    pub fn roll_hire(&self, result: &MatchResult, rng: &mut EngineRng) -> bool {
        result.is_eligible() && rng.chance(result.probability)
    }

    fn build_result(&self, candidate: &Person, config: &RequirementSpec, breakdown: ScoreBreakdown) -> MatchResult {
        let score = breakdown.score;
        let probability = if breakdown.is_eligible() {
            self.probability(score, candidate.salary, config.max_salary)
        } else {
            0.0
        };
        let auto_approve_met = breakdown.is_eligible() && score >= config.auto_approve_threshold;

        MatchResult {
            candidate_id: candidate.id.clone(),
            score,
            probability,
            auto_approve_met,
            grade: MatchGrade::from_score(score),
            breakdown,
        }
    }

    fn probability(&self, score: f64, salary: Salary, cap: Option<Salary>) -> f64 {
        let m = &self.model;
        let base = clamp_unit(score).powf(m.fit_exponent);
        clamp_unit(base * m.reputation_modifier * self.competitiveness(salary, cap))
    }

    fn competitiveness(&self, salary: Salary, cap: Option<Salary>) -> f64 {
        let cap = match cap {
            Some(c) if c > 0 => c as f64,
            _ => return 1.0,
        };
        let m = &self.model;
        let ratio = salary as f64 / cap;
        let pressure = if m.competitiveness_start >= 1.0 {
            if ratio >= 1.0 { 1.0 } else { 0.0 }
        } else {
            ((ratio - m.competitiveness_start) / (1.0 - m.competitiveness_start)).clamp(0.0, 1.0)
        };
        1.0 - m.competitiveness_penalty * pressure
    }
}
