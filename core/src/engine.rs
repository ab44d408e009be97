//! The workforce engine: one config, every component wired to it.
//!
//! COMPONENTS:
//!   1. FitScorer            person vs requirement, [0, 1]
//!   2. StaffingValidator    roster vs phase quotas
//!   3. TeamQualityScorer    roster + theme → 0–10 composite
//!   4. AssignmentAllocator  requests + pool → AssignmentPlan
//!   5. RecruitmentMatcher   candidate vs posting → MatchResult
//!
//! RULES:
//!   - Every operation is a pure function of its inputs and the config.
//!   - No operation mutates the people or projects it is given.
//!   - The engine holds no run state; one instance can serve any number of
//!     independent calls.

use crate::{
    allocator::{AssignmentAllocator, AssignmentPlan},
    config::EngineConfig,
    error::EngineResult,
    fit_scorer::{FitScorer, ScoreBreakdown},
    person::Person,
    project::{PhaseSpec, StaffingRequest, Theme},
    quality::{QualityScore, TeamQualityScorer},
    recruitment::{MatchResult, RecruitmentMatcher},
    requirement::RequirementSpec,
    schedule::WorkingHours,
    snapshot::WorkforceSnapshot,
    staffing::{StaffingValidator, StaffingVerdict},
};

#[derive(Debug, Clone)]
pub struct WorkforceEngine {
    config:    EngineConfig,
    scorer:    FitScorer,
    validator: StaffingValidator,
    quality:   TeamQualityScorer,
    allocator: AssignmentAllocator,
    matcher:   RecruitmentMatcher,
}

impl WorkforceEngine {
    /// Build an engine from a validated config.
    pub fn new(config: EngineConfig) -> EngineResult<Self> {
        config.validate()?;
        Ok(Self::wire(config))
    }

    /// Engine with the reference config. Use in tests and demos.
    pub fn with_defaults() -> Self {
        Self::wire(EngineConfig::default())
    }

    fn wire(config: EngineConfig) -> Self {
        let scorer = FitScorer::new(config.fit.clone());
        Self {
            validator: StaffingValidator::new(),
            quality:   TeamQualityScorer::from_validated(config.quality.clone()),
            allocator: AssignmentAllocator::new(scorer.clone(), config.allocator.clone()),
            matcher:   RecruitmentMatcher::new(scorer.clone(), config.recruitment.clone()),
            scorer,
            config,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn validate_staffing(&self, phase: &PhaseSpec, roster: &[Person]) -> EngineResult<StaffingVerdict> {
        self.validator.validate(phase, roster)
    }

    /// Shortfall message for a roster, or "staffing complete".
    pub fn describe_staffing(&self, phase: &PhaseSpec, roster: &[Person]) -> EngineResult<String> {
        let verdict = self.validator.validate(phase, roster)?;
        Ok(self.validator.render(phase, roster, verdict.shortfalls()))
    }

    pub fn score_fit(&self, person: &Person, req: &RequirementSpec) -> EngineResult<ScoreBreakdown> {
        self.scorer.score(person, req)
    }

    pub fn rank(&self, people: &[Person], req: &RequirementSpec) -> EngineResult<Vec<ScoreBreakdown>> {
        self.scorer.rank(people, req)
    }

    pub fn score_team(&self, roster: &[Person], theme: Theme) -> EngineResult<QualityScore> {
        self.quality.score_team(roster, theme)
    }

    pub fn allocate(&self, requests: &[StaffingRequest], pool: &[Person]) -> EngineResult<AssignmentPlan> {
        self.allocator.allocate(requests, pool)
    }

    pub fn allocate_with_calendar(
        &self,
        requests: &[StaffingRequest],
        pool: &[Person],
        calendar: &dyn WorkingHours,
    ) -> EngineResult<AssignmentPlan> {
        self.allocator.allocate_with_calendar(requests, pool, calendar)
    }

    /// Allocate a snapshot's requests over its own employees.
    pub fn allocate_snapshot(&self, snapshot: &WorkforceSnapshot) -> EngineResult<AssignmentPlan> {
        self.allocator.allocate(&snapshot.requests, &snapshot.employees)
    }

    pub fn match_candidate(&self, candidate: &Person, config: &RequirementSpec) -> EngineResult<MatchResult> {
        self.matcher.match_candidate(candidate, config)
    }

    pub fn rank_candidates(&self, candidates: &[Person], config: &RequirementSpec) -> EngineResult<Vec<MatchResult>> {
        self.matcher.rank_candidates(candidates, config)
    }

    pub fn matcher(&self) -> &RecruitmentMatcher {
        &self.matcher
    }
}

impl Default for WorkforceEngine {
    fn default() -> Self {
        Self::with_defaults()
    }
}
