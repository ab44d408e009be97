//! Greedy, priority-ordered project staffing.
//!
//! ALGORITHM:
//!   1. Order requests by criteria priority (Urgent first), ties by project id asc.
//!   2. For each project, walk its phase quotas in fixed position order
//!      (Programmer, Designer, Artist, Sound Engineer, Customer Service).
//!      People already on the project's roster count first; the rest of the
//!      quota is filled with the best-ranked eligible people still in the
//!      pool. Each pick leaves the pool immediately.
//!   3. Validate the resulting roster against the phase.
//!      Satisfied   → record the roster and one rationale per person.
//!      Unsatisfied → record the rendered shortfall under failed_projects;
//!                    the picks are returned to the pool (ReleasePartial) or
//!                    kept and also listed in assignments (KeepPartial).
//!                    People already on the roster stay with the project
//!                    either way; under ReleasePartial they are listed in
//!                    the failure's `retained`.
//!
//! Every pool member ends up in exactly one of: an `assignments` roster, a
//! failure's `retained` list, or `unassigned`.
//!
//! Roster members are taken as given. They count toward quotas without being
//! checked against the request's criteria.
//!
//! There is no backtracking. A high-priority project can take the only
//! person a later project needed even when another assignment would have
//! staffed both; that is the accepted cost of a predictable, O(projects ×
//! positions × pool) pass.
//!
//! Working hours are never an eligibility gate. The plan only carries an
//! advisory flag per assigned person, supplied by a `WorkingHours`
//! collaborator.

use crate::{
    config::{AllocatorConfig, PartialPolicy},
    error::{EngineError, EngineResult},
    fit_scorer::{rank_order, FitScorer, ScoreBreakdown},
    person::Person,
    project::StaffingRequest,
    schedule::{AlwaysWorking, WorkingHours},
    staffing::{Shortfall, StaffingValidator, StaffingVerdict},
    types::{PersonId, ProjectId},
};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Write as _;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectFailure {
    pub message:    String,
    pub shortfalls: Vec<Shortfall>,
    /// Roster members who stay on the project but are not in `assignments`.
    #[serde(default)]
    pub retained:   Vec<PersonId>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssignmentPlan {
    /// Project id → person ids in assignment order (roster first).
    pub assignments:     BTreeMap<ProjectId, Vec<PersonId>>,
    pub rationales:      BTreeMap<ProjectId, Vec<String>>,
    pub failed_projects: BTreeMap<ProjectId, ProjectFailure>,
    /// Pool members left uncommitted, in pool order.
    pub unassigned:      Vec<PersonId>,
    /// Advisory: is each assigned or retained person currently within working hours.
    pub working_hours:   BTreeMap<PersonId, bool>,
}

impl AssignmentPlan {
    pub fn total_assigned_employees(&self) -> usize {
        self.assignments.values().map(Vec::len).sum()
    }

    /// Roster members of failed projects that are not listed in `assignments`.
    pub fn retained(&self) -> impl Iterator<Item = &PersonId> {
        self.failed_projects.values().flat_map(|f| f.retained.iter())
    }

    pub fn total_retained_employees(&self) -> usize {
        self.failed_projects.values().map(|f| f.retained.len()).sum()
    }

    pub fn project_of(&self, person_id: &str) -> Option<&ProjectId> {
        self.assignments
            .iter()
            .find(|(_, ids)| ids.iter().any(|id| id == person_id))
            .map(|(project_id, _)| project_id)
    }

    /// Assigned people the calendar reports as off shift right now.
    pub fn off_shift(&self) -> Vec<&PersonId> {
        self.working_hours
            .iter()
            .filter(|(_, on)| !**on)
            .map(|(id, _)| id)
            .collect()
    }

    pub fn summary(&self) -> String {
        let staffed = self
            .assignments
            .keys()
            .filter(|id| !self.failed_projects.contains_key(*id))
            .count();
        let mut out = format!(
            "assigned {} people to {} projects; {} projects could not be staffed; {} people left unassigned",
            self.total_assigned_employees(),
            staffed,
            self.failed_projects.len(),
            self.unassigned.len()
        );
        let retained = self.total_retained_employees();
        if retained > 0 {
            let _ = write!(out, "; {retained} people kept on unstaffed projects");
        }
        out
    }

    pub fn project_details(&self, project_id: &str) -> Option<String> {
        let people = self.assignments.get(project_id);
        let failure = self.failed_projects.get(project_id);
        if people.is_none() && failure.is_none() {
            return None;
        }

        let mut out = String::new();
        if let Some(people) = people {
            let _ = writeln!(out, "assigned {} people:", people.len());
            for (i, reason) in self.rationales.get(project_id).into_iter().flatten().enumerate() {
                let _ = writeln!(out, "  {}. {reason}", i + 1);
            }
        }
        if let Some(failure) = failure {
            let _ = writeln!(out, "not staffed: {}", failure.message);
            if !failure.retained.is_empty() {
                let _ = writeln!(out, "still on roster: {}", failure.retained.join(", "));
            }
        }
        Some(out)
    }
}

#[derive(Debug, Clone, Default)]
pub struct AssignmentAllocator {
    scorer:    FitScorer,
    validator: StaffingValidator,
    config:    AllocatorConfig,
}

impl AssignmentAllocator {
    pub fn new(scorer: FitScorer, config: AllocatorConfig) -> Self {
        Self {
            scorer,
            validator: StaffingValidator::new(),
            config,
        }
    }

    pub fn allocate(&self, requests: &[StaffingRequest], pool: &[Person]) -> EngineResult<AssignmentPlan> {
        self.allocate_with_calendar(requests, pool, &AlwaysWorking)
    }

    pub fn allocate_with_calendar(
        &self,
        requests: &[StaffingRequest],
        pool: &[Person],
        calendar: &dyn WorkingHours,
    ) -> EngineResult<AssignmentPlan> {
        let by_id = validate_inputs(requests, pool)?;

        // Everyone on some roster is spoken for before the run starts.
        let mut available: BTreeSet<&str> = pool.iter().map(|p| p.id.as_str()).collect();
        for request in requests {
            for id in &request.project.roster {
                available.remove(id.as_str());
            }
        }

        let mut order: Vec<&StaffingRequest> = requests.iter().collect();
        order.sort_by(|a, b| {
            b.priority()
                .cmp(&a.priority())
                .then_with(|| a.project.id.cmp(&b.project.id))
        });

        let mut plan = AssignmentPlan::default();

        for request in order {
            let project = &request.project;
            let existing: Vec<&Person> = project
                .roster
                .iter()
                .filter_map(|id| by_id.get(id.as_str()).copied())
                .collect();
            let mut picks: Vec<(&Person, ScoreBreakdown)> = Vec::new();

            for (position, required) in project.phase.required_positions() {
                let have = existing.iter().filter(|p| p.position == position).count() as u32;
                let needed = required.saturating_sub(have);
                if needed == 0 {
                    continue;
                }

                let criteria = request.criteria.narrowed_to(position);
                let mut ranked: Vec<ScoreBreakdown> = pool
                    .iter()
                    .filter(|p| available.contains(p.id.as_str()))
                    .map(|p| self.scorer.evaluate(p, &criteria))
                    .filter(ScoreBreakdown::is_eligible)
                    .collect();
                ranked.sort_by(rank_order);

                for breakdown in ranked.into_iter().take(needed as usize) {
                    available.remove(breakdown.person_id.as_str());
                    if let Some(&person) = by_id.get(breakdown.person_id.as_str()) {
                        log::debug!(
                            "allocator: {} -> {} as {position} (fit {:.3})",
                            person.id,
                            project.id,
                            breakdown.score
                        );
                        picks.push((person, breakdown));
                    }
                }
            }

            let team: Vec<&Person> = existing
                .iter()
                .copied()
                .chain(picks.iter().map(|(p, _)| *p))
                .collect();
            let verdict = self.validator.check(&project.phase, team.iter().copied());

            let rationales: Vec<String> = existing
                .iter()
                .map(|p| format!("{} ({}): already on project", p.name, p.position))
                .chain(picks.iter().map(|(p, b)| rationale(p, b)))
                .collect();
            let team_ids: Vec<PersonId> = team.iter().map(|p| p.id.clone()).collect();

            match verdict {
                StaffingVerdict::Satisfied => {
                    log::info!(
                        "allocator: project {} staffed with {} people ({} new)",
                        project.id,
                        team.len(),
                        picks.len()
                    );
                    plan.assignments.insert(project.id.clone(), team_ids);
                    plan.rationales.insert(project.id.clone(), rationales);
                }
                StaffingVerdict::Unsatisfied { shortfalls } => {
                    let roster: Vec<Person> = team.iter().map(|p| (*p).clone()).collect();
                    let message = self.validator.render(&project.phase, &roster, &shortfalls);
                    log::warn!("allocator: project {} not staffed: {message}", project.id);

                    let mut retained = Vec::new();
                    match self.config.partial_policy {
                        PartialPolicy::ReleasePartial => {
                            for &(person, _) in &picks {
                                available.insert(person.id.as_str());
                            }
                            retained = existing.iter().map(|p| p.id.clone()).collect();
                        }
                        PartialPolicy::KeepPartial => {
                            if !team_ids.is_empty() {
                                plan.assignments.insert(project.id.clone(), team_ids);
                                plan.rationales.insert(project.id.clone(), rationales);
                            }
                        }
                    }
                    plan.failed_projects.insert(
                        project.id.clone(),
                        ProjectFailure { message, shortfalls, retained },
                    );
                }
            }
        }

        plan.unassigned = pool
            .iter()
            .filter(|p| available.contains(p.id.as_str()))
            .map(|p| p.id.clone())
            .collect();

        let placed: Vec<PersonId> = plan
            .assignments
            .values()
            .flatten()
            .chain(plan.retained())
            .cloned()
            .collect();
        for id in placed {
            if let Some(person) = by_id.get(id.as_str()) {
                let on_shift = calendar.is_working(person);
                plan.working_hours.insert(id, on_shift);
            }
        }

        log::info!("allocator: {}", plan.summary());
        Ok(plan)
    }
}

fn rationale(person: &Person, breakdown: &ScoreBreakdown) -> String {
    format!(
        "{} ({}): skill match {:.0}%, specialty {}",
        person.name,
        person.position,
        breakdown.score * 100.0,
        breakdown.specialty_level
    )
}

/// Fail fast on malformed input. Returns the pool indexed by id.
fn validate_inputs<'a>(
    requests: &[StaffingRequest],
    pool: &'a [Person],
) -> EngineResult<BTreeMap<&'a str, &'a Person>> {
    if !requests.is_empty() && pool.is_empty() {
        return Err(EngineError::EmptyPool);
    }

    let mut by_id = BTreeMap::new();
    for person in pool {
        person.validate()?;
        if by_id.insert(person.id.as_str(), person).is_some() {
            return Err(EngineError::DuplicatePerson { person_id: person.id.clone() });
        }
    }

    let mut project_ids = BTreeSet::new();
    let mut rostered = BTreeSet::new();
    for request in requests {
        let project = &request.project;
        if !project_ids.insert(project.id.as_str()) {
            return Err(EngineError::DuplicateProject { project_id: project.id.clone() });
        }
        project.phase.validate()?;
        request.criteria.validate()?;
        for id in &project.roster {
            if !by_id.contains_key(id.as_str()) {
                return Err(EngineError::UnknownPerson {
                    project_id: project.id.clone(),
                    person_id: id.clone(),
                });
            }
            if !rostered.insert(id.as_str()) {
                return Err(EngineError::DuplicatePerson { person_id: id.clone() });
            }
        }
    }

    Ok(by_id)
}
