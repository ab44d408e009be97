//! Snapshot serialization: a workforce and its staffing requests to/from JSON.
//!
//! A snapshot captures everything `allocate` needs: the pool and the
//! requests. It carries no derived state, so replaying the same snapshot
//! through the same config always yields the same plan.

use crate::{
    error::{EngineError, EngineResult},
    person::Person,
    project::StaffingRequest,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkforceSnapshot {
    /// Seed the snapshot was generated from, if it was generated.
    #[serde(default)]
    pub seed:      Option<u64>,
    pub employees: Vec<Person>,
    #[serde(default)]
    pub requests:  Vec<StaffingRequest>,
}

impl WorkforceSnapshot {
    pub fn new(employees: Vec<Person>, requests: Vec<StaffingRequest>) -> Self {
        Self { seed: None, employees, requests }
    }

    /// Read a snapshot file from disk.
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        let snapshot = Self::from_json(&content)
            .map_err(|e| anyhow::anyhow!("Invalid snapshot in {path}: {e}"))?;
        log::info!(
            "snapshot: loaded {path} ({} employees, {} requests)",
            snapshot.employees.len(),
            snapshot.requests.len()
        );
        Ok(snapshot)
    }

    pub fn from_json(json: &str) -> EngineResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> EngineResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn employee(&self, id: &str) -> Option<&Person> {
        self.employees.iter().find(|p| p.id == id)
    }

    /// Look up several employees at once, skipping unknown ids.
    pub fn employees_by_id(&self, ids: &[String]) -> Vec<Person> {
        ids.iter().filter_map(|id| self.employee(id)).cloned().collect()
    }

    /// Cheap structural checks: skills in range and ids unique.
    pub fn validate(&self) -> EngineResult<()> {
        let mut seen = BTreeSet::new();
        for person in &self.employees {
            person.validate()?;
            if !seen.insert(person.id.as_str()) {
                return Err(EngineError::DuplicatePerson { person_id: person.id.clone() });
            }
        }
        let mut projects = BTreeSet::new();
        for request in &self.requests {
            if !projects.insert(request.project.id.as_str()) {
                return Err(EngineError::DuplicateProject { project_id: request.project.id.clone() });
            }
        }
        Ok(())
    }
}
