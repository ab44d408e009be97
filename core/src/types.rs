//! Shared primitive types used across the entire engine.

/// A stable, unique identifier for an employee or candidate.
pub type PersonId = String;

/// A stable, unique identifier for a project.
pub type ProjectId = String;

/// Monetary amount (monthly salary), in whole currency units.
pub type Salary = u32;
