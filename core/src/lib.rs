//! Workforce matching and quality scoring for a game-studio simulation.
//!
//! Scores how well people fit requirements, checks phase staffing quotas,
//! rates team quality, allocates a shared pool across projects and matches
//! external candidates against postings. Everything is deterministic.

pub mod allocator;
pub mod config;
pub mod engine;
pub mod error;
pub mod fit_scorer;
pub mod generation;
pub mod name_generator;
pub mod person;
pub mod project;
pub mod quality;
pub mod recruitment;
pub mod requirement;
pub mod rng;
pub mod schedule;
pub mod skills;
pub mod snapshot;
pub mod staffing;
pub mod types;
