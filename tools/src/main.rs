//! workforce-runner: headless allocation runner.
//!
//! Usage:
//!   workforce-runner --seed 12345 --pool 60 --projects 8
//!   workforce-runner --snapshot studio.json --config data/engine_config.json
//!   workforce-runner --seed 7 --json
//!   workforce-runner --seed 7 --save-snapshot studio.json --at 2026-10-19T20:30:00
//!   workforce-runner --seed 7 --recruit senior_programmer --candidates 10

use anyhow::Result;
use chrono::NaiveDateTime;
use std::env;
use workforce_core::{
    allocator::AssignmentPlan,
    config::EngineConfig,
    engine::WorkforceEngine,
    generation::{generate_candidates, generate_snapshot},
    person::Person,
    quality::QualityScore,
    recruitment::MatchResult,
    requirement::RequirementSpec,
    rng::{RngBank, RngSlot},
    schedule::{AlwaysWorking, ScheduleClock, WorkingHours},
    snapshot::WorkforceSnapshot,
    types::{PersonId, ProjectId},
};

#[derive(serde::Serialize)]
struct RunOutput<'a> {
    seed:    Option<u64>,
    plan:    &'a AssignmentPlan,
    quality: Vec<(ProjectId, QualityScore)>,
}

#[derive(serde::Serialize)]
struct RecruitOutput<'a> {
    seed:       u64,
    template:   &'a str,
    candidates: &'a [Person],
    ranking:    &'a [MatchResult],
    hired:      &'a [PersonId],
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let seed = parse_arg(&args, "--seed", 42u64);
    let pool = parse_arg(&args, "--pool", 40usize);
    let projects = parse_arg(&args, "--projects", 6usize);
    let json = args.iter().any(|a| a == "--json");
    let snapshot_path = string_arg(&args, "--snapshot");
    let config_path = string_arg(&args, "--config");
    let save_path = string_arg(&args, "--save-snapshot");
    let at = string_arg(&args, "--at");
    let recruit = string_arg(&args, "--recruit");
    let candidates = parse_arg(&args, "--candidates", 8usize);

    let config = match config_path {
        Some(path) => EngineConfig::load_file(path)?,
        None => EngineConfig::load("./data").unwrap_or_else(|e| {
            log::warn!("runner: {e}; using built-in defaults");
            EngineConfig::default()
        }),
    };
    let engine = WorkforceEngine::new(config)?;

    if let Some(template) = recruit {
        return run_recruitment(&engine, seed, template, candidates, json);
    }

    let snapshot = match snapshot_path {
        Some(path) => WorkforceSnapshot::load(path)?,
        None => generate_snapshot(seed, pool, projects),
    };
    snapshot.validate()?;

    if let Some(path) = save_path {
        std::fs::write(path, snapshot.to_json()?)
            .map_err(|e| anyhow::anyhow!("Cannot write {path}: {e}"))?;
        log::info!("runner: snapshot written to {path}");
    }

    let calendar: Box<dyn WorkingHours> = match at {
        Some(raw) => {
            let now = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
                .map_err(|e| anyhow::anyhow!("Cannot parse --at {raw}: {e}"))?;
            Box::new(ScheduleClock::at(now))
        }
        None => Box::new(AlwaysWorking),
    };

    let plan = engine.allocate_with_calendar(&snapshot.requests, &snapshot.employees, calendar.as_ref())?;
    let quality = team_scores(&engine, &snapshot, &plan)?;

    if json {
        let output = RunOutput { seed: snapshot.seed, plan: &plan, quality };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("Workforce runner");
    match snapshot_path {
        Some(path) => println!("  snapshot:  {path}"),
        None => println!("  seed:      {seed}"),
    }
    println!("  employees: {}", snapshot.employees.len());
    println!("  projects:  {}", snapshot.requests.len());
    println!();

    print_summary(&snapshot, &plan, &quality);
    Ok(())
}

/// Generate candidates for a posting template, rank them and roll a hire
/// decision for each eligible one.
fn run_recruitment(engine: &WorkforceEngine, seed: u64, template: &str, count: usize, json: bool) -> Result<()> {
    let posting = RequirementSpec::template(template).ok_or_else(|| {
        anyhow::anyhow!(
            "Unknown template {template}; expected one of {}",
            RequirementSpec::TEMPLATE_NAMES.join(", ")
        )
    })?;

    let bank = RngBank::new(seed);
    let mut candidate_rng = bank.for_slot(RngSlot::Candidates);
    let mut hiring_rng = bank.for_slot(RngSlot::Hiring);

    let candidates = generate_candidates(&mut candidate_rng, &posting, count);
    let ranking = engine.rank_candidates(&candidates, &posting)?;
    let hired: Vec<PersonId> = ranking
        .iter()
        .filter(|r| engine.matcher().roll_hire(r, &mut hiring_rng))
        .map(|r| r.candidate_id.clone())
        .collect();
    log::info!(
        "runner: {template}: {} candidates, {} eligible, {} accepted",
        ranking.len(),
        ranking.iter().filter(|r| r.is_eligible()).count(),
        hired.len()
    );

    if json {
        let output = RecruitOutput {
            seed,
            template,
            candidates: &candidates,
            ranking: &ranking,
            hired: &hired,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("=== RECRUITMENT: {template} (seed {seed}) ===");
    for (i, result) in ranking.iter().enumerate() {
        let name = candidates
            .iter()
            .find(|c| c.id == result.candidate_id)
            .map(|c| c.name.as_str())
            .unwrap_or("?");
        let outcome = if hired.contains(&result.candidate_id) { "accepted" } else { "declined" };
        println!(
            "  {:>2}. {} {:<22} {:?}  score {:.2}  p(accept) {:.2}  {}{}",
            i + 1,
            result.candidate_id,
            name,
            result.grade,
            result.score,
            result.probability,
            outcome,
            if result.auto_approve_met { "  [auto-approve]" } else { "" }
        );
    }
    println!();
    println!("  {} of {} accepted", hired.len(), ranking.len());
    Ok(())
}

/// Quality of every project that ended up with people on it.
fn team_scores(
    engine: &WorkforceEngine,
    snapshot: &WorkforceSnapshot,
    plan: &AssignmentPlan,
) -> Result<Vec<(ProjectId, QualityScore)>> {
    let mut scores = Vec::new();
    for request in &snapshot.requests {
        let Some(ids) = plan.assignments.get(&request.project.id) else {
            continue;
        };
        let roster = snapshot.employees_by_id(ids);
        scores.push((request.project.id.clone(), engine.score_team(&roster, request.project.theme)?));
    }
    Ok(scores)
}

fn print_summary(snapshot: &WorkforceSnapshot, plan: &AssignmentPlan, quality: &[(ProjectId, QualityScore)]) {
    println!("=== RUN SUMMARY ===");
    println!("  {}", plan.summary());
    println!();

    for request in &snapshot.requests {
        let project = &request.project;
        let Some(details) = plan.project_details(&project.id) else {
            continue;
        };
        println!(
            "--- {} \"{}\" ({}, {:?}, {:?}) ---",
            project.id, project.name, project.phase.name, project.theme, request.priority()
        );
        print!("{details}");
        if let Some((_, score)) = quality.iter().find(|(id, _)| id == &project.id) {
            println!(
                "  quality: {:.2} ({:?}) = skill {:.2} + comp {:.2} + theme {:.2} + balance {:.2} + elite {:.2}",
                score.total,
                score.tier,
                score.skill_sum,
                score.composition_bonus,
                score.theme_bonus,
                score.balance_bonus,
                score.elite_bonus
            );
        }
        println!();
    }

    let off_shift = plan.off_shift();
    if !off_shift.is_empty() {
        println!("=== OFF SHIFT ({}) ===", off_shift.len());
        for id in off_shift {
            println!("  {id}");
        }
    }
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}

fn string_arg<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}
