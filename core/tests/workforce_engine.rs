use workforce_core::{
    engine::WorkforceEngine,
    person::Person,
    project::{DevelopmentPhase, PhaseSpec, Project, StaffingRequest, Theme},
    requirement::{Priority, RequirementSpec},
    skills::Position,
};

// ── Helpers ──────────────────────────────────────────────────────────────────

fn studio() -> Vec<Person> {
    vec![
        Person::specialist("e-1", "Aiko Tanaka", Position::Programmer, 7, 9_000).with_experience(6),
        Person::specialist("e-2", "Bruno Costa", Position::Designer, 6, 7_000).with_experience(4),
        Person::specialist("e-3", "Chloe Moreau", Position::Artist, 5, 7_500).with_experience(3),
        Person::specialist("e-4", "Diego Santos", Position::SoundEngineer, 5, 5_500).with_experience(3),
        Person::specialist("e-5", "Elena Petrov", Position::CustomerService, 4, 3_500),
    ]
}

// ── Tests ────────────────────────────────────────────────────────────────────

/// One staffed phase walked end to end through the facade: validate, allocate,
/// then rate the team that came out.
#[test]
fn staffing_flow_through_the_engine() {
    let engine = WorkforceEngine::with_defaults();
    let pool = studio();

    let design = PhaseSpec::from(DevelopmentPhase::Design);
    assert!(!engine.validate_staffing(&design, &[]).unwrap().is_satisfied());
    assert_eq!(
        engine.describe_staffing(&design, &[]).unwrap(),
        "still need: 1 × Designer"
    );

    let whole_team = PhaseSpec::new(
        "vertical_slice",
        Position::CORE.iter().map(|p| (*p, 1)),
    );
    let request = StaffingRequest::new(Project::new("p-1", "Neon Orbit", Theme::Casual, whole_team))
        .with_priority(Priority::High);

    let plan = engine.allocate(&[request], &pool).unwrap();
    let assigned = &plan.assignments["p-1"];
    assert_eq!(assigned.len(), 4);
    assert_eq!(plan.unassigned, vec!["e-5".to_string()]);

    let roster: Vec<Person> = pool
        .iter()
        .filter(|p| assigned.contains(&p.id))
        .cloned()
        .collect();
    let quality = engine.score_team(&roster, Theme::Casual).unwrap();
    assert_eq!(quality.composition_bonus, 1.2);
    assert!(quality.total > 7.0, "a complete level 5+ team should score well: {}", quality.total);

    let details = plan.project_details("p-1").unwrap();
    assert!(details.starts_with("assigned 4 people:"), "{details}");
    assert!(details.contains("Aiko Tanaka (Programmer): skill match"), "{details}");
}

#[test]
fn fit_and_match_agree_on_score() {
    let engine = WorkforceEngine::with_defaults();
    let person = &studio()[0];
    let posting = RequirementSpec::senior_programmer();

    let fit = engine.score_fit(person, &posting).unwrap();
    let matched = engine.match_candidate(person, &posting).unwrap();

    assert_eq!(fit.score, matched.score);
    assert_eq!(matched.breakdown, fit);
}

#[test]
fn rank_only_returns_eligible_people() {
    let engine = WorkforceEngine::with_defaults();

    let ranked = engine.rank(&studio(), &RequirementSpec::artist()).unwrap();
    let candidates = engine.rank_candidates(&studio(), &RequirementSpec::artist()).unwrap();

    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].person_id, "e-3");
    assert_eq!(candidates.len(), 5);
    assert_eq!(candidates[0].candidate_id, "e-3");
}

#[test]
fn default_engine_uses_reference_config() {
    let engine = WorkforceEngine::default();

    assert_eq!(engine.config().quality.skill_sum_cap, 4.5);
    assert_eq!(engine.config().fit.specialty_weight, 0.60);
}
