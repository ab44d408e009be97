use workforce_core::{
    error::EngineError,
    person::Person,
    project::{DevelopmentPhase, PhaseSpec},
    skills::Position,
    staffing::{Shortfall, StaffingValidator, StaffingVerdict},
};

// ── Helpers ──────────────────────────────────────────────────────────────────

fn person(id: &str, position: Position) -> Person {
    Person::specialist(id, format!("Person {id}"), position, 5, 5_000)
}

// ── Verdicts ─────────────────────────────────────────────────────────────────

/// An empty roster against a one-designer phase yields exactly one shortfall.
#[test]
fn empty_roster_reports_every_quota() {
    let validator = StaffingValidator::new();
    let phase = PhaseSpec::from(DevelopmentPhase::Design);

    let verdict = validator.validate(&phase, &[]).unwrap();

    assert_eq!(
        verdict,
        StaffingVerdict::Unsatisfied {
            shortfalls: vec![Shortfall { position: Position::Designer, required: 1, current: 0 }],
        }
    );
}

/// Both missing roles are listed with current = 0, and the rendered message
/// names exactly those two.
#[test]
fn programmer_and_designer_phase_with_nobody() {
    let validator = StaffingValidator::new();
    let phase = PhaseSpec::new("prototype", [(Position::Programmer, 1), (Position::Designer, 1)]);

    let verdict = validator.validate(&phase, &[]).unwrap();

    assert_eq!(verdict.shortfalls().len(), 2);
    assert!(verdict.shortfalls().iter().all(|s| s.current == 0 && s.required == 1));
    assert_eq!(
        validator.render(&phase, &[], verdict.shortfalls()),
        "still need: 1 × Programmer, 1 × Designer"
    );
}

/// Validating twice gives the same verdict; nothing is remembered between calls.
#[test]
fn validation_is_idempotent() {
    let validator = StaffingValidator::new();
    let phase = PhaseSpec::from(DevelopmentPhase::ArtSound);
    let roster = vec![person("e-1", Position::Artist)];

    let first = validator.validate(&phase, &roster).unwrap();
    let second = validator.validate(&phase, &roster).unwrap();

    assert_eq!(first, second);
}

/// Positions the phase does not ask for never block a verdict.
#[test]
fn extra_positions_do_not_matter() {
    let validator = StaffingValidator::new();
    let phase = PhaseSpec::from(DevelopmentPhase::Programming);
    let roster = vec![
        person("e-1", Position::Programmer),
        person("e-2", Position::Artist),
        person("e-3", Position::CustomerService),
    ];

    let verdict = validator.validate(&phase, &roster).unwrap();

    assert!(verdict.is_satisfied());
    assert!(verdict.shortfalls().is_empty());
}

/// Shortfalls come out in position order and carry the current count.
#[test]
fn partial_roster_lists_each_missing_position() {
    let validator = StaffingValidator::new();
    let phase = PhaseSpec::from(DevelopmentPhase::FullProduction);
    let roster = vec![
        person("e-1", Position::Programmer),
        person("e-2", Position::Programmer),
        person("e-3", Position::Designer),
    ];

    let verdict = validator.validate(&phase, &roster).unwrap();
    let shortfalls = verdict.shortfalls();

    let positions: Vec<Position> = shortfalls.iter().map(|s| s.position).collect();
    assert_eq!(
        positions,
        vec![Position::Programmer, Position::Designer, Position::Artist, Position::SoundEngineer]
    );
    assert_eq!(shortfalls[0].current, 2);
    assert_eq!(shortfalls[0].missing(), 3);
    assert_eq!(shortfalls[2].missing(), 5);
}

/// Meeting the quota exactly is enough; surplus is fine.
#[test]
fn exact_and_surplus_counts_satisfy() {
    let validator = StaffingValidator::new();
    let phase = PhaseSpec::new("duo", [(Position::Artist, 2)]);

    let exact = vec![person("e-1", Position::Artist), person("e-2", Position::Artist)];
    let mut surplus = exact.clone();
    surplus.push(person("e-3", Position::Artist));

    assert!(validator.validate(&phase, &exact).unwrap().is_satisfied());
    assert!(validator.validate(&phase, &surplus).unwrap().is_satisfied());
}

// ── Errors ───────────────────────────────────────────────────────────────────

#[test]
fn phase_without_quotas_is_invalid() {
    let validator = StaffingValidator::new();
    let phase = PhaseSpec::new("nothing", Vec::<(Position, u32)>::new());

    let err = validator.validate(&phase, &[]).unwrap_err();

    assert!(matches!(err, EngineError::EmptyPhase { .. }), "unexpected error: {err}");
}

#[test]
fn duplicate_roster_entry_is_invalid() {
    let validator = StaffingValidator::new();
    let phase = PhaseSpec::from(DevelopmentPhase::Programming);
    let dev = person("e-1", Position::Programmer);

    let err = validator.validate(&phase, &[dev.clone(), dev]).unwrap_err();

    assert!(matches!(err, EngineError::DuplicatePerson { ref person_id } if person_id == "e-1"));
}

// ── Rendering ────────────────────────────────────────────────────────────────

#[test]
fn render_lists_only_what_is_missing() {
    let validator = StaffingValidator::new();
    let phase = PhaseSpec::from(DevelopmentPhase::ArtSound);

    let verdict = validator.validate(&phase, &[]).unwrap();
    let message = validator.render(&phase, &[], verdict.shortfalls());

    assert_eq!(message, "still need: 1 × Artist, 1 × Sound Engineer");
}

/// When part of the phase is staffed, the message opens with it.
#[test]
fn render_mentions_existing_staff() {
    let validator = StaffingValidator::new();
    let phase = PhaseSpec::from(DevelopmentPhase::ArtSound);
    let roster = vec![person("e-1", Position::Artist)];

    let verdict = validator.validate(&phase, &roster).unwrap();
    let message = validator.render(&phase, &roster, verdict.shortfalls());

    assert_eq!(message, "already staffed: 1 × Artist; still need: 1 × Sound Engineer");
}

/// A shortfall recorded against an earlier phase must not leak into the
/// message for the current one.
#[test]
fn render_drops_stale_shortfalls() {
    let validator = StaffingValidator::new();
    let design = PhaseSpec::from(DevelopmentPhase::Design);
    let programming = PhaseSpec::from(DevelopmentPhase::Programming);

    let stale = validator.validate(&design, &[]).unwrap();
    let message = validator.render(&programming, &[], stale.shortfalls());

    assert_eq!(message, "staffing complete");
}
