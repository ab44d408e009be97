use workforce_core::{
    config::QualityConfig,
    error::EngineError,
    generation::generate_snapshot,
    person::Person,
    project::Theme,
    quality::{QualityTier, TeamQualityScorer},
    skills::Position,
};

// ── Helpers ──────────────────────────────────────────────────────────────────

fn member(id: &str, position: Position, level: u8) -> Person {
    Person::specialist(id, format!("Member {id}"), position, level, 6_000)
}

/// One level-5 specialist per core position.
fn reference_team() -> Vec<Person> {
    vec![
        member("e-1", Position::Programmer, 5),
        member("e-2", Position::Designer, 5),
        member("e-3", Position::Artist, 5),
        member("e-4", Position::SoundEngineer, 5),
    ]
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

// ── Reference values ─────────────────────────────────────────────────────────

/// The reference team maxes every term: 4.5 + 1.2 + 1.0 + 0.5 + 0.5.
#[test]
fn reference_team_scores_every_term() {
    let scorer = TeamQualityScorer::default();

    let score = scorer.score_team(&reference_team(), Theme::Casual).unwrap();

    assert_close(score.skill_sum, 4.5);
    assert_close(score.composition_bonus, 1.2);
    assert_close(score.theme_bonus, 1.0);
    assert_close(score.balance_bonus, 0.5);
    assert_close(score.elite_bonus, 0.5);
    assert_close(score.total, 7.7);
    assert_eq!(score.tier, QualityTier::Good);
    assert_eq!(score.contributions.len(), 4);
}

#[test]
fn empty_roster_scores_zero() {
    let scorer = TeamQualityScorer::default();

    let score = scorer.score_team(&[], Theme::Rpg).unwrap();

    assert_eq!(score.total, 0.0);
    assert_eq!(score.tier, QualityTier::Poor);
    assert!(score.contributions.is_empty());
}

// ── Individual terms ─────────────────────────────────────────────────────────

/// Composition is binary: drop the sound engineer and the 1.2 disappears.
#[test]
fn missing_core_position_loses_composition_bonus() {
    let scorer = TeamQualityScorer::default();
    let mut team = reference_team();
    team.retain(|p| p.position != Position::SoundEngineer);

    let score = scorer.score_team(&team, Theme::Casual).unwrap();

    assert_eq!(score.composition_bonus, 0.0);
    assert_close(score.skill_sum, 3.375);
    assert_close(score.total, 3.375 + 1.0 + 0.5 + 0.5);
}

/// Customer service contributes nothing, however skilled.
#[test]
fn customer_service_is_excluded() {
    let scorer = TeamQualityScorer::default();
    let mut team = reference_team();
    team.push(member("e-5", Position::CustomerService, 10));

    let with_cs = scorer.score_team(&team, Theme::Casual).unwrap();
    let without = scorer.score_team(&reference_team(), Theme::Casual).unwrap();

    assert_close(with_cs.total, without.total);
    assert!(with_cs.contributions.iter().all(|c| c.position != Position::CustomerService));
}

/// The skill-sum term never exceeds its cap.
#[test]
fn skill_sum_is_capped() {
    let scorer = TeamQualityScorer::default();
    let team: Vec<Person> = Position::CORE
        .iter()
        .enumerate()
        .map(|(i, pos)| member(&format!("e-{i}"), *pos, 10))
        .collect();

    let score = scorer.score_team(&team, Theme::Casual).unwrap();

    assert_close(score.skill_sum, 4.5);
    assert!(score.total <= 10.0);
}

/// 75% elite pays nothing; 80% pays 0.8 × 0.5.
#[test]
fn elite_bonus_requires_eighty_percent() {
    let scorer = TeamQualityScorer::default();

    let mut three_of_four = reference_team();
    three_of_four[3] = member("e-4", Position::SoundEngineer, 3);
    let below = scorer.score_team(&three_of_four, Theme::Casual).unwrap();
    assert_eq!(below.elite_bonus, 0.0);

    let mut four_of_five = reference_team();
    four_of_five.push(member("e-5", Position::Programmer, 2));
    let at = scorer.score_team(&four_of_five, Theme::Casual).unwrap();
    assert_close(at.elite_bonus, 0.4);
}

/// Balance shrinks with the spread of specialty levels.
#[test]
fn uneven_levels_reduce_balance_bonus() {
    let scorer = TeamQualityScorer::default();
    let team = vec![
        member("e-1", Position::Programmer, 5),
        member("e-2", Position::Designer, 5),
        member("e-3", Position::Artist, 5),
        member("e-4", Position::SoundEngineer, 3),
    ];

    let score = scorer.score_team(&team, Theme::Casual).unwrap();

    // levels 5,5,5,3: population stddev = sqrt(0.75)
    assert_close(score.balance_bonus, 0.5 - 0.25 * 0.75f64.sqrt());
}

#[test]
fn single_member_gets_no_balance_bonus() {
    let scorer = TeamQualityScorer::default();

    let score = scorer
        .score_team(&[member("e-1", Position::Programmer, 7)], Theme::Action)
        .unwrap();

    assert_eq!(score.balance_bonus, 0.0);
}

/// Theme match is weighted by the theme's affinity levels. Action wants
/// programmer 5, designer 2, artist 4: a lone level-2 programmer covers
/// 0.4 × 5 of 11 weight.
#[test]
fn theme_match_weights_by_affinity() {
    let scorer = TeamQualityScorer::default();

    let score = scorer
        .score_team(&[member("e-1", Position::Programmer, 2)], Theme::Action)
        .unwrap();

    assert_close(score.theme_bonus, 2.0 / 11.0);
}

// ── Config ───────────────────────────────────────────────────────────────────

/// A zero reference level would make every contribution infinite, so the
/// scorer refuses it up front.
#[test]
fn scorer_rejects_degenerate_config() {
    let zero_level = QualityConfig { reference_level: 0, ..QualityConfig::default() };
    let err = TeamQualityScorer::new(zero_level).unwrap_err();
    assert!(matches!(err, EngineError::InvalidConfig { .. }), "unexpected error: {err}");

    let negative_cap = QualityConfig { skill_sum_cap: -1.0, ..QualityConfig::default() };
    assert!(TeamQualityScorer::new(negative_cap).is_err());

    let custom = QualityConfig { composition_bonus: 2.0, ..QualityConfig::default() };
    let score = TeamQualityScorer::new(custom)
        .unwrap()
        .score_team(&reference_team(), Theme::Casual)
        .unwrap();
    assert_close(score.composition_bonus, 2.0);
}

// ── Properties ───────────────────────────────────────────────────────────────

/// Totals stay in [0, 10] for every generated team and every theme, and
/// member order does not change the result.
#[test]
fn totals_are_bounded_and_order_independent() {
    let scorer = TeamQualityScorer::default();
    let snapshot = generate_snapshot(2718, 120, 0);

    for (i, team) in snapshot.employees.chunks(6).enumerate() {
        let theme = Theme::ALL[i % Theme::ALL.len()];
        let forward = scorer.score_team(team, theme).unwrap();

        let mut reversed = team.to_vec();
        reversed.reverse();
        let backward = scorer.score_team(&reversed, theme).unwrap();

        assert!((0.0..=10.0).contains(&forward.total), "total out of range: {}", forward.total);
        assert!((forward.total - forward.raw_sum().clamp(0.0, 10.0)).abs() < 1e-12);
        assert!(
            (forward.total - backward.total).abs() < 1e-9,
            "order changed the total: {} vs {}",
            forward.total,
            backward.total
        );
    }
}
