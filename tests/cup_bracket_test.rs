use chrono::NaiveDate;

use torneo_backend::cup::bracket::{build_bracket, parse_result};
use torneo_backend::models::category::Category;
use torneo_backend::models::cup::{CupChampion, SlotState};
use torneo_backend::models::fixture::{CompetitionType, CupPhase, Fixture};

fn knockout_fixture(id: i64, fase: CupPhase, casa: &str, trasferta: &str) -> Fixture {
    Fixture {
        id,
        category: Category::Calcio5,
        squadra_casa: Some(casa.to_string()),
        squadra_trasferta: Some(trasferta.to_string()),
        tipo_competizione: Some(CompetitionType::Coppa),
        fase_coppa: Some(fase),
        ..Fixture::default()
    }
}

fn champion(squadra: &str, anno: i32) -> CupChampion {
    CupChampion {
        id: 1,
        category: Category::Calcio5,
        squadra: squadra.to_string(),
        anno,
        data_vittoria: chrono::Utc::now(),
    }
}

#[test]
fn parse_result_accepts_canonical_scores() {
    assert_eq!(parse_result("3-1"), Some((3, 1)));
    assert_eq!(parse_result("0-0"), Some((0, 0)));
    assert_eq!(parse_result(" 2 - 4 "), Some((2, 4)));
    assert_eq!(parse_result("10-9"), Some((10, 9)));
}

#[test]
fn parse_result_rejects_malformed_scores() {
    assert_eq!(parse_result("3:1"), None);
    assert_eq!(parse_result("3-"), None);
    assert_eq!(parse_result("-1"), None);
    assert_eq!(parse_result("tre-uno"), None);
    assert_eq!(parse_result(""), None);
}

#[test]
fn empty_input_yields_full_placeholder_template() {
    // Act
    let view = build_bracket(Vec::new(), Vec::new(), None, None, 2026);

    // Assert: the template shape is fixed even with nothing published.
    assert!(!view.has_data);
    assert_eq!(view.quarti.len(), 4);
    assert_eq!(view.semifinali.len(), 2);
    assert!(view.quarti.iter().all(|s| s.is_placeholder()));
    assert!(view.semifinali.iter().all(|s| s.is_placeholder()));
    assert!(view.finale.is_placeholder());
    assert!(!view.vincitore.assigned);
    assert_eq!(view.vincitore.anno, 2026);
}

#[test]
fn three_quarterfinals_leave_one_placeholder() {
    // Arrange
    let quarti = vec![
        knockout_fixture(1, CupPhase::Quarti, "Aurora", "Bellavista"),
        knockout_fixture(2, CupPhase::Quarti, "Cardinale", "Dinamo"),
        knockout_fixture(3, CupPhase::Quarti, "Eclisse", "Fenice"),
    ];

    // Act
    let view = build_bracket(quarti, Vec::new(), None, None, 2026);

    // Assert
    assert!(view.has_data);
    assert_eq!(view.quarti.len(), 4);
    assert_eq!(view.quarti[0].fixture_id, Some(1));
    assert_eq!(view.quarti[1].fixture_id, Some(2));
    assert_eq!(view.quarti[2].fixture_id, Some(3));
    assert!(view.quarti[3].is_placeholder());
    assert_eq!(view.quarti[3].state, SlotState::Undetermined);
}

#[test]
fn decided_final_does_not_populate_champion_slot() {
    // Arrange: the final has a result but no champion record exists yet.
    let mut finale = knockout_fixture(9, CupPhase::Finale, "Aurora", "Dinamo");
    finale.risultato = Some("3-1".to_string());

    // Act
    let view = build_bracket(Vec::new(), Vec::new(), Some(finale), None, 2026);

    // Assert
    assert_eq!(view.finale.state, SlotState::Decided);
    assert_eq!(view.finale.home_score, Some(3));
    assert_eq!(view.finale.away_score, Some(1));
    assert!(!view.vincitore.assigned);
    assert_eq!(view.vincitore.squadra, None);
}

#[test]
fn champion_record_populates_the_winner_slot() {
    // Act
    let view = build_bracket(
        Vec::new(),
        Vec::new(),
        None,
        Some(champion("Aurora", 2025)),
        2025,
    );

    // Assert
    assert!(view.has_data);
    assert!(view.vincitore.assigned);
    assert_eq!(view.vincitore.squadra.as_deref(), Some("Aurora"));
    assert_eq!(view.vincitore.anno, 2025);
}

#[test]
fn slot_is_decided_only_when_result_parses() {
    // Arrange
    let mut decided = knockout_fixture(1, CupPhase::Quarti, "Aurora", "Bellavista");
    decided.risultato = Some("2-2".to_string());
    let mut malformed = knockout_fixture(2, CupPhase::Quarti, "Cardinale", "Dinamo");
    malformed.risultato = Some("2:2".to_string());
    malformed.data = NaiveDate::from_ymd_opt(2026, 5, 10);
    let mut scheduled = knockout_fixture(3, CupPhase::Quarti, "Eclisse", "Fenice");
    scheduled.data = NaiveDate::from_ymd_opt(2026, 5, 17);
    let undated = knockout_fixture(4, CupPhase::Quarti, "Girasole", "Halley");

    // Act
    let view = build_bracket(
        vec![decided, malformed, scheduled, undated],
        Vec::new(),
        None,
        None,
        2026,
    );

    // Assert
    assert_eq!(view.quarti[0].state, SlotState::Decided);
    // Malformed result: not decided, but its date keeps it scheduled.
    assert_eq!(view.quarti[1].state, SlotState::Scheduled);
    assert_eq!(view.quarti[1].home_score, None);
    assert_eq!(view.quarti[2].state, SlotState::Scheduled);
    assert_eq!(view.quarti[3].state, SlotState::Undetermined);
}

#[test]
fn explicit_bracket_slots_override_arrival_order() {
    // Arrange: fixtures arrive in reverse of their assigned slots.
    let mut second = knockout_fixture(10, CupPhase::Semifinali, "Cardinale", "Dinamo");
    second.bracket_slot = Some(2);
    let mut first = knockout_fixture(11, CupPhase::Semifinali, "Aurora", "Bellavista");
    first.bracket_slot = Some(1);

    // Act
    let view = build_bracket(Vec::new(), vec![second, first], None, None, 2026);

    // Assert
    assert_eq!(view.semifinali[0].fixture_id, Some(11));
    assert_eq!(view.semifinali[1].fixture_id, Some(10));
}

#[test]
fn unusable_slot_claims_fall_back_to_arrival_order() {
    // Arrange: a duplicate claim and an out-of-range claim.
    let mut a = knockout_fixture(1, CupPhase::Semifinali, "Aurora", "Bellavista");
    a.bracket_slot = Some(1);
    let mut b = knockout_fixture(2, CupPhase::Semifinali, "Cardinale", "Dinamo");
    b.bracket_slot = Some(1);
    let mut c = knockout_fixture(3, CupPhase::Quarti, "Eclisse", "Fenice");
    c.bracket_slot = Some(7);

    // Act
    let view = build_bracket(vec![c], vec![a, b], None, None, 2026);

    // Assert: first claim wins slot 1, the duplicate takes the next free one.
    assert_eq!(view.semifinali[0].fixture_id, Some(1));
    assert_eq!(view.semifinali[1].fixture_id, Some(2));
    // Out-of-range claim falls back to the first quarterfinal slot.
    assert_eq!(view.quarti[0].fixture_id, Some(3));
}

#[test]
fn extra_fixtures_beyond_the_template_are_dropped() {
    // Arrange: five quarterfinals for a four-slot round.
    let quarti: Vec<Fixture> = (1..=5)
        .map(|id| knockout_fixture(id, CupPhase::Quarti, "Casa", "Trasferta"))
        .collect();

    // Act
    let view = build_bracket(quarti, Vec::new(), None, None, 2026);

    // Assert
    assert_eq!(view.quarti.len(), 4);
    let ids: Vec<Option<i64>> = view.quarti.iter().map(|s| s.fixture_id).collect();
    assert_eq!(ids, vec![Some(1), Some(2), Some(3), Some(4)]);
}

#[test]
fn champion_alone_marks_the_view_as_published() {
    let view = build_bracket(
        Vec::new(),
        Vec::new(),
        None,
        Some(champion("Dinamo", 2026)),
        2026,
    );

    assert!(view.has_data);
    assert!(view.quarti.iter().all(|s| s.is_placeholder()));
}
