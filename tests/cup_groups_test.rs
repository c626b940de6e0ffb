use torneo_backend::cup::groups::{derive_groups, MissingRankPolicy};
use torneo_backend::models::cup::GroupLetter;
use torneo_backend::models::standings::StandingRow;

fn row(squadra: &str, girone: &str, posizione_coppa: Option<i32>) -> StandingRow {
    StandingRow {
        squadra: squadra.to_string(),
        girone: Some(girone.to_string()),
        posizione_coppa,
        ..StandingRow::default()
    }
}

#[test]
fn four_groups_always_present_in_letter_order() {
    // Arrange
    let rows = vec![row("Aurora", "B", Some(1))];

    // Act
    let view = derive_groups(&rows, MissingRankPolicy::First);

    // Assert
    assert_eq!(view.groups.len(), 4);
    let letters: Vec<GroupLetter> = view.groups.iter().map(|g| g.girone).collect();
    assert_eq!(
        letters,
        vec![GroupLetter::A, GroupLetter::B, GroupLetter::C, GroupLetter::D]
    );
    assert!(view.has_data);
}

#[test]
fn groups_sorted_by_cup_rank_with_top_two_qualified() {
    // Arrange
    let rows = vec![
        row("Cardinale", "A", Some(3)),
        row("Aurora", "A", Some(1)),
        row("Dinamo", "A", Some(4)),
        row("Bellavista", "A", Some(2)),
    ];

    // Act
    let view = derive_groups(&rows, MissingRankPolicy::First);

    // Assert
    let group_a = &view.groups[0];
    let names: Vec<&str> = group_a.entries.iter().map(|e| e.squadra.as_str()).collect();
    assert_eq!(names, vec!["Aurora", "Bellavista", "Cardinale", "Dinamo"]);
    let qualified: Vec<bool> = group_a.entries.iter().map(|e| e.qualified).collect();
    assert_eq!(qualified, vec![true, true, false, false]);
}

#[test]
fn qualified_count_never_exceeds_group_membership() {
    // A one-team group qualifies one team, not two.
    let rows = vec![row("Aurora", "C", Some(1))];

    let view = derive_groups(&rows, MissingRankPolicy::First);

    let group_c = &view.groups[2];
    assert_eq!(group_c.entries.len(), 1);
    assert!(group_c.entries[0].qualified);
}

#[test]
fn tied_ranks_keep_arrival_order() {
    // Arrange: two teams with the same cup rank; arrival order decides.
    let rows = vec![
        row("Bellavista", "A", Some(2)),
        row("Aurora", "A", Some(2)),
        row("Cardinale", "A", Some(1)),
    ];

    // Act
    let view = derive_groups(&rows, MissingRankPolicy::First);

    // Assert
    let names: Vec<&str> = view.groups[0]
        .entries
        .iter()
        .map(|e| e.squadra.as_str())
        .collect();
    assert_eq!(names, vec!["Cardinale", "Bellavista", "Aurora"]);
}

#[test]
fn unranked_teams_sort_first_under_default_policy() {
    // Arrange
    let rows = vec![
        row("Aurora", "B", Some(1)),
        row("Bellavista", "B", None),
        row("Cardinale", "B", Some(2)),
    ];

    // Act
    let view = derive_groups(&rows, MissingRankPolicy::First);

    // Assert: the unranked team lands before the ranked ones.
    let group_b = &view.groups[1];
    let names: Vec<&str> = group_b.entries.iter().map(|e| e.squadra.as_str()).collect();
    assert_eq!(names, vec!["Bellavista", "Aurora", "Cardinale"]);
    // The unranked team takes its derived 1-based position.
    assert_eq!(group_b.entries[0].position, 1);
    assert!(group_b.entries[0].qualified);
}

#[test]
fn unranked_teams_sort_last_under_last_policy() {
    // Arrange
    let rows = vec![
        row("Aurora", "B", Some(1)),
        row("Bellavista", "B", None),
        row("Cardinale", "B", Some(2)),
    ];

    // Act
    let view = derive_groups(&rows, MissingRankPolicy::Last);

    // Assert
    let group_b = &view.groups[1];
    let names: Vec<&str> = group_b.entries.iter().map(|e| e.squadra.as_str()).collect();
    assert_eq!(names, vec!["Aurora", "Cardinale", "Bellavista"]);
    assert!(!group_b.entries[2].qualified);
}

#[test]
fn oversized_group_is_truncated_to_four() {
    // Arrange: five rows tagged with the same group letter.
    let rows = vec![
        row("Aurora", "D", Some(1)),
        row("Bellavista", "D", Some(2)),
        row("Cardinale", "D", Some(3)),
        row("Dinamo", "D", Some(4)),
        row("Eclisse", "D", Some(5)),
    ];

    // Act
    let view = derive_groups(&rows, MissingRankPolicy::First);

    // Assert: the fifth-ranked team is dropped from the view.
    let group_d = &view.groups[3];
    assert_eq!(group_d.entries.len(), 4);
    assert!(group_d.entries.iter().all(|e| e.squadra != "Eclisse"));
}

#[test]
fn rows_without_group_letter_are_ignored() {
    // Arrange: league-only teams carry no girone.
    let mut ungrouped = row("Aurora", "A", Some(1));
    ungrouped.girone = None;
    let rows = vec![ungrouped];

    // Act
    let view = derive_groups(&rows, MissingRankPolicy::First);

    // Assert
    assert!(view.groups.iter().all(|g| g.entries.is_empty()));
    assert!(!view.has_data);
}

#[test]
fn empty_standings_produce_empty_view() {
    let view = derive_groups(&[], MissingRankPolicy::First);

    assert_eq!(view.groups.len(), 4);
    assert!(view.groups.iter().all(|g| g.entries.is_empty()));
    assert!(!view.has_data);
}

#[test]
fn group_entries_expose_cup_counters_not_league_counters() {
    // Arrange
    let mut team = row("Aurora", "A", Some(1));
    team.punti = Some(30);
    team.punti_coppa = Some(7);
    team.giocate_coppa = Some(3);

    // Act
    let view = derive_groups(&[team], MissingRankPolicy::First);

    // Assert
    let entry = &view.groups[0].entries[0];
    assert_eq!(entry.punti, Some(7));
    assert_eq!(entry.giocate, Some(3));
}
