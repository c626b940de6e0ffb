use serde::Deserialize;

use crate::models::cup::{GroupEntry, GroupLetter, GroupStageView, GroupTable};
use crate::models::standings::StandingRow;

/// Maximum number of teams shown per group.
pub const GROUP_SIZE: usize = 4;
/// Teams per group advancing to the knockout stage.
pub const QUALIFIED_PER_GROUP: usize = 2;

/// How a team without an upstream cup rank sorts inside its group. The
/// upstream scoring process normally fills `posizione_coppa` for every team,
/// so a missing rank is a data gap rather than a tie-break rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MissingRankPolicy {
    /// Unranked teams sort before ranked ones (upstream-compatible default).
    #[default]
    First,
    /// Unranked teams sort after every ranked one.
    Last,
}

impl MissingRankPolicy {
    fn sort_key(&self, rank: Option<i32>) -> i64 {
        match self {
            MissingRankPolicy::First => i64::from(rank.unwrap_or(0)),
            MissingRankPolicy::Last => rank.map(i64::from).unwrap_or(i64::MAX),
        }
    }
}

/// Partition one category's standings rows into the four fixed groups and
/// rank each group by cup rank.
///
/// Rows may arrive in any order; within a group the sort is stable, so teams
/// sharing a rank keep their fetch order. Each group is truncated to
/// [`GROUP_SIZE`] and the first [`QUALIFIED_PER_GROUP`] entries are tagged
/// qualified. Absent input never fails: empty groups stay empty and the view
/// reports `has_data: false` when nothing has been published yet.
pub fn derive_groups(rows: &[StandingRow], policy: MissingRankPolicy) -> GroupStageView {
    let groups: Vec<GroupTable> = GroupLetter::ALL
        .iter()
        .map(|&girone| derive_group(rows, girone, policy))
        .collect();

    let has_data = groups.iter().any(|g| !g.entries.is_empty());
    GroupStageView { groups, has_data }
}

fn derive_group(rows: &[StandingRow], girone: GroupLetter, policy: MissingRankPolicy) -> GroupTable {
    let mut teams: Vec<&StandingRow> = rows
        .iter()
        .filter(|row| row.girone.as_deref() == Some(girone.as_str()))
        .collect();

    // Stable sort: equal ranks keep their arrival order.
    teams.sort_by_key(|row| policy.sort_key(row.posizione_coppa));
    teams.truncate(GROUP_SIZE);

    let entries = teams
        .iter()
        .enumerate()
        .map(|(idx, row)| GroupEntry {
            position: row.posizione_coppa.unwrap_or(idx as i32 + 1),
            squadra: row.squadra.clone(),
            punti: row.punti_coppa,
            giocate: row.giocate_coppa,
            vittorie: row.vittorie_coppa,
            pareggi: row.pareggi_coppa,
            sconfitte: row.sconfitte_coppa,
            reti_fatte: row.reti_fatte_coppa,
            reti_subite: row.reti_subite_coppa,
            qualified: idx < QUALIFIED_PER_GROUP,
        })
        .collect();

    GroupTable { girone, entries }
}
