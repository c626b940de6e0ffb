use crate::models::cup::{BracketSlot, BracketView, ChampionSlot, SlotState};
use crate::models::fixture::Fixture;

/// Quarterfinal slots in the bracket template.
pub const QUARTERFINAL_SLOTS: usize = 4;
/// Semifinal slots in the bracket template.
pub const SEMIFINAL_SLOTS: usize = 2;

/// Split a result string of the form "home-away" into the two scores.
/// Anything else (missing separator, non-numeric parts) yields None.
pub fn parse_result(raw: &str) -> Option<(i32, i32)> {
    let (home, away) = raw.split_once('-')?;
    let home = home.trim().parse().ok()?;
    let away = away.trim().parse().ok()?;
    Some((home, away))
}

/// Assemble the fixed-shape bracket view from the already-fetched knockout
/// fixtures and the optional champion record for `anno`.
///
/// Fixtures carrying a valid `bracket_slot` claim that position in their
/// round; the rest fill unclaimed positions in arrival order and any
/// template position still empty becomes a TBD placeholder. The champion
/// slot is sourced solely from the champion record: a decided final does not
/// populate it.
pub fn build_bracket(
    quarti: Vec<Fixture>,
    semifinali: Vec<Fixture>,
    finale: Option<Fixture>,
    champion: Option<crate::models::cup::CupChampion>,
    anno: i32,
) -> BracketView {
    let has_data = !quarti.is_empty()
        || !semifinali.is_empty()
        || finale.is_some()
        || champion.is_some();

    let quarti = fill_round(quarti, QUARTERFINAL_SLOTS);
    let semifinali = fill_round(semifinali, SEMIFINAL_SLOTS);
    let finale = match finale {
        Some(fixture) => slot_from_fixture(&fixture),
        None => BracketSlot::placeholder(),
    };

    let vincitore = match champion {
        Some(c) => ChampionSlot {
            assigned: true,
            squadra: Some(c.squadra),
            anno: c.anno,
        },
        None => ChampionSlot {
            assigned: false,
            squadra: None,
            anno,
        },
    };

    BracketView {
        quarti,
        semifinali,
        finale,
        vincitore,
        has_data,
    }
}

/// Lay out one round: explicit slot numbers first, arrival order for the
/// rest, placeholders for whatever stays empty.
fn fill_round(fixtures: Vec<Fixture>, size: usize) -> Vec<BracketSlot> {
    let mut slots: Vec<Option<Fixture>> = std::iter::repeat_with(|| None).take(size).collect();
    let mut unplaced = Vec::new();

    for fixture in fixtures {
        match fixture.bracket_slot {
            Some(n) if n >= 1 && (n as usize) <= size && slots[n as usize - 1].is_none() => {
                slots[n as usize - 1] = Some(fixture);
            }
            Some(n) => {
                tracing::warn!(
                    "Fixture {} has unusable bracket slot {} (round size {}), \
                     falling back to arrival order",
                    fixture.id,
                    n,
                    size
                );
                unplaced.push(fixture);
            }
            None => unplaced.push(fixture),
        }
    }

    let mut rest = unplaced.into_iter();
    for slot in slots.iter_mut() {
        if slot.is_none() {
            *slot = rest.next();
        }
    }
    for fixture in rest {
        tracing::warn!("Fixture {} does not fit the round template, ignored", fixture.id);
    }

    slots
        .into_iter()
        .map(|slot| match slot {
            Some(fixture) => slot_from_fixture(&fixture),
            None => BracketSlot::placeholder(),
        })
        .collect()
}

fn slot_from_fixture(fixture: &Fixture) -> BracketSlot {
    let scores = match fixture.risultato.as_deref() {
        Some(raw) => {
            let parsed = parse_result(raw);
            if parsed.is_none() {
                tracing::warn!(
                    "Fixture {} has malformed result '{}', leaving slot undecided",
                    fixture.id,
                    raw
                );
            }
            parsed
        }
        None => None,
    };

    let state = if scores.is_some() {
        SlotState::Decided
    } else if fixture.data.is_some() {
        SlotState::Scheduled
    } else {
        SlotState::Undetermined
    };

    BracketSlot {
        fixture_id: Some(fixture.id),
        squadra_casa: fixture.squadra_casa.clone(),
        squadra_trasferta: fixture.squadra_trasferta.clone(),
        home_score: scores.map(|(home, _)| home),
        away_score: scores.map(|(_, away)| away),
        data: fixture.data,
        state,
    }
}
