//! Aggregate metadata over the grouped output, a pure reduction with no
//! failure modes.

/// The team set is a fixed contract with the viewer, never derived from data
pub const TEAMS: [&str; 2] = ["CT", "TERRORIST"];

pub fn build(positions: &[common::Snapshot], events: &[common::KillEvent]) -> common::Metadata {
    let mut time_range = common::Range { min: 0.0, max: 0.0 };
    let mut tick_range = common::Range { min: 0, max: 0 };

    if let Some(first) = positions.first() {
        time_range = common::Range {
            min: first.game_time,
            max: first.game_time,
        };
        tick_range = common::Range {
            min: first.tick,
            max: first.tick,
        };

        for snapshot in positions.iter() {
            time_range.min = time_range.min.min(snapshot.game_time);
            time_range.max = time_range.max.max(snapshot.game_time);
            tick_range.min = tick_range.min.min(snapshot.tick);
            tick_range.max = tick_range.max.max(snapshot.tick);
        }
    }

    let players: std::collections::BTreeSet<String> = positions
        .iter()
        .flat_map(|snapshot| snapshot.players.iter().map(|p| p.name.clone()))
        .collect();

    common::Metadata {
        total_ticks: positions.len(),
        total_events: events.len(),
        time_range,
        tick_range,
        players: players.into_iter().collect(),
        teams: TEAMS.iter().map(|t| (*t).to_owned()).collect(),
    }
}
