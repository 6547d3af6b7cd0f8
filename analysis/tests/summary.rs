use analysis::summary;
use pretty_assertions::assert_eq;

fn snapshot(tick: i64, game_time: f64, names: &[&str]) -> common::Snapshot {
    common::Snapshot {
        tick,
        game_time,
        players: names
            .iter()
            .map(|name| common::PlayerState {
                name: (*name).to_owned(),
                team: "CT".to_owned(),
                position: (0.0, 0.0, 0.0),
                health: 100.0,
                round: 1,
            })
            .collect(),
    }
}

fn event(tick: i64) -> common::KillEvent {
    common::KillEvent {
        tick,
        game_time: 0.0,
        event_type: "kill".to_owned(),
        attacker: common::ActorSnapshot {
            name: None,
            team: None,
            position: (None, None, None),
            yaw: None,
            pitch: None,
            health: None,
        },
        victim: common::ActorSnapshot {
            name: None,
            team: None,
            position: (None, None, None),
            yaw: None,
            pitch: None,
            health: None,
        },
        weapon: None,
        headshot: false,
    }
}

#[test]
fn counts_and_ranges() {
    let positions = vec![
        snapshot(10, 2.5, &["A"]),
        snapshot(12, 3.0, &["A"]),
        snapshot(11, 2.75, &["A"]),
    ];
    let events = vec![event(10), event(12)];

    let result = summary::build(&positions, &events);

    assert_eq!(3, result.total_ticks);
    assert_eq!(2, result.total_events);
    assert_eq!(common::Range { min: 2.5, max: 3.0 }, result.time_range);
    assert_eq!(common::Range { min: 10, max: 12 }, result.tick_range);
}

#[test]
fn empty_input_yields_zeroed_ranges() {
    let result = summary::build(&[], &[]);

    assert_eq!(0, result.total_ticks);
    assert_eq!(0, result.total_events);
    assert_eq!(common::Range { min: 0.0, max: 0.0 }, result.time_range);
    assert_eq!(common::Range { min: 0, max: 0 }, result.tick_range);
}

#[test]
fn players_are_sorted_and_distinct() {
    let positions = vec![
        snapshot(1, 0.5, &["zoe", "adam"]),
        snapshot(2, 1.0, &["adam", "mia"]),
    ];

    let result = summary::build(&positions, &[]);

    assert_eq!(vec!["adam", "mia", "zoe"], result.players);
}

#[test]
fn teams_are_a_fixed_constant() {
    let mut snapshot = snapshot(1, 0.5, &["A"]);
    snapshot.players[0].team = "SPECTATOR".to_owned();

    let result = summary::build(&[snapshot], &[]);

    assert_eq!(vec!["CT", "TERRORIST"], result.teams);
}
