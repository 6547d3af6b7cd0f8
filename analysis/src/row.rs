//! Typed access to one source row. Every missing/unparseable decision lives
//! here, the aggregation loop only sees already coerced values.

pub struct Header {
    fields: std::collections::HashMap<String, usize>,
}

impl Header {
    pub fn new(record: &csv::StringRecord) -> Self {
        Self {
            fields: record
                .iter()
                .enumerate()
                .map(|(idx, name)| (name.trim().to_owned(), idx))
                .collect(),
        }
    }

    /// Missing columns and short records both read as blank
    fn get<'r>(&self, record: &'r csv::StringRecord, name: &str) -> &'r str {
        self.fields
            .get(name)
            .and_then(|idx| record.get(*idx))
            .map(str::trim)
            .unwrap_or("")
    }
}

pub struct ParsedRow {
    pub tick: i64,
    pub game_time: f64,
    pub player: Option<common::PlayerState>,
    pub event: Option<common::KillEvent>,
}

/// Returns `None` when the row carries no usable tick, such rows have no
/// effect at all on the output
pub fn parse(header: &Header, record: &csv::StringRecord) -> Option<ParsedRow> {
    let tick: i64 = header.get(record, "tick").parse().ok()?;
    let game_time: f64 = header.get(record, "game_time").parse().unwrap_or(0.0);

    Some(ParsedRow {
        tick,
        game_time,
        player: parse_player(header, record),
        event: parse_event(header, record, tick, game_time),
    })
}

fn parse_player(header: &Header, record: &csv::StringRecord) -> Option<common::PlayerState> {
    let x = header.get(record, "X");
    let y = header.get(record, "Y");
    let z = header.get(record, "Z");
    if x.is_empty() || y.is_empty() || z.is_empty() {
        return None;
    }

    let name = header.get(record, "name");
    if name.is_empty() {
        return None;
    }

    let x: f64 = x.parse().ok()?;
    let y: f64 = y.parse().ok()?;
    let z: f64 = z.parse().ok()?;

    let health = match header.get(record, "health") {
        "" => 100.0,
        raw => raw.parse().ok()?,
    };
    let round = match header.get(record, "round") {
        "" => 1,
        raw => raw.parse().ok()?,
    };

    Some(common::PlayerState {
        name: name.to_owned(),
        team: header.get(record, "team_name").to_owned(),
        // the source's vertical Y axis becomes the last slot
        position: (x, z, y),
        health,
        round,
    })
}

fn parse_event(
    header: &Header,
    record: &csv::StringRecord,
    tick: i64,
    game_time: f64,
) -> Option<common::KillEvent> {
    let event_type = header.get(record, "event");
    if event_type.is_empty() {
        return None;
    }

    let attacker = common::ActorSnapshot {
        name: non_blank(header.get(record, "attacker_name")),
        team: non_blank(header.get(record, "attacker_team_name")),
        position: (
            opt_float(header.get(record, "attacker_X"))?,
            opt_float(header.get(record, "attacker_Z"))?,
            opt_float(header.get(record, "attacker_Y"))?,
        ),
        yaw: opt_float(header.get(record, "attacker_yaw"))?,
        pitch: opt_float(header.get(record, "attacker_pitch"))?,
        health: opt_float(header.get(record, "attacker_health"))?,
    };

    let victim = common::ActorSnapshot {
        name: non_blank(header.get(record, "victim_name")),
        team: non_blank(header.get(record, "victim_team_name")),
        position: (
            opt_float(header.get(record, "victim_X"))?,
            opt_float(header.get(record, "victim_Z"))?,
            opt_float(header.get(record, "victim_Y"))?,
        ),
        yaw: None,
        pitch: None,
        health: opt_float(header.get(record, "victim_health"))?,
    };

    Some(common::KillEvent {
        tick,
        game_time,
        event_type: event_type.to_owned(),
        attacker,
        victim,
        weapon: non_blank(header.get(record, "weapon")),
        headshot: header.get(record, "headshot").eq_ignore_ascii_case("true"),
    })
}

fn non_blank(raw: &str) -> Option<String> {
    if raw.is_empty() {
        return None;
    }
    Some(raw.to_owned())
}

/// Blank is a missing value and stays `None`, a non-blank value that fails to
/// parse drops the whole event for this row
fn opt_float(raw: &str) -> Option<Option<f64>> {
    if raw.is_empty() {
        return Some(None);
    }
    raw.parse().ok().map(Some)
}
