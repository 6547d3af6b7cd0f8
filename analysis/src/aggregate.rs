//! Groups ordered source rows into per-tick snapshots and pulls kill events
//! out of the same pass.

use crate::{row, Config, Error};

#[derive(Debug, PartialEq)]
pub struct Output {
    pub positions: Vec<common::Snapshot>,
    pub events: Vec<common::KillEvent>,
}

/// Single pass over the input. A snapshot is emitted whenever the tick value
/// changes, so out-of-order input re-emits an earlier tick instead of merging
/// into it. Ticks that accumulated no player state are dropped.
pub fn parse<R>(config: &Config, reader: R) -> Result<Output, Error>
where
    R: std::io::Read,
{
    let mut csv_reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
    let header = row::Header::new(csv_reader.headers()?);

    let stride = config.sample_stride.max(1);

    let mut positions = Vec::new();
    let mut events = Vec::new();

    let mut current_tick: Option<i64> = None;
    let mut game_time = 0.0;
    let mut players: Vec<common::PlayerState> = Vec::new();

    for (idx, record) in csv_reader.records().enumerate() {
        if idx % stride != 0 {
            continue;
        }

        let record = match record {
            Ok(r) => r,
            Err(e) if matches!(e.kind(), csv::ErrorKind::Io(_)) => return Err(Error::Csv(e)),
            Err(e) => {
                tracing::trace!("Skipping malformed record: {:?}", e);
                continue;
            }
        };

        let parsed = match row::parse(&header, &record) {
            Some(p) => p,
            None => continue,
        };

        if let Some(previous) = current_tick {
            if previous != parsed.tick && !players.is_empty() {
                positions.push(common::Snapshot {
                    tick: previous,
                    game_time,
                    players: core::mem::take(&mut players),
                });
            }
        }

        current_tick = Some(parsed.tick);
        // every row updates the in-progress time, the last one wins
        game_time = parsed.game_time;

        if let Some(player) = parsed.player {
            players.push(player);
        }
        if let Some(event) = parsed.event {
            events.push(event);
        }
    }

    // the final tick never sees a change, flush it explicitly
    if let Some(tick) = current_tick {
        if !players.is_empty() {
            positions.push(common::Snapshot {
                tick,
                game_time,
                players,
            });
        }
    }

    tracing::debug!(
        "Aggregated {} snapshots and {} events",
        positions.len(),
        events.len()
    );

    Ok(Output { positions, events })
}
