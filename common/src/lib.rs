#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SimulationData {
    pub metadata: Metadata,
    pub positions: Vec<Snapshot>,
    pub events: Vec<KillEvent>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Metadata {
    pub total_ticks: usize,
    pub total_events: usize,
    pub time_range: Range<f64>,
    pub tick_range: Range<i64>,
    pub players: Vec<String>,
    pub teams: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Range<T> {
    pub min: T,
    pub max: T,
}

/// All player states recorded at one simulation tick
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Snapshot {
    pub tick: i64,
    pub game_time: f64,
    pub players: Vec<PlayerState>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PlayerState {
    pub name: String,
    pub team: String,
    /// Stored as (X, Z, Y), the source's vertical Y axis goes in the last slot
    pub position: (f64, f64, f64),
    pub health: f64,
    pub round: i64,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct KillEvent {
    pub tick: i64,
    pub game_time: f64,
    pub event_type: String,
    pub attacker: ActorSnapshot,
    pub victim: ActorSnapshot,
    pub weapon: Option<String>,
    pub headshot: bool,
}

/// Attacker/victim state at the moment of an event. Every field is serialized
/// even when missing, viewers expect fixed-shape records. Victims never carry
/// yaw/pitch in the source data, those slots stay null for them.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ActorSnapshot {
    pub name: Option<String>,
    pub team: Option<String>,
    pub position: (Option<f64>, Option<f64>, Option<f64>),
    pub yaw: Option<f64>,
    pub pitch: Option<f64>,
    pub health: Option<f64>,
}
