pub mod aggregate;
mod row;
pub mod summary;

#[derive(Debug, Clone)]
pub struct Config {
    /// Process only every Nth input row, 1 processes everything
    pub sample_stride: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self { sample_stride: 1 }
    }
}

#[derive(Debug)]
pub enum Error {
    Csv(csv::Error),
}

impl From<csv::Error> for Error {
    fn from(value: csv::Error) -> Self {
        Self::Csv(value)
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Csv(e) => write!(f, "reading input: {}", e),
        }
    }
}

impl std::error::Error for Error {}

/// Runs the full transform, grouping rows into per-tick snapshots and kill
/// events and deriving the summary metadata over them
pub fn parse<R>(config: &Config, reader: R) -> Result<common::SimulationData, Error>
where
    R: std::io::Read,
{
    let output = aggregate::parse(config, reader)?;
    let metadata = summary::build(&output.positions, &output.events);

    Ok(common::SimulationData {
        metadata,
        positions: output.positions,
        events: output.events,
    })
}
