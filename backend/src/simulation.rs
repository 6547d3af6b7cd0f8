use std::sync::Arc;

/// Owns the memoized transform result. Handlers get this passed explicitly
/// through the router state, there is no module level cache.
pub struct SimulationState {
    csv_path: std::path::PathBuf,
    config: analysis::Config,
    cell: tokio::sync::OnceCell<Arc<common::SimulationData>>,
}

#[derive(Debug)]
pub enum LoadError {
    Open(std::io::Error),
    Parse(analysis::Error),
    Join(tokio::task::JoinError),
}

#[derive(Debug)]
pub enum ExportError {
    Load(LoadError),
    Serialize(serde_json::Error),
    Write(std::io::Error),
}

impl SimulationState {
    pub fn new<P>(csv_path: P, config: analysis::Config) -> Self
    where
        P: Into<std::path::PathBuf>,
    {
        Self {
            csv_path: csv_path.into(),
            config,
            cell: tokio::sync::OnceCell::new(),
        }
    }

    /// The first caller runs the full transform, everyone after gets the
    /// cached result. A failed load is not cached and the next caller retries.
    pub async fn data(&self) -> Result<Arc<common::SimulationData>, LoadError> {
        self.cell.get_or_try_init(|| self.load()).await.cloned()
    }

    async fn load(&self) -> Result<Arc<common::SimulationData>, LoadError> {
        let path = self.csv_path.clone();
        let config = self.config.clone();

        let data = tokio::task::spawn_blocking(move || {
            tracing::info!("Loading simulation data from {:?}", path);

            let file = std::fs::File::open(&path).map_err(LoadError::Open)?;
            analysis::parse(&config, std::io::BufReader::new(file)).map_err(LoadError::Parse)
        })
        .await
        .map_err(LoadError::Join)??;

        tracing::info!(
            "Loaded {} ticks and {} events",
            data.metadata.total_ticks,
            data.metadata.total_events
        );

        Ok(Arc::new(data))
    }
}

/// Writes the combined result as one JSON document, going through a temporary
/// file so the target path never holds a partial document
pub async fn export<P>(state: &SimulationState, path: P) -> Result<(), ExportError>
where
    P: AsRef<std::path::Path>,
{
    let data = state.data().await.map_err(ExportError::Load)?;
    let encoded = serde_json::to_vec(data.as_ref()).map_err(ExportError::Serialize)?;

    let path = path.as_ref();
    let mut tmp_path = path.as_os_str().to_owned();
    tmp_path.push(".tmp");
    let tmp_path = std::path::PathBuf::from(tmp_path);

    tokio::fs::write(&tmp_path, &encoded)
        .await
        .map_err(ExportError::Write)?;
    tokio::fs::rename(&tmp_path, path)
        .await
        .map_err(ExportError::Write)?;

    tracing::info!("Wrote simulation data to {:?}", path);

    Ok(())
}
