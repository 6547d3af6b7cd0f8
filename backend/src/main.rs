use clap::Parser;
use tracing_subscriber::prelude::__tracing_subscriber_SubscriberExt;

#[derive(Debug, clap::Parser)]
struct Args {
    /// Recorded match log to serve
    #[clap(long)]
    csv: std::path::PathBuf,
    #[clap(long, default_value = "0.0.0.0:3000")]
    listen: String,
    /// Process only every Nth input row
    #[clap(long, default_value_t = 1)]
    sample_stride: usize,
    /// Directory with the viewer files served at /
    #[clap(long, default_value = "static/")]
    static_dir: std::path::PathBuf,
    /// Write the combined result to this file as JSON and exit instead of serving
    #[clap(long)]
    export: Option<std::path::PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let registry = tracing_subscriber::Registry::default()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::filter::filter_fn(|meta| {
            meta.target().contains("backend") || meta.target().contains("analysis")
        }));
    tracing::subscriber::set_global_default(registry).unwrap();

    let args = Args::parse();

    tracing::info!("Starting...");

    let state = std::sync::Arc::new(backend::simulation::SimulationState::new(
        &args.csv,
        analysis::Config {
            sample_stride: args.sample_stride,
        },
    ));

    if let Some(path) = args.export.as_ref() {
        if let Err(e) = backend::simulation::export(&state, path).await {
            tracing::error!("Exporting simulation data: {:?}", e);
            std::process::exit(1);
        }
        return;
    }

    let router = axum::Router::new()
        .nest("/api/", backend::api::router(state))
        .nest_service("/", tower_http::services::ServeDir::new(&args.static_dir));

    let listener = tokio::net::TcpListener::bind(&args.listen).await.unwrap();
    tracing::info!("Listening on {}", args.listen);
    axum::serve(listener, router).await.unwrap();
}
