use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use symptomdx_api::{ApiConfig, RestApi};
use symptomdx_core::{Metric, DEFAULT_K};
use symptomdx_storage::{DataPaths, DataStore};
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

/// Disease prediction server backed by k-NN over symptom vectors
#[derive(Parser, Debug)]
#[command(name = "symptomdx")]
#[command(about = "Predict diseases from symptoms", long_about = None)]
struct Args {
    /// Directory holding the dataset CSV files
    #[arg(short, long, env = "DATA_DIR", default_value = "./data")]
    data_dir: PathBuf,

    /// Training dataset (Disease, Symptom_1..n)
    #[arg(long, env = "DATASET_CSV")]
    dataset_csv: Option<PathBuf>,

    /// Symptom severity weights (Symptom, weight)
    #[arg(long, env = "SYMPTOM_SEVERITY_CSV")]
    severity_csv: Option<PathBuf>,

    /// Disease descriptions (Disease, Description)
    #[arg(long, env = "DESCRIPTION_CSV")]
    description_csv: Option<PathBuf>,

    /// Disease precautions (Disease, Precaution_1..4)
    #[arg(long, env = "PRECAUTION_CSV")]
    precaution_csv: Option<PathBuf>,

    /// k used when a request does not set one
    #[arg(long, env = "KNN_K", default_value_t = DEFAULT_K)]
    default_k: usize,

    /// HTTP API port
    #[arg(long, env = "HTTP_PORT", default_value_t = 8000)]
    http_port: u16,

    /// Log level
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    log_level: String,
}

impl Args {
    fn data_paths(&self) -> DataPaths {
        let defaults = DataPaths::in_dir(&self.data_dir);
        DataPaths {
            dataset: self.dataset_csv.clone().unwrap_or(defaults.dataset),
            severity: self.severity_csv.clone().unwrap_or(defaults.severity),
            description: self.description_csv.clone().unwrap_or(defaults.description),
            precaution: self.precaution_csv.clone().unwrap_or(defaults.precaution),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting SymptomDX v{}", env!("CARGO_PKG_VERSION"));
    info!("Data directory: {:?}", args.data_dir);
    info!("HTTP API port: {}", args.http_port);

    let paths = args.data_paths();
    let store = Arc::new(DataStore::open(&paths)?);
    info!(
        "Data loaded: {} rows, {} symptoms",
        store.dataset().len(),
        store.dataset().dim()
    );

    let config = ApiConfig {
        default_k: args.default_k.max(1),
        default_metric: Metric::Hamming,
    };

    let http_port = args.http_port;
    let http_handle = std::thread::spawn(move || {
        info!("Starting HTTP server on port {}", http_port);
        let sys = actix_web::rt::System::new();
        sys.block_on(async {
            if let Err(e) = RestApi::start(store, config, http_port).await {
                error!("HTTP server error: {}", e);
            }
        })
    });

    info!("SymptomDX started successfully");
    info!("HTTP API: http://localhost:{}/", http_port);

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
        _ = tokio::task::spawn_blocking(move || {
            http_handle.join().ok();
        }) => {
            info!("HTTP server stopped");
        }
    }

    info!("Shutting down...");
    Ok(())
}
