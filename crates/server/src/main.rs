use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use ares_server::config::{ServerConfig, SinkKind, DEFAULT_SHEET_URL};
use ares_server::{http, sink};
use clap::Parser;
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Debug, Parser)]
#[command(name = "ares-server", version, about = "ARES site and demo API")]
struct Cli {
    /// Where the HTTP server will listen, e.g. 127.0.0.1:3000
    #[arg(long, default_value = "127.0.0.1:3000")]
    listen: SocketAddr,

    /// Waitlist sink.
    #[arg(long, value_enum, default_value_t = SinkKind::File)]
    sink: SinkKind,

    /// JSON-lines file used by the `file` sink.
    #[arg(long, default_value = ".ares/waitlist.jsonl")]
    waitlist_file: PathBuf,

    /// Spreadsheet URL used by the `sheet-best` sink.
    #[arg(long, default_value = DEFAULT_SHEET_URL)]
    sheet_url: String,

    /// Request timeout for the `sheet-best` sink, in seconds.
    #[arg(long, default_value_t = 10)]
    sheet_timeout_secs: u64,

    /// Service-account JSON key for the `google-sheets` sink.
    #[arg(long)]
    google_service_account: Option<PathBuf>,

    /// Spreadsheet id for the `google-sheets` sink.
    #[arg(long)]
    google_spreadsheet_id: Option<String>,

    /// A1 range rows are appended to.
    #[arg(long, default_value = "Sheet1!A:D")]
    google_range: String,

    /// Log filter (env-filter syntax). RUST_LOG takes precedence.
    #[arg(long, default_value = "info")]
    log: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log));
    fmt().with_target(false).with_env_filter(filter).init();

    let config = ServerConfig {
        listen: cli.listen,
        sink: cli.sink,
        waitlist_file: cli.waitlist_file,
        sheet_url: cli.sheet_url,
        sheet_timeout: Duration::from_secs(cli.sheet_timeout_secs),
        google_service_account: cli.google_service_account,
        google_spreadsheet_id: cli.google_spreadsheet_id,
        google_range: cli.google_range,
    };

    info!("starting server with config: {:?}", config);

    let sink = sink::from_config(&config).await?;
    let app = http::router(http::AppState::new(sink));

    info!("listening on http://{}", config.listen);
    axum::serve(tokio::net::TcpListener::bind(config.listen).await?, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        // Without a handler the server can only be stopped externally; keep serving.
        error!(error = %e, "failed to install ctrl-c handler");
        std::future::pending::<()>().await;
    }
    info!("shutdown requested");
}
