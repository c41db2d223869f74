//! Serene chat HTTP server binary.
//!
//! Serves the chat page and JSON API; model replies come from the provider
//! selected by `LLM_PROVIDER`.

use clap::Parser;
use tracing::{info, warn};

/// CLI arguments for the server.
#[derive(Parser, Debug)]
#[command(name = "serene_server", about = "Serene stress-management chat server")]
struct Args {
    /// Host to listen on; replaces the host part of `BIND_ADDR`.
    #[arg(long, env = "BIND_HOST")]
    host: Option<String>,

    /// Port to listen on (0 = ephemeral); replaces the port part of `BIND_ADDR`.
    #[arg(long, env = "PORT")]
    port: Option<u16>,

    /// Profile JSON file; overrides `PROFILE_PATH`.
    #[arg(long, env = "PROFILE_PATH")]
    profile_path: Option<std::path::PathBuf>,

    /// Model provider (`gemini` or `local`); overrides `LLM_PROVIDER`.
    #[arg(long)]
    provider: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,serene_api=debug,serene_core=debug".into()),
        )
        .init();

    let args = Args::parse();

    let mut config = serene_api::config::ApiConfig::from_env();
    config.bind_addr = bind_addr(&config.bind_addr, args.host.as_deref(), args.port);
    if let Some(path) = args.profile_path {
        config.profile_path = path;
    }
    if let Some(provider) = args.provider {
        config.llm.provider = provider.to_ascii_lowercase();
    }

    if config.secret_key == serene_api::config::DEFAULT_SECRET_KEY {
        warn!("SECRET_KEY not set, using the development default");
    }
    if config.llm.provider == "gemini" && config.llm.gemini_api_key.is_none() {
        warn!("GEMINI_API_KEY not set, chat requests will fail");
    }

    let model = serene_core::llm::build_client(&config.llm)?;
    info!(
        provider = model.provider(),
        profile_path = %config.profile_path.display(),
        "starting serene_server"
    );

    let state = serene_api::AppState::new(config.clone(), model);
    let _cleanup = state.sessions.spawn_cleanup_task();
    let app = serene_api::router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    let local_addr = listener.local_addr()?;
    info!(addr = %local_addr, "chat server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
            info!("shutting down");
        })
        .await?;

    Ok(())
}

/// Apply `--host`/`--port` overrides to a `host:port` address.
fn bind_addr(base: &str, host: Option<&str>, port: Option<u16>) -> String {
    if host.is_none() && port.is_none() {
        return base.to_string();
    }
    let (base_host, base_port) = base.rsplit_once(':').unwrap_or((base, "5000"));
    let host = match host {
        Some(h) if h.contains(':') && !h.starts_with('[') => format!("[{h}]"),
        Some(h) => h.to_string(),
        None => base_host.to_string(),
    };
    match port {
        Some(port) => format!("{host}:{port}"),
        None => format!("{host}:{base_port}"),
    }
}
