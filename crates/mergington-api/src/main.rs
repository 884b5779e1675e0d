//! Mergington activities service entry point.
//!
//! Binary name: `mergington`
//!
//! Parses CLI arguments, loads configuration and the seed catalog, then
//! dispatches to the requested command or starts the HTTP server.

mod cli;
mod http;
mod state;

use clap::Parser;
use clap_complete::generate;

use cli::{Cli, Commands};
use mergington_infra::config::load_config;
use mergington_types::config::ServerConfig;
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Shell completions don't need tracing or app state
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "mergington", &mut std::io::stdout());
        return Ok(());
    }

    mergington_observe::tracing_setup::init_tracing(cli.log_filter(), cli.otel)
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {e}"))?;

    let mut config = load_config(&cli.config).await;

    let result = match cli.command {
        Commands::Serve { port, host } => {
            if let Some(port) = port {
                config.port = port;
            }
            if let Some(host) = host {
                config.host = host;
            }
            serve(config).await
        }

        Commands::Activities => list_activities(config, cli.json).await,

        Commands::Completions { .. } => unreachable!("handled above"),
    };

    mergington_observe::tracing_setup::shutdown_tracing();
    result
}

async fn list_activities(config: ServerConfig, json: bool) -> anyhow::Result<()> {
    let state = AppState::init(config).await?;
    cli::activity::list_activities(&state, json).await
}

/// Bind the listener and serve until Ctrl+C or SIGTERM.
async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    let addr = format!("{}:{}", config.host, config.port);
    let state = AppState::init(config).await?;

    if !state.config.static_dir.exists() {
        tracing::warn!(
            path = %state.config.static_dir.display(),
            "static directory not found, /static will answer 404"
        );
    }

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    println!(
        "  {} Mergington activities listening on {}",
        console::style("⚡").bold(),
        console::style(format!("http://{addr}")).cyan()
    );
    println!("  {}", console::style("Press Ctrl+C to stop").dim());

    let router = http::router::build_router(state);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    println!("\n  Server stopped.");
    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for Ctrl+C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
