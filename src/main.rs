use alphareach::config::ServerConfig;
use alphareach::server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = ServerConfig::from_env()?;

    eprintln!("AlphaReach v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   Site:      http://0.0.0.0:{}/", config.port);
    eprintln!("   Interview: http://0.0.0.0:{}/api/interview", config.port);
    eprintln!("   Workflows: http://0.0.0.0:{}/api/workflows", config.port);
    eprintln!("   Dossiers:  {}", config.dossier_dir.display());

    let app = server::app(&config);
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!(port = config.port, "listening");
    axum::serve(listener, app).await?;

    Ok(())
}
