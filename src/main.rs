use certigen::{build_router, config, state};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "certigen=info,tower_http=info".into()),
        )
        .init();

    let config = config::Config::from_env()?;
    let addr = format!("{}:{}", config.host, config.port);
    if let Some(ref dir) = config.font_dir {
        tracing::info!("Searching {} for PDF fonts first", dir.display());
    }

    let app = build_router(state::AppState::new(config));

    tracing::info!("Certigen listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
