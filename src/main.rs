use std::sync::Arc;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use xkcd::AppState;
use xkcd::config::{Command, GetArgs, ServeArgs, XkcdConfig};
use xkcd::error::XkcdError;
use xkcd::http_client;
use xkcd::routes;
use xkcd::sources::xkcd::XkcdSource;
use xkcd::sources::{ComicSelector, ComicSource};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("xkcd=info,tower_http=info")),
        )
        .init();

    let config = XkcdConfig::parse();
    let client = http_client::build_client(config.timeout_secs)?;
    let source = XkcdSource::new(client, config.base_url.clone());

    match config.command {
        Command::Get(args) => get(&source, args).await,
        Command::Serve(args) => serve(source, args).await,
    }
}

async fn get(source: &dyn ComicSource, args: GetArgs) -> anyhow::Result<()> {
    let selector: ComicSelector = args.comic.parse()?;
    let response = selector
        .fetch(source)
        .await?
        .ok_or_else(|| XkcdError::NotFound(format!("no comic found for {}", selector)))?;

    let comic = response.to_comic();
    let rendered = comic.render(args.output)?;
    if rendered.ends_with('\n') {
        print!("{}", rendered);
    } else {
        println!("{}", rendered);
    }

    if let Some(path) = args.save_image {
        let (bytes, content_type) = source.fetch_image(&comic.image).await?;
        tokio::fs::write(&path, &bytes).await?;
        info!(
            path = %path.display(),
            bytes = bytes.len(),
            content_type = %content_type,
            "saved comic image"
        );
    }

    Ok(())
}

async fn serve(source: XkcdSource, args: ServeArgs) -> anyhow::Result<()> {
    let state = Arc::new(AppState {
        source: Box::new(source),
    });

    let app = routes::build_router(state);

    let addr = format!("0.0.0.0:{}", args.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for CTRL+C");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
