pub mod domain;
pub mod handlers;
pub mod routes;
pub mod shared;
pub mod system;

use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    system::tracing::initialize()?;

    let config = shared::config::load_config()?;
    let site_root = config.site_root();
    tracing::info!("Serving site from {}", site_root.display());

    // Without a catalog the API answers 503; static pages still work.
    let candidates = config.catalog_paths(&site_root);
    if let Some(records) = domain::a001_project::repository::load(&candidates).await {
        domain::a001_project::repository::install(records);
    }

    let app = routes::configure_routes(&site_root);
    let addr = config.bind_addr();

    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!("Server successfully bound to {}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Port {} is already in use. Please ensure no other process is using this port.",
                    addr.port()
                );
            } else {
                tracing::error!("Failed to bind to {}. Error: {}", addr, e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}
