use indexnow_relay::environment::Environment;
use indexnow_relay::shutdown::Shutdown;
use indexnow_relay_worker::routes::Routes;
use indexnow_relay_worker::state::AppState;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (non_blocking, _guard) = tracing_appender::non_blocking(std::io::stdout());

    let rust_log = Environment::string("RUST_LOG", "INFO");

    tracing_subscriber::registry()
        .with(EnvFilter::new(rust_log))
        .with(Box::new(tracing_subscriber::fmt::layer().with_writer(non_blocking)))
        .init();

    info!("Starting...");

    let app_state = AppState::new()?;
    let port = Environment::u16("HTTP_PORT", 9095)?;

    info!(
        "Relaying to {} IndexNow endpoints: {}",
        app_state.relay_state.resources.endpoints.len(),
        app_state.relay_state.resources.endpoints.join(", ")
    );

    init_http_server(app_state, port).await?;

    info!("Stopped!");

    Ok(())
}

async fn init_http_server(
    app_state: AppState,
    port: u16,
) -> Result<(), Box<dyn std::error::Error>> {
    info!("Starting http server...");
    let routes = Routes::routes(app_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr).await?;

    info!("Running http server on {addr}...");
    axum::serve(listener, routes).with_graceful_shutdown(Shutdown::signal("Stopping http server...")).await?;

    info!("Http server stopped!");

    Ok(())
}
