use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

use itinerary_server::store::ItineraryStore;
use itinerary_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Bind address from environment, defaulting to localhost:3000
    let addr = std::env::var("ITINERARY_BIND_ADDR")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| SocketAddr::from(([127, 0, 0, 1], 3000)));

    let state = AppState::new(ItineraryStore::new());
    let app = create_router(state);

    println!("Itinerary server listening on http://{addr}");
    println!();
    println!("API Endpoints:");
    println!("  GET  /health         - Health check");
    println!("  POST /itinerary      - Create an itinerary from unordered tickets");
    println!("  GET  /itinerary      - List itineraries with narratives");
    println!("  GET  /itinerary/:id  - Fetch one itinerary with its narrative");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind address");
    axum::serve(listener, app).await.expect("Server error");
}
