mod api;
mod db;
mod models;
mod schema;
mod store;

use std::env;
use std::sync::Arc;

use axum::Router;
use skillet_core::service::RecipeService;
use tower_http::trace::TraceLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use utoipa_swagger_ui::SwaggerUi;

use crate::store::PgRecipeStore;

/// Application state shared across all handlers
pub type AppState = Arc<RecipeService<PgRecipeStore>>;

fn init_telemetry() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() {
    // Check for --openapi flag to dump spec and exit
    if env::args().any(|arg| arg == "--openapi") {
        let spec = api::openapi().to_pretty_json().unwrap();
        println!("{spec}");
        return;
    }

    init_telemetry();

    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let bind_addr = env::var("SKILLET_BIND").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

    let pool = db::create_pool(&database_url);
    let service: AppState = Arc::new(RecipeService::new(PgRecipeStore::new(pool)));

    let swagger_ui = SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api::openapi());

    let app = Router::new()
        .nest("/api/v1/recipes", api::recipes::router())
        .merge(swagger_ui)
        .with_state(service)
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(&bind_addr).await.unwrap();

    tracing::info!("Server listening on {}", listener.local_addr().unwrap());
    tracing::info!("Swagger UI available at /swagger-ui");

    axum::serve(listener, app).await.unwrap();
}
