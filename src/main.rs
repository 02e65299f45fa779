use std::sync::Arc;

use mongodb::bson::doc;
use mongodb::Client;
use tokio::net::TcpListener;
use tracing::{info, Level};

use property_catalog::{
    api::{create_router, router::AppState},
    application::{
        ports::{ImageStore, PropertyRepository},
        use_cases::{
            CreatePropertyUseCase, DeletePropertyUseCase, GetPropertyUseCase,
            ListPropertiesUseCase,
        },
    },
    infrastructure::{persistence::MongoPropertyRepository, storage::LocalImageStore},
    Config,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing with structured logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_target(true)
        .init();

    info!("Starting property catalog service");

    // Load configuration
    let config = Config::from_env();
    config.validate().map_err(anyhow::Error::msg)?;
    info!("Configuration loaded and validated");

    // Connect to the document store; fail fast if it is unreachable
    info!("Connecting to document store: {}", config.mongodb_uri);
    let client = Client::with_uri_str(&config.mongodb_uri).await.map_err(|e| {
        tracing::error!("Failed to connect to document store: {}", e);
        e
    })?;
    let database = client.database(&config.database_name);
    database.run_command(doc! { "ping": 1 }).await.map_err(|e| {
        tracing::error!("Document store ping failed: {}", e);
        e
    })?;

    // Initialize infrastructure layer
    let property_repo: Arc<dyn PropertyRepository> = Arc::new(MongoPropertyRepository::new(
        &database,
        &config.collection_name,
    ));

    let image_store = Arc::new(LocalImageStore::new(config.media_root.clone()));
    image_store.init().await?;
    let image_store: Arc<dyn ImageStore> = image_store;

    info!("Infrastructure layer initialized");

    // Initialize use cases (application layer)
    let list_use_case = Arc::new(ListPropertiesUseCase::new(
        Arc::clone(&property_repo),
        config.public_base_url.clone(),
    ));
    let get_use_case = Arc::new(GetPropertyUseCase::new(
        Arc::clone(&property_repo),
        config.public_base_url.clone(),
    ));
    let create_use_case = Arc::new(CreatePropertyUseCase::new(
        Arc::clone(&property_repo),
        Arc::clone(&image_store),
        config.public_base_url.clone(),
    ));
    let delete_use_case = Arc::new(DeletePropertyUseCase::new(
        Arc::clone(&property_repo),
        Arc::clone(&image_store),
    ));

    info!("Application layer initialized");

    // Create app state
    let state = AppState {
        database,
        list_use_case,
        get_use_case,
        create_use_case,
        delete_use_case,
        media_root: config.media_root.clone(),
        static_root: config.static_root.clone(),
        max_upload_bytes: config.max_upload_bytes,
    };

    // Create router
    let app = create_router(state);

    // Start server
    info!("Listening on {}", config.listen_addr);
    let listener = TcpListener::bind(&config.listen_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
