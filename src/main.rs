use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use log::info;
use std::env;
use std::sync::Arc;

use employee_api::errors::ApiError;
use employee_api::handlers;
use employee_api::storage::{EmployeeStore, MemoryStore};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());

    // Single shared store behind the trait so handlers stay storage-agnostic.
    let store: Arc<dyn EmployeeStore> = Arc::new(MemoryStore::new());
    let store = web::Data::from(store);

    info!("Starting server at {}", bind_addr);

    HttpServer::new(move || {
        App::new()
            .app_data(store.clone())
            .app_data(web::JsonConfig::default().error_handler(|err, _req| {
                ApiError::InvalidInput(err.to_string()).into()
            }))
            .wrap(middleware::Logger::default())
            .configure(handlers::configure)
    })
    .bind(&bind_addr)?
    .run()
    .await
}
