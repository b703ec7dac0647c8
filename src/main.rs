// src/main.rs
use std::sync::Arc;
use actix_web::{App, HttpServer, web, middleware::Logger};
use log::{info, error};

use memorial_be::config::{self, HOST, PORT, UPLOAD_DIR};
use memorial_be::repositories::{PgCommentRepository, PgPostRepository};
use memorial_be::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let pg_pool = match config::get_pg_pool() {
        Ok(p) => p,
        Err(e) => {
            error!("Failed to create PG pool: {:#}", e);
            std::process::exit(1);
        }
    };

    let state = AppState::new(
        Arc::new(PgPostRepository::new(pg_pool.clone())),
        Arc::new(PgCommentRepository::new(pg_pool)),
        UPLOAD_DIR,
    );
    state.upload_service.prepare()?;
    let state = web::Data::new(state);

    let bind_address = format!("{}:{}", HOST, PORT);
    info!("Server running at http://{}", bind_address);

    HttpServer::new(move || {
        App::new()
            .wrap(config::build_cors())
            .wrap(Logger::default())
            .app_data(state.clone())
            .configure(memorial_be::configure)
    })
    .bind(&bind_address)?
    .run()
    .await
}
