use std::env;
use actix_cors::Cors;
use anyhow::{Context, Result};
use deadpool_postgres::{Config, Pool, Runtime, PoolConfig};
use tokio_postgres::NoTls;

pub const HOST: &str = "0.0.0.0";
pub const PORT: u16 = 3001;

pub const ALLOWED_ORIGINS: [&str; 2] = ["https://mungplanet.com", "https://www.mungplanet.com"];

/// Directory uploaded images are written to and served from.
pub const UPLOAD_DIR: &str = "uploads";
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

pub const DEFAULT_LANG: &str = "ko";

pub fn get_pg_pool() -> Result<Pool> {
    let mut cfg = Config::new();
    cfg.host = Some(env::var("PG_HOST").context("PG_HOST not set")?);
    cfg.user = Some(env::var("PG_USER").context("PG_USER not set")?);
    cfg.password = env::var("PG_PASS").ok();
    cfg.dbname = Some(env::var("PG_DB").context("PG_DB not set")?);
    cfg.port = match env::var("PG_PORT") {
        Ok(port) => Some(port.parse().context("PG_PORT is not a valid port")?),
        Err(_) => None,
    };

    if cfg.pool.is_none() {
        cfg.pool = Some(PoolConfig::default());
    }
    if let Some(ref mut pcfg) = cfg.pool {
        pcfg.max_size = 16;
    }

    cfg.create_pool(Some(Runtime::Tokio1), NoTls)
       .context("failed to create postgres pool")
}

pub fn build_cors() -> Cors {
    let mut cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![
            "content-type",
            "accept",
            "x-requested-with",
        ])
        .supports_credentials()
        .max_age(3600);

    for origin in ALLOWED_ORIGINS {
        cors = cors.allowed_origin(origin);
    }

    cors
}
