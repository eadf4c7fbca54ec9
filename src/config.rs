use std::{net::SocketAddr, path::PathBuf};

use anyhow::Context;

#[derive(Clone, Debug)]
pub struct Config {
    pub addr: SocketAddr,
    pub database_url: String,
    pub seed_path: PathBuf,
    pub default_page_size: u64,
    pub max_page_size: u64,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port: u16 =
            std::env::var("PORT").unwrap_or_else(|_| "8000".to_string()).parse().context("PORT")?;

        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://razzies.db?mode=rwc".to_string());

        let seed_path = std::env::var("SEED_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("data/movielist.csv"));

        let max_page_size: u64 = std::env::var("MAX_PAGE_SIZE")
            .ok()
            .and_then(|s| s.parse().ok())
            .filter(|n| *n > 0)
            .unwrap_or(100);

        let default_page_size: u64 = std::env::var("DEFAULT_PAGE_SIZE")
            .ok()
            .and_then(|s| s.parse().ok())
            .filter(|n| *n > 0)
            .unwrap_or(10)
            .min(max_page_size);

        Ok(Self {
            addr: format!("{host}:{port}").parse().context("HOST/PORT")?,
            database_url,
            seed_path,
            default_page_size,
            max_page_size,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], 8000)),
            database_url: "sqlite::memory:".to_string(),
            seed_path: PathBuf::from("data/movielist.csv"),
            default_page_size: 10,
            max_page_size: 100,
        }
    }
}
