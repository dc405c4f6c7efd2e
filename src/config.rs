use std::net::SocketAddr;
use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "Acervo";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";

/// Default tracing filter when RUST_LOG is not set.
pub fn default_log_filter() -> String {
    "info".to_string()
}

/// Database file path. `ACERVO_DB_PATH` overrides the default
/// `acervo.db` in the working directory.
pub fn database_path() -> PathBuf {
    std::env::var("ACERVO_DB_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("acervo.db"))
}

/// Listen address. `ACERVO_BIND_ADDR` overrides the default.
pub fn bind_addr() -> SocketAddr {
    let raw =
        std::env::var("ACERVO_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
    raw.parse().unwrap_or_else(|_| {
        tracing::warn!(addr = %raw, "Invalid ACERVO_BIND_ADDR, using default");
        DEFAULT_BIND_ADDR.parse().expect("default address is valid")
    })
}
