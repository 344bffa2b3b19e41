//! Configuration utilities (port, static assets, RNG seed) read from env vars.

use std::{env, net::{Ipv4Addr, SocketAddr}};
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("POSEPARTY_SEED must be an unsigned integer, got `{0}`")]
    InvalidSeed(String),
}

/// Socket address to bind the server to.
///
/// Reads the `PORT` env var or defaults to 8080, binds to 0.0.0.0.
pub fn server_addr() -> SocketAddr {
    SocketAddr::from((Ipv4Addr::UNSPECIFIED, parse_port(env::var("PORT").ok())))
}

fn parse_port(raw: Option<String>) -> u16 {
    raw.and_then(|v| v.parse::<u16>().ok()).unwrap_or(8080)
}

/// Resolve the static directory path used by the server.
/// Order:
/// 1) STATIC_DIR env var
/// 2) ./frontend/static (running from the repo root)
/// 3) ../frontend/static
pub fn static_dir() -> PathBuf {
    if let Ok(p) = env::var("STATIC_DIR") {
        return PathBuf::from(p);
    }
    let p1 = Path::new("./frontend/static");
    if p1.exists() { return p1.to_path_buf(); }
    PathBuf::from("../frontend/static")
}

/// Optional fixed seed for room ID generation (`POSEPARTY_SEED`).
pub fn rng_seed() -> Result<Option<u64>, ConfigError> {
    parse_seed(env::var("POSEPARTY_SEED").ok())
}

fn parse_seed(raw: Option<String>) -> Result<Option<u64>, ConfigError> {
    match raw {
        None => Ok(None),
        Some(v) => v.trim().parse::<u64>().map(Some).map_err(|_| ConfigError::InvalidSeed(v)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn port_defaults_to_8080() {
        assert_eq!(parse_port(None), 8080);
        assert_eq!(parse_port(Some("not a port".into())), 8080);
        assert_eq!(parse_port(Some("3000".into())), 3000);
    }

    #[test]
    fn seed_is_optional_but_must_parse() {
        assert_eq!(parse_seed(None), Ok(None));
        assert_eq!(parse_seed(Some(" 42 ".into())), Ok(Some(42)));
        assert_eq!(parse_seed(Some("-1".into())), Err(ConfigError::InvalidSeed("-1".into())));
    }
}
