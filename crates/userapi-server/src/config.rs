//! Server configuration from command-line flags and environment variables.

use clap::Parser;

/// Listen settings for the HTTP server.
#[derive(Debug, Clone, Parser)]
#[command(name = "userapi", version, about = "In-memory user CRUD API with OpenAPI docs")]
pub struct ServerConfig {
    /// Interface to bind.
    #[arg(long, env = "USERAPI_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on.
    #[arg(long, short, env = "USERAPI_PORT", default_value_t = 3000)]
    pub port: u16,
}

impl ServerConfig {
    /// `host:port` string accepted by `TcpListener::bind`.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_listen_on_port_3000() {
        let config = ServerConfig::try_parse_from(["userapi"]).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.bind_addr(), "0.0.0.0:3000");
    }

    #[test]
    fn flags_override_defaults() {
        let config =
            ServerConfig::try_parse_from(["userapi", "--host", "127.0.0.1", "-p", "8080"]).unwrap();
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
    }

    #[test]
    fn rejects_port_out_of_range() {
        assert!(ServerConfig::try_parse_from(["userapi", "--port", "70000"]).is_err());
    }
}
