use dotenv::dotenv;
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub session_secret: String,
    pub report_endpoint: String,
    pub app_env: String,
}

const DEFAULT_SESSION_SECRET: &str = "development-only-secret";

impl Config {
    /// Load the configuration from environment variables.
    /// Calls dotenv() automatically.
    pub fn from_env() -> Result<Self, String> {
        dotenv().ok();

        let server_host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

        let server_port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| "Invalid SERVER_PORT: must be a number between 0-65535".to_string())?;

        let session_secret = env::var("SESSION_SECRET").unwrap_or_else(|_| {
            eprintln!("WARNING: SESSION_SECRET not set, using default (not secure for production!)");
            DEFAULT_SESSION_SECRET.to_string()
        });

        let report_endpoint = env::var("REPORT_ENDPOINT")
            .map_err(|_| "REPORT_ENDPOINT must be set in .env file".to_string())?;

        let app_env = env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());

        Ok(Config {
            server_host,
            server_port,
            session_secret,
            report_endpoint,
            app_env,
        })
    }

    /// Print the configuration (hiding secrets)
    pub fn print_info(&self) {
        println!("   Server Configuration:");
        println!("   Environment: {}", self.app_env);
        println!("   Server Address: {}:{}", self.server_host, self.server_port);
        println!("   Report Upstream: {}", self.report_endpoint);
        println!(
            "   Session Secret: {}",
            if self.session_secret == DEFAULT_SESSION_SECRET {
                "   USING DEFAULT (INSECURE!)"
            } else {
                "✓ Custom secret configured"
            }
        );
    }
}
