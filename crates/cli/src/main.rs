use clap::Parser;
use server::Config;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "catchup")]
#[command(about = "CatchUp news favorite sources server", version, long_about = None)]
struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, env = "CATCHUP_CONFIG", default_value = "catchup.toml")]
    config: PathBuf,

    /// Port to listen on
    #[arg(short, long, env = "CATCHUP_PORT")]
    port: Option<u16>,

    /// Host to bind to
    #[arg(long, env = "CATCHUP_HOST")]
    host: Option<String>,

    /// SQLite database file path
    #[arg(short, long, env = "CATCHUP_DATABASE")]
    database: Option<String>,
}

impl Cli {
    /// Apply command line overrides on top of the file config
    fn into_config(self) -> Result<Config, server::config::ConfigError> {
        let mut config = Config::load(&self.config)?;
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(host) = self.host {
            config.host = host;
        }
        if let Some(database) = self.database {
            config.database_url = format!("sqlite:{}?mode=rwc", database);
        }
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = Cli::parse().into_config()?;

    server::run_server(config).await
}
