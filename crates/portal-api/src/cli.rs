use clap::{Args, Parser, Subcommand};
use portal_config::{ConfigError, PortalConfig};

/// Top-level CLI parser for the `portal` binary.
#[derive(Debug, Parser)]
#[command(name = "portal", version, about = "Language portal backend")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Serve the HTTP API
    Serve(ServeArgs),
    /// Create the database schema and exit
    InitDb(DatabaseArgs),
}

#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Interface to bind (overrides `server.host`)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind (overrides `server.port`)
    #[arg(long)]
    pub port: Option<u16>,

    #[command(flatten)]
    pub database: DatabaseArgs,
}

#[derive(Debug, Args)]
pub struct DatabaseArgs {
    /// Database file (overrides `database.path`)
    #[arg(long = "database")]
    pub path: Option<String>,
}

impl Commands {
    /// Apply this command's overrides and re-check the result.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` when an override breaks a constraint.
    pub fn apply(&self, config: &mut PortalConfig) -> Result<(), ConfigError> {
        match self {
            Self::Serve(args) => args.apply(config),
            Self::InitDb(args) => args.apply(config),
        }
        config.validate()
    }
}

impl ServeArgs {
    /// Layer command-line overrides on top of the loaded config.
    pub fn apply(&self, config: &mut PortalConfig) {
        if let Some(host) = &self.host {
            config.server.host.clone_from(host);
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        self.database.apply(config);
    }
}

impl DatabaseArgs {
    pub fn apply(&self, config: &mut PortalConfig) {
        if let Some(path) = &self.path {
            config.database.path.clone_from(path);
        }
    }
}
