use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Address database with proximity search",
    propagate_version = true
)]
pub struct Cli {
    /// Configuration file (TOML)
    #[clap(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// URL to the database
    #[clap(long, value_name = "DATABASE_URL")]
    pub db_url: Option<String>,

    /// Port to listen on
    #[clap(short, long)]
    pub port: Option<u16>,

    /// Allow requests from any origin
    #[clap(long)]
    pub enable_cors: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the embedded database migrations and exit.
    Migrate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_args() {
        let cli = Cli::parse_from([
            "addrdb",
            "--db-url",
            "test.db",
            "-p",
            "8080",
            "--enable-cors",
        ]);
        assert_eq!(cli.db_url.as_deref(), Some("test.db"));
        assert_eq!(cli.port, Some(8080));
        assert!(cli.enable_cors);
        assert!(cli.command.is_none());
        assert!(cli.config.is_none());

        let cli = Cli::parse_from(["addrdb", "--config", "my.toml", "migrate"]);
        assert_eq!(cli.config, Some(PathBuf::from("my.toml")));
        assert!(matches!(cli.command, Some(Command::Migrate)));
        assert!(!cli.enable_cors);
    }
}
