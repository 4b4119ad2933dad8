use addrdb_application::{
    sqlite::{run_embedded_database_migrations, Connections},
    AddressService,
};
use anyhow::Result;
use clap::Parser as _;

mod cli;
mod config;
mod gateways;

use self::{
    cli::{Cli, Command},
    config::Config,
};

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let Cli {
        config,
        db_url,
        port,
        enable_cors,
        command,
    } = Cli::parse();

    let mut cfg = Config::try_load_from_file_or_default(config)?;
    if let Some(db_url) = db_url {
        cfg.db.conn_sqlite = db_url;
    }
    if let Some(port) = port {
        cfg.webserver.port = port;
    }
    if enable_cors {
        cfg.webserver.enable_cors = true;
    }

    log::info!(
        "Connecting to SQLite database '{}' (pool size = {})",
        cfg.db.conn_sqlite,
        cfg.db.conn_pool_size
    );
    let connections = Connections::init(&cfg.db.conn_sqlite, cfg.db.conn_pool_size)?;
    run_embedded_database_migrations(connections.exclusive()?)?;

    if let Some(Command::Migrate) = command {
        log::info!("Database migrations finished");
        return Ok(());
    }

    // The blocking HTTP client of the geocoder must be created
    // and dropped outside of the async runtime.
    let geo_gw = gateways::geocoding_gateway(&cfg.geocoding)?;
    let service = AddressService::new(
        connections,
        geo_gw.clone(),
        gateways::notification_gateway(),
        cfg.proximity.default_radius,
    );
    let web_cfg = addrdb_webserver::Cfg {
        address: cfg.webserver.address,
        port: cfg.webserver.port,
        enable_cors: cfg.webserver.enable_cors,
    };

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(addrdb_webserver::run(service, web_cfg, VERSION));
    drop(runtime);
    drop(geo_gw);
    Ok(())
}
