use anyhow::Result;
use std::{env, fs, io::ErrorKind, net::IpAddr, path::Path};
use thiserror::Error;

use addrdb_core::entities::Distance;
use addrdb_gateways::mapquest;

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "addrdb.toml";

const ENV_NAME_DB_URL: &str = "DATABASE_URL";
const ENV_NAME_MAPQUEST_API_KEY: &str = "MAPQUEST_API_KEY";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("The default radius must be a positive number of kilometers (got {0})")]
    DefaultRadius(f64),
    #[error("The connection pool needs at least one connection")]
    ConnectionPoolSize,
    #[error("Missing configuration of the {0} geocoding gateway")]
    MissingGatewayConfig(&'static str),
}

pub struct Config {
    pub db: Db,
    pub webserver: WebServer,
    pub geocoding: Geocoding,
    pub proximity: Proximity,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => {
                log::info!("Load configuration from {}", file_path.display());
                toml::from_str(&cfg_string)?
            }
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::try_from(raw_config)?;
        cfg.override_from(
            env::var(ENV_NAME_DB_URL).ok(),
            env::var(ENV_NAME_MAPQUEST_API_KEY).ok(),
        );
        Ok(cfg)
    }

    fn override_from(&mut self, db_url: Option<String>, mapquest_api_key: Option<String>) {
        if let Some(db_url) = db_url {
            self.db.conn_sqlite = db_url;
        }
        if let Some(key) = mapquest_api_key {
            match &mut self.geocoding.gateway {
                Some(GeocodingGateway::MapQuest { api_key, .. }) => {
                    *api_key = key;
                }
                None => {
                    log::info!("Enable MapQuest geocoding ({ENV_NAME_MAPQUEST_API_KEY} is set)");
                    self.geocoding.gateway = Some(GeocodingGateway::MapQuest {
                        api_key: key,
                        base_url: mapquest::DEFAULT_BASE_URL.to_string(),
                    });
                }
            }
        }
    }
}

pub struct Db {
    /// SQLite connection
    pub conn_sqlite: String,
    pub conn_pool_size: u32,
}

pub struct WebServer {
    pub address: IpAddr,
    pub port: u16,
    pub enable_cors: bool,
}

pub struct Geocoding {
    pub gateway: Option<GeocodingGateway>,
}

pub enum GeocodingGateway {
    MapQuest { api_key: String, base_url: String },
}

pub struct Proximity {
    pub default_radius: Distance,
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            db,
            webserver,
            geocoding,
            gateway,
            proximity,
        } = from;

        let raw::Db {
            connection_sqlite,
            connection_pool_size,
        } = db.unwrap_or_default();
        if connection_pool_size == 0 {
            return Err(ConfigError::ConnectionPoolSize.into());
        }
        let db = Db {
            conn_sqlite: connection_sqlite,
            conn_pool_size: connection_pool_size,
        };

        let raw::WebServer {
            address,
            port,
            cors,
        } = webserver.unwrap_or_default();
        let webserver = WebServer {
            address,
            port,
            enable_cors: cors,
        };

        let gateway = match geocoding.and_then(|g| g.gateway) {
            Some(raw::GeocodingGateway::Mapquest) => {
                let raw::MapQuest { api_key, base_url } = gateway
                    .unwrap_or_default()
                    .mapquest
                    .ok_or(ConfigError::MissingGatewayConfig("MapQuest"))?;
                Some(GeocodingGateway::MapQuest {
                    api_key: api_key.unwrap_or_default(),
                    base_url: base_url.unwrap_or_else(|| mapquest::DEFAULT_BASE_URL.to_string()),
                })
            }
            None => None,
        };
        let geocoding = Geocoding { gateway };

        let raw::Proximity { default_radius_km } = proximity.unwrap_or_default();
        if !(default_radius_km.is_finite() && default_radius_km > 0.0) {
            return Err(ConfigError::DefaultRadius(default_radius_km).into());
        }
        let proximity = Proximity {
            default_radius: Distance::from_km(default_radius_km),
        };

        Ok(Self {
            db,
            webserver,
            geocoding,
            proximity,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(toml: &str) -> Result<Config> {
        let raw: raw::Config = toml::from_str(toml)?;
        Config::try_from(raw)
    }

    #[test]
    fn default_config() {
        let cfg = Config::try_from(raw::Config::default()).unwrap();
        assert_eq!(cfg.db.conn_sqlite, "addrdb.sqlite");
        assert_eq!(cfg.webserver.port, 6767);
        assert_eq!(cfg.webserver.address, IpAddr::from([127, 0, 0, 1]));
        assert!(!cfg.webserver.enable_cors);
        assert_eq!(cfg.proximity.default_radius, Distance::from_km(100.0));
        assert!(matches!(
            cfg.geocoding.gateway,
            Some(GeocodingGateway::MapQuest { ref api_key, .. }) if api_key.is_empty()
        ));
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let cfg = parse(
            r#"
            [proximity]
            default-radius-km = 2.5
            "#,
        )
        .unwrap();
        assert_eq!(cfg.proximity.default_radius, Distance::from_km(2.5));
        assert_eq!(cfg.db.conn_pool_size, 10);
        assert!(cfg.geocoding.gateway.is_none());
    }

    #[test]
    fn reject_invalid_default_radius() {
        for radius in ["0.0", "-1.0", "inf", "nan"] {
            let toml = format!("[proximity]\ndefault-radius-km = {radius}\n");
            let err = parse(&toml).err().unwrap();
            assert!(matches!(
                err.downcast_ref::<ConfigError>(),
                Some(ConfigError::DefaultRadius(_))
            ));
        }
    }

    #[test]
    fn reject_empty_connection_pool() {
        let err = parse(
            r#"
            [db]
            connection-sqlite = ":memory:"
            connection-pool-size = 0
            "#,
        )
        .err()
        .unwrap();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::ConnectionPoolSize)
        ));
    }

    #[test]
    fn mapquest_without_base_url() {
        let cfg = parse(
            r#"
            [geocoding]
            gateway = "mapquest"

            [gateway.mapquest]
            api-key = "secret"
            "#,
        )
        .unwrap();
        match cfg.geocoding.gateway {
            Some(GeocodingGateway::MapQuest { api_key, base_url }) => {
                assert_eq!(api_key, "secret");
                assert_eq!(base_url, mapquest::DEFAULT_BASE_URL);
            }
            None => panic!("MapQuest gateway expected"),
        }
    }

    #[test]
    fn override_db_url_and_api_key() {
        let mut cfg = Config::try_from(raw::Config::default()).unwrap();
        cfg.override_from(Some("other.sqlite".into()), Some("key".into()));
        assert_eq!(cfg.db.conn_sqlite, "other.sqlite");
        assert!(matches!(
            cfg.geocoding.gateway,
            Some(GeocodingGateway::MapQuest { ref api_key, .. }) if api_key == "key"
        ));
    }

    #[test]
    fn api_key_from_env_enables_mapquest() {
        let mut cfg = parse("").unwrap();
        assert!(cfg.geocoding.gateway.is_none());
        cfg.override_from(None, Some("key".into()));
        assert!(matches!(
            cfg.geocoding.gateway,
            Some(GeocodingGateway::MapQuest { ref base_url, .. }) if base_url == mapquest::DEFAULT_BASE_URL
        ));
        assert_eq!(cfg.db.conn_sqlite, "addrdb.sqlite");
    }
}
