use serde::{Deserialize, Serialize};
use std::net::IpAddr;

const DEFAULT_CONFIG_FILE: &str = include_str!("addrdb.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub db: Option<Db>,
    pub webserver: Option<WebServer>,
    pub geocoding: Option<Geocoding>,
    pub gateway: Option<Gateway>,
    pub proximity: Option<Proximity>,
}

impl Default for Config {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG_FILE).expect("Default configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Db {
    pub connection_sqlite: String,
    pub connection_pool_size: u32,
}

impl Default for Db {
    fn default() -> Self {
        Config::default().db.expect("DB configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct WebServer {
    pub address: IpAddr,
    pub port: u16,
    pub cors: bool,
}

impl Default for WebServer {
    fn default() -> Self {
        Config::default()
            .webserver
            .expect("Webserver configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Geocoding {
    pub gateway: Option<GeocodingGateway>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GeocodingGateway {
    Mapquest,
}

#[derive(Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Gateway {
    pub mapquest: Option<MapQuest>,
}

impl Default for Gateway {
    fn default() -> Self {
        Config::default().gateway.expect("Gateway configuration")
    }
}

#[derive(Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct MapQuest {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Proximity {
    pub default_radius_km: f64,
}

impl Default for Proximity {
    fn default() -> Self {
        Config::default()
            .proximity
            .expect("Proximity configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_default_config() {
        let cfg = Config::default();
        let db = cfg.db.unwrap();
        assert_eq!(db.connection_sqlite, "addrdb.sqlite");
        assert_eq!(db.connection_pool_size, 10);
        let webserver = cfg.webserver.unwrap();
        assert_eq!(webserver.port, 6767);
        assert!(!webserver.cors);
        assert_eq!(
            cfg.geocoding.unwrap().gateway,
            Some(GeocodingGateway::Mapquest)
        );
        let mapquest = cfg.gateway.unwrap().mapquest.unwrap();
        assert_eq!(mapquest.api_key.as_deref(), Some(""));
        assert_eq!(
            mapquest.base_url.as_deref(),
            Some("https://www.mapquestapi.com")
        );
        assert_eq!(cfg.proximity.unwrap().default_radius_km, 100.0);
    }

    #[test]
    fn parse_partial_config() {
        let cfg: Config = toml::from_str(
            r#"
            [db]
            connection-sqlite = ":memory:"
            connection-pool-size = 1
            "#,
        )
        .unwrap();
        assert!(cfg.db.is_some());
        assert!(cfg.webserver.is_none());
        assert!(cfg.geocoding.is_none());
        assert!(cfg.proximity.is_none());
    }

    #[test]
    fn reject_unknown_gateway() {
        let cfg: Result<Config, _> = toml::from_str(
            r#"
            [geocoding]
            gateway = "opencage"
            "#,
        );
        assert!(cfg.is_err());
    }
}
