use std::sync::Arc;

use addrdb_application::{SharedGeoCodingGateway, SharedNotificationGateway};
use addrdb_gateways::{mapquest::MapQuest, notify::LogNotifier, unconfigured::NotConfigured};
use anyhow::Result;

use crate::config::{Geocoding, GeocodingGateway};

pub fn notification_gateway() -> SharedNotificationGateway {
    Arc::new(LogNotifier)
}

/// Must be called outside of an async runtime.
pub fn geocoding_gateway(cfg: &Geocoding) -> Result<SharedGeoCodingGateway> {
    match &cfg.gateway {
        Some(GeocodingGateway::MapQuest { api_key, base_url }) => {
            if api_key.trim().is_empty() {
                log::warn!("No MapQuest API key found: addresses cannot be geocoded");
                return Ok(Arc::new(NotConfigured));
            }
            log::info!("Use MapQuest geocoding gateway ({base_url})");
            let gw = MapQuest::new(api_key.clone(), base_url)?;
            Ok(Arc::new(gw))
        }
        None => {
            log::warn!("No geocoding gateway was configured: addresses cannot be geocoded");
            Ok(Arc::new(NotConfigured))
        }
    }
}
