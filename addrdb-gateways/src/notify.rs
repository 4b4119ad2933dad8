use addrdb_core::gateways::notify::{NotificationEvent, NotificationGateway};
use itertools::Itertools;

/// Writes all notifications into the log.
#[derive(Debug, Clone, Default)]
pub struct LogNotifier;

impl NotificationGateway for LogNotifier {
    fn notify(&self, event: NotificationEvent) {
        use NotificationEvent as E;
        match event {
            E::AddressCreated { address } => {
                log::info!(
                    "Address {} created at ({:?}, {:?})",
                    address.id,
                    address.lat,
                    address.lng
                );
            }
            E::AddressUpdated { address } => {
                log::info!(
                    "Address {} updated to ({:?}, {:?})",
                    address.id,
                    address.lat,
                    address.lng
                );
            }
            E::AddressDeleted { id } => {
                log::info!("Address {id} deleted");
            }
            E::ProximityQueryFinished {
                reference,
                radius,
                candidates,
                matches,
                excluded,
            } => {
                log::info!(
                    "Found {matches} of {candidates} addresses within {radius} around {reference}"
                );
                if !excluded.is_empty() {
                    log::warn!(
                        "Skipped {} addresses with invalid positions: {}",
                        excluded.len(),
                        excluded
                            .iter()
                            .map(|(id, err)| format!("{id} ({err})"))
                            .join(", ")
                    );
                }
            }
        }
    }
}
