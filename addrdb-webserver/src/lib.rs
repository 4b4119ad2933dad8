#[macro_use]
extern crate log;

use addrdb_application::AddressService;

mod web;

pub use web::Cfg;

pub async fn run(service: AddressService, cfg: Cfg, version: &'static str) {
    web::run(service, cfg, version).await;
}
