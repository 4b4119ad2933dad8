use std::net::IpAddr;

use addrdb_application::AddressService;
use rocket::{config::Config as RocketCfg, Rocket, Route};

pub mod api;
mod guards;


#[derive(Debug, Clone)]
pub struct Cfg {
    pub address: IpAddr,
    pub port: u16,
    pub enable_cors: bool,
}

pub(crate) struct InstanceOptions {
    mounts: Vec<(&'static str, Vec<Route>)>,
    rocket_cfg: RocketCfg,
    version: &'static str,
}

pub(crate) fn rocket_instance(
    options: InstanceOptions,
    service: AddressService,
) -> Rocket<rocket::Build> {
    let InstanceOptions {
        mounts,
        rocket_cfg,
        version,
    } = options;

    info!(
        "Default radius of proximity queries: {}",
        service.default_radius()
    );

    let mut instance = rocket::custom(rocket_cfg)
        .manage(guards::Addresses::from(service))
        .manage(guards::Version(version));

    for (m, r) in mounts {
        instance = instance.mount(m, r);
    }
    instance
}

fn mounts() -> Vec<(&'static str, Vec<Route>)> {
    vec![("/api", api::routes())]
}

pub async fn run(service: AddressService, cfg: Cfg, version: &'static str) {
    let Cfg {
        address,
        port,
        enable_cors,
    } = cfg;
    let rocket_cfg = RocketCfg {
        address,
        port,
        ..RocketCfg::release_default()
    };
    info!("Starting web server on {address}:{port}");
    let options = InstanceOptions {
        mounts: mounts(),
        rocket_cfg,
        version,
    };
    let instance = rocket_instance(options, service);
    let server_task = if enable_cors {
        match rocket_cors::CorsOptions::default().to_cors() {
            Ok(cors) => instance.attach(cors).launch(),
            Err(err) => {
                error!("Invalid CORS configuration: {err}");
                return;
            }
        }
    } else {
        instance.launch()
    };
    if let Err(err) = server_task.await {
        error!("Unable to run web server: {err}");
    }
}
