//! A small photo identification quiz served over http.
//!
//! Admins upload photos, players log in with a shared password and are shown
//! the photos in random order until every one has been answered.

#[macro_use]
extern crate rocket;

pub mod config;
pub mod helpers;
pub mod routes;
pub mod session;
pub mod views;

use photoquiz_common::store::PhotoStore;
use rocket::figment::Figment;
use rocket::{Build, Rocket};
use rocket_prometheus::PrometheusMetrics;
use session::Passwords;
use std::sync::Arc;

/// Shared server state handed to every route.
pub struct AppState {
    pub store: Arc<dyn PhotoStore>,
    pub passwords: Passwords,
}

impl AppState {
    pub fn new(store: Arc<dyn PhotoStore>, passwords: Passwords) -> Self {
        Self { store, passwords }
    }
}

/// Assemble the server: routes, catchers, fairings and metrics.
pub fn build_rocket(figment: Figment, state: AppState) -> Rocket<Build> {
    let prometheus = PrometheusMetrics::new();

    rocket::custom(figment)
        .manage(state)
        .attach(helpers::RequestTimingFairing)
        .attach(prometheus.clone())
        .mount("/", routes::all())
        .mount("/metrics", prometheus)
        .register("/", routes::catchers())
}
