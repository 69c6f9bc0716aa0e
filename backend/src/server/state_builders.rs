//! Builder for the HTTP state from server configuration.

use std::sync::Arc;

use actix_web::web;
use tracing::{info, warn};

use employees::inbound::http::state::HttpState;
use employees::outbound::memory::InMemoryEmployeeRepository;
use employees::outbound::persistence::DieselEmployeeRepository;

use super::ServerConfig;

/// Wire the employee ports to PostgreSQL when a pool is configured, otherwise
/// to the in-memory repository.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let state = match &config.db_pool {
        Some(pool) => {
            info!("employee repository: postgres");
            HttpState::from_repository(Arc::new(DieselEmployeeRepository::new(pool.clone())))
        }
        None => {
            warn!("no database configured; employees are kept in memory and lost on restart");
            HttpState::from_repository(Arc::new(InMemoryEmployeeRepository::new()))
        }
    };
    web::Data::new(state)
}
