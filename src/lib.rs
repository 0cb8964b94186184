pub mod api;
pub mod config;
pub mod console;
pub mod domain;
pub mod error;
pub mod loader;
pub mod logger;

use crate::config::AppConfig;
use crate::domain::clock::clock::SharedClock;
use crate::domain::reservation::reservation_service::ReservationService;

/// Builds the reservation service for a configured screening room on the
/// system clock.
pub fn build_reservation_service(config: &AppConfig) -> ReservationService {
    ReservationService::with_clock(config.max_seats, SharedClock::system(), config.expiry)
}
