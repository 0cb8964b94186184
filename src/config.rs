use std::path::{Path, PathBuf};

use crate::api::config_dto::AppConfigDto;
use crate::domain::catalog::catalog::Catalog;
use crate::domain::seat::expiry_policy::{DEFAULT_HOLD_HOURS, ExpiryPolicy};
use crate::error::{Error, Result};
use crate::loader::parser::parse_json_file;

pub const DEFAULT_MAX_SEATS: u32 = 50;
pub const DEFAULT_USERS_FILE: &str = "user_details.txt";

/// Values given on the command line. They take precedence over the file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub max_seats: Option<u32>,
    pub reservation_hold_hours: Option<i64>,
    pub users_file: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub max_seats: u32,
    pub expiry: ExpiryPolicy,
    pub users_file: PathBuf,
    pub catalog: Catalog,
}

impl AppConfig {
    /// Resolves defaults, then the optional JSON file, then `overrides`.
    pub fn load(path: Option<&Path>, overrides: ConfigOverrides) -> Result<Self> {
        let dto = match path {
            Some(path) => {
                log::info!("Loading configuration from '{}'.", path.display());
                parse_json_file::<AppConfigDto>(path)?
            }
            None => AppConfigDto::default(),
        };

        Self::from_dto(dto, overrides)
    }

    pub fn from_dto(dto: AppConfigDto, overrides: ConfigOverrides) -> Result<Self> {
        let max_seats = overrides.max_seats.or(dto.max_seats).unwrap_or(DEFAULT_MAX_SEATS);
        if max_seats == 0 {
            return Err(Error::InvalidConfig("maxSeats must be at least 1".to_string()));
        }

        let hold_hours = overrides.reservation_hold_hours.or(dto.reservation_hold_hours).unwrap_or(DEFAULT_HOLD_HOURS);
        if hold_hours < 0 {
            return Err(Error::InvalidConfig(format!("reservationHoldHours must not be negative, got {}", hold_hours)));
        }
        let expiry = ExpiryPolicy::from_hours(hold_hours)
            .ok_or_else(|| Error::InvalidConfig(format!("reservationHoldHours is out of range, got {}", hold_hours)))?;

        let users_file = overrides
            .users_file
            .or_else(|| dto.users_file.map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_USERS_FILE));

        let catalog = Catalog::from_dto(dto.movies, dto.time_slots)?;

        Ok(Self { max_seats, expiry, users_file, catalog })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            max_seats: DEFAULT_MAX_SEATS,
            expiry: ExpiryPolicy::default(),
            users_file: PathBuf::from(DEFAULT_USERS_FILE),
            catalog: Catalog::default(),
        }
    }
}
