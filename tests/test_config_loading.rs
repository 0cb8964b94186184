use std::fs;
use std::path::PathBuf;

use uuid::Uuid;

use seat_reservation::build_reservation_service;
use seat_reservation::config::{AppConfig, ConfigOverrides, DEFAULT_MAX_SEATS, DEFAULT_USERS_FILE};
use seat_reservation::domain::catalog::movie::Money;
use seat_reservation::domain::seat::expiry_policy::ExpiryPolicy;
use seat_reservation::error::Error;

fn write_temp_config(content: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("seat_reservation_{}.json", Uuid::new_v4()));
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn defaults_without_file() {
    let config = AppConfig::load(None, ConfigOverrides::default()).unwrap();

    assert_eq!(config.max_seats, DEFAULT_MAX_SEATS);
    assert_eq!(config.expiry, ExpiryPolicy::default());
    assert_eq!(config.users_file, PathBuf::from(DEFAULT_USERS_FILE));
    assert_eq!(config.catalog.movies().len(), 6);
    assert_eq!(build_reservation_service(&config).total_seats(), 50);
}

#[test]
fn file_values_replace_defaults() {
    let path = write_temp_config(
        r#"{
            "maxSeats": 12,
            "reservationHoldHours": 2,
            "usersFile": "staff.txt",
            "movies": [{ "name": "Alien", "price": 7.25 }],
            "timeSlots": ["Matinee (1:00 PM)"]
        }"#,
    );

    let config = AppConfig::load(Some(path.as_path()), ConfigOverrides::default()).unwrap();
    fs::remove_file(&path).ok();

    assert_eq!(config.max_seats, 12);
    assert_eq!(config.expiry, ExpiryPolicy::from_hours(2).unwrap());
    assert_eq!(config.users_file, PathBuf::from("staff.txt"));
    assert_eq!(config.catalog.movie(1).map(|m| m.price), Some(Money::from_cents(725)));
    assert_eq!(config.catalog.time_slot(1).map(|s| s.label.as_str()), Some("Matinee (1:00 PM)"));
}

#[test]
fn command_line_overrides_file() {
    let path = write_temp_config(r#"{ "maxSeats": 12, "usersFile": "staff.txt" }"#);
    let overrides = ConfigOverrides { max_seats: Some(30), reservation_hold_hours: Some(1), users_file: Some(PathBuf::from("cli.txt")) };

    let config = AppConfig::load(Some(path.as_path()), overrides).unwrap();
    fs::remove_file(&path).ok();

    assert_eq!(config.max_seats, 30);
    assert_eq!(config.expiry, ExpiryPolicy::from_hours(1).unwrap());
    assert_eq!(config.users_file, PathBuf::from("cli.txt"));
}

#[test]
fn invalid_values_are_rejected() {
    let zero_seats = ConfigOverrides { max_seats: Some(0), ..ConfigOverrides::default() };
    assert!(matches!(AppConfig::load(None, zero_seats), Err(Error::InvalidConfig(_))));

    let negative_hold = ConfigOverrides { reservation_hold_hours: Some(-3), ..ConfigOverrides::default() };
    assert!(matches!(AppConfig::load(None, negative_hold), Err(Error::InvalidConfig(_))));

    let huge_hold = ConfigOverrides { reservation_hold_hours: Some(i64::MAX / 1000), ..ConfigOverrides::default() };
    assert!(matches!(AppConfig::load(None, huge_hold), Err(Error::InvalidConfig(_))));

    let huge_price = write_temp_config(r#"{ "movies": [{ "name": "Alien", "price": 1e18 }] }"#);
    let result = AppConfig::load(Some(huge_price.as_path()), ConfigOverrides::default());
    fs::remove_file(&huge_price).ok();
    assert!(matches!(result, Err(Error::InvalidConfig(_))));
}

#[test]
fn unknown_keys_and_bad_json_fail() {
    let typo = write_temp_config(r#"{ "maxSeat": 12 }"#);
    let result = AppConfig::load(Some(typo.as_path()), ConfigOverrides::default());
    fs::remove_file(&typo).ok();
    assert!(matches!(result, Err(Error::DeserializationError(_))));

    let missing = std::env::temp_dir().join(format!("missing_{}.json", Uuid::new_v4()));
    assert!(matches!(AppConfig::load(Some(missing.as_path()), ConfigOverrides::default()), Err(Error::IoError(_))));
}
