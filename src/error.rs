use thiserror::Error;

use crate::domain::seat::seat_record::SeatNumber;

#[derive(Debug, Error)]
pub enum Error {
    #[error("File not found or could not be read: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse configuration JSON: {0}")]
    DeserializationError(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Reservation(#[from] ReservationError),
}

/// Outcome of a reservation attempt that did not go through.
///
/// None of these are fatal. The caller inspects the value, shows it to the
/// user and decides whether to ask again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReservationError {
    #[error("Seat {0} does not exist")]
    SeatNotFound(SeatNumber),

    #[error("Seat {0} is already reserved")]
    AlreadyReserved(SeatNumber),

    #[error("Not enough available seats: requested {requested}, available {available}")]
    InsufficientSeats { requested: u32, available: u32 },

    #[error("Invalid seat count: {0}")]
    InvalidSeatCount(u32),
}

pub type Result<T> = std::result::Result<T, Error>;
