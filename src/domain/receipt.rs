use std::fmt;

use uuid::Uuid;

use crate::domain::catalog::movie::{Money, Movie, TimeSlot};
use crate::domain::reservation::reservation_service::BookingOutcome;
use crate::domain::seat::seat_record::SeatNumber;
use crate::domain::user::user_registry::User;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub booking_id: Uuid,
    pub customer: String,
    pub movie: String,
    pub time_slot: String,
    pub seats: Vec<SeatNumber>,
    pub total: Money,
}

impl Receipt {
    pub fn new(user: &User, movie: &Movie, time_slot: &TimeSlot, outcome: &BookingOutcome) -> Self {
        Self {
            booking_id: outcome.booking_id,
            customer: user.username.clone(),
            movie: movie.name.clone(),
            time_slot: time_slot.label.clone(),
            seats: outcome.seats.clone(),
            total: movie.total_cost(outcome.seat_count()),
        }
    }

    pub fn seat_count(&self) -> usize {
        self.seats.len()
    }
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let seats = self.seats.iter().map(SeatNumber::to_string).collect::<Vec<_>>().join(", ");

        writeln!(f, "RECEIPT")?;
        writeln!(f, "Booking Reference: {}", self.booking_id)?;
        writeln!(f, "Customer: {}", self.customer)?;
        writeln!(f, "Movie: {}", self.movie)?;
        writeln!(f, "Time Slot: {}", self.time_slot)?;
        writeln!(f, "Seats: {}", seats)?;
        writeln!(f, "Number of Seats: {}", self.seat_count())?;
        writeln!(f, "Total Cost: {}", self.total)?;
        write!(f, "Thank you for booking with us!")
    }
}
