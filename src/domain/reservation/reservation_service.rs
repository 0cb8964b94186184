use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::clock::clock::SharedClock;
use crate::domain::seat::expiry_policy::ExpiryPolicy;
use crate::domain::seat::seat_record::{SeatMap, SeatNumber};
use crate::domain::seat::seat_store::SeatStore;
use crate::error::ReservationError;

/// A booking that went through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingOutcome {
    pub booking_id: Uuid,
    pub movie: String,
    /// Reserved seats, ascending.
    pub seats: Vec<SeatNumber>,
    pub reserved_at: DateTime<Utc>,
}

impl BookingOutcome {
    pub fn seat_count(&self) -> u32 {
        self.seats.len() as u32
    }
}

/// Turns "N seats for movie M" into seat reservations on the shared store.
///
/// The whole count-then-reserve sequence runs under one lock, so clones of
/// the service can be handed to several threads without over-committing.
#[derive(Debug, Clone)]
pub struct ReservationService {
    store: Arc<Mutex<SeatStore>>,
    clock: SharedClock,
}

impl ReservationService {
    pub fn new(store: SeatStore, clock: SharedClock) -> Self {
        Self { store: Arc::new(Mutex::new(store)), clock }
    }

    /// Seat universe `1..=max_seats` on the system clock with the default hold.
    pub fn initialize_seats(max_seats: u32) -> Self {
        Self::with_clock(max_seats, SharedClock::system(), ExpiryPolicy::default())
    }

    pub fn with_clock(max_seats: u32, clock: SharedClock, expiry: ExpiryPolicy) -> Self {
        let store = SeatStore::with_universe(max_seats, clock.clone(), expiry);
        Self::new(store, clock)
    }

    /// Reserves the `requested` lowest-numbered free seats, or nothing at all.
    pub fn reserve_seats(&self, movie: &str, requested: u32) -> Result<BookingOutcome, ReservationError> {
        if requested == 0 {
            return Err(ReservationError::InvalidSeatCount(requested));
        }

        let mut store = self.lock();
        let reserved_at = self.clock.now();

        // Counting pass. Also clears any lapsed reservations.
        let free: Vec<SeatNumber> = store.seat_numbers().into_iter().filter(|&seat| !store.is_reserved(seat)).collect();
        let available = free.len() as u32;

        if available < requested {
            log::info!("Booking for '{}' rejected: requested {} seats, {} available.", movie, requested, available);
            return Err(ReservationError::InsufficientSeats { requested, available });
        }

        let seats = free[..requested as usize].to_vec();
        for &seat in &seats {
            store.reserve_at(seat, reserved_at)?;
        }

        let outcome = BookingOutcome { booking_id: Uuid::new_v4(), movie: movie.to_string(), seats, reserved_at };
        log::info!("Booking {} for '{}': seats {:?}.", outcome.booking_id, movie, outcome.seats);

        Ok(outcome)
    }

    /// Expiry-aware status of every seat, for rendering.
    pub fn display_seats(&self) -> SeatMap {
        self.lock().snapshot()
    }

    pub fn available_seats(&self) -> usize {
        self.display_seats().free_count()
    }

    pub fn is_reserved(&self, seat_number: SeatNumber) -> bool {
        self.lock().is_reserved(seat_number)
    }

    pub fn reserve(&self, seat_number: SeatNumber) -> Result<(), ReservationError> {
        self.lock().reserve(seat_number)
    }

    pub fn total_seats(&self) -> usize {
        self.lock().len()
    }

    fn lock(&self) -> MutexGuard<'_, SeatStore> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::clock::clock::Clock;
    use crate::domain::clock::clock_mock::MockClock;
    use chrono::{Duration, TimeZone};

    fn service(max_seats: u32) -> (ReservationService, MockClock) {
        let clock = MockClock::new(Utc.with_ymd_and_hms(2024, 2, 2, 20, 0, 0).unwrap());
        (ReservationService::with_clock(max_seats, clock.shared(), ExpiryPolicy::default()), clock)
    }

    #[test]
    fn zero_seats_is_rejected() {
        let (service, _clock) = service(5);

        assert_eq!(service.reserve_seats("Matrix", 0), Err(ReservationError::InvalidSeatCount(0)));
        assert_eq!(service.available_seats(), 5);
    }

    #[test]
    fn fills_gaps_left_by_single_reservations() {
        let (service, _clock) = service(6);
        service.reserve(1).unwrap();
        service.reserve(3).unwrap();

        let outcome = service.reserve_seats("Brothers", 3).unwrap();

        assert_eq!(outcome.seats, vec![2, 4, 5]);
        assert_eq!(service.display_seats().markers(), "XXXXXO");
    }

    #[test]
    fn counting_pass_reclaims_lapsed_seats() {
        let (service, clock) = service(2);
        service.reserve_seats("The Boys", 2).unwrap();

        clock.advance(Duration::hours(13));
        let outcome = service.reserve_seats("The Boys", 2).unwrap();

        assert_eq!(outcome.seats, vec![1, 2]);
        assert_eq!(outcome.reserved_at, clock.now());
    }

    /// Moves forward one second on every read.
    #[derive(Debug, Clone)]
    struct TickingClock(MockClock);

    impl Clock for TickingClock {
        fn now(&self) -> DateTime<Utc> {
            let now = self.0.now();
            self.0.advance(Duration::seconds(1));
            now
        }

        fn clone_box(&self) -> SharedClock {
            SharedClock(std::sync::Arc::new(self.clone()))
        }
    }

    #[test]
    fn booking_time_matches_seat_stamps() {
        let clock = TickingClock(MockClock::new(Utc.with_ymd_and_hms(2024, 2, 2, 20, 0, 0).unwrap()));
        let service = ReservationService::with_clock(5, clock.clone_box(), ExpiryPolicy::default());

        let outcome = service.reserve_seats("Matrix", 3).unwrap();

        let store = service.lock();
        for seat in &outcome.seats {
            assert_eq!(store.get(*seat).and_then(|record| record.reserved_at()), Some(outcome.reserved_at));
        }
    }
}
