use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use chrono::{DateTime, Utc};

use crate::domain::clock::clock::SharedClock;
use crate::domain::seat::expiry_policy::ExpiryPolicy;
use crate::domain::seat::seat_record::{SeatMap, SeatNumber, SeatRecord, SeatStatus};
use crate::error::ReservationError;

/// Owns every seat of the screening room, keyed by seat number.
///
/// Expiry is lazy: a lapsed reservation stays on its record until a query
/// touches that seat, at which point it is cleared.
#[derive(Debug)]
pub struct SeatStore {
    seats: BTreeMap<SeatNumber, SeatRecord>,
    expiry: ExpiryPolicy,
    clock: SharedClock,
}

impl SeatStore {
    pub fn new(clock: SharedClock, expiry: ExpiryPolicy) -> Self {
        Self { seats: BTreeMap::new(), expiry, clock }
    }

    /// Builds a store holding the seat universe `1..=max_seats`, all free.
    pub fn with_universe(max_seats: u32, clock: SharedClock, expiry: ExpiryPolicy) -> Self {
        let mut store = Self::new(clock, expiry);
        for seat_number in 1..=max_seats {
            store.insert(seat_number);
        }
        log::info!("Seat universe initialized with {} seats (hold {}h).", store.len(), expiry.hold().num_hours());
        store
    }

    /// Adds a free seat.
    ///
    /// Inserting a seat number that already exists is not an error: the call
    /// is dropped and the existing record is left untouched.
    ///
    /// # Returns
    /// Returns true if a new record was created.
    pub fn insert(&mut self, seat_number: SeatNumber) -> bool {
        match self.seats.entry(seat_number) {
            Entry::Vacant(slot) => {
                slot.insert(SeatRecord::new(seat_number));
                true
            }
            Entry::Occupied(_) => {
                log::debug!("Seat {} already present, duplicate insert ignored.", seat_number);
                false
            }
        }
    }

    /// Reserves a single seat and stamps it with the current time.
    pub fn reserve(&mut self, seat_number: SeatNumber) -> Result<(), ReservationError> {
        let now = self.clock.now();
        self.reserve_at(seat_number, now)
    }

    /// Reserves a single seat stamped with `now`, so a multi-seat booking
    /// carries one timestamp.
    pub(crate) fn reserve_at(&mut self, seat_number: SeatNumber, now: DateTime<Utc>) -> Result<(), ReservationError> {
        let expiry = self.expiry;

        let record = self.seats.get_mut(&seat_number).ok_or(ReservationError::SeatNotFound(seat_number))?;
        Self::apply_expiry(record, &expiry, now);

        if record.is_reserved() {
            return Err(ReservationError::AlreadyReserved(seat_number));
        }

        record.mark_reserved(now);
        log::debug!("Seat {} reserved at {}.", seat_number, now);
        Ok(())
    }

    /// Returns whether the seat currently holds a live reservation.
    ///
    /// A lapsed reservation is cleared as a side effect. Unknown seat numbers
    /// are reported as not reserved.
    pub fn is_reserved(&mut self, seat_number: SeatNumber) -> bool {
        let now = self.clock.now();
        let expiry = self.expiry;

        match self.seats.get_mut(&seat_number) {
            Some(record) => {
                Self::apply_expiry(record, &expiry, now);
                record.is_reserved()
            }
            None => false,
        }
    }

    /// Expiry-aware status of every seat in ascending order.
    pub fn snapshot(&mut self) -> SeatMap {
        let now = self.clock.now();
        let expiry = self.expiry;

        let seats = self
            .seats
            .values_mut()
            .map(|record| {
                Self::apply_expiry(record, &expiry, now);
                SeatStatus { seat_number: record.seat_number(), reserved: record.is_reserved() }
            })
            .collect();

        SeatMap::new(seats)
    }

    /// Raw record access. The returned record has not been checked for expiry.
    pub fn get(&self, seat_number: SeatNumber) -> Option<&SeatRecord> {
        self.seats.get(&seat_number)
    }

    pub fn contains(&self, seat_number: SeatNumber) -> bool {
        self.seats.contains_key(&seat_number)
    }

    /// Seat numbers in ascending order.
    pub fn seat_numbers(&self) -> Vec<SeatNumber> {
        self.seats.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.seats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }

    fn apply_expiry(record: &mut SeatRecord, expiry: &ExpiryPolicy, now: DateTime<Utc>) {
        if let Some(reserved_at) = record.reserved_at() {
            if expiry.is_expired(reserved_at, now) {
                log::info!("Reservation on seat {} from {} expired, seat released.", record.seat_number(), reserved_at);
                record.clear();
            }
        }
    }
}
