use std::fmt;

use chrono::{DateTime, Utc};

pub type SeatNumber = u32;

/// One seat in the screening room and its reservation state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatRecord {
    seat_number: SeatNumber,

    /// Set while the seat is held. `None` means the seat is free.
    reserved_at: Option<DateTime<Utc>>,
}

impl SeatRecord {
    pub fn new(seat_number: SeatNumber) -> Self {
        Self { seat_number, reserved_at: None }
    }

    pub fn seat_number(&self) -> SeatNumber {
        self.seat_number
    }

    /// Raw reservation flag. Does not account for expiry; the store applies
    /// the expiry policy before answering queries.
    pub fn is_reserved(&self) -> bool {
        self.reserved_at.is_some()
    }

    pub fn reserved_at(&self) -> Option<DateTime<Utc>> {
        self.reserved_at
    }

    pub(crate) fn mark_reserved(&mut self, at: DateTime<Utc>) {
        self.reserved_at = Some(at);
    }

    pub(crate) fn clear(&mut self) {
        self.reserved_at = None;
    }
}

/// Snapshot entry for a single seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeatStatus {
    pub seat_number: SeatNumber,
    pub reserved: bool,
}

impl SeatStatus {
    pub fn marker(&self) -> char {
        if self.reserved { 'X' } else { 'O' }
    }
}

/// Read-only view of every seat in ascending seat order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeatMap {
    seats: Vec<SeatStatus>,
}

impl SeatMap {
    pub fn new(seats: Vec<SeatStatus>) -> Self {
        Self { seats }
    }

    pub fn seats(&self) -> &[SeatStatus] {
        &self.seats
    }

    pub fn markers(&self) -> String {
        self.seats.iter().map(SeatStatus::marker).collect()
    }

    pub fn reserved_count(&self) -> usize {
        self.seats.iter().filter(|seat| seat.reserved).count()
    }

    pub fn free_count(&self) -> usize {
        self.seats.len() - self.reserved_count()
    }

    pub fn len(&self) -> usize {
        self.seats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }
}

impl fmt::Display for SeatMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Seats:")?;
        for seat in &self.seats {
            write!(f, " {}", seat.marker())?;
        }
        Ok(())
    }
}
