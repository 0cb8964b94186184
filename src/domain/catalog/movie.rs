use std::fmt;

/// Amount of money in cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Money(pub u64);

impl Money {
    pub fn from_cents(cents: u64) -> Self {
        Money(cents)
    }

    pub fn cents(&self) -> u64 {
        self.0
    }

    /// Saturates at `u64::MAX` cents.
    pub fn times(&self, count: u32) -> Money {
        Money(self.0.saturating_mul(u64::from(count)))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}.{:02}", self.0 / 100, self.0 % 100)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Movie {
    pub name: String,
    /// Price of a single seat.
    pub price: Money,
}

impl Movie {
    pub fn new(name: impl Into<String>, price: Money) -> Self {
        Self { name: name.into(), price }
    }

    pub fn total_cost(&self, seat_count: u32) -> Money {
        self.price.times(seat_count)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeSlot {
    pub label: String,
}

impl TimeSlot {
    pub fn new(label: impl Into<String>) -> Self {
        Self { label: label.into() }
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}
