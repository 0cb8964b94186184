use crate::api::config_dto::{MovieDto, TimeSlotDto};
use crate::domain::catalog::movie::{Money, Movie, TimeSlot};
use crate::error::{Error, Result};

/// Highest seat price accepted from configuration. Any seat count still fits
/// the total in `u64` cents.
pub const MAX_PRICE_CENTS: u64 = u64::MAX / u32::MAX as u64;

/// Movies and show times offered at the box office.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    movies: Vec<Movie>,
    time_slots: Vec<TimeSlot>,
}

impl Catalog {
    pub fn new(movies: Vec<Movie>, time_slots: Vec<TimeSlot>) -> Self {
        Self { movies, time_slots }
    }

    pub fn default_movies() -> Vec<Movie> {
        vec![
            Movie::new("Matrix", Money::from_cents(1000)),
            Movie::new("Blade Runner", Money::from_cents(1200)),
            Movie::new("Brothers", Money::from_cents(800)),
            Movie::new("God Father", Money::from_cents(1500)),
            Movie::new("Wolf Of Wallstreets", Money::from_cents(1150)),
            Movie::new("The Boys", Money::from_cents(900)),
        ]
    }

    pub fn default_time_slots() -> Vec<TimeSlot> {
        vec![
            TimeSlot::new("Morning Show (10:00 AM)"),
            TimeSlot::new("Afternoon Show (2:00 PM)"),
            TimeSlot::new("Evening Show (6:00 PM)"),
            TimeSlot::new("Night Show (9:00 PM)"),
        ]
    }

    /// Builds the catalog from configuration, falling back to the built-in
    /// lists for any section that is absent.
    pub fn from_dto(movies: Option<Vec<MovieDto>>, time_slots: Option<Vec<TimeSlotDto>>) -> Result<Self> {
        let movies = match movies {
            Some(dtos) => dtos.into_iter().map(Self::movie_from_dto).collect::<Result<Vec<_>>>()?,
            None => Self::default_movies(),
        };
        let time_slots = match time_slots {
            Some(dtos) => dtos.into_iter().map(|dto| TimeSlot::new(dto.0)).collect(),
            None => Self::default_time_slots(),
        };

        if movies.is_empty() {
            return Err(Error::InvalidConfig("catalog must list at least one movie".to_string()));
        }
        if time_slots.is_empty() {
            return Err(Error::InvalidConfig("catalog must list at least one time slot".to_string()));
        }

        Ok(Self::new(movies, time_slots))
    }

    fn movie_from_dto(dto: MovieDto) -> Result<Movie> {
        if dto.name.trim().is_empty() {
            return Err(Error::InvalidConfig("movie name must not be empty".to_string()));
        }
        if !dto.price.is_finite() || dto.price < 0.0 {
            return Err(Error::InvalidConfig(format!("price of '{}' must be a non-negative amount", dto.name)));
        }

        let cents = (dto.price * 100.0).round();
        if cents > MAX_PRICE_CENTS as f64 {
            return Err(Error::InvalidConfig(format!("price of '{}' exceeds {}", dto.name, Money::from_cents(MAX_PRICE_CENTS))));
        }

        let cents = cents as u64;
        Ok(Movie::new(dto.name, Money::from_cents(cents)))
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn time_slots(&self) -> &[TimeSlot] {
        &self.time_slots
    }

    /// Movie for a 1-based menu choice.
    pub fn movie(&self, choice: usize) -> Option<&Movie> {
        choice.checked_sub(1).and_then(|index| self.movies.get(index))
    }

    /// Time slot for a 1-based menu choice.
    pub fn time_slot(&self, choice: usize) -> Option<&TimeSlot> {
        choice.checked_sub(1).and_then(|index| self.time_slots.get(index))
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(Self::default_movies(), Self::default_time_slots())
    }
}
