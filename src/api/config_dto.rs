use serde::Deserialize;

/// On-disk configuration. Every field is optional; missing values fall back
/// to the built-in defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AppConfigDto {
    pub max_seats: Option<u32>,
    pub reservation_hold_hours: Option<i64>,
    pub users_file: Option<String>,
    pub movies: Option<Vec<MovieDto>>,
    pub time_slots: Option<Vec<TimeSlotDto>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieDto {
    pub name: String,
    /// Seat price in dollars, e.g. `11.5`.
    pub price: f64,
}

#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct TimeSlotDto(pub String);
