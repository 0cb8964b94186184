pub mod catalog;
pub mod clock;
pub mod receipt;
pub mod reservation;
pub mod seat;
pub mod user;
