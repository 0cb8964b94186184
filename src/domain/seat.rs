pub mod expiry_policy;
pub mod seat_record;
pub mod seat_store;
