pub mod geocode;
pub mod notify;
