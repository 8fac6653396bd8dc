pub mod day_bucket;
pub mod event;
pub mod event_kind;
pub mod status;
