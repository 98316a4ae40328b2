pub mod event;
pub mod event_kind;
pub mod student;
