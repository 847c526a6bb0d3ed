//! Common types shared by all record DTOs

pub mod lenient;
pub mod record_id;

pub use lenient::value_text;
pub use record_id::RecordId;
