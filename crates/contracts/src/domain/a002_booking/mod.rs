pub mod aggregate;

pub use aggregate::{parse_int_lenient, BookingAmountField, BookingRecord};
