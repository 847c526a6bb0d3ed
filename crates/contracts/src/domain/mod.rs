pub mod a001_review;
pub mod a002_booking;
pub mod common;
