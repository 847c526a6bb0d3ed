pub mod d400_weekly_bookings;

pub use d400_weekly_bookings::BookingList;
