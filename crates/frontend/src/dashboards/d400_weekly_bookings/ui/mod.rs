pub mod list;

pub use list::BookingList;
