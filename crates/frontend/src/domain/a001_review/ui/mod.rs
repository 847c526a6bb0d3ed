pub mod list;

pub use list::ReviewList;
