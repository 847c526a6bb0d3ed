pub mod aggregate;

pub use aggregate::ReviewRecord;
