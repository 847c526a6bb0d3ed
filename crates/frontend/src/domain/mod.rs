pub mod a001_review;
