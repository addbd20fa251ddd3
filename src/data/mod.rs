//! Data loading
//!
//! Turns comma-separated `feature1,feature2,label` files into a
//! [`Dataset`](crate::core::Dataset).

pub mod csv;

pub use self::csv::*;
