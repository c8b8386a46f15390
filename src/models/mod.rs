//! Data models

pub mod catalog;
pub mod feature;
pub mod classification;

pub use catalog::*;
pub use feature::*;
pub use classification::*;
