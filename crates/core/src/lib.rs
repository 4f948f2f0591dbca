// crates/core/src/lib.rs
pub mod aggregate;
pub mod dates;
pub mod duration;
pub mod error;
pub mod filter;
pub mod insights;
pub mod normalize;
pub mod stats;
pub mod trends;

pub use aggregate::*;
pub use dates::*;
pub use duration::*;
pub use error::*;
pub use filter::*;
pub use insights::*;
pub use normalize::*;
pub use stats::*;
pub use trends::*;
