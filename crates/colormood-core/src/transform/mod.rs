//! Filter parameters and the two filter pipelines.

pub mod filter;
pub mod params;
