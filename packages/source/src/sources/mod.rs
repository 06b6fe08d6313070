//! Concrete crime data source implementations.
//!
//! Each module implements the [`CrimeSource`](crate::CrimeSource) trait for a
//! specific data provider.

pub mod chicago;
