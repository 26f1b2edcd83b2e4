//! Core types for the county health dashboard.
//!
//! This crate provides:
//! - `fips`: normalized 5-digit county identifiers
//! - `attribute`: the four health statistics charted by the dashboard
//! - `county`: county records and the health CSV parser
//! - `topology`: TopoJSON decoding into county polygons
//! - `dataset`: counties joined with their shapes

pub mod attribute;
pub mod county;
pub mod dataset;
pub mod error;
pub mod fips;
pub mod topology;

pub use attribute::Attribute;
pub use county::County;
pub use dataset::Dataset;
pub use error::{ChdError, Result};
pub use fips::Fips;
pub use topology::CountyShape;
