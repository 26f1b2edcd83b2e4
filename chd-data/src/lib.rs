//! Chart math for the county health dashboard.
//!
//! Everything here is pure and independent of the UI framework, so the
//! Dioxus components only map these results onto SVG elements:
//! - `ticks`: d3-compatible tick generation and domain niceing
//! - `scale`: linear and quantize scales plus the Blues color scheme
//! - `bins`: histogram binning with per-bin county membership
//! - `format`: SI-prefix and grouped fixed-point number formatting
//! - `projection` / `path`: Albers USA projection and SVG path data
//! - `scatter` / `brush`: scatterplot layout and rectangular brushing
//! - `selection`: the clicked/brushed selection synchronizer

pub mod bins;
pub mod brush;
pub mod format;
pub mod path;
pub mod projection;
pub mod scale;
pub mod scatter;
pub mod selection;
pub mod ticks;
