//! Core building blocks: the marker canvas and its rendering parameters.
//! These are internal primitives consumed by the high-level `api` module.
pub mod canvas;
pub mod params;
