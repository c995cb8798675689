//! # Banana Couture Domain Models
//!
//! Value types shared by the impact engine and the services that call it.
//!
//! ## Key Models
//!
//! - **MaterialsInput**: a design's materials field as free text, a line list,
//!   or a structured bill of materials
//! - **StructuredBom** / **BomItem**: the structured BOM shape
//! - **ImpactEstimate**: cost band, sustainability rating and eco score for
//!   one materials description
//!
//! All models serialize with serde using the camelCase field names the web
//! client sends.

pub mod materials;
pub mod impact;

#[cfg(test)]
pub mod property_tests;

pub use materials::*;
pub use impact::*;
