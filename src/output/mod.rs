//! Shaping and writing of the dashboard document.

pub mod shaper;
pub mod tiers;
pub mod writer;

pub use shaper::{
    FittedDocument, OutputDocument, ShapeOptions, fit_to_budget, shape_document, shape_game,
};
pub use tiers::DetailTier;
pub use writer::write_document;
