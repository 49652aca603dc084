//! Core ETL (Extract, Transform, Load) abstractions
//!
//! A conversion run is a three stage pipeline: extract workflow documents from
//! a source, transform them into custom resources, and load the rendered
//! manifests to a destination.

mod extract;
mod load;
mod pipeline;
mod transform;

pub use extract::Extractor;
pub use load::Loader;
pub use pipeline::Pipeline;
pub use transform::Transformer;
