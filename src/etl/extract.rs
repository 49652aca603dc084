//! Extractor trait for reading documents from a source

use eyre::Result;

/// Extractor trait for extracting items from a source
///
/// Implementors define how items are obtained, e.g. reading and parsing a
/// workflow export from disk.
///
/// # Example
/// ```no_run
/// use n8n_workflow_converter::etl::Extractor;
/// use eyre::Result;
/// use std::path::PathBuf;
///
/// struct FileExtractor {
///     path: PathBuf,
/// }
///
/// impl Extractor for FileExtractor {
///     type Item = String;
///
///     fn extract(&self) -> Result<Vec<Self::Item>> {
///         Ok(vec![std::fs::read_to_string(&self.path)?])
///     }
/// }
/// ```
pub trait Extractor {
    /// The type of items extracted
    type Item;

    /// Extract items from the source
    ///
    /// # Errors
    /// Returns an error if extraction fails (I/O, parsing, etc.)
    fn extract(&self) -> Result<Vec<Self::Item>>;
}
