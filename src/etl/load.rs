//! Loader trait for writing documents to a destination

use eyre::Result;

/// Loader trait for loading items to a destination
///
/// # Example
/// ```no_run
/// use n8n_workflow_converter::etl::Loader;
/// use eyre::Result;
///
/// struct StdoutLoader;
///
/// impl Loader for StdoutLoader {
///     type Item = String;
///
///     fn load(&self, items: Vec<Self::Item>) -> Result<usize> {
///         for item in &items {
///             println!("{}", item);
///         }
///         Ok(items.len())
///     }
/// }
/// ```
pub trait Loader {
    /// The type of items to load
    type Item;

    /// Load items to the destination
    ///
    /// Returns the number of items written
    ///
    /// # Errors
    /// Returns an error if loading fails (serialization, I/O, etc.)
    fn load(&self, items: Vec<Self::Item>) -> Result<usize>;
}
