//! Pipeline orchestration for ETL operations

use super::{Extractor, Loader, Transformer};
use eyre::Result;

/// Pipeline that runs an extract, transform and load stage in order
///
/// # Type Parameters
/// - `E`: Extractor type
/// - `T`: Transformer type (must transform from E::Item)
/// - `L`: Loader type (must load T::Output)
///
/// # Example
/// ```no_run
/// use n8n_workflow_converter::etl::Pipeline;
/// use n8n_workflow_converter::storage::{ManifestWriter, WorkflowFileReader};
/// use n8n_workflow_converter::transform::WorkflowConverter;
///
/// # fn example() -> eyre::Result<()> {
/// let pipeline = Pipeline::new(
///     WorkflowFileReader::new("workflow.json"),
///     WorkflowConverter::default(),
///     ManifestWriter::stdout(),
/// );
///
/// let count = pipeline.run()?;
/// assert_eq!(count, 1);
/// # Ok(())
/// # }
/// ```
pub struct Pipeline<E, T, L> {
    extractor: E,
    transformer: T,
    loader: L,
}

impl<E, T, L> Pipeline<E, T, L>
where
    E: Extractor,
    T: Transformer<Input = E::Item>,
    L: Loader<Item = T::Output>,
{
    /// Create a new pipeline
    pub fn new(extractor: E, transformer: T, loader: L) -> Self {
        Self {
            extractor,
            transformer,
            loader,
        }
    }

    /// Run the complete pipeline
    ///
    /// Returns the number of items written by the loader. Nothing is loaded
    /// unless every item was extracted and transformed successfully.
    pub fn run(&self) -> Result<usize> {
        log::debug!("Extracting from source...");
        let items = self.extractor.extract()?;
        log::debug!("Extracted {} item(s)", items.len());

        if items.is_empty() {
            log::warn!("No items extracted, nothing to write");
            return Ok(0);
        }

        log::debug!("Transforming items...");
        let transformed = self.transformer.transform_many(items)?;

        log::debug!("Loading to destination...");
        let count = self.loader.load(transformed)?;
        log::debug!("Loaded {} item(s)", count);

        Ok(count)
    }
}
