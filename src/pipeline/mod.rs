pub mod dispatch;
pub mod formulas;
pub mod report;

use rayon::prelude::*;

use crate::error::DispatchError;
use crate::types::package::Package;
use crate::types::summary::Summary;

pub fn process(package: &Package) -> Result<Summary, DispatchError> {
    let record = dispatch::read_package(&package.code, &package.values)?;
    Ok(formulas::compute(&record))
}

/// Processes packages independently and returns summaries in input order.
/// Fails if any package fails; with several failures, which error is
/// reported is unspecified.
pub fn process_batch(packages: &[Package]) -> Result<Vec<Summary>, DispatchError> {
    let summaries = packages
        .par_iter()
        .map(process)
        .collect::<Result<Vec<_>, _>>()?;

    tracing::info!("Processed {} workout packages", summaries.len());
    Ok(summaries)
}
