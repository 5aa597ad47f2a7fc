use crate::ports::outbound::LookupProgressCallback;
use crate::sbom_analysis::domain::{Lookup, Purl};
use crate::shared::Result;
use tracing::{debug, warn};

/// Splits `purls` into chunks of at most `chunk_size` and accumulates the
/// results of `fetch` across them, in chunk order.
///
/// `fetch` receives the purl strings of one chunk and returns that chunk's
/// found and missing records. A failed chunk is logged, its purls are
/// recorded in `failed_purls`, and the remaining chunks still run.
/// `progress` is called with (completed, total) chunks after each request.
pub fn lookup_in_chunks<T, M, F>(
    purls: &[Purl],
    chunk_size: usize,
    mut fetch: F,
    progress: LookupProgressCallback<'_>,
) -> Lookup<T, M>
where
    F: FnMut(&[String]) -> Result<(Vec<T>, Vec<M>)>,
{
    let mut lookup = Lookup::default();
    if purls.is_empty() {
        return lookup;
    }

    let chunk_size = chunk_size.max(1);
    let total = purls.len().div_ceil(chunk_size);

    for (index, chunk) in purls.chunks(chunk_size).enumerate() {
        let keys: Vec<String> = chunk.iter().map(|p| p.as_str().to_string()).collect();
        debug!("Looking up chunk {}/{} ({} purls)", index + 1, total, keys.len());

        match fetch(&keys) {
            Ok((found, missing)) => {
                lookup.found.extend(found);
                lookup.missing.extend(missing);
            }
            Err(e) => {
                warn!("Lookup request {}/{} failed: {:#}", index + 1, total, e);
                lookup.failed_purls.extend(keys);
            }
        }

        progress(index + 1, total);
    }

    lookup
}
