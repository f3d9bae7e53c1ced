// ── Batch pipeline ──
//
// Sequential: one lookup at a time, in input order, so row order is input
// order. A failed item is logged and skipped; it never stops the batch.

use tracing::{error, info};

use crate::error::CoreError;
use crate::mac::MacAddress;
use crate::report::ReportRow;
use crate::resolver::Resolver;

/// An address that could not be resolved, and why.
#[derive(Debug)]
pub struct Failure {
    pub mac: MacAddress,
    pub error: CoreError,
}

/// Result of a whole batch.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// One row per resolved address, in input order.
    pub rows: Vec<ReportRow>,
    pub failures: Vec<Failure>,
}

impl BatchReport {
    /// Total number of addresses attempted.
    pub fn attempted(&self) -> usize {
        self.rows.len() + self.failures.len()
    }
}

/// Resolve every address and flatten the successes.
///
/// `on_item` fires after each address, successful or not (progress bars).
pub async fn run_batch(
    resolver: &mut Resolver,
    macs: &[MacAddress],
    mut on_item: impl FnMut(&MacAddress),
) -> BatchReport {
    let mut report = BatchReport::default();

    for mac in macs {
        match resolver.resolve(*mac).await {
            Ok(resolved) => report.rows.push(resolved.to_row()),
            Err(err) => {
                error!("Error fetching details for MAC {mac}: {err}");
                report.failures.push(Failure {
                    mac: *mac,
                    error: err,
                });
            }
        }
        on_item(mac);
    }

    let stats = resolver.cache().stats();
    info!(
        resolved = report.rows.len(),
        failed = report.failures.len(),
        cache_hits = stats.hits,
        cache_misses = stats.misses,
        "batch complete"
    );
    report
}
