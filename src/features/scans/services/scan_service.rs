use std::sync::Arc;

use crate::features::scans::models::NewScan;
use crate::modules::datastore::Datastore;

/// Appends scan audit rows
pub struct ScanService {
    store: Arc<dyn Datastore>,
}

impl ScanService {
    pub fn new(store: Arc<dyn Datastore>) -> Self {
        Self { store }
    }

    /// Append one audit row, at most once.
    ///
    /// Failures are logged and swallowed; there is no retry and the outcome
    /// is not reported back.
    pub async fn record(&self, scan: NewScan) {
        let scan_type = scan.scan_type;
        let plate_number = scan.plate_number.clone();

        match self.store.insert_scan(scan).await {
            Ok(created) => {
                tracing::debug!(
                    "Scan recorded: id={}, type={}, plate={}",
                    created.id,
                    scan_type,
                    plate_number
                );
            }
            Err(e) => {
                tracing::warn!(
                    "Failed to record {} scan for plate {}: {}",
                    scan_type,
                    plate_number,
                    e
                );
            }
        }
    }
}
