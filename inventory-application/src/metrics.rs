use std::sync::atomic::{AtomicU64, Ordering};

use inventory_domain::ValidationError;

#[derive(Debug, Default)]
pub struct Metrics {
    scan_requests: AtomicU64,
    scans_recorded: AtomicU64,
    write_errors: AtomicU64,
    invalid_barcodes: AtomicU64,
    invalid_names: AtomicU64,
    status_reads: AtomicU64,
    status_read_errors: AtomicU64,
}

impl Metrics {
    pub fn record_scan_request(&self) {
        self.scan_requests.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_scan_recorded(&self) {
        self.scans_recorded.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_write_error(&self) {
        self.write_errors.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_rejection(&self, error: ValidationError) {
        let counter = match error {
            ValidationError::InvalidBarcode => &self.invalid_barcodes,
            ValidationError::InvalidName => &self.invalid_names,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_status_read(&self) {
        self.status_reads.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_status_read_error(&self) {
        self.status_read_errors.fetch_add(1, Ordering::Relaxed);
    }

    #[cfg(test)]
    pub fn write_errors(&self) -> u64 {
        self.write_errors.load(Ordering::Relaxed)
    }

    pub fn render_prometheus(&self, indexed_barcodes: usize) -> String {
        let requests = self.scan_requests.load(Ordering::Relaxed);
        let recorded = self.scans_recorded.load(Ordering::Relaxed);
        let write_errors = self.write_errors.load(Ordering::Relaxed);
        let invalid_barcodes = self.invalid_barcodes.load(Ordering::Relaxed);
        let invalid_names = self.invalid_names.load(Ordering::Relaxed);
        let status_reads = self.status_reads.load(Ordering::Relaxed);
        let status_read_errors = self.status_read_errors.load(Ordering::Relaxed);

        format!(
            "# TYPE inventory_scan_requests_total counter\n\
inventory_scan_requests_total {}\n\
# TYPE inventory_scans_recorded_total counter\n\
inventory_scans_recorded_total {}\n\
# TYPE inventory_write_errors_total counter\n\
inventory_write_errors_total {}\n\
# TYPE inventory_scan_rejections_total counter\n\
inventory_scan_rejections_total{{reason=\"invalid_barcode\"}} {}\n\
inventory_scan_rejections_total{{reason=\"invalid_name\"}} {}\n\
# TYPE inventory_status_reads_total counter\n\
inventory_status_reads_total {}\n\
# TYPE inventory_status_read_errors_total counter\n\
inventory_status_read_errors_total {}\n\
# TYPE inventory_indexed_barcodes gauge\n\
inventory_indexed_barcodes {}\n",
            requests,
            recorded,
            write_errors,
            invalid_barcodes,
            invalid_names,
            status_reads,
            status_read_errors,
            indexed_barcodes
        )
    }
}
