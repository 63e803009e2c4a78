mod scan;

pub use scan::{NewScan, Scan, ScanResult, ScanType};
