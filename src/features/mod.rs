pub mod scans;
pub mod vehicles;
pub mod violations;
