mod violation_service;

pub use violation_service::ViolationService;
