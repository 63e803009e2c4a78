mod violation_dto;

pub use violation_dto::*;
