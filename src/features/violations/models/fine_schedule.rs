use rust_decimal::Decimal;

/// Violation types with a scheduled fine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViolationType {
    IllegalParking,
    Speeding,
    RunningRedLight,
    ExpiredLicense,
    NoInsurance,
    RecklessDriving,
    DuiDwi,
    ImproperLaneChange,
    FailureToStop,
    Other,
}

/// Fine for any violation type not in the schedule
pub const DEFAULT_FINE: u32 = 50;

/// The fine schedule, in display order. Amounts are whole currency units.
pub const FINE_SCHEDULE: [(ViolationType, u32); 10] = [
    (ViolationType::IllegalParking, 75),
    (ViolationType::Speeding, 150),
    (ViolationType::RunningRedLight, 200),
    (ViolationType::ExpiredLicense, 100),
    (ViolationType::NoInsurance, 300),
    (ViolationType::RecklessDriving, 400),
    (ViolationType::DuiDwi, 1000),
    (ViolationType::ImproperLaneChange, 125),
    (ViolationType::FailureToStop, 175),
    (ViolationType::Other, 50),
];

impl ViolationType {
    /// Label as officers submit it
    pub fn label(&self) -> &'static str {
        match self {
            ViolationType::IllegalParking => "Illegal Parking",
            ViolationType::Speeding => "Speeding",
            ViolationType::RunningRedLight => "Running Red Light",
            ViolationType::ExpiredLicense => "Expired License",
            ViolationType::NoInsurance => "No Insurance",
            ViolationType::RecklessDriving => "Reckless Driving",
            ViolationType::DuiDwi => "DUI/DWI",
            ViolationType::ImproperLaneChange => "Improper Lane Change",
            ViolationType::FailureToStop => "Failure to Stop",
            ViolationType::Other => "Other",
        }
    }

    /// Exact, case-sensitive label match
    pub fn from_label(label: &str) -> Option<Self> {
        FINE_SCHEDULE
            .iter()
            .map(|(kind, _)| *kind)
            .find(|kind| kind.label() == label)
    }
}

/// Fine for a submitted violation type label.
///
/// Total: labels outside the schedule get [`DEFAULT_FINE`].
pub fn fine_for(label: &str) -> Decimal {
    let amount = ViolationType::from_label(label)
        .and_then(|kind| {
            FINE_SCHEDULE
                .iter()
                .find(|(scheduled, _)| *scheduled == kind)
                .map(|(_, amount)| *amount)
        })
        .unwrap_or(DEFAULT_FINE);

    Decimal::from(amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheduled_fines() {
        let expected = [
            ("Illegal Parking", 75),
            ("Speeding", 150),
            ("Running Red Light", 200),
            ("Expired License", 100),
            ("No Insurance", 300),
            ("Reckless Driving", 400),
            ("DUI/DWI", 1000),
            ("Improper Lane Change", 125),
            ("Failure to Stop", 175),
            ("Other", 50),
        ];
        for (label, amount) in expected {
            assert_eq!(fine_for(label), Decimal::from(amount), "{}", label);
        }
    }

    #[test]
    fn test_unknown_type_falls_back_to_default() {
        assert_eq!(fine_for("Jaywalking"), Decimal::from(50));
        assert_eq!(fine_for(""), Decimal::from(DEFAULT_FINE));
    }

    #[test]
    fn test_label_match_is_case_sensitive() {
        assert_eq!(ViolationType::from_label("speeding"), None);
        assert_eq!(fine_for("speeding"), Decimal::from(DEFAULT_FINE));
    }

    #[test]
    fn test_labels_round_trip_through_schedule() {
        for (kind, _) in FINE_SCHEDULE {
            assert_eq!(ViolationType::from_label(kind.label()), Some(kind));
        }
    }
}
