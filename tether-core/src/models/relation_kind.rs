//! Enumerated role of a relationship edge.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::TetherError;

/// Role the related entity plays in the relationship.
///
/// Covers the roles used across the supported collections: client links
/// (`Owner`, `EmergencyContact`, `Caretaker`), vet links (`PrimaryVet`,
/// `Specialist`), and clinic links (`ClinicAffiliate`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RelationKind {
    Owner,
    EmergencyContact,
    Caretaker,
    PrimaryVet,
    Specialist,
    ClinicAffiliate,
}

impl RelationKind {
    /// Stable string form, matching the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Owner => "owner",
            Self::EmergencyContact => "emergency-contact",
            Self::Caretaker => "caretaker",
            Self::PrimaryVet => "primary-vet",
            Self::Specialist => "specialist",
            Self::ClinicAffiliate => "clinic-affiliate",
        }
    }
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RelationKind {
    type Err = TetherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "owner" => Ok(Self::Owner),
            "emergency-contact" => Ok(Self::EmergencyContact),
            "caretaker" => Ok(Self::Caretaker),
            "primary-vet" => Ok(Self::PrimaryVet),
            "specialist" => Ok(Self::Specialist),
            "clinic-affiliate" => Ok(Self::ClinicAffiliate),
            _ => Err(TetherError::UnknownKind {
                value: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_str() {
        for kind in [
            RelationKind::Owner,
            RelationKind::EmergencyContact,
            RelationKind::Caretaker,
            RelationKind::PrimaryVet,
            RelationKind::Specialist,
            RelationKind::ClinicAffiliate,
        ] {
            assert_eq!(kind.as_str().parse::<RelationKind>().ok(), Some(kind));
        }
    }

    #[test]
    fn unknown_kind_is_an_error() {
        let err = "landlord".parse::<RelationKind>().unwrap_err();
        assert!(err.to_string().contains("landlord"));
    }

    #[test]
    fn serde_uses_kebab_case() {
        let json = serde_json::to_string(&RelationKind::EmergencyContact).unwrap();
        assert_eq!(json, "\"emergency-contact\"");
    }
}
