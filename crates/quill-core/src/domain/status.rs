use serde::{Deserialize, Serialize};

/// Record lifecycle status. Soft-deleted records stay in the store but are
/// excluded from every normal read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordStatus {
    #[default]
    Active,
    Deleted,
}

impl RecordStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordStatus::Active => "active",
            RecordStatus::Deleted => "deleted",
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, RecordStatus::Active)
    }
}

impl From<&str> for RecordStatus {
    fn from(value: &str) -> Self {
        match value {
            "deleted" => RecordStatus::Deleted,
            _ => RecordStatus::Active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_active() {
        assert!(RecordStatus::default().is_active());
    }

    #[test]
    fn test_str_round_trip() {
        assert_eq!(RecordStatus::from("deleted"), RecordStatus::Deleted);
        assert_eq!(RecordStatus::from("active"), RecordStatus::Active);
        assert_eq!(RecordStatus::Deleted.as_str(), "deleted");
    }
}
