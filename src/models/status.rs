use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Review state of a proposal.
///
/// The catalog leaves `status` out (or sends an empty string) for proposals nobody has
/// reviewed yet; all of those collapse into `Pending` at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ReviewStatus {
    Approved,
    Rejected,
    StandBy,
    #[default]
    Pending,
}

impl ReviewStatus {
    /// Statuses a reviewer can pick in the review form.
    pub const SELECTABLE: [ReviewStatus; 3] = [
        ReviewStatus::Approved,
        ReviewStatus::Rejected,
        ReviewStatus::StandBy,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ReviewStatus::Approved => "Aprovado",
            ReviewStatus::Rejected => "Reprovado",
            ReviewStatus::StandBy => "Stand By",
            ReviewStatus::Pending => "Pendente",
        }
    }

    /// Parses a label case-insensitively. Empty input is `Pending`; unknown labels are `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "" | "pendente" => Some(ReviewStatus::Pending),
            "aprovado" => Some(ReviewStatus::Approved),
            "reprovado" => Some(ReviewStatus::Rejected),
            "stand by" => Some(ReviewStatus::StandBy),
            _ => None,
        }
    }

    /// Stand By counts as still awaiting a decision.
    pub fn is_awaiting_decision(&self) -> bool {
        matches!(self, ReviewStatus::StandBy | ReviewStatus::Pending)
    }
}

impl fmt::Display for ReviewStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for ReviewStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for ReviewStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        let Some(raw) = raw else {
            return Ok(ReviewStatus::Pending);
        };

        Ok(ReviewStatus::parse(&raw).unwrap_or_else(|| {
            tracing::warn!("Unknown review status {:?}, treating as pending", raw);
            ReviewStatus::Pending
        }))
    }
}
