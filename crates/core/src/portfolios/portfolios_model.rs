//! Portfolio domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::FieldViolation;
use crate::portfolios::portfolios_constants::{
    CLASSIFICATION_AFS, CLASSIFICATION_HTM, CLASSIFICATION_TRADING,
};

/// Accounting treatment tag for a portfolio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Classification {
    Trading,
    Afs,
    Htm,
}

impl Classification {
    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::Trading => CLASSIFICATION_TRADING,
            Classification::Afs => CLASSIFICATION_AFS,
            Classification::Htm => CLASSIFICATION_HTM,
        }
    }
}

impl FromStr for Classification {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            CLASSIFICATION_TRADING => Ok(Classification::Trading),
            CLASSIFICATION_AFS => Ok(Classification::Afs),
            CLASSIFICATION_HTM => Ok(Classification::Htm),
            other => Err(format!("Unknown classification: {}", other)),
        }
    }
}

/// Domain model representing a portfolio.
///
/// A portfolio belongs to exactly one user and exclusively owns its ledger:
/// deleting it cascades to every trade and cash entry recorded against it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub classification: Classification,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input model for creating a new portfolio.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPortfolio {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub user_id: String,
    pub name: String,
    /// Classification tag, one of "TRADING", "AFS", "HTM"
    pub classification: String,
}

impl NewPortfolio {
    /// The name as it would be stored: surrounding whitespace removed.
    pub fn trimmed_name(&self) -> &str {
        self.name.trim()
    }

    /// Field-level checks that need no repository access. The service layer
    /// appends the per-user uniqueness violation before deciding the pass.
    pub fn collect_violations(&self) -> Vec<FieldViolation> {
        let mut violations = Vec::new();
        if self.user_id.trim().is_empty() {
            violations.push(FieldViolation::new("userId", "cannot be blank"));
        }
        if self.trimmed_name().is_empty() {
            violations.push(FieldViolation::new("name", "cannot be blank"));
        }
        if Classification::from_str(self.classification.trim()).is_err() {
            violations.push(FieldViolation::new(
                "classification",
                format!("'{}' is not a valid classification", self.classification),
            ));
        }
        violations
    }
}

/// Input model for updating an existing portfolio.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioUpdate {
    pub id: String,
    pub name: String,
    /// Classification tag, one of "TRADING", "AFS", "HTM"
    pub classification: String,
}

impl PortfolioUpdate {
    /// The name as it would be stored: surrounding whitespace removed.
    pub fn trimmed_name(&self) -> &str {
        self.name.trim()
    }

    /// Field-level checks that need no repository access.
    pub fn collect_violations(&self) -> Vec<FieldViolation> {
        let mut violations = Vec::new();
        if self.id.trim().is_empty() {
            violations.push(FieldViolation::new("id", "is required for updates"));
        }
        if self.trimmed_name().is_empty() {
            violations.push(FieldViolation::new("name", "cannot be blank"));
        }
        if Classification::from_str(self.classification.trim()).is_err() {
            violations.push(FieldViolation::new(
                "classification",
                format!("'{}' is not a valid classification", self.classification),
            ));
        }
        violations
    }
}
