use serde::{Deserialize, Serialize};
use std::fmt;
use validator::{Validate, ValidationError};

/// Loan catalog category. Each one owns a separate table with the same schema.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum LoanCategory {
    Consumer,
    Mortgage,
    Preferential,
}

impl LoanCategory {
    pub const ALL: [LoanCategory; 3] = [
        LoanCategory::Consumer,
        LoanCategory::Mortgage,
        LoanCategory::Preferential,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            LoanCategory::Consumer => "consumer",
            LoanCategory::Mortgage => "mortgage",
            LoanCategory::Preferential => "preferential",
        }
    }

    /// Backing table name. Only ever one of three constants, so it is safe to
    /// splice into SQL text.
    pub fn table(self) -> &'static str {
        match self {
            LoanCategory::Consumer => "consumer_loans",
            LoanCategory::Mortgage => "mortgage_loans",
            LoanCategory::Preferential => "preferential_loans",
        }
    }

    /// URL path segment, e.g. `consumer-loans`
    pub fn slug(self) -> &'static str {
        match self {
            LoanCategory::Consumer => "consumer-loans",
            LoanCategory::Mortgage => "mortgage-loans",
            LoanCategory::Preferential => "preferential-loans",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.slug() == slug)
    }

    /// Resource name used in not-found messages
    pub fn resource(self) -> &'static str {
        match self {
            LoanCategory::Consumer => "consumer loan",
            LoanCategory::Mortgage => "mortgage loan",
            LoanCategory::Preferential => "preferential loan",
        }
    }

    /// Advisory lock key guarding seeding of this category
    pub(crate) fn seed_lock_key(self) -> i64 {
        match self {
            LoanCategory::Consumer => 0x5345_4544_01,
            LoanCategory::Mortgage => 0x5345_4544_02,
            LoanCategory::Preferential => 0x5345_4544_03,
        }
    }
}

impl fmt::Display for LoanCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stored loan offer
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, Clone, PartialEq, Eq)]
pub struct LoanRecord {
    pub id: i32,
    pub name: String,
    pub rate: String,
    pub term: String,
    pub amount: String,
    pub advantage: Vec<String>,
    pub details: String,
}

/// Client-submitted loan offer, used for both create and update
#[derive(Debug, Deserialize, Serialize, Validate, Clone, PartialEq, Eq)]
pub struct LoanInput {
    #[serde(default)]
    #[validate(length(min = 1, max = 100), custom = "not_blank")]
    pub name: String,

    #[serde(default)]
    #[validate(length(min = 1, max = 50), custom = "not_blank")]
    pub rate: String,

    #[serde(default)]
    #[validate(length(min = 1, max = 50), custom = "not_blank")]
    pub term: String,

    #[serde(default)]
    #[validate(length(min = 1, max = 50), custom = "not_blank")]
    pub amount: String,

    #[serde(default)]
    #[validate(length(min = 1), custom = "no_blank_entries")]
    pub advantage: Vec<String>,

    #[serde(default)]
    #[validate(custom = "not_blank")]
    pub details: String,
}

impl LoanInput {
    /// True when `record` holds exactly these fields
    pub fn matches(&self, record: &LoanRecord) -> bool {
        self.name == record.name
            && self.rate == record.rate
            && self.term == record.term
            && self.amount == record.amount
            && self.advantage == record.advantage
            && self.details == record.details
    }
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

fn no_blank_entries(values: &[String]) -> Result<(), ValidationError> {
    if values.iter().any(|v| v.trim().is_empty()) {
        return Err(ValidationError::new("blank_entry"));
    }
    Ok(())
}

/// Result of a seeding attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    Inserted(usize),
    AlreadyPopulated(i64),
}
