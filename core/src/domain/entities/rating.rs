//! Rating entity: one participant's review of the other after a completed job.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const MIN_RATING_VALUE: i32 = 1;
pub const MAX_RATING_VALUE: i32 = 5;
pub const MAX_RATING_TEXT_CHARS: usize = 1000;

/// Role the rated member (the subject) held on the job
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RatingDirection {
    /// The worker rated the hirer
    Hirer,
    /// The hirer rated the worker
    Worker,
}

impl RatingDirection {
    /// Convert to string representation for database storage
    pub fn as_str(&self) -> &'static str {
        match self {
            RatingDirection::Hirer => "HIRER",
            RatingDirection::Worker => "WORKER",
        }
    }
}

impl std::str::FromStr for RatingDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "HIRER" => Ok(RatingDirection::Hirer),
            "WORKER" => Ok(RatingDirection::Worker),
            other => Err(format!("Unknown rating direction: {}", other)),
        }
    }
}

/// Rating entity, immutable once stored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rating {
    pub id: Uuid,
    /// Between `MIN_RATING_VALUE` and `MAX_RATING_VALUE`
    pub value: i32,
    pub text: Option<String>,
    pub direction: RatingDirection,
    /// Author
    pub from_id: Uuid,
    /// Subject
    pub to_id: Uuid,
    pub job_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Rating {
    pub fn new(
        job_id: Uuid,
        from_id: Uuid,
        to_id: Uuid,
        direction: RatingDirection,
        value: i32,
        text: Option<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            value,
            text: text
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty()),
            direction,
            from_id,
            to_id,
            job_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// Key enforced unique by the store
    pub fn key(&self) -> (Uuid, Uuid, Uuid) {
        (self.job_id, self.from_id, self.to_id)
    }
}
