//! Lead pipeline vocabulary and follow-up turn-around-time classification.
//!
//! The follow-up status is a derived label computed at read time from the
//! lead's stage and follow-up timestamp. It is never persisted.

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::types::Timestamp;

// ---------------------------------------------------------------------------
// Stages
// ---------------------------------------------------------------------------

/// Stage strings as stored in `leads.stage`.
pub const STAGE_NEW: &str = "New";
pub const STAGE_QUALIFY: &str = "Qualify";
pub const STAGE_PROPOSAL: &str = "Proposal";
pub const STAGE_REVIEW: &str = "Review";
pub const STAGE_COMPLETED: &str = "Completed";
pub const STAGE_WON: &str = "WON";
pub const STAGE_DROP: &str = "DROP";
pub const STAGE_EXPIRED: &str = "Expired";

/// All valid stage strings.
pub const VALID_STAGES: &[&str] = &[
    STAGE_NEW,
    STAGE_QUALIFY,
    STAGE_PROPOSAL,
    STAGE_REVIEW,
    STAGE_COMPLETED,
    STAGE_WON,
    STAGE_DROP,
    STAGE_EXPIRED,
];

/// A lead's pipeline stage.
///
/// `WON` and `DROP` are terminal: the lead is closed and no longer
/// follow-up tracked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LeadStage {
    New,
    Qualify,
    Proposal,
    Review,
    Completed,
    #[serde(rename = "WON")]
    Won,
    #[serde(rename = "DROP")]
    Drop,
    Expired,
}

impl LeadStage {
    /// Convert from a database string value.
    pub fn from_str_value(s: &str) -> Result<Self, String> {
        match s {
            STAGE_NEW => Ok(Self::New),
            STAGE_QUALIFY => Ok(Self::Qualify),
            STAGE_PROPOSAL => Ok(Self::Proposal),
            STAGE_REVIEW => Ok(Self::Review),
            STAGE_COMPLETED => Ok(Self::Completed),
            STAGE_WON => Ok(Self::Won),
            STAGE_DROP => Ok(Self::Drop),
            STAGE_EXPIRED => Ok(Self::Expired),
            _ => Err(format!(
                "Invalid stage '{s}'. Must be one of: {}",
                VALID_STAGES.join(", ")
            )),
        }
    }

    /// Convert to the database string value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => STAGE_NEW,
            Self::Qualify => STAGE_QUALIFY,
            Self::Proposal => STAGE_PROPOSAL,
            Self::Review => STAGE_REVIEW,
            Self::Completed => STAGE_COMPLETED,
            Self::Won => STAGE_WON,
            Self::Drop => STAGE_DROP,
            Self::Expired => STAGE_EXPIRED,
        }
    }

    /// Whether the lead is closed (won or dropped) and therefore not
    /// follow-up tracked.
    pub fn is_closed(&self) -> bool {
        matches!(self, Self::Won | Self::Drop)
    }
}

// ---------------------------------------------------------------------------
// Follow-up classification
// ---------------------------------------------------------------------------

/// Business-rule window: an open lead whose follow-up date is more than
/// this many hours in the past is counted as lost.
pub const TAT_WINDOW_HOURS: i64 = 72;

/// Derived follow-up status shown on lead listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowUpStatus {
    /// The follow-up window is still open.
    InTat,
    /// The follow-up window elapsed without the lead closing.
    Lost,
    /// The lead has no follow-up date set.
    NoDate,
    /// The lead is closed; no status is shown.
    None,
}

impl FollowUpStatus {
    /// The display label. Closed leads get the empty string.
    pub fn label(&self) -> &'static str {
        match self {
            Self::InTat => "In TAT",
            Self::Lost => "Lost",
            Self::NoDate => "No Date",
            Self::None => "",
        }
    }
}

/// Classify a lead's follow-up status.
///
/// Pure function over the three scalar inputs; safe to call per row from
/// any request context. The boundary is strict: a lead at exactly
/// [`TAT_WINDOW_HOURS`] elapsed is still "In TAT"; only strictly more than
/// the window counts as "Lost".
pub fn classify_follow_up(
    stage: LeadStage,
    follow_up: Option<Timestamp>,
    now: Timestamp,
) -> FollowUpStatus {
    if stage.is_closed() {
        return FollowUpStatus::None;
    }
    let Some(follow_up) = follow_up else {
        return FollowUpStatus::NoDate;
    };
    if now - follow_up > Duration::hours(TAT_WINDOW_HOURS) {
        FollowUpStatus::Lost
    } else {
        FollowUpStatus::InTat
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_stage_round_trip() {
        for s in VALID_STAGES {
            let stage = LeadStage::from_str_value(s).expect("valid stage must parse");
            assert_eq!(stage.as_str(), *s);
        }
    }

    #[test]
    fn test_invalid_stage_rejected() {
        let result = LeadStage::from_str_value("Negotiation");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Invalid stage"));
    }

    #[test]
    fn test_closed_stages() {
        assert!(LeadStage::Won.is_closed());
        assert!(LeadStage::Drop.is_closed());
        assert!(!LeadStage::New.is_closed());
        assert!(!LeadStage::Completed.is_closed());
        assert!(!LeadStage::Expired.is_closed());
    }

    #[test]
    fn test_closed_lead_has_no_status() {
        let now = Utc::now();
        let old = Some(now - Duration::hours(500));
        assert_eq!(classify_follow_up(LeadStage::Won, old, now), FollowUpStatus::None);
        assert_eq!(classify_follow_up(LeadStage::Drop, None, now), FollowUpStatus::None);
        assert_eq!(FollowUpStatus::None.label(), "");
    }

    #[test]
    fn test_missing_follow_up_date() {
        let now = Utc::now();
        let status = classify_follow_up(LeadStage::Qualify, None, now);
        assert_eq!(status, FollowUpStatus::NoDate);
        assert_eq!(status.label(), "No Date");
    }

    #[test]
    fn test_within_window_is_in_tat() {
        let now = Utc::now();
        let follow_up = Some(now - Duration::hours(10));
        let status = classify_follow_up(LeadStage::Qualify, follow_up, now);
        assert_eq!(status, FollowUpStatus::InTat);
        assert_eq!(status.label(), "In TAT");
    }

    #[test]
    fn test_past_window_is_lost() {
        let now = Utc::now();
        let follow_up = Some(now - Duration::hours(73));
        let status = classify_follow_up(LeadStage::New, follow_up, now);
        assert_eq!(status, FollowUpStatus::Lost);
        assert_eq!(status.label(), "Lost");
    }

    #[test]
    fn test_exactly_72_hours_is_in_tat() {
        // The window is a strict greater-than: exactly 72h elapsed is
        // still inside it.
        let now = Utc::now();
        let follow_up = Some(now - Duration::hours(TAT_WINDOW_HOURS));
        assert_eq!(
            classify_follow_up(LeadStage::New, follow_up, now),
            FollowUpStatus::InTat
        );
    }

    #[test]
    fn test_one_second_past_72_hours_is_lost() {
        let now = Utc::now();
        let follow_up = Some(now - Duration::hours(TAT_WINDOW_HOURS) - Duration::seconds(1));
        assert_eq!(
            classify_follow_up(LeadStage::New, follow_up, now),
            FollowUpStatus::Lost
        );
    }

    #[test]
    fn test_future_follow_up_is_in_tat() {
        let now = Utc::now();
        let follow_up = Some(now + Duration::hours(24));
        assert_eq!(
            classify_follow_up(LeadStage::Proposal, follow_up, now),
            FollowUpStatus::InTat
        );
    }

}
