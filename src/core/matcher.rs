use thiserror::Error;
use crate::models::{CollaborationRating, MatchResponse, Profile, RatedUsers, RatingDetails, UserSummary};
use crate::core::scoring::score_breakdown;

/// Reasons a pair of developers cannot be rated
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    #[error("Please provide two different usernames (got {0} twice)")]
    SameUser(String),
}

/// Pairs two profiles and produces the rating reports served over HTTP
///
/// Stateless; the score itself comes from [`score_breakdown`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Matcher;

impl Matcher {
    pub fn new() -> Self {
        Self
    }

    /// Reject a developer paired with themself, ignoring ASCII case
    ///
    /// Called before any profile is fetched.
    pub fn validate_usernames(&self, username1: &str, username2: &str) -> Result<(), MatchError> {
        if username1.eq_ignore_ascii_case(username2) {
            return Err(MatchError::SameUser(username1.to_string()));
        }
        Ok(())
    }

    /// Build the collaboration rating with display-rounded components
    pub fn rate(&self, user1: &Profile, user2: &Profile) -> Result<CollaborationRating, MatchError> {
        self.validate_usernames(&user1.username, &user2.username)?;

        let breakdown = score_breakdown(user1, user2);

        Ok(CollaborationRating {
            compatibility_score: breakdown.total,
            details: RatingDetails {
                language_score: round2(breakdown.language),
                repo_overlap_score: round2(breakdown.repo_balance),
                follower_score: round2(breakdown.community),
                users: RatedUsers {
                    user1: UserSummary::from(user1),
                    user2: UserSummary::from(user2),
                },
            },
        })
    }

    /// Score two profiles and keep both of them in the report
    pub fn compare(&self, user1: Profile, user2: Profile) -> Result<MatchResponse, MatchError> {
        self.validate_usernames(&user1.username, &user2.username)?;

        let breakdown = score_breakdown(&user1, &user2);

        tracing::debug!(
            "Scored {} vs {}: {} (language {}, repos {:.2}, community {:.2})",
            user1.username,
            user2.username,
            breakdown.total,
            breakdown.language,
            breakdown.repo_balance,
            breakdown.community
        );

        Ok(MatchResponse {
            score: breakdown.total,
            breakdown,
            user1,
            user2,
        })
    }
}

#[inline]
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
