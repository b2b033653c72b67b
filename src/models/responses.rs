use serde::{Deserialize, Serialize};
use crate::models::domain::{MatchBreakdown, MatchScore, Profile};

/// Response for the collaboration rating endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollaborationRating {
    pub compatibility_score: MatchScore,
    pub details: RatingDetails,
}

/// Component scores, rounded to two decimals for display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingDetails {
    pub language_score: f64,
    pub repo_overlap_score: f64,
    pub follower_score: f64,
    pub users: RatedUsers,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatedUsers {
    pub user1: UserSummary,
    pub user2: UserSummary,
}

/// The scoring inputs of one rated user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSummary {
    pub username: String,
    pub top_language: String,
    pub repositories: u32,
    pub followers: u32,
}

impl From<&Profile> for UserSummary {
    fn from(profile: &Profile) -> Self {
        Self {
            username: profile.username.clone(),
            top_language: profile.top_language.clone(),
            repositories: profile.repositories,
            followers: profile.followers,
        }
    }
}

/// Response for the match endpoint: score plus both full profiles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResponse {
    pub score: MatchScore,
    pub breakdown: MatchBreakdown,
    pub user1: Profile,
    pub user2: Profile,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub cached_profiles: u64,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
