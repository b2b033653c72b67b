use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Normalized public profile of one GitHub developer
///
/// Serialized with the snake_case field names the web client reads
/// (`top_language`, `latest_repos`, ...). camelCase aliases are accepted on input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub username: String,
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub bio: Option<String>,
    pub repositories: u32,
    pub followers: u32,
    #[serde(alias = "topLanguage")]
    pub top_language: String,
    #[serde(alias = "latestRepos", default)]
    pub latest_repos: Vec<Repository>,
    #[serde(alias = "gitAge", default)]
    pub git_age: Option<GitAge>,
    #[serde(alias = "createdAt", default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(alias = "lastUpdated", default)]
    pub last_updated: Option<DateTime<Utc>>,
}

impl Profile {
    /// Build a profile carrying only the fields the scorer reads
    pub fn new(
        username: impl Into<String>,
        repositories: u32,
        followers: u32,
        top_language: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            avatar: String::new(),
            bio: None,
            repositories,
            followers,
            top_language: top_language.into(),
            latest_repos: Vec::new(),
            git_age: None,
            created_at: None,
            last_updated: None,
        }
    }
}

/// A recently updated repository shown on the profile card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Repository {
    pub name: String,
    #[serde(default)]
    pub stars: u32,
    #[serde(default)]
    pub description: Option<String>,
    pub url: String,
    #[serde(default)]
    pub language: Option<String>,
}

/// How long the account has existed
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GitAge {
    /// Years, rounded to one decimal
    pub years: f64,
    pub days: i64,
}

/// Compatibility percentage between two profiles, always within 0..=100
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct MatchScore(u8);

/// Rejected score outside 0..=100
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("match score {0} is out of range (0-100)")]
pub struct ScoreOutOfRange(pub u8);

impl MatchScore {
    pub const MAX: MatchScore = MatchScore(100);

    /// Round `numerator / denominator` to the nearest integer, halves up
    ///
    /// Integer arithmetic keeps exact ties such as 45.5 from drifting below
    /// the half. A zero denominator yields zero.
    pub fn from_ratio(numerator: u64, denominator: u64) -> Self {
        if denominator == 0 {
            return Self(0);
        }

        let numerator = u128::from(numerator);
        let denominator = u128::from(denominator);
        let rounded = (2 * numerator + denominator) / (2 * denominator);

        Self(rounded.min(100) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for MatchScore {
    type Error = ScoreOutOfRange;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value > Self::MAX.0 {
            return Err(ScoreOutOfRange(value));
        }
        Ok(Self(value))
    }
}

impl From<MatchScore> for u8 {
    fn from(score: MatchScore) -> Self {
        score.0
    }
}

impl fmt::Display for MatchScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Unrounded sub-scores behind a [`MatchScore`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchBreakdown {
    pub language: f64,
    pub repo_balance: f64,
    pub community: f64,
    pub total: MatchScore,
}

/// Entry in the recently looked-up users list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentUser {
    pub username: String,
    pub avatar: String,
    pub timestamp: DateTime<Utc>,
}
