//! GitMatch - GitHub profile aggregator and developer compatibility scoring
//!
//! Fetches public GitHub profiles, normalizes them, and rates how well two
//! developers would work together as a 0-100 score.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use core::{calculate_match_score, score_breakdown, Matcher, MatchSession};
pub use models::{Profile, MatchScore, MatchBreakdown, CollaborationRating};
pub use services::{GitHubClient, GitHubError};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let a = Profile::new("alice", 10, 0, "Go");
        let b = Profile::new("bob", 100, 0, "Rust");
        assert_eq!(calculate_match_score(&a, &b).value(), 23);
    }
}
