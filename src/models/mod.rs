// Model exports
pub mod domain;
pub mod github;
pub mod requests;
pub mod responses;

pub use domain::{Profile, Repository, GitAge, MatchScore, MatchBreakdown, RecentUser, ScoreOutOfRange};
pub use github::{GitHubUser, GitHubRepo};
pub use requests::{ProfilePath, UserPairPath, RecentUsersQuery};
pub use responses::{CollaborationRating, RatingDetails, RatedUsers, UserSummary, MatchResponse, HealthResponse, ErrorResponse};
