// Service exports
pub mod cache;
pub mod github;
pub mod recent;

pub use cache::{ProfileCache, CacheKey, CacheStats};
pub use github::{GitHubClient, GitHubError};
pub use recent::RecentUsers;
