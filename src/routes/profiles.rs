use actix_web::{http::StatusCode, web, HttpResponse, Responder};
use validator::Validate;
use crate::core::{MatchError, Matcher};
use crate::models::{ErrorResponse, HealthResponse, Profile, ProfilePath, RecentUsersQuery, UserPairPath};
use crate::services::{GitHubClient, GitHubError, ProfileCache, RecentUsers};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub github: Arc<GitHubClient>,
    pub cache: Arc<ProfileCache>,
    pub recent: Arc<RecentUsers>,
    pub matcher: Matcher,
    /// Default length of the recent users list
    pub recent_limit: usize,
}

/// Configure all profile and match routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/profile/{username}", web::get().to(get_profile))
        .route("/match/{username1}/{username2}", web::get().to(get_match))
        .route("/collaboration-rating/{username1}/{username2}", web::get().to(collaboration_rating))
        .route("/recent-users", web::get().to(recent_users));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        cached_profiles: state.cache.stats().entries,
        timestamp: chrono::Utc::now(),
    })
}

/// Profile endpoint
///
/// GET /profile/{username}
///
/// Served from the cache when fresh, otherwise fetched from GitHub.
async fn get_profile(
    state: web::Data<AppState>,
    path: web::Path<ProfilePath>,
) -> impl Responder {
    if let Err(errors) = path.validate() {
        return validation_error(errors);
    }

    match load_profile(&state, &path.username).await {
        Ok(profile) => HttpResponse::Ok().json(profile),
        Err(e) => github_error_response(&path.username, &e),
    }
}

/// Match endpoint
///
/// GET /match/{username1}/{username2}
///
/// Returns the score, its components and both full profiles.
async fn get_match(
    state: web::Data<AppState>,
    path: web::Path<UserPairPath>,
) -> impl Responder {
    let (user1, user2) = match load_pair(&state, &path).await {
        Ok(pair) => pair,
        Err(response) => return response,
    };

    match state.matcher.compare(user1, user2) {
        Ok(report) => {
            tracing::info!(
                "Match {} vs {}: {}",
                report.user1.username,
                report.user2.username,
                report.score
            );
            HttpResponse::Ok().json(report)
        }
        Err(e) => match_error_response(&e),
    }
}

/// Collaboration rating endpoint
///
/// GET /collaboration-rating/{username1}/{username2}
///
/// Response body:
/// ```json
/// {
///   "compatibility_score": 87,
///   "details": {
///     "language_score": 40.0,
///     "repo_overlap_score": 17.14,
///     "follower_score": 30.0,
///     "users": { "user1": { ... }, "user2": { ... } }
///   }
/// }
/// ```
async fn collaboration_rating(
    state: web::Data<AppState>,
    path: web::Path<UserPairPath>,
) -> impl Responder {
    let (user1, user2) = match load_pair(&state, &path).await {
        Ok(pair) => pair,
        Err(response) => return response,
    };

    match state.matcher.rate(&user1, &user2) {
        Ok(rating) => {
            tracing::info!(
                "Collaboration rating {} vs {}: {}",
                user1.username,
                user2.username,
                rating.compatibility_score
            );
            HttpResponse::Ok().json(rating)
        }
        Err(e) => match_error_response(&e),
    }
}

/// Recent users endpoint
///
/// GET /recent-users?limit={limit}
async fn recent_users(
    state: web::Data<AppState>,
    query: web::Query<RecentUsersQuery>,
) -> impl Responder {
    let limit = query.limit.unwrap_or(state.recent_limit);
    HttpResponse::Ok().json(state.recent.list(limit).await)
}

/// Cached profile, or a fresh GitHub fetch that is cached and recorded as recent
async fn load_profile(state: &AppState, username: &str) -> Result<Profile, GitHubError> {
    if let Some(profile) = state.cache.get(username).await {
        tracing::debug!("Serving cached profile for {}", username);
        return Ok(profile);
    }

    let profile = state.github.fetch_profile(username).await?;

    state.cache.insert(profile.clone()).await;
    state.recent.record(&profile.username, &profile.avatar).await;

    tracing::info!("Fetched profile for {} from GitHub", profile.username);

    Ok(profile)
}

/// Validate a username pair and fetch both profiles concurrently
async fn load_pair(state: &AppState, path: &UserPairPath) -> Result<(Profile, Profile), HttpResponse> {
    if let Err(errors) = path.validate() {
        return Err(validation_error(errors));
    }

    state
        .matcher
        .validate_usernames(&path.username1, &path.username2)
        .map_err(|e| match_error_response(&e))?;

    let (first, second) = tokio::join!(
        load_profile(state, &path.username1),
        load_profile(state, &path.username2),
    );

    let user1 = first.map_err(|e| github_error_response(&path.username1, &e))?;
    let user2 = second.map_err(|e| github_error_response(&path.username2, &e))?;

    Ok((user1, user2))
}

fn validation_error(errors: validator::ValidationErrors) -> HttpResponse {
    tracing::info!("Validation failed: {:?}", errors);
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Validation failed".to_string(),
        message: errors.to_string(),
        status_code: 400,
    })
}

fn match_error_response(err: &MatchError) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Invalid user pair".to_string(),
        message: err.to_string(),
        status_code: 400,
    })
}

/// Map a fetch failure to its HTTP status
pub fn github_error_status(err: &GitHubError) -> StatusCode {
    match err {
        GitHubError::NotFound(_) => StatusCode::NOT_FOUND,
        GitHubError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
        GitHubError::Network(_) | GitHubError::Upstream { .. } | GitHubError::InvalidResponse(_) => {
            StatusCode::BAD_GATEWAY
        }
        GitHubError::InvalidToken(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn github_error_response(username: &str, err: &GitHubError) -> HttpResponse {
    let status = github_error_status(err);

    let error = match err {
        GitHubError::NotFound(_) => "User not found",
        GitHubError::Timeout(_) => "GitHub request timed out",
        _ => "Failed to fetch profile",
    };

    if status.is_server_error() {
        tracing::warn!("Failed to fetch profile for {}: {}", username, err);
    } else {
        tracing::info!("Profile lookup for {} failed: {}", username, err);
    }

    HttpResponse::build(status).json(ErrorResponse {
        error: error.to_string(),
        message: err.to_string(),
        status_code: status.as_u16(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_github_error_status() {
        assert_eq!(
            github_error_status(&GitHubError::NotFound("ghost".to_string())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            github_error_status(&GitHubError::Timeout(Duration::from_secs(15))),
            StatusCode::GATEWAY_TIMEOUT
        );
        assert_eq!(
            github_error_status(&GitHubError::Upstream { status: 500, message: "boom".to_string() }),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            github_error_status(&GitHubError::InvalidResponse("eof".to_string())),
            StatusCode::BAD_GATEWAY
        );
    }
}
