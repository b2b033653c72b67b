use chrono::{DateTime, Utc};
use crate::models::{GitAge, GitHubRepo, GitHubUser, Profile, Repository};

/// Reported when a developer has no repositories or the latest one has no language
pub const UNKNOWN_LANGUAGE: &str = "Unknown";

const DAYS_PER_YEAR: f64 = 365.25;

/// Normalize raw GitHub payloads into a [`Profile`]
///
/// `repos` is expected in `sort=updated` order, newest first. The top language
/// is taken from the most recently updated repository.
pub fn build_profile(user: GitHubUser, repos: Vec<GitHubRepo>, now: DateTime<Utc>) -> Profile {
    let top_language = top_language(&repos);
    let git_age = user.created_at.map(|created| account_age(created, now));

    let latest_repos = repos
        .into_iter()
        .map(|repo| Repository {
            name: repo.name,
            stars: repo.stargazers_count,
            description: repo.description,
            url: repo.html_url,
            language: repo.language,
        })
        .collect();

    Profile {
        username: user.login,
        avatar: user.avatar_url,
        bio: user.bio,
        repositories: user.public_repos,
        followers: user.followers,
        top_language,
        latest_repos,
        git_age,
        created_at: user.created_at,
        last_updated: Some(now),
    }
}

/// Language of the most recently updated repository
pub fn top_language(repos: &[GitHubRepo]) -> String {
    repos
        .first()
        .and_then(|repo| repo.language.as_deref())
        .filter(|language| !language.is_empty())
        .unwrap_or(UNKNOWN_LANGUAGE)
        .to_string()
}

/// Account age; a creation date after `now` counts as zero days
pub fn account_age(created_at: DateTime<Utc>, now: DateTime<Utc>) -> GitAge {
    let days = (now - created_at).num_days().max(0);
    let years = (days as f64 / DAYS_PER_YEAR * 10.0).round() / 10.0;

    GitAge { years, days }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn repo(name: &str, language: Option<&str>) -> GitHubRepo {
        GitHubRepo {
            name: name.to_string(),
            stargazers_count: 3,
            description: None,
            html_url: format!("https://github.com/octocat/{}", name),
            language: language.map(str::to_string),
            updated_at: None,
        }
    }

    fn user() -> GitHubUser {
        GitHubUser {
            login: "octocat".to_string(),
            avatar_url: "https://avatars.githubusercontent.com/u/583231".to_string(),
            bio: None,
            public_repos: 8,
            followers: 42,
            created_at: Some(Utc.with_ymd_and_hms(2011, 1, 25, 18, 44, 36).unwrap()),
        }
    }

    #[test]
    fn test_top_language_uses_latest_repo() {
        let repos = vec![repo("new", Some("Rust")), repo("old", Some("Go"))];
        assert_eq!(top_language(&repos), "Rust");
    }

    #[test]
    fn test_top_language_unknown() {
        assert_eq!(top_language(&[]), UNKNOWN_LANGUAGE);
        assert_eq!(top_language(&[repo("docs", None), repo("lib", Some("C"))]), UNKNOWN_LANGUAGE);
    }

    #[test]
    fn test_account_age() {
        let created = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        let now = Utc.with_ymd_and_hms(2022, 1, 1, 0, 0, 0).unwrap();

        let age = account_age(created, now);
        assert_eq!(age.days, 731);
        assert_eq!(age.years, 2.0);

        let future = account_age(now, created);
        assert_eq!(future.days, 0);
    }

    #[test]
    fn test_build_profile() {
        let now = Utc.with_ymd_and_hms(2024, 1, 25, 0, 0, 0).unwrap();
        let profile = build_profile(user(), vec![repo("hello-world", Some("Ruby"))], now);

        assert_eq!(profile.username, "octocat");
        assert_eq!(profile.repositories, 8);
        assert_eq!(profile.followers, 42);
        assert_eq!(profile.top_language, "Ruby");
        assert_eq!(profile.latest_repos.len(), 1);
        assert_eq!(profile.latest_repos[0].stars, 3);
        assert_eq!(profile.git_age.map(|age| age.years), Some(13.0));
        assert_eq!(profile.last_updated, Some(now));
    }
}
