// Unit tests for GitMatch scoring

use gitmatch::core::{
    matcher::{Matcher, MatchError},
    scoring::{calculate_match_score, community_score, repo_balance_score, score_breakdown},
    session::{MatchSession, SessionState},
};
use gitmatch::models::Profile;

fn profile(username: &str, language: &str, repositories: u32, followers: u32) -> Profile {
    Profile::new(username, repositories, followers, language)
}

#[test]
fn test_perfect_match_scores_one_hundred() {
    let a = profile("alice", "Go", 50, 50);
    let b = profile("bob", "Go", 50, 50);

    let breakdown = score_breakdown(&a, &b);

    assert_eq!(breakdown.language, 40.0);
    assert_eq!(breakdown.repo_balance, 30.0);
    assert_eq!(breakdown.community, 30.0);
    assert_eq!(breakdown.total.value(), 100);
}

#[test]
fn test_different_language_unbalanced_repos() {
    let a = profile("alice", "Go", 10, 0);
    let b = profile("bob", "Rust", 100, 0);

    assert_eq!(calculate_match_score(&a, &b).value(), 23);
    assert_eq!(calculate_match_score(&b, &a).value(), 23);
}

#[test]
fn test_language_match_bonus_is_twenty() {
    let a = profile("alice", "Python", 20, 10);
    let same = profile("bob", "Python", 40, 20);
    let different = profile("bob", "Java", 40, 20);

    let with_match = calculate_match_score(&a, &same).value();
    let without_match = calculate_match_score(&a, &different).value();

    // 40 + 15 + 9 vs 20 + 15 + 9
    assert_eq!(with_match, 64);
    assert_eq!(without_match, 44);
    assert_eq!(with_match - without_match, 20);
}

#[test]
fn test_language_bonus_survives_half_point_ties() {
    // Unmatched total is exactly 45.5
    let a = profile("alice", "Go", 18, 13);
    let same = profile("bob", "Go", 25, 0);
    let different = profile("bob", "Rust", 25, 0);

    let with_match = calculate_match_score(&a, &same).value();
    let without_match = calculate_match_score(&a, &different).value();

    assert_eq!(without_match, 46);
    assert_eq!(with_match, 66);
    assert_eq!(with_match - without_match, 20);
}

#[test]
fn test_follower_contribution_capped() {
    let low = score_breakdown(&profile("a", "Go", 5, 60), &profile("b", "Go", 5, 60));
    let high = score_breakdown(&profile("a", "Go", 5, 1000), &profile("b", "Go", 5, 1000));

    assert_eq!(low.community, 30.0);
    assert_eq!(high.community, low.community);
    assert_eq!(low.total, high.total);
}

#[test]
fn test_zero_repositories_do_not_panic() {
    let a = profile("alice", "Go", 0, 10);
    let b = profile("bob", "Rust", 0, 10);

    let breakdown = score_breakdown(&a, &b);

    assert_eq!(breakdown.repo_balance, 0.0);
    assert_eq!(breakdown.total.value(), 26);
}

#[test]
fn test_extreme_counts_stay_in_range() {
    let a = profile("alice", "Go", u32::MAX, u32::MAX);
    let b = profile("bob", "Go", 1, u32::MAX);

    let score = calculate_match_score(&a, &b).value();
    assert!(score <= 100);
    assert_eq!(score, 70);

    assert!(repo_balance_score(u32::MAX, u32::MAX) == 30.0);
    assert!(community_score(u32::MAX, 0) == 30.0);
}

#[test]
fn test_half_points_round_up() {
    // 20 + 0 + 7.5 = 27.5
    let a = profile("alice", "Go", 0, 25);
    let b = profile("bob", "C", 0, 0);

    let breakdown = score_breakdown(&a, &b);
    assert_eq!(breakdown.community, 7.5);
    assert_eq!(breakdown.total.value(), 28);
}

#[test]
fn test_matcher_rejects_same_user() {
    let matcher = Matcher::new();
    let a = profile("octocat", "Go", 1, 1);
    let b = profile("OctoCat", "Go", 1, 1);

    assert!(matches!(matcher.rate(&a, &b), Err(MatchError::SameUser(_))));
}

#[test]
fn test_session_full_flow() {
    let mut session = MatchSession::new();

    let username = session.begin_search("octocat").unwrap();
    session.profile_loaded(profile(&username, "Go", 10, 0));

    let match_username = session.begin_match("gopher").unwrap();
    let score = session
        .match_loaded(profile(&match_username, "Rust", 100, 0))
        .unwrap();

    assert_eq!(score.value(), 23);
    match session.state() {
        SessionState::MatchShown { profile, match_profile, .. } => {
            assert_eq!(profile.username, "octocat");
            assert_eq!(match_profile.username, "gopher");
        }
        other => panic!("unexpected state: {:?}", other),
    }
}
