use crate::models::{MatchBreakdown, MatchScore, Profile};

/// Points for an identical top language
pub const LANGUAGE_MATCH_POINTS: f64 = 40.0;
/// Baseline points when the top languages differ
pub const LANGUAGE_MISMATCH_POINTS: f64 = 20.0;
/// Maximum points for balanced repository counts
pub const REPO_BALANCE_WEIGHT: f64 = 30.0;
/// Maximum points for community engagement
pub const COMMUNITY_WEIGHT: f64 = 30.0;
/// Combined follower count at which community engagement is capped
pub const COMMUNITY_FOLLOWER_CAP: f64 = 100.0;

/// Calculate the compatibility score (0-100) between two developers
///
/// Scoring formula:
/// score = round(
///     language_score +        # 40 on identical top language, 20 otherwise
///     repo_balance_score +    # min(repos) / max(repos) * 30, 0 when both have none
///     community_score         # min(followers_a + followers_b, 100) / 100 * 30
/// )
///
/// The component maxima add up to exactly 100. Swapping `a` and `b` never
/// changes the result.
pub fn calculate_match_score(a: &Profile, b: &Profile) -> MatchScore {
    score_breakdown(a, b).total
}

/// Same computation as [`calculate_match_score`], keeping the components
pub fn score_breakdown(a: &Profile, b: &Profile) -> MatchBreakdown {
    let language = language_score(&a.top_language, &b.top_language);
    let repo_balance = repo_balance_score(a.repositories, b.repositories);
    let community = community_score(a.followers, b.followers);

    MatchBreakdown {
        language,
        repo_balance,
        community,
        total: exact_total(a, b),
    }
}

/// Rounded total computed over the common denominator `10 * max(repos)`
///
/// The components are fractions with denominators `max(repos)` and 10, so the
/// sum is exact in integers and half-point ties round up.
fn exact_total(a: &Profile, b: &Profile) -> MatchScore {
    let lo = u64::from(a.repositories.min(b.repositories));
    let hi = u64::from(a.repositories.max(b.repositories));
    let language = language_score(&a.top_language, &b.top_language) as u64;
    let followers = (u64::from(a.followers) + u64::from(b.followers))
        .min(COMMUNITY_FOLLOWER_CAP as u64);

    // Without repositories the balance term is zero and the denominator is 10
    let (scale, repo_term) = if hi == 0 { (1, 0) } else { (hi, 300 * lo) };

    let numerator = 10 * scale * language + repo_term + 3 * scale * followers;
    MatchScore::from_ratio(numerator, 10 * scale)
}

/// Language compatibility: exact, case-sensitive comparison
#[inline]
pub fn language_score(a: &str, b: &str) -> f64 {
    if a == b {
        LANGUAGE_MATCH_POINTS
    } else {
        LANGUAGE_MISMATCH_POINTS
    }
}

/// Repository balance: ratio of the smaller to the larger count, scaled to 30
///
/// Two accounts without repositories score 0 here.
#[inline]
pub fn repo_balance_score(a: u32, b: u32) -> f64 {
    let lo = a.min(b);
    let hi = a.max(b);

    if hi == 0 {
        return 0.0;
    }

    f64::from(lo) / f64::from(hi) * REPO_BALANCE_WEIGHT
}

/// Community engagement: linear in combined followers up to the cap
#[inline]
pub fn community_score(a: u32, b: u32) -> f64 {
    let total_followers = u64::from(a) + u64::from(b);

    (total_followers as f64 / COMMUNITY_FOLLOWER_CAP * COMMUNITY_WEIGHT).min(COMMUNITY_WEIGHT)
}
