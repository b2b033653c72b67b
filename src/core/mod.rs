// Core algorithm exports
pub mod matcher;
pub mod profile;
pub mod scoring;
pub mod session;

pub use matcher::{Matcher, MatchError};
pub use profile::{build_profile, top_language, account_age, UNKNOWN_LANGUAGE};
pub use scoring::{calculate_match_score, score_breakdown};
pub use session::{MatchSession, SessionState, SessionError};
