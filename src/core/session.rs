//! Client-side flow of a GitMatch session as an explicit state machine
//!
//! A session starts with no profile, shows the searched developer once it is
//! loaded, and shows the match once a second developer is loaded. Fetching is
//! left to the caller: `begin_*` validates input and returns the username to
//! fetch, `*_loaded` / `*_failed` report the outcome.

use thiserror::Error;
use crate::core::scoring::calculate_match_score;
use crate::models::{MatchScore, Profile};

/// Input problems caught before any fetch
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("Please enter a GitHub username")]
    MissingUsername,

    #[error("Please enter a GitHub username to match with")]
    MissingMatchUsername,

    #[error("Search for a developer before checking a match")]
    NoProfile,
}

/// What the session currently shows
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    Idle,
    ProfileShown {
        profile: Profile,
    },
    MatchShown {
        profile: Profile,
        match_profile: Profile,
        score: MatchScore,
    },
}

#[derive(Debug, Clone)]
pub struct MatchSession {
    state: SessionState,
    error: Option<String>,
    loading: bool,
}

impl MatchSession {
    pub fn new() -> Self {
        Self {
            state: SessionState::Idle,
            error: None,
            loading: false,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// The searched developer, if one is shown
    pub fn profile(&self) -> Option<&Profile> {
        match &self.state {
            SessionState::Idle => None,
            SessionState::ProfileShown { profile } | SessionState::MatchShown { profile, .. } => {
                Some(profile)
            }
        }
    }

    pub fn score(&self) -> Option<MatchScore> {
        match &self.state {
            SessionState::MatchShown { score, .. } => Some(*score),
            _ => None,
        }
    }

    /// Validate a search and return the trimmed username to fetch
    pub fn begin_search(&mut self, username: &str) -> Result<String, SessionError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(self.reject(SessionError::MissingUsername));
        }

        self.error = None;
        self.loading = true;
        Ok(username.to_string())
    }

    /// A searched profile arrived; any previous match is discarded
    pub fn profile_loaded(&mut self, profile: Profile) {
        self.state = SessionState::ProfileShown { profile };
        self.error = None;
        self.loading = false;
    }

    /// The search failed; whatever was shown stays
    pub fn search_failed(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.loading = false;
    }

    /// Validate a match request and return the trimmed username to fetch
    pub fn begin_match(&mut self, username: &str) -> Result<String, SessionError> {
        if self.profile().is_none() {
            return Err(self.reject(SessionError::NoProfile));
        }

        let username = username.trim();
        if username.is_empty() {
            return Err(self.reject(SessionError::MissingMatchUsername));
        }

        self.error = None;
        self.loading = true;
        Ok(username.to_string())
    }

    /// The second profile arrived; score it against the shown one
    pub fn match_loaded(&mut self, match_profile: Profile) -> Result<MatchScore, SessionError> {
        let profile = match std::mem::replace(&mut self.state, SessionState::Idle) {
            SessionState::ProfileShown { profile } | SessionState::MatchShown { profile, .. } => profile,
            SessionState::Idle => {
                self.loading = false;
                return Err(self.reject(SessionError::NoProfile));
            }
        };

        let score = calculate_match_score(&profile, &match_profile);
        self.state = SessionState::MatchShown {
            profile,
            match_profile,
            score,
        };
        self.error = None;
        self.loading = false;

        Ok(score)
    }

    /// The second fetch failed; fall back to showing the searched profile
    pub fn match_failed(&mut self, message: impl Into<String>) {
        self.discard_match();
        self.error = Some(message.into());
        self.loading = false;
    }

    /// Drop the current match and ask for another developer
    pub fn new_match(&mut self) {
        self.discard_match();
    }

    /// Back to the empty search screen
    pub fn reset(&mut self) {
        self.state = SessionState::Idle;
        self.error = None;
        self.loading = false;
    }

    fn discard_match(&mut self) {
        self.state = match std::mem::replace(&mut self.state, SessionState::Idle) {
            SessionState::MatchShown { profile, .. } => SessionState::ProfileShown { profile },
            other => other,
        };
    }

    fn reject(&mut self, error: SessionError) -> SessionError {
        self.error = Some(error.to_string());
        error
    }
}

impl Default for MatchSession {
    fn default() -> Self {
        Self::new()
    }
}
