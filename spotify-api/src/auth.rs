//! Session management — persists the bearer access token to disk.
//!
//! The session file is stored at `~/.config/spotify-cli/session.json` and
//! contains:
//!
//! ```json
//! { "access_token": "BQD...Xw" }
//! ```
//!
//! Obtaining and refreshing the token (authorization code flow, PKCE, client
//! credentials) happens outside this crate. Access tokens expire after an
//! hour; a refreshed token can be pushed into a live client with
//! [`SpotifyClient::set_access_token`](crate::SpotifyClient::set_access_token).
//!
//! The `SPOTIFY_ACCESS_TOKEN` environment variable, when set and non-empty,
//! takes precedence over the file.

use crate::error::{Result, SpotifyError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable that overrides the persisted token.
pub const TOKEN_ENV: &str = "SPOTIFY_ACCESS_TOKEN";

/// Persistent login session backed by a JSON file on disk.
#[derive(Serialize, Deserialize, Default, Clone)]
pub struct Session {
    /// OAuth bearer access token.
    pub access_token: Option<String>,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("access_token", &self.access_token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl Session {
    /// Load the session, preferring `SPOTIFY_ACCESS_TOKEN` over the file.
    ///
    /// Returns a default (empty) session if neither is present.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?, std::env::var(TOKEN_ENV).ok())
    }

    /// Load from `path`, with `env_token` (when non-empty) taking precedence.
    pub fn load_from(path: &Path, env_token: Option<String>) -> Result<Self> {
        if let Some(token) = env_token.filter(|t| !t.is_empty()) {
            log::debug!("using access token from {TOKEN_ENV}");
            return Ok(Self {
                access_token: Some(token),
            });
        }
        if !path.exists() {
            return Ok(Self::default());
        }
        let data = fs::read_to_string(path)?;
        serde_json::from_str(&data)
            .map_err(|e| SpotifyError::Other(format!("corrupt session file {}: {e}", path.display())))
    }

    /// Save session to disk, creating parent directories if needed.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    /// Save session to `path`, creating parent directories if needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_string_pretty(self)
            .map_err(|e| SpotifyError::Other(e.to_string()))?;
        fs::write(path, data)?;
        log::debug!("session saved to {}", path.display());
        Ok(())
    }

    /// Delete the session file from disk.
    pub fn clear() -> Result<()> {
        Self::clear_at(&Self::path()?)
    }

    /// Delete the session file at `path`, if there is one.
    pub fn clear_at(path: &Path) -> Result<()> {
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }

    /// Check whether a token is present (does not validate it).
    pub fn is_logged_in(&self) -> bool {
        self.token().is_some()
    }

    /// The stored token, treating an empty string as absent.
    pub fn token(&self) -> Option<&str> {
        self.access_token.as_deref().filter(|t| !t.is_empty())
    }

    fn path() -> Result<PathBuf> {
        let config = dirs::config_dir()
            .ok_or_else(|| SpotifyError::Other("cannot determine config directory".into()))?;
        Ok(config.join("spotify-cli").join("session.json"))
    }
}
