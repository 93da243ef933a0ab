//! Library (saved tracks) API.
//!
//! Endpoint: `GET /me/tracks` — needs the `user-library-read` scope.
//!
//! Query parameters (all optional):
//! - `limit` — page size (default 20, max 50)
//! - `offset` — index of the first item (default 0)
//! - `market` — country code for track relinking
//!
//! Response is a [`Page`] of `{ "added_at": "...", "track": { ... } }`.

use crate::client::SpotifyClient;
use crate::error::Result;
use crate::types::{Page, PageOptions, SavedTrack};

impl SpotifyClient {
    /// Get a page of the tracks saved in the current user's library,
    /// most recently saved first.
    pub fn current_user_saved_tracks(&self, options: &PageOptions) -> Result<Page<SavedTrack>> {
        self.get("/me/tracks", &options.query())
    }
}
