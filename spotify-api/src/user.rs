//! User profile API.
//!
//! ## `user_public_profile` — `GET /users/{user_id}`
//!
//! Response:
//! ```json
//! {
//!   "display_name": "Ronald Pompa",
//!   "followers": { "href": null, "total": 3829 },
//!   "id": "wizzler",
//!   "images": [ { "height": null, "url": "http://...", "width": null } ],
//!   "uri": "spotify:user:wizzler",
//!   ...
//! }
//! ```
//!
//! ## `current_user` — `GET /me`
//!
//! Same shape plus `country`, `email`, `product` (and `birthdate` for older
//! apps), each present only when the token carries the matching scope.

use crate::client::{Query, SpotifyClient};
use crate::error::Result;
use crate::types::{PrivateUser, User};

impl SpotifyClient {
    /// Get public profile information about a user.
    ///
    /// # Errors
    ///
    /// - [`SpotifyError::Api`](crate::SpotifyError::Api) with status 404 — no
    ///   such user
    pub fn user_public_profile(&self, user_id: &str) -> Result<User> {
        let path = format!("/users/{}", urlencoding::encode(user_id));
        self.get(&path, &Query::new())
    }

    /// Get the profile of the user the access token belongs to.
    ///
    /// # Errors
    ///
    /// - [`SpotifyError::Api`](crate::SpotifyError::Api) with status 401 —
    ///   token invalid or expired
    pub fn current_user(&self) -> Result<PrivateUser> {
        self.get("/me", &Query::new())
    }
}
