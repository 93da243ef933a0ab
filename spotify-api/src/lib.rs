//! Spotify Web API client library.
//!
//! Provides authenticated, blocking access to the user-centric part of the
//! Spotify Web API: profiles, followed artists and users, and saved tracks.
//! Responses are decoded into the plain records in [`types`]; failures come
//! back as a [`SpotifyError`] that keeps the HTTP status and the service's
//! message.
//!
//! # Authentication
//!
//! Every call carries an OAuth bearer token. Obtaining and refreshing it is
//! up to the caller; the token can be passed directly or persisted to
//! `~/.config/spotify-cli/session.json`.
//!
//! ```no_run
//! use spotify_api::auth::Session;
//! use spotify_api::SpotifyClient;
//!
//! // Save token
//! let session = Session { access_token: Some("BQD...".into()) };
//! session.save().unwrap();
//!
//! // Create client (loads session from disk or SPOTIFY_ACCESS_TOKEN)
//! let client = SpotifyClient::new().unwrap();
//! let me = client.current_user().unwrap();
//! println!("{}", me.user.id);
//! ```
//!
//! # API endpoint mapping
//!
//! | Method                                               | Endpoint                          | Description              |
//! |------------------------------------------------------|-----------------------------------|--------------------------|
//! | [`SpotifyClient::user_public_profile`]               | `GET /users/{id}`                 | Public profile           |
//! | [`SpotifyClient::current_user`]                      | `GET /me`                         | Current user profile     |
//! | [`SpotifyClient::current_user_saved_tracks`]         | `GET /me/tracks`                  | Saved tracks (paged)     |
//! | [`SpotifyClient::current_user_followed_artists`]     | `GET /me/following?type=artist`   | Followed artists (cursor)|
//! | [`SpotifyClient::current_user_follows`]              | `GET /me/following/contains`      | Follow check             |
//! | [`SpotifyClient::follow`]                            | `PUT /me/following`               | Follow artists/users     |
//! | [`SpotifyClient::unfollow`]                          | `DELETE /me/following`            | Unfollow artists/users   |

pub mod auth;
pub mod client;
pub mod error;
mod follow;
mod library;
#[cfg(test)]
mod test_support;
pub mod types;
mod user;

pub use client::{ClientBuilder, SpotifyClient};
pub use error::{Result, SpotifyError};
pub use follow::MAX_IDS;
pub use types::{CursorOptions, FollowKind, PageOptions};
