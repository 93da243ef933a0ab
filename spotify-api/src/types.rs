//! Data types for Spotify Web API responses.
//!
//! Field names match the API's JSON (which is already `snake_case`). Fields
//! the API may send as `null` or omit are `Option`s; absent collections
//! default to empty.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Follower information of a user or artist.
///
/// API JSON: `{ "href": null, "total": 3829 }`. `href` is always `null` today.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Followers {
    /// Number of followers.
    pub total: u32,
    #[serde(default)]
    pub href: Option<String>,
}

/// A cover art or profile image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub url: String,
    /// Pixel height, `null` when unknown.
    #[serde(default)]
    pub height: Option<u32>,
    /// Pixel width, `null` when unknown.
    #[serde(default)]
    pub width: Option<u32>,
}

/// Public profile of a user.
///
/// Returned by [`SpotifyClient::user_public_profile`](crate::SpotifyClient::user_public_profile).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Spotify user ID, e.g. `wizzler`.
    pub id: String,
    /// Name shown on the profile; `null` if the user never set one.
    #[serde(default)]
    pub display_name: Option<String>,
    /// Spotify URI, e.g. `spotify:user:wizzler`.
    pub uri: String,
    /// Web API endpoint for this user.
    pub href: String,
    /// Known external URLs, keyed by type (`spotify`).
    #[serde(default)]
    pub external_urls: HashMap<String, String>,
    /// Absent when the profile is requested without the right scope.
    #[serde(default)]
    pub followers: Option<Followers>,
    #[serde(default)]
    pub images: Vec<Image>,
}

/// Profile of the current user, including private fields.
///
/// Returned by [`SpotifyClient::current_user`](crate::SpotifyClient::current_user).
/// `country` and `product` need the `user-read-private` scope, `email` needs
/// `user-read-email`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrivateUser {
    #[serde(flatten)]
    pub user: User,
    /// ISO 3166-1 alpha-2 country code, e.g. `US`.
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    /// Subscription level: `premium`, `free`, ...
    #[serde(default)]
    pub product: Option<String>,
    /// `YYYY-MM-DD`. Only sent to older apps with the `user-read-birthdate`
    /// scope.
    #[serde(default)]
    pub birthdate: Option<String>,
}

/// Artist reference embedded in tracks and albums.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimpleArtist {
    pub name: String,
    /// `null` for local files.
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub uri: Option<String>,
    #[serde(default)]
    pub href: Option<String>,
    #[serde(default)]
    pub external_urls: HashMap<String, String>,
}

/// Full artist object.
///
/// Returned inside [`CursorPage`] by
/// [`SpotifyClient::current_user_followed_artists`](crate::SpotifyClient::current_user_followed_artists).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullArtist {
    pub id: String,
    pub name: String,
    pub uri: String,
    pub href: String,
    /// 0–100, derived from the popularity of the artist's tracks.
    #[serde(default)]
    pub popularity: u32,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub followers: Followers,
    #[serde(default)]
    pub images: Vec<Image>,
    #[serde(default)]
    pub external_urls: HashMap<String, String>,
}

/// Album reference embedded in a [`FullTrack`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimpleAlbum {
    pub name: String,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub uri: Option<String>,
    /// `album`, `single` or `compilation`.
    #[serde(default)]
    pub album_type: Option<String>,
    #[serde(default)]
    pub artists: Vec<SimpleArtist>,
    #[serde(default)]
    pub images: Vec<Image>,
    /// Precision varies: `1981`, `1981-12` or `1981-12-15`.
    #[serde(default)]
    pub release_date: Option<String>,
}

/// Full track object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullTrack {
    pub name: String,
    /// `null` for local files.
    #[serde(default)]
    pub id: Option<String>,
    pub uri: String,
    #[serde(default)]
    pub href: Option<String>,
    pub album: SimpleAlbum,
    pub artists: Vec<SimpleArtist>,
    pub duration_ms: u32,
    #[serde(default)]
    pub explicit: bool,
    #[serde(default)]
    pub popularity: u32,
    #[serde(default)]
    pub track_number: u32,
    #[serde(default)]
    pub disc_number: u32,
    /// 30 second MP3 preview, if the track has one.
    #[serde(default)]
    pub preview_url: Option<String>,
    #[serde(default)]
    pub is_local: bool,
    #[serde(default)]
    pub external_urls: HashMap<String, String>,
    /// Known external IDs, keyed by type (`isrc`, `ean`, `upc`).
    #[serde(default)]
    pub external_ids: HashMap<String, String>,
}

/// A track in the current user's library.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedTrack {
    /// When the track was saved.
    pub added_at: DateTime<Utc>,
    pub track: FullTrack,
}

/// Offset-based paging envelope.
///
/// ```json
/// {
///   "href": "https://api.spotify.com/v1/me/tracks?offset=0&limit=20",
///   "items": [ ... ],
///   "limit": 20, "offset": 0, "total": 3,
///   "next": null, "previous": null
/// }
/// ```
///
/// `items.len()` never exceeds `limit`. Walking every page of an unchanged
/// listing yields `total` items.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    /// Endpoint that produced this page.
    pub href: String,
    pub items: Vec<T>,
    pub limit: u32,
    pub offset: u32,
    /// Total number of items in the whole listing.
    pub total: u32,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
}

impl<T> Page<T> {
    /// Whether the service advertised a following page.
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }
}

/// Continuation tokens of a [`CursorPage`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cursors {
    #[serde(default)]
    pub after: Option<String>,
    #[serde(default)]
    pub before: Option<String>,
}

/// Cursor-based paging envelope.
///
/// Used where items can be inserted while the caller is paging (followed
/// artists). Pass [`after`](CursorPage::after) back as
/// [`CursorOptions::after`] to fetch the next page; no token means the
/// listing is exhausted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CursorPage<T> {
    pub href: String,
    pub items: Vec<T>,
    pub limit: u32,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub cursors: Option<Cursors>,
    #[serde(default)]
    pub total: Option<u32>,
}

impl<T> CursorPage<T> {
    /// Token to request the next page with, if more results may exist.
    pub fn after(&self) -> Option<&str> {
        self.cursors.as_ref()?.after.as_deref()
    }
}

/// Optional paging parameters for offset-paged listings.
///
/// Unset fields are not sent, leaving the service defaults (limit 20,
/// offset 0) in force.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageOptions {
    /// Items per page, 1–50.
    pub limit: Option<u32>,
    /// Index of the first item.
    pub offset: Option<u32>,
    /// ISO 3166-1 alpha-2 code for track relinking.
    pub market: Option<String>,
}

impl PageOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    #[must_use]
    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    #[must_use]
    pub fn market(mut self, market: impl Into<String>) -> Self {
        self.market = Some(market.into());
        self
    }

    pub(crate) fn query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(limit) = self.limit {
            query.push(("limit", limit.to_string()));
        }
        if let Some(offset) = self.offset {
            query.push(("offset", offset.to_string()));
        }
        if let Some(market) = &self.market {
            query.push(("market", market.clone()));
        }
        query
    }
}

/// Optional paging parameters for cursor-paged listings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CursorOptions {
    /// Items per page, 1–50.
    pub limit: Option<u32>,
    /// Last ID seen on the previous page.
    pub after: Option<String>,
}

impl CursorOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    #[must_use]
    pub fn after(mut self, after: impl Into<String>) -> Self {
        self.after = Some(after.into());
        self
    }

    pub(crate) fn query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(limit) = self.limit {
            query.push(("limit", limit.to_string()));
        }
        if let Some(after) = &self.after {
            query.push(("after", after.clone()));
        }
        query
    }
}

/// What a follow operation targets, mapped to the API `type` parameter.
///
/// | Variant  | API value |
/// |----------|-----------|
/// | `Artist` | `artist`  |
/// | `User`   | `user`    |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowKind {
    Artist,
    User,
}

impl FollowKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Artist => "artist",
            Self::User => "user",
        }
    }
}

impl fmt::Display for FollowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
