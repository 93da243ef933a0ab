//! Follow API.
//!
//! ## `current_user_followed_artists` — `GET /me/following?type=artist`
//!
//! Cursor-paged, needs `user-follow-read`. Only artists can be listed.
//!
//! Response (note the `artists` wrapper):
//! ```json
//! {
//!   "artists": {
//!     "items": [ { "id": "0I2XqVXqHScXjHhk6AYYRe", "name": "Afasi & Filthy", ... } ],
//!     "next": "https://api.spotify.com/v1/me/following?type=artist&after=0aV6DOiouImYTqrR5YlIqx&limit=20",
//!     "total": 183,
//!     "cursors": { "after": "0aV6DOiouImYTqrR5YlIqx" },
//!     "limit": 20,
//!     "href": "https://api.spotify.com/v1/me/following?type=artist&limit=20"
//!   }
//! }
//! ```
//!
//! ## `current_user_follows` — `GET /me/following/contains?type=artist&ids=a,b`
//!
//! Response: `[ false, true ]`, one entry per requested ID, in request order.
//!
//! ## `follow` / `unfollow` — `PUT` / `DELETE /me/following?type=user`
//!
//! Body: `{ "ids": ["a", "b"] }`. Needs `user-follow-modify`. Answers `200`
//! or `204` with an empty body.
//!
//! All ID-taking endpoints accept at most 50 IDs per request.

use crate::client::SpotifyClient;
use crate::error::{Result, SpotifyError};
use crate::types::{CursorOptions, CursorPage, FollowKind, FullArtist};
use reqwest::Method;
use serde::Deserialize;
use serde_json::json;

/// Service limit on IDs per follow request.
pub const MAX_IDS: usize = 50;

#[derive(Deserialize)]
struct FollowedArtists {
    artists: CursorPage<FullArtist>,
}

impl SpotifyClient {
    /// Get a page of the artists the current user follows.
    ///
    /// Continue with `CursorOptions::new().after(page.after()...)` until
    /// [`CursorPage::after`] returns `None`.
    pub fn current_user_followed_artists(
        &self,
        options: &CursorOptions,
    ) -> Result<CursorPage<FullArtist>> {
        let mut query = vec![("type", FollowKind::Artist.as_str().to_owned())];
        query.extend(options.query());
        let resp: FollowedArtists = self.get("/me/following", &query)?;
        Ok(resp.artists)
    }

    /// Check whether the current user follows each of `ids`.
    ///
    /// The result has one entry per ID, in the same order as `ids`. An empty
    /// `ids` yields an empty result without contacting the service.
    ///
    /// # Errors
    ///
    /// - [`SpotifyError::InvalidArgument`] — more than [`MAX_IDS`] IDs
    /// - [`SpotifyError::UnexpectedResponse`] — the service answered with a
    ///   different number of entries than requested
    pub fn current_user_follows<S: AsRef<str>>(
        &self,
        kind: FollowKind,
        ids: &[S],
    ) -> Result<Vec<bool>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        check_ids(ids)?;
        let query = vec![("type", kind.as_str().to_owned()), ("ids", join_ids(ids))];
        let follows: Vec<bool> = self.get("/me/following/contains", &query)?;
        if follows.len() != ids.len() {
            return Err(SpotifyError::UnexpectedResponse(format!(
                "asked about {} ids, got {} answers",
                ids.len(),
                follows.len()
            )));
        }
        Ok(follows)
    }

    /// Add the current user as a follower of artists or users.
    ///
    /// # Errors
    ///
    /// - [`SpotifyError::Api`] with status 403 — token lacks
    ///   `user-follow-modify`
    /// - [`SpotifyError::InvalidArgument`] — more than [`MAX_IDS`] IDs
    pub fn follow<S: AsRef<str>>(&self, kind: FollowKind, ids: &[S]) -> Result<()> {
        self.modify_follow(Method::PUT, kind, ids)
    }

    /// Remove the current user as a follower of artists or users.
    pub fn unfollow<S: AsRef<str>>(&self, kind: FollowKind, ids: &[S]) -> Result<()> {
        self.modify_follow(Method::DELETE, kind, ids)
    }

    /// Shorthand for [`follow`](Self::follow) with [`FollowKind::Artist`].
    pub fn follow_artists<S: AsRef<str>>(&self, ids: &[S]) -> Result<()> {
        self.follow(FollowKind::Artist, ids)
    }

    /// Shorthand for [`follow`](Self::follow) with [`FollowKind::User`].
    pub fn follow_users<S: AsRef<str>>(&self, ids: &[S]) -> Result<()> {
        self.follow(FollowKind::User, ids)
    }

    /// Shorthand for [`unfollow`](Self::unfollow) with [`FollowKind::Artist`].
    pub fn unfollow_artists<S: AsRef<str>>(&self, ids: &[S]) -> Result<()> {
        self.unfollow(FollowKind::Artist, ids)
    }

    /// Shorthand for [`unfollow`](Self::unfollow) with [`FollowKind::User`].
    pub fn unfollow_users<S: AsRef<str>>(&self, ids: &[S]) -> Result<()> {
        self.unfollow(FollowKind::User, ids)
    }

    fn modify_follow<S: AsRef<str>>(
        &self,
        method: Method,
        kind: FollowKind,
        ids: &[S],
    ) -> Result<()> {
        if ids.is_empty() {
            return Ok(());
        }
        check_ids(ids)?;
        let ids: Vec<&str> = ids.iter().map(AsRef::as_ref).collect();
        let query = vec![("type", kind.as_str().to_owned())];
        self.execute(method, "/me/following", &query, Some(&json!({ "ids": ids })))
    }
}

fn check_ids<S: AsRef<str>>(ids: &[S]) -> Result<()> {
    if ids.len() > MAX_IDS {
        return Err(SpotifyError::InvalidArgument(format!(
            "at most {MAX_IDS} ids per request, got {}",
            ids.len()
        )));
    }
    Ok(())
}

fn join_ids<S: AsRef<str>>(ids: &[S]) -> String {
    ids.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::serve;

    const FOLLOWED_ARTISTS: &str = r#"{
      "artists" : {
        "items" : [ {
          "external_urls" : { "spotify" : "https://open.spotify.com/artist/0I2XqVXqHScXjHhk6AYYRe" },
          "followers" : { "href" : null, "total" : 7753 },
          "genres" : [ "swedish hip hop" ],
          "href" : "https://api.spotify.com/v1/artists/0I2XqVXqHScXjHhk6AYYRe",
          "id" : "0I2XqVXqHScXjHhk6AYYRe",
          "images" : [ {
            "height" : 640,
            "url" : "https://i.scdn.co/image/2c8c0cea05bf3d3c070b7498d8d0b957c4cdec20",
            "width" : 640
          }, {
            "height" : 300,
            "url" : "https://i.scdn.co/image/394302b42c4b894786943e028cdd46d7baaa29b7",
            "width" : 300
          }, {
            "height" : 64,
            "url" : "https://i.scdn.co/image/ca9df7225ade6e5dfc62e7076709ca3409a7cbbf",
            "width" : 64
          } ],
          "name" : "Afasi & Filthy",
          "popularity" : 54,
          "type" : "artist",
          "uri" : "spotify:artist:0I2XqVXqHScXjHhk6AYYRe"
        } ],
        "next" : "https://api.spotify.com/v1/users/thelinmichael/following?type=artist&after=0aV6DOiouImYTqrR5YlIqx&limit=20",
        "total" : 183,
        "cursors" : { "after" : "0aV6DOiouImYTqrR5YlIqx" },
        "limit" : 20,
        "href" : "https://api.spotify.com/v1/users/thelinmichael/following?type=artist&limit=20"
      }
    }"#;

    #[test]
    fn followed_artists() {
        let (client, requests) = serve(200, FOLLOWED_ARTISTS);
        let page = client
            .current_user_followed_artists(&CursorOptions::default())
            .unwrap();

        assert_eq!(page.limit, 20);
        assert_eq!(page.total, Some(183));
        assert_eq!(page.after(), Some("0aV6DOiouImYTqrR5YlIqx"));
        assert_eq!(page.items.len(), 1);

        let artist = &page.items[0];
        assert_eq!(artist.name, "Afasi & Filthy");
        assert_eq!(artist.popularity, 54);
        assert_eq!(artist.genres, ["swedish hip hop"]);
        assert_eq!(artist.followers.total, 7753);
        assert_eq!(artist.images.len(), 3);

        assert_eq!(requests.recv().unwrap().url, "/v1/me/following?type=artist");
    }

    #[test]
    fn followed_artists_with_cursor() {
        let (client, requests) = serve(200, FOLLOWED_ARTISTS);
        let options = CursorOptions::new().limit(10).after("0aV6DOiouImYTqrR5YlIqx");
        client.current_user_followed_artists(&options).unwrap();
        assert_eq!(
            requests.recv().unwrap().url,
            "/v1/me/following?type=artist&limit=10&after=0aV6DOiouImYTqrR5YlIqx"
        );
    }

    #[test]
    fn user_follows_keeps_order() {
        let (client, requests) = serve(200, "[ false, true ]");
        let follows = client
            .current_user_follows(
                FollowKind::Artist,
                &["74ASZWbe4lXaubB36ztrGX", "08td7MxkoHQkXnWAYD8d6Q"],
            )
            .unwrap();
        assert_eq!(follows, [false, true]);

        let req = requests.recv().unwrap();
        assert_eq!(req.method, "GET");
        assert_eq!(
            req.url,
            "/v1/me/following/contains?type=artist&ids=74ASZWbe4lXaubB36ztrGX%2C08td7MxkoHQkXnWAYD8d6Q"
        );
    }

    #[test]
    fn user_follows_length_mismatch() {
        let (client, _requests) = serve(200, "[ true ]");
        let err = client
            .current_user_follows(FollowKind::User, &["a", "b"])
            .unwrap_err();
        assert!(matches!(err, SpotifyError::UnexpectedResponse(_)));
    }

    #[test]
    fn user_follows_no_ids() {
        let client = SpotifyClient::with_token("unused").unwrap();
        let none: [&str; 0] = [];
        assert!(client.current_user_follows(FollowKind::User, &none).unwrap().is_empty());
    }

    #[test]
    fn too_many_ids() {
        let client = SpotifyClient::with_token("unused").unwrap();
        let ids = vec!["x"; MAX_IDS + 1];
        assert!(matches!(
            client.follow_artists(&ids),
            Err(SpotifyError::InvalidArgument(_))
        ));
        assert!(matches!(
            client.current_user_follows(FollowKind::Artist, &ids),
            Err(SpotifyError::InvalidArgument(_))
        ));
    }

    #[test]
    fn follow_sends_put() {
        let (client, requests) = serve(204, "");
        client.follow_users(&["exampleuser01", "exampleuser02"]).unwrap();

        let req = requests.recv().unwrap();
        assert_eq!(req.method, "PUT");
        assert_eq!(req.url, "/v1/me/following?type=user");
        assert_eq!(req.authorization.as_deref(), Some("Bearer test-token"));
        let body: serde_json::Value = serde_json::from_str(&req.body).unwrap();
        assert_eq!(body, json!({ "ids": ["exampleuser01", "exampleuser02"] }));
    }

    #[test]
    fn follow_accepts_empty_200() {
        let (client, requests) = serve(200, "");
        client.follow_artists(&["0I2XqVXqHScXjHhk6AYYRe"]).unwrap();
        assert_eq!(requests.recv().unwrap().method, "PUT");
    }

    #[test]
    fn unfollow_sends_delete() {
        let (client, requests) = serve(204, "");
        client.unfollow_artists(&[String::from("0I2XqVXqHScXjHhk6AYYRe")]).unwrap();

        let req = requests.recv().unwrap();
        assert_eq!(req.method, "DELETE");
        assert_eq!(req.url, "/v1/me/following?type=artist");
    }

    #[test]
    fn follow_users_missing_scope() {
        let (client, _requests) = serve(
            403,
            r#"{ "error": { "status": 403, "message": "Insufficient client scope" } }"#,
        );
        match client.follow_users(&["exampleuser01"]) {
            Err(SpotifyError::Api { status, message }) => {
                assert_eq!(status, 403);
                assert_eq!(message, "Insufficient client scope");
            }
            other => panic!("expected insufficient client scope error, got {other:?}"),
        }
    }

    #[test]
    fn follow_users_invalid_token() {
        let (client, _requests) = serve(
            401,
            r#"{ "error": { "status": 401, "message": "Invalid access token" } }"#,
        );
        let err = client.follow_users(&["dummyID"]).unwrap_err();
        assert!(err.is_service_error());
        assert_eq!(err.status(), Some(401));
    }
}
