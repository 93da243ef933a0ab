use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use spotify_api::auth::Session;
use spotify_api::types::{FullArtist, FullTrack};
use spotify_api::{CursorOptions, FollowKind, PageOptions, SpotifyClient};

#[derive(Parser)]
#[command(name = "spotify", version, about = "Spotify Web API command line client")]
struct Cli {
    /// Print the raw JSON result instead of a summary
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Save an access token
    Login {
        /// OAuth bearer access token
        #[arg(required_unless_present = "check")]
        token: Option<String>,
        /// Check current login status
        #[arg(long)]
        check: bool,
    },
    /// Clear saved session
    Logout,
    /// Show current user profile
    Me,
    /// Show a user's public profile
    User {
        /// Spotify user ID
        user_id: String,
    },
    /// List saved tracks
    Tracks {
        /// Page size (service default when omitted)
        #[arg(short, long)]
        limit: Option<u32>,
        /// Index of the first track
        #[arg(short, long)]
        offset: Option<u32>,
        /// Country code for track relinking
        #[arg(short, long)]
        market: Option<String>,
    },
    /// List followed artists
    Artists {
        /// Page size (service default when omitted)
        #[arg(short, long)]
        limit: Option<u32>,
        /// Cursor returned by the previous page
        #[arg(short, long)]
        after: Option<String>,
    },
    /// Check whether you follow the given artists or users
    Follows {
        kind: KindArg,
        #[arg(required = true)]
        ids: Vec<String>,
    },
    /// Follow artists or users
    Follow {
        kind: KindArg,
        #[arg(required = true)]
        ids: Vec<String>,
    },
    /// Unfollow artists or users
    Unfollow {
        kind: KindArg,
        #[arg(required = true)]
        ids: Vec<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum KindArg {
    Artist,
    User,
}

impl From<KindArg> for FollowKind {
    fn from(k: KindArg) -> Self {
        match k {
            KindArg::Artist => Self::Artist,
            KindArg::User => Self::User,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let json = cli.json;
    match cli.command {
        Command::Login { token, check } => cmd_login(token, check),
        Command::Logout => cmd_logout(),
        Command::Me => cmd_me(json),
        Command::User { user_id } => cmd_user(&user_id, json),
        Command::Tracks {
            limit,
            offset,
            market,
        } => cmd_tracks(
            &PageOptions {
                limit,
                offset,
                market,
            },
            json,
        ),
        Command::Artists { limit, after } => cmd_artists(&CursorOptions { limit, after }, json),
        Command::Follows { kind, ids } => cmd_follows(kind.into(), &ids, json),
        Command::Follow { kind, ids } => cmd_follow(kind.into(), &ids, true),
        Command::Unfollow { kind, ids } => cmd_follow(kind.into(), &ids, false),
    }
}

fn client() -> Result<SpotifyClient> {
    SpotifyClient::new().context("no access token; run `spotify login <token>` or set SPOTIFY_ACCESS_TOKEN")
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

// ── login / logout ──

fn cmd_login(token: Option<String>, check: bool) -> Result<()> {
    if check {
        let session = Session::load()?;
        if let Some(token) = session.token() {
            let client = SpotifyClient::with_token(token)?;
            match client.current_user() {
                Ok(me) => println!("Logged in as: {} (id={})", display_name(&me.user), me.user.id),
                Err(e) => println!("Session exists but validation failed: {e}"),
            }
        } else {
            println!("Not logged in.");
        }
        return Ok(());
    }

    let token = token.context("access token required")?;
    let session = Session {
        access_token: Some(token),
    };
    session.save()?;
    println!("Session saved.");
    Ok(())
}

fn cmd_logout() -> Result<()> {
    Session::clear()?;
    println!("Session cleared.");
    Ok(())
}

// ── profiles ──

fn display_name(user: &spotify_api::types::User) -> &str {
    user.display_name.as_deref().unwrap_or(&user.id)
}

fn cmd_me(json: bool) -> Result<()> {
    let me = client()?.current_user()?;
    if json {
        return print_json(&me);
    }
    print_user(&me.user);
    if let Some(email) = &me.email {
        println!("Email:     {email}");
    }
    if let Some(country) = &me.country {
        println!("Country:   {country}");
    }
    if let Some(product) = &me.product {
        println!("Product:   {product}");
    }
    Ok(())
}

fn cmd_user(user_id: &str, json: bool) -> Result<()> {
    let user = client()?.user_public_profile(user_id)?;
    if json {
        return print_json(&user);
    }
    print_user(&user);
    Ok(())
}

fn print_user(user: &spotify_api::types::User) {
    println!("User:      {} (id={})", display_name(user), user.id);
    println!("URI:       {}", user.uri);
    if let Some(followers) = &user.followers {
        println!("Followers: {}", followers.total);
    }
    if let Some(image) = user.images.first() {
        println!("Avatar:    {}", image.url);
    }
}

// ── library ──

fn cmd_tracks(options: &PageOptions, json: bool) -> Result<()> {
    let page = client()?.current_user_saved_tracks(options)?;
    if json {
        return print_json(&page);
    }
    println!(
        "Saved tracks: {} from offset {} of {}\n",
        page.items.len(),
        page.offset,
        page.total
    );
    for saved in &page.items {
        println!(
            "  {} {} ({})",
            saved.added_at.format("%Y-%m-%d"),
            track_line(&saved.track),
            saved.track.album.name,
        );
    }
    if let Some(next) = &page.next {
        println!("\nNext: {next}");
    }
    Ok(())
}

fn track_line(t: &FullTrack) -> String {
    let artists: Vec<&str> = t.artists.iter().map(|a| a.name.as_str()).collect();
    format!(
        "[{}] {} - {}",
        t.id.as_deref().unwrap_or("local"),
        artists.join(", "),
        t.name
    )
}

// ── follow ──

fn cmd_artists(options: &CursorOptions, json: bool) -> Result<()> {
    let page = client()?.current_user_followed_artists(options)?;
    if json {
        return print_json(&page);
    }
    if let Some(total) = page.total {
        println!("Following {total} artists\n");
    }
    for a in &page.items {
        println!("  {}", artist_line(a));
    }
    if let Some(after) = page.after() {
        println!("\nMore: spotify artists --after {after}");
    }
    Ok(())
}

fn artist_line(a: &FullArtist) -> String {
    format!(
        "[{}] {} ({} followers, popularity {})",
        a.id, a.name, a.followers.total, a.popularity
    )
}

fn cmd_follows(kind: FollowKind, ids: &[String], json: bool) -> Result<()> {
    let follows = client()?.current_user_follows(kind, ids)?;
    if json {
        return print_json(&follows);
    }
    for (id, yes) in ids.iter().zip(&follows) {
        println!("  {kind} {id}: {}", if *yes { "following" } else { "not following" });
    }
    Ok(())
}

fn cmd_follow(kind: FollowKind, ids: &[String], follow: bool) -> Result<()> {
    let client = client()?;
    if follow {
        client.follow(kind, ids)?;
        println!("Followed {} {kind}(s).", ids.len());
    } else {
        client.unfollow(kind, ids)?;
        println!("Unfollowed {} {kind}(s).", ids.len());
    }
    Ok(())
}
