//! # yinfo-bridge
//!
//! This crate provides resilient, best effort access to the raw json documents returned by
//! YouTube's hidden Innertube api. It does no networking; hand it the text your http client
//! fetched and read the metadata you need.
//!
//! The api is undocumented and its responses change shape without notice, so every accessor
//! here is forgiving: anything missing or typed unexpectedly yields `None` (or an empty slice)
//! rather than an error. Only a document that is not json at all is reported as an [`Error`].
//!
//! ## Basic Usage
//!
//! Parse the document once, then wrap it in the extractor for the endpoint that produced it.
//! Extractors borrow the document and cache each accessor on first use.
//!
//! ```no_run
//! # use yinfo_bridge::{json, PlayerResponse, Error};
//! # fn run(raw: &str) -> Result<(), Error> {
//! let document = json::parse(raw)?;
//! let player = PlayerResponse::new(&document);
//!
//! if player.is_playable() {
//!     println!("{:?} by {:?}", player.title(), player.author());
//!     for stream in player.streams() {
//!         println!("{:?} {:?}", stream.itag(), stream.url());
//!     }
//! } else {
//!     println!("unplayable: {:?}", player.playability_error());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Embedded Responses
//!
//! Watch pages embed the player response inside a script tag. Cut it out first with
//! [`json::extract_after`]:
//!
//! ```no_run
//! # use yinfo_bridge::{json, PlayerResponse};
//! # fn run(html: &str) {
//! let document = json::extract_after(html, "ytInitialPlayerResponse = ")
//!     .and_then(json::try_parse);
//! if let Some(document) = &document {
//!     let player = PlayerResponse::new(document);
//!     println!("{:?}", player.preview_video_id());
//! }
//! # }
//! ```
//!
//! ## Playlists
//!
//! Playlists come from either the `browse` or the `next` endpoint, which answer with very
//! different documents. Both are read through the [`PlaylistData`] trait.
//!
//! ```no_run
//! # use yinfo_bridge::{json, Playlist, PlaylistBrowseResponse, PlaylistData, PlaylistNextResponse};
//! # fn run(raw: &str, from_browse: bool) -> Result<(), yinfo_bridge::Error> {
//! let document = json::parse(raw)?;
//! let playlist: Playlist<'_> = if from_browse {
//!     PlaylistBrowseResponse::new(&document).into()
//! } else {
//!     PlaylistNextResponse::new(&document).into()
//! };
//! println!("{:?} ({} thumbnails)", playlist.title(), playlist.thumbnails().len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Threads
//!
//! Extractors cache through single threaded cells and are therefore not `Sync`. Parsed
//! documents are, so share the [`serde_json::Value`] and build an extractor per thread.
pub mod captions;
pub mod errors;
pub mod json;
pub mod memo;
pub mod mime;
pub mod node;
pub mod player;
pub mod playlist;
pub mod playlist_browse;
pub mod playlist_next;
pub mod playlist_video;
pub mod streams;
pub mod thumbnail;
mod utils;

pub use {
    captions::CaptionTrack,
    errors::Error,
    memo::Memo,
    mime::{Acodec, Format, Mime, Vcodec},
    node::Node,
    player::PlayerResponse,
    playlist::{Playlist, PlaylistData},
    playlist_browse::PlaylistBrowseResponse,
    playlist_next::PlaylistNextResponse,
    playlist_video::PlaylistVideo,
    streams::StreamData,
    thumbnail::Thumbnail,
};
