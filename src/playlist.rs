//! Playlist metadata, which reaches us through two unrelated endpoints.
//!
//! The `browse` endpoint answers with the playlist listing page and the `next` endpoint with
//! a watch session that has the playlist open in its side panel. Both shapes are read
//! through [`PlaylistData`], so callers can pick the variant by the endpoint that answered
//! and treat the result the same way afterwards.
use crate::{
    playlist_browse::PlaylistBrowseResponse, playlist_next::PlaylistNextResponse,
    playlist_video::PlaylistVideo, thumbnail::Thumbnail,
};

/// Metadata every playlist response can be asked for.
pub trait PlaylistData<'a> {
    /// Whether the response describes a playlist at all.
    fn is_available(&self) -> bool;

    fn title(&self) -> Option<&str>;

    fn author(&self) -> Option<&str>;

    fn channel_id(&self) -> Option<&str>;

    fn description(&self) -> Option<&str>;

    fn thumbnails(&self) -> &[Thumbnail<'a>];
}

/// Either playlist response, for callers that need to hold one without knowing which.
#[derive(Debug)]
pub enum Playlist<'a> {
    Browse(PlaylistBrowseResponse<'a>),
    Next(PlaylistNextResponse<'a>),
}

impl<'a> Playlist<'a> {
    fn inner(&self) -> &dyn PlaylistData<'a> {
        match self {
            Playlist::Browse(browse) => browse,
            Playlist::Next(next) => next,
        }
    }

    /// Videos of the playlist; only watch sessions list them.
    pub fn videos(&self) -> &[PlaylistVideo<'a>] {
        match self {
            Playlist::Browse(_) => &[],
            Playlist::Next(next) => next.videos(),
        }
    }

    pub fn visitor_data(&self) -> Option<&'a str> {
        match self {
            Playlist::Browse(_) => None,
            Playlist::Next(next) => next.visitor_data(),
        }
    }
}

impl<'a> PlaylistData<'a> for Playlist<'a> {
    fn is_available(&self) -> bool {
        self.inner().is_available()
    }

    fn title(&self) -> Option<&str> {
        self.inner().title()
    }

    fn author(&self) -> Option<&str> {
        self.inner().author()
    }

    fn channel_id(&self) -> Option<&str> {
        self.inner().channel_id()
    }

    fn description(&self) -> Option<&str> {
        self.inner().description()
    }

    fn thumbnails(&self) -> &[Thumbnail<'a>] {
        self.inner().thumbnails()
    }
}

impl<'a> From<PlaylistBrowseResponse<'a>> for Playlist<'a> {
    fn from(browse: PlaylistBrowseResponse<'a>) -> Self {
        Playlist::Browse(browse)
    }
}

impl<'a> From<PlaylistNextResponse<'a>> for Playlist<'a> {
    fn from(next: PlaylistNextResponse<'a>) -> Self {
        Playlist::Next(next)
    }
}
