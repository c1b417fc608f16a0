use serde_json::Value;

use crate::{memo::Memo, node::Node, playlist::PlaylistData, thumbnail::Thumbnail};

/// Playlist as described by the sidebar of the `browse` endpoint's listing page.
///
/// The sidebar holds a primary block with title, description and artwork, followed by a
/// secondary block naming the owner.
#[derive(Debug)]
pub struct PlaylistBrowseResponse<'a> {
    content: &'a Value,
    sidebar: Memo<Option<&'a Value>>,
    sidebar_primary: Memo<Option<&'a Value>>,
    sidebar_secondary: Memo<Option<&'a Value>>,
    author_details: Memo<Option<&'a Value>>,
    title: Memo<Option<String>>,
    author: Memo<Option<String>>,
    channel_id: Memo<Option<&'a str>>,
    description: Memo<Option<String>>,
    thumbnails: Memo<Vec<Thumbnail<'a>>>,
}

impl<'a> PlaylistBrowseResponse<'a> {
    pub fn new(content: &'a Value) -> Self {
        PlaylistBrowseResponse {
            content,
            sidebar: Memo::new(),
            sidebar_primary: Memo::new(),
            sidebar_secondary: Memo::new(),
            author_details: Memo::new(),
            title: Memo::new(),
            author: Memo::new(),
            channel_id: Memo::new(),
            description: Memo::new(),
            thumbnails: Memo::new(),
        }
    }

    fn sidebar(&self) -> Option<&'a Value> {
        *self.sidebar.get_or_compute(|| {
            self.content
                .property("sidebar")
                .property("playlistSidebarRenderer")
                .property("items")
        })
    }

    fn sidebar_primary(&self) -> Option<&'a Value> {
        *self.sidebar_primary.get_or_compute(|| {
            self.sidebar()
                .element_at(0)
                .property("playlistSidebarPrimaryInfoRenderer")
        })
    }

    fn sidebar_secondary(&self) -> Option<&'a Value> {
        *self.sidebar_secondary.get_or_compute(|| {
            self.sidebar()
                .element_at(1)
                .property("playlistSidebarSecondaryInfoRenderer")
        })
    }

    fn author_details(&self) -> Option<&'a Value> {
        *self.author_details.get_or_compute(|| {
            self.sidebar_secondary()
                .property("videoOwner")
                .property("videoOwnerRenderer")
        })
    }
}

impl<'a> PlaylistData<'a> for PlaylistBrowseResponse<'a> {
    fn is_available(&self) -> bool {
        self.sidebar().is_some()
    }

    fn title(&self) -> Option<&str> {
        self.title
            .get_or_compute(|| self.sidebar_primary().property("title").rich_text())
            .as_deref()
    }

    fn author(&self) -> Option<&str> {
        self.author
            .get_or_compute(|| self.author_details().property("title").rich_text())
            .as_deref()
    }

    fn channel_id(&self) -> Option<&str> {
        *self.channel_id.get_or_compute(|| {
            self.author_details()
                .property("navigationEndpoint")
                .property("browseEndpoint")
                .property("browseId")
                .string()
        })
    }

    fn description(&self) -> Option<&str> {
        self.description
            .get_or_compute(|| self.sidebar_primary().property("description").rich_text())
            .as_deref()
    }

    fn thumbnails(&self) -> &[Thumbnail<'a>] {
        self.thumbnails.get_or_compute(|| {
            let renderer = self.sidebar_primary().property("thumbnailRenderer");
            let shaped = |shape: &str| {
                renderer
                    .property(shape)
                    .property("thumbnail")
                    .property("thumbnails")
            };

            Thumbnail::list(shaped("playlistVideoThumbnailRenderer"))
                .or_else(|| Thumbnail::list(shaped("playlistCustomThumbnailRenderer")))
                .unwrap_or_default()
        })
    }
}
