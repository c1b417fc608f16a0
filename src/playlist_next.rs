use serde_json::Value;

use crate::{
    memo::Memo, node::Node, playlist::PlaylistData, playlist_video::PlaylistVideo,
    thumbnail::Thumbnail,
};

/// Playlist as seen from a watch session opened through the `next` endpoint.
///
/// This shape never carries the owner's channel id nor a description, so both are always
/// `None`. In exchange it lists the videos and hands out the session's visitor data,
/// which is needed to page through the rest of the playlist.
#[derive(Debug)]
pub struct PlaylistNextResponse<'a> {
    content: &'a Value,
    content_root: Memo<Option<&'a Value>>,
    title: Memo<Option<&'a str>>,
    author: Memo<Option<&'a str>>,
    videos: Memo<Vec<PlaylistVideo<'a>>>,
    visitor_data: Memo<Option<&'a str>>,
}

impl<'a> PlaylistNextResponse<'a> {
    pub fn new(content: &'a Value) -> Self {
        PlaylistNextResponse {
            content,
            content_root: Memo::new(),
            title: Memo::new(),
            author: Memo::new(),
            videos: Memo::new(),
            visitor_data: Memo::new(),
        }
    }

    fn content_root(&self) -> Option<&'a Value> {
        *self.content_root.get_or_compute(|| {
            self.content
                .property("contents")
                .property("twoColumnWatchNextResults")
                .property("playlist")
                .property("playlist")
        })
    }

    /// Videos in playlist order.
    pub fn videos(&self) -> &[PlaylistVideo<'a>] {
        self.videos.get_or_compute(|| {
            self.content_root()
                .property("contents")
                .elements_or_empty()
                .filter_map(|item| item.property("playlistPanelVideoRenderer"))
                .map(PlaylistVideo::new)
                .collect()
        })
    }

    pub fn visitor_data(&self) -> Option<&'a str> {
        *self.visitor_data.get_or_compute(|| {
            self.content
                .property("responseContext")
                .property("visitorData")
                .string()
        })
    }
}

impl<'a> PlaylistData<'a> for PlaylistNextResponse<'a> {
    fn is_available(&self) -> bool {
        self.content_root().is_some()
    }

    fn title(&self) -> Option<&str> {
        *self
            .title
            .get_or_compute(|| self.content_root().property("title").string())
    }

    fn author(&self) -> Option<&str> {
        *self.author.get_or_compute(|| {
            self.content_root()
                .property("ownerName")
                .property("simpleText")
                .string()
        })
    }

    fn channel_id(&self) -> Option<&str> {
        None
    }

    fn description(&self) -> Option<&str> {
        None
    }

    /// Artwork of the first video.
    fn thumbnails(&self) -> &[Thumbnail<'a>] {
        self.videos()
            .first()
            .map(PlaylistVideo::thumbnails)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reads_watch_panel() {
        let raw = json!({
            "responseContext": { "visitorData": "CgtWaXNpdG9y" },
            "contents": { "twoColumnWatchNextResults": { "playlist": { "playlist": {
                "title": "Late night",
                "ownerName": { "simpleText": "Lofi Girl" },
                "description": "ignored",
                "contents": [
                    { "playlistPanelVideoRenderer": { "videoId": "first000000",
                        "thumbnail": { "thumbnails": [{ "url": "one" }] } } },
                    { "automixPreviewVideoRenderer": {} },
                    { "playlistPanelVideoRenderer": { "videoId": "second00000" } }
                ]
            }}}}
        });
        let playlist = PlaylistNextResponse::new(&raw);
        assert!(playlist.is_available());
        assert_eq!(playlist.title(), Some("Late night"));
        assert_eq!(playlist.author(), Some("Lofi Girl"));
        assert_eq!(playlist.description(), None);
        assert_eq!(playlist.channel_id(), None);
        assert_eq!(playlist.visitor_data(), Some("CgtWaXNpdG9y"));

        let ids: Vec<_> = playlist.videos().iter().filter_map(PlaylistVideo::id).collect();
        assert_eq!(ids, vec!["first000000", "second00000"]);
        assert_eq!(playlist.thumbnails()[0].url(), Some("one"));
    }

    #[test]
    fn no_videos_means_no_thumbnails() {
        let raw = json!({ "contents": { "twoColumnWatchNextResults": { "playlist": { "playlist": {
            "title": "Empty"
        }}}}});
        let playlist = PlaylistNextResponse::new(&raw);
        assert!(playlist.is_available());
        assert!(playlist.videos().is_empty());
        assert!(playlist.thumbnails().is_empty());
        assert_eq!(playlist.visitor_data(), None);
    }

    #[test]
    fn other_responses_are_unavailable() {
        let raw = json!({ "contents": { "twoColumnWatchNextResults": { "results": {} } } });
        let playlist = PlaylistNextResponse::new(&raw);
        assert!(!playlist.is_available());
        assert_eq!(playlist.author(), None);
    }
}
