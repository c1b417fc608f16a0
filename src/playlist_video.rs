use std::time::Duration;

use serde_json::Value;

use crate::{
    memo::Memo,
    node::Node,
    thumbnail::Thumbnail,
    utils::{parse_clock, parse_seconds},
};

/// A `playlistPanelVideoRenderer` (watch page) or `playlistVideoRenderer` (listing page).
#[derive(Debug)]
pub struct PlaylistVideo<'a> {
    content: &'a Value,
    index: Memo<Option<i32>>,
    id: Memo<Option<&'a str>>,
    title: Memo<Option<String>>,
    author_details: Memo<Option<&'a Value>>,
    author: Memo<Option<String>>,
    channel_id: Memo<Option<&'a str>>,
    duration: Memo<Option<Duration>>,
    thumbnails: Memo<Vec<Thumbnail<'a>>>,
}

impl<'a> PlaylistVideo<'a> {
    pub fn new(content: &'a Value) -> Self {
        PlaylistVideo {
            content,
            index: Memo::new(),
            id: Memo::new(),
            title: Memo::new(),
            author_details: Memo::new(),
            author: Memo::new(),
            channel_id: Memo::new(),
            duration: Memo::new(),
            thumbnails: Memo::new(),
        }
    }

    /// Zero based position inside the playlist.
    pub fn index(&self) -> Option<i32> {
        *self.index.get_or_compute(|| {
            self.content
                .property("navigationEndpoint")
                .property("watchEndpoint")
                .property("index")
                .int32()
        })
    }

    pub fn id(&self) -> Option<&'a str> {
        *self
            .id
            .get_or_compute(|| self.content.property("videoId").string())
    }

    pub fn title(&self) -> Option<&str> {
        self.title
            .get_or_compute(|| self.content.property("title").rich_text())
            .as_deref()
    }

    fn author_details(&self) -> Option<&'a Value> {
        *self.author_details.get_or_compute(|| {
            self.content
                .property("longBylineText")
                .or_else(|| self.content.property("shortBylineText"))
        })
    }

    pub fn author(&self) -> Option<&str> {
        self.author
            .get_or_compute(|| self.author_details().rich_text())
            .as_deref()
    }

    pub fn channel_id(&self) -> Option<&'a str> {
        *self.channel_id.get_or_compute(|| {
            self.author_details()
                .property("runs")
                .elements_or_empty()
                .find_map(|run| {
                    run.property("navigationEndpoint")
                        .property("browseEndpoint")
                        .property("browseId")
                        .string()
                })
        })
    }

    /// Taken from `lengthSeconds`, falling back to the displayed `lengthText` clock.
    pub fn duration(&self) -> Option<Duration> {
        *self.duration.get_or_compute(|| {
            self.content
                .property("lengthSeconds")
                .string()
                .and_then(parse_seconds)
                .or_else(|| {
                    self.content
                        .property("lengthText")
                        .property("simpleText")
                        .string()
                        .and_then(parse_clock)
                })
        })
    }

    pub fn thumbnails(&self) -> &[Thumbnail<'a>] {
        self.thumbnails.get_or_compute(|| {
            Thumbnail::list(self.content.property("thumbnail").property("thumbnails"))
                .unwrap_or_default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn panel_video() {
        let raw = json!({
            "videoId": "dQw4w9WgXcQ",
            "title": { "simpleText": "Never Gonna Give You Up" },
            "longBylineText": {
                "runs": [{
                    "text": "Rick Astley",
                    "navigationEndpoint": { "browseEndpoint": { "browseId": "UCuAXFkgsw1L7xaCfnd5JJOw" } }
                }]
            },
            "lengthText": { "simpleText": "3:33" },
            "navigationEndpoint": { "watchEndpoint": { "index": 4 } },
            "thumbnail": { "thumbnails": [{ "url": "a", "width": 1, "height": 1 }] }
        });
        let video = PlaylistVideo::new(&raw);
        assert_eq!(video.id(), Some("dQw4w9WgXcQ"));
        assert_eq!(video.title(), Some("Never Gonna Give You Up"));
        assert_eq!(video.author(), Some("Rick Astley"));
        assert_eq!(video.channel_id(), Some("UCuAXFkgsw1L7xaCfnd5JJOw"));
        assert_eq!(video.duration(), Some(Duration::from_secs(213)));
        assert_eq!(video.index(), Some(4));
        assert_eq!(video.thumbnails().len(), 1);
    }

    #[test]
    fn short_byline_and_seconds() {
        let raw = json!({
            "shortBylineText": { "runs": [{ "text": "Someone" }] },
            "lengthSeconds": "61"
        });
        let video = PlaylistVideo::new(&raw);
        assert_eq!(video.author(), Some("Someone"));
        assert_eq!(video.channel_id(), None);
        assert_eq!(video.duration(), Some(Duration::from_secs(61)));
        assert!(video.thumbnails().is_empty());
        assert_eq!(video.title(), None);
    }
}
