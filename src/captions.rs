use serde_json::Value;

use crate::{memo::Memo, node::Node};

/// One entry of `captions.playerCaptionsTracklistRenderer.captionTracks`.
#[derive(Debug)]
pub struct CaptionTrack<'a> {
    content: &'a Value,
    language_name: Memo<Option<String>>,
    is_auto_generated: Memo<bool>,
}

impl<'a> CaptionTrack<'a> {
    pub fn new(content: &'a Value) -> Self {
        CaptionTrack {
            content,
            language_name: Memo::new(),
            is_auto_generated: Memo::new(),
        }
    }

    pub fn url(&self) -> Option<&'a str> {
        self.content.property("baseUrl").string()
    }

    pub fn language_code(&self) -> Option<&'a str> {
        self.content.property("languageCode").string()
    }

    pub fn language_name(&self) -> Option<&str> {
        self.language_name
            .get_or_compute(|| self.content.property("name").rich_text())
            .as_deref()
    }

    /// Speech recognised tracks have a `vssId` of the form `a.en`.
    pub fn is_auto_generated(&self) -> bool {
        *self.is_auto_generated.get_or_compute(|| {
            self.content
                .property("vssId")
                .string()
                .and_then(|id| id.get(..2))
                .is_some_and(|prefix| prefix.eq_ignore_ascii_case("a."))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn manual_track() {
        let raw = json!({
            "baseUrl": "https://www.youtube.com/api/timedtext?v=x&lang=en",
            "name": { "runs": [{ "text": "English" }] },
            "vssId": ".en",
            "languageCode": "en"
        });
        let track = CaptionTrack::new(&raw);
        assert_eq!(track.url(), Some("https://www.youtube.com/api/timedtext?v=x&lang=en"));
        assert_eq!(track.language_code(), Some("en"));
        assert_eq!(track.language_name(), Some("English"));
        assert!(!track.is_auto_generated());
    }

    #[test]
    fn generated_track() {
        let raw = json!({
            "name": { "simpleText": "English (auto-generated)" },
            "vssId": "A.en"
        });
        let track = CaptionTrack::new(&raw);
        assert!(track.is_auto_generated());
        assert_eq!(track.language_name(), Some("English (auto-generated)"));
        assert_eq!(track.url(), None);
    }
}
