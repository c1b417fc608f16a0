use std::time::Duration;

use base64::{
    alphabet,
    engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
    Engine,
};
use chrono::{DateTime, FixedOffset};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use tracing::trace;
use url::form_urlencoded::parse;

use crate::{
    captions::CaptionTrack, memo::Memo, node::Node, streams::StreamData, thumbnail::Thumbnail,
    utils::parse_seconds,
};

/// Accessors over the response of the `player` endpoint.
///
/// Every accessor is computed on first use and cached for the lifetime of the extractor.
/// Anything missing or shaped unexpectedly along the way comes back as `None` (or an empty
/// slice for lists).
#[derive(Debug)]
pub struct PlayerResponse<'a> {
    content: &'a Value,
    playability: Memo<Option<&'a Value>>,
    playability_status: Memo<Option<&'a str>>,
    playability_error: Memo<Option<&'a str>>,
    is_available: Memo<bool>,
    is_playable: Memo<bool>,
    details: Memo<Option<&'a Value>>,
    title: Memo<Option<&'a str>>,
    channel_id: Memo<Option<&'a str>>,
    author: Memo<Option<&'a str>>,
    upload_date: Memo<Option<DateTime<FixedOffset>>>,
    duration: Memo<Option<Duration>>,
    thumbnails: Memo<Vec<Thumbnail<'a>>>,
    keywords: Memo<Vec<&'a str>>,
    description: Memo<Option<&'a str>>,
    view_count: Memo<Option<i64>>,
    preview_video_id: Memo<Option<String>>,
    streaming_data: Memo<Option<&'a Value>>,
    dash_manifest_url: Memo<Option<&'a str>>,
    hls_manifest_url: Memo<Option<&'a str>>,
    streams: Memo<Vec<StreamData<'a>>>,
    caption_tracks: Memo<Vec<CaptionTrack<'a>>>,
}

impl<'a> PlayerResponse<'a> {
    pub fn new(content: &'a Value) -> Self {
        PlayerResponse {
            content,
            playability: Memo::new(),
            playability_status: Memo::new(),
            playability_error: Memo::new(),
            is_available: Memo::new(),
            is_playable: Memo::new(),
            details: Memo::new(),
            title: Memo::new(),
            channel_id: Memo::new(),
            author: Memo::new(),
            upload_date: Memo::new(),
            duration: Memo::new(),
            thumbnails: Memo::new(),
            keywords: Memo::new(),
            description: Memo::new(),
            view_count: Memo::new(),
            preview_video_id: Memo::new(),
            streaming_data: Memo::new(),
            dash_manifest_url: Memo::new(),
            hls_manifest_url: Memo::new(),
            streams: Memo::new(),
            caption_tracks: Memo::new(),
        }
    }

    fn playability(&self) -> Option<&'a Value> {
        *self
            .playability
            .get_or_compute(|| self.content.property("playabilityStatus"))
    }

    /// Raw status code such as `OK`, `ERROR`, `LOGIN_REQUIRED` or `UNPLAYABLE`.
    pub fn playability_status(&self) -> Option<&'a str> {
        *self
            .playability_status
            .get_or_compute(|| self.playability().property("status").string())
    }

    /// Human readable explanation for why the video cannot be played.
    pub fn playability_error(&self) -> Option<&'a str> {
        *self
            .playability_error
            .get_or_compute(|| self.playability().property("reason").string())
    }

    pub fn is_available(&self) -> bool {
        *self.is_available.get_or_compute(|| {
            let errored = self
                .playability_status()
                .is_some_and(|status| status.eq_ignore_ascii_case("error"));
            !errored && self.details().is_some()
        })
    }

    pub fn is_playable(&self) -> bool {
        *self.is_playable.get_or_compute(|| {
            self.playability_status()
                .is_some_and(|status| status.eq_ignore_ascii_case("ok"))
        })
    }

    fn details(&self) -> Option<&'a Value> {
        *self
            .details
            .get_or_compute(|| self.content.property("videoDetails"))
    }

    pub fn title(&self) -> Option<&'a str> {
        *self
            .title
            .get_or_compute(|| self.details().property("title").string())
    }

    pub fn channel_id(&self) -> Option<&'a str> {
        *self
            .channel_id
            .get_or_compute(|| self.details().property("channelId").string())
    }

    pub fn author(&self) -> Option<&'a str> {
        *self
            .author
            .get_or_compute(|| self.details().property("author").string())
    }

    pub fn upload_date(&self) -> Option<DateTime<FixedOffset>> {
        *self.upload_date.get_or_compute(|| {
            self.content
                .property("microformat")
                .property("playerMicroformatRenderer")
                .property("uploadDate")
                .timestamp()
        })
    }

    pub fn duration(&self) -> Option<Duration> {
        *self.duration.get_or_compute(|| {
            self.details()
                .property("lengthSeconds")
                .string()
                .and_then(parse_seconds)
        })
    }

    pub fn thumbnails(&self) -> &[Thumbnail<'a>] {
        self.thumbnails.get_or_compute(|| {
            Thumbnail::list(self.details().property("thumbnail").property("thumbnails"))
                .unwrap_or_default()
        })
    }

    pub fn keywords(&self) -> &[&'a str] {
        self.keywords.get_or_compute(|| {
            self.details()
                .property("keywords")
                .elements_or_empty()
                .filter_map(Node::string)
                .collect()
        })
    }

    pub fn description(&self) -> Option<&'a str> {
        *self
            .description
            .get_or_compute(|| self.details().property("shortDescription").string())
    }

    pub fn view_count(&self) -> Option<i64> {
        *self.view_count.get_or_compute(|| {
            self.details()
                .property("viewCount")
                .string()
                .and_then(|count| count.parse().ok())
        })
    }

    /// Id of the trailer shown in place of a paid or otherwise restricted video.
    ///
    /// Tries the legacy trailer renderer, then the `playerVars` query string, and finally
    /// digs through the encoded player response blob, see [`decode_trailer_video_id`].
    pub fn preview_video_id(&self) -> Option<&str> {
        self.preview_video_id
            .get_or_compute(|| {
                let error_screen = self.playability().property("errorScreen");
                let trailer = error_screen.property("ypcTrailerRenderer");

                error_screen
                    .property("playerLegacyDesktopYpcTrailerRenderer")
                    .property("trailerVideoId")
                    .string()
                    .map(str::to_owned)
                    .or_else(|| {
                        let vars = trailer.property("playerVars").string()?;
                        query_value(vars, "video_id")
                    })
                    .or_else(|| {
                        let blob = trailer.property("playerResponse").string()?;
                        decode_trailer_video_id(blob)
                    })
            })
            .as_deref()
    }

    fn streaming_data(&self) -> Option<&'a Value> {
        *self
            .streaming_data
            .get_or_compute(|| self.content.property("streamingData"))
    }

    pub fn dash_manifest_url(&self) -> Option<&'a str> {
        *self
            .dash_manifest_url
            .get_or_compute(|| self.streaming_data().property("dashManifestUrl").string())
    }

    pub fn hls_manifest_url(&self) -> Option<&'a str> {
        *self
            .hls_manifest_url
            .get_or_compute(|| self.streaming_data().property("hlsManifestUrl").string())
    }

    /// Muxed streams first, then adaptive ones.
    pub fn streams(&self) -> &[StreamData<'a>] {
        self.streams.get_or_compute(|| {
            let data = self.streaming_data();
            data.property("formats")
                .elements_or_empty()
                .chain(data.property("adaptiveFormats").elements_or_empty())
                .map(StreamData::new)
                .collect()
        })
    }

    pub fn caption_tracks(&self) -> &[CaptionTrack<'a>] {
        self.caption_tracks.get_or_compute(|| {
            self.content
                .property("captions")
                .property("playerCaptionsTracklistRenderer")
                .property("captionTracks")
                .elements_or_empty()
                .map(CaptionTrack::new)
                .collect()
        })
    }
}

fn query_value(query: &str, key: &str) -> Option<String> {
    let query = query.strip_prefix('?').unwrap_or(query);
    parse(query.as_bytes())
        .find(|(name, _)| name == key)
        .map(|(_, value)| value.into_owned())
}

/// Best effort recovery of the trailer id from the `ypcTrailerRenderer.playerResponse` blob.
///
/// The blob is a url-safe base64 variant wrapping json, but decoding it as such yields
/// mostly garbage. The `video_id=` parameter and the 11 characters after it usually survive,
/// so those are matched out of a lossy utf-8 reading of the bytes. This is lossy on purpose:
/// any failure along the way is simply `None`.
pub fn decode_trailer_video_id(blob: &str) -> Option<String> {
    static LENIENT: GeneralPurpose = GeneralPurpose::new(
        &alphabet::STANDARD,
        GeneralPurposeConfig::new()
            .with_decode_padding_mode(DecodePaddingMode::Indifferent)
            .with_decode_allow_trailing_bits(true),
    );
    static VIDEO_ID: Lazy<Regex> = Lazy::new(|| Regex::new(r"video_id=(.{11})").unwrap());

    let standard = blob.replace('-', "+").replace('_', "/");
    let bytes = match LENIENT.decode(standard.trim()) {
        Ok(bytes) => bytes,
        Err(why) => {
            trace!("trailer blob is not decodable: {why}");
            return None;
        }
    };
    let text = String::from_utf8_lossy(&bytes);

    let id = VIDEO_ID.captures(&text)?.get(1)?.as_str();
    if id.trim().is_empty() {
        return None;
    }
    Some(id.to_owned())
}
