use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use tracing::debug;
use url::form_urlencoded::parse;

use crate::{
    memo::Memo,
    mime::{Acodec, Format, Mime, Vcodec},
    node::Node,
};

/// One entry of `streamingData.formats` or `streamingData.adaptiveFormats`.
///
/// Protected streams carry no `url`; instead a `signatureCipher` query string holds the
/// url together with the scrambled signature `s` and the name `sp` of the query parameter
/// it has to be written back to once deciphered.
#[derive(Debug)]
pub struct StreamData<'a> {
    content: &'a Value,
    cipher: Memo<HashMap<String, String>>,
    itag: Memo<Option<i32>>,
    url: Memo<Option<String>>,
    content_length: Memo<Option<i64>>,
    bitrate: Memo<Option<i64>>,
    mime: Memo<Option<Mime>>,
    video_quality_label: Memo<Option<&'a str>>,
    video_width: Memo<Option<i32>>,
    video_height: Memo<Option<i32>>,
    framerate: Memo<Option<i32>>,
    audio_sample_rate: Memo<Option<i64>>,
    audio_channels: Memo<Option<i32>>,
}

impl<'a> StreamData<'a> {
    pub fn new(content: &'a Value) -> Self {
        StreamData {
            content,
            cipher: Memo::new(),
            itag: Memo::new(),
            url: Memo::new(),
            content_length: Memo::new(),
            bitrate: Memo::new(),
            mime: Memo::new(),
            video_quality_label: Memo::new(),
            video_width: Memo::new(),
            video_height: Memo::new(),
            framerate: Memo::new(),
            audio_sample_rate: Memo::new(),
            audio_channels: Memo::new(),
        }
    }

    fn cipher(&self) -> &HashMap<String, String> {
        self.cipher.get_or_compute(|| {
            self.content
                .property("signatureCipher")
                .or_else(|| self.content.property("cipher"))
                .string()
                .map(|query| parse(query.as_bytes()).into_owned().collect())
                .unwrap_or_default()
        })
    }

    pub fn itag(&self) -> Option<i32> {
        *self
            .itag
            .get_or_compute(|| self.content.property("itag").int32())
    }

    pub fn url(&self) -> Option<&str> {
        self.url
            .get_or_compute(|| {
                self.content
                    .property("url")
                    .string()
                    .map(str::to_owned)
                    .or_else(|| self.cipher().get("url").cloned())
            })
            .as_deref()
    }

    /// Scrambled signature, present only on protected streams.
    pub fn signature(&self) -> Option<&str> {
        self.cipher().get("s").map(String::as_str)
    }

    pub fn signature_parameter(&self) -> Option<&str> {
        self.cipher().get("sp").map(String::as_str)
    }

    /// Size in bytes, read from `contentLength` or else the `clen` parameter of the url.
    pub fn content_length(&self) -> Option<i64> {
        static CLEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[?&]clen=(\d+)").unwrap());

        *self.content_length.get_or_compute(|| {
            self.content
                .property("contentLength")
                .string()
                .and_then(|length| length.parse().ok())
                .or_else(|| {
                    let captures = CLEN.captures(self.url()?)?;
                    captures[1].parse().ok()
                })
        })
    }

    pub fn bitrate(&self) -> Option<i64> {
        *self
            .bitrate
            .get_or_compute(|| self.content.property("bitrate").int64())
    }

    pub fn mime_type(&self) -> Option<&'a str> {
        self.content.property("mimeType").string()
    }

    pub fn mime(&self) -> Option<Mime> {
        *self.mime.get_or_compute(|| {
            let raw = self.mime_type()?;
            match raw.parse::<Mime>() {
                Ok(mime) => Some(mime),
                Err(why) => {
                    debug!(itag = ?self.itag(), "unrecognised stream mime: {why}");
                    None
                }
            }
        })
    }

    pub fn container(&self) -> Option<Format> {
        self.mime().map(|mime| mime.format())
    }

    pub fn is_audio_only(&self) -> bool {
        self.mime_type()
            .is_some_and(|mime| mime.starts_with("audio/"))
    }

    pub fn audio_codec(&self) -> Option<Acodec> {
        self.mime()?.acodec()
    }

    pub fn video_codec(&self) -> Option<Vcodec> {
        self.mime()?.vcodec()
    }

    pub fn video_quality_label(&self) -> Option<&'a str> {
        *self
            .video_quality_label
            .get_or_compute(|| self.content.property("qualityLabel").string())
    }

    pub fn video_width(&self) -> Option<i32> {
        *self
            .video_width
            .get_or_compute(|| self.content.property("width").int32())
    }

    pub fn video_height(&self) -> Option<i32> {
        *self
            .video_height
            .get_or_compute(|| self.content.property("height").int32())
    }

    pub fn framerate(&self) -> Option<i32> {
        *self
            .framerate
            .get_or_compute(|| self.content.property("fps").int32())
    }

    pub fn audio_sample_rate(&self) -> Option<i64> {
        *self.audio_sample_rate.get_or_compute(|| {
            self.content
                .property("audioSampleRate")
                .string()
                .and_then(|rate| rate.parse().ok())
        })
    }

    pub fn audio_channels(&self) -> Option<i32> {
        *self
            .audio_channels
            .get_or_compute(|| self.content.property("audioChannels").int32())
    }
}
