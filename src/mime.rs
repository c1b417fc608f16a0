use std::{fmt, str::FromStr};

use serde::de::{self, Deserialize, Deserializer, Visitor};

use crate::{errors::Error, utils::after};

/// Parsed `mimeType` of a stream, e.g. `video/mp4; codecs="avc1.42001E, mp4a.40.2"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum Mime {
    Audio(Format, Acodec),
    Video(Format, Vcodec, Option<Acodec>),
}

impl Mime {
    pub fn acodec(&self) -> Option<Acodec> {
        match self {
            Mime::Audio(_, acodec) => Some(*acodec),
            Mime::Video(_, _, acodec) => *acodec,
        }
    }

    pub fn vcodec(&self) -> Option<Vcodec> {
        match self {
            Mime::Audio(_, _) => None,
            Mime::Video(_, vcodec, _) => Some(*vcodec),
        }
    }

    pub fn format(&self) -> Format {
        match self {
            Mime::Audio(format, _) | Mime::Video(format, _, _) => *format,
        }
    }
}

impl FromStr for Mime {
    type Err = Error;

    fn from_str(input: &str) -> Result<Mime, Self::Err> {
        let input = input.trim();

        let (kind, rest) = input
            .split_once('/')
            .ok_or_else(|| Error::MimeParse("mime type", input.to_owned()))?;
        let (subtype, params) = rest.split_once(';').unwrap_or((rest, ""));
        let format = subtype.trim().parse::<Format>()?;
        let codecs = after(params, "codecs=")
            .map(|codecs| codecs.trim().trim_matches('"'))
            .unwrap_or_default();

        match kind {
            "audio" => Ok(Mime::Audio(format, codecs.parse::<Acodec>()?)),
            "video" => match codecs.split_once(',') {
                Some((vcodec, acodec)) => Ok(Mime::Video(
                    format,
                    vcodec.trim().parse::<Vcodec>()?,
                    Some(acodec.trim().parse::<Acodec>()?),
                )),
                None => Ok(Mime::Video(format, codecs.parse::<Vcodec>()?, None)),
            },
            _ => Err(Error::MimeParse("mime type", kind.to_owned())),
        }
    }
}

struct MimeVisitor;

impl<'de> Visitor<'de> for MimeVisitor {
    type Value = Mime;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "a valid audio or video mimetype string")
    }

    fn visit_str<E>(self, s: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Mime::from_str(s).map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for Mime {
    fn deserialize<D>(deserializer: D) -> Result<Mime, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(MimeVisitor)
    }
}

/// Stream container.
#[derive(Debug, Clone, Copy, serde::Serialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum Format {
    Webm,
    MP4,
    ThreeGpp,
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(input: &str) -> Result<Format, Error> {
        if input.starts_with("mp4") {
            Ok(Format::MP4)
        } else if input.starts_with("webm") {
            Ok(Format::Webm)
        } else if input.starts_with("3gpp") {
            Ok(Format::ThreeGpp)
        } else {
            Err(Error::MimeParse("format", input.to_owned()))
        }
    }
}

#[derive(Debug, Clone, Copy, serde::Serialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum Vcodec {
    VP9,
    AV1,
    AVC,
    MP4V,
}

impl FromStr for Vcodec {
    type Err = Error;

    fn from_str(input: &str) -> Result<Vcodec, Error> {
        if input.starts_with("av01") {
            Ok(Vcodec::AV1)
        } else if input.starts_with("vp9") || input.starts_with("vp09") {
            Ok(Vcodec::VP9)
        } else if input.starts_with("avc1") {
            Ok(Vcodec::AVC)
        } else if input.starts_with("mp4v") {
            Ok(Vcodec::MP4V)
        } else {
            Err(Error::MimeParse("video codec", input.to_owned()))
        }
    }
}

#[derive(Debug, Clone, Copy, serde::Serialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum Acodec {
    MP4A,
    AAC,
    Vorbis,
    Opus,
}

impl FromStr for Acodec {
    type Err = Error;

    fn from_str(input: &str) -> Result<Acodec, Error> {
        if input.starts_with("opus") {
            Ok(Acodec::Opus)
        } else if input.starts_with("vorbis") {
            Ok(Acodec::Vorbis)
        } else if input.starts_with("mp4a.40.2") {
            Ok(Acodec::AAC)
        } else if input.starts_with("mp4a") {
            Ok(Acodec::MP4A)
        } else {
            Err(Error::MimeParse("audio codec", input.to_owned()))
        }
    }
}
