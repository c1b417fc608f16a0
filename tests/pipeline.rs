use std::time::Duration;

use yinfo_bridge::{
    json, Error, Format, Node, Playlist, PlaylistBrowseResponse, PlaylistData,
    PlaylistNextResponse, PlayerResponse,
};

const WATCH_PAGE: &str = r#"<html><script nonce="x">var ytInitialPlayerResponse = {"responseContext":{},"playabilityStatus":{"status":"OK","playableInEmbed":true},"videoDetails":{"videoId":"RhmHSAClG1c","title":"Sabaton - To Hell And Back","lengthSeconds":"222","channelId":"UC1rYqrZpSdBXF1hqkYabTUA","shortDescription":"Lyrics: \"we are {heroes}\"","viewCount":"1000","author":"Sabaton","keywords":["sabaton"]},"streamingData":{"formats":[{"itag":18,"url":"https://rr.googlevideo.com/videoplayback?itag=18","mimeType":"video/mp4; codecs=\"avc1.42001E, mp4a.40.2\""}],"adaptiveFormats":[{"itag":251,"signatureCipher":"s=XYZ&sp=sig&url=https%3A%2F%2Frr.googlevideo.com%2Fvideoplayback%3Fitag%3D251","mimeType":"audio/webm; codecs=\"opus\""}]}};var meta = {"x":1};</script></html>"#;

#[test]
fn watch_page_to_player_response() {
    let island = json::extract_after(WATCH_PAGE, "ytInitialPlayerResponse = ").unwrap();
    assert!(island.ends_with(r#""}]}}"#));

    let document = json::parse(island).unwrap();
    let player = PlayerResponse::new(&document);

    assert!(player.is_available());
    assert!(player.is_playable());
    assert_eq!(player.title(), Some("Sabaton - To Hell And Back"));
    assert_eq!(player.description(), Some("Lyrics: \"we are {heroes}\""));
    assert_eq!(player.duration(), Some(Duration::from_secs(222)));
    assert_eq!(player.keywords(), &["sabaton"]);

    let streams = player.streams();
    assert_eq!(streams.len(), 2);
    assert_eq!(streams[0].container(), Some(Format::MP4));
    assert_eq!(streams[1].signature(), Some("XYZ"));
    assert_eq!(
        streams[1].url(),
        Some("https://rr.googlevideo.com/videoplayback?itag=251")
    );
}

#[test]
fn unanchored_extraction_keeps_prefix() {
    let island = json::extract(WATCH_PAGE);
    assert!(island.starts_with("<html>"));
    assert!(json::try_parse(island).is_none());
}

#[test]
fn malformed_documents_fail_loudly() {
    assert!(matches!(json::parse("<html>"), Err(Error::Json(_))));
    assert!(json::try_parse("<html>").is_none());
}

#[test]
fn descendant_search_over_real_shape() {
    let island = json::extract_after(WATCH_PAGE, "ytInitialPlayerResponse = ").unwrap();
    let document = json::parse(island).unwrap();
    let itags: Vec<_> = document.descendants("itag").filter_map(Node::int32).collect();
    assert_eq!(itags, vec![18, 251]);
}

#[test]
fn playlist_variants_by_endpoint() {
    let browse = json::parse(
        r#"{"sidebar":{"playlistSidebarRenderer":{"items":[
            {"playlistSidebarPrimaryInfoRenderer":{"title":{"runs":[{"text":"Best of"},{"text":" 2020"}]},
             "description":{"simpleText":"Hits"}}},
            {"playlistSidebarSecondaryInfoRenderer":{"videoOwner":{"videoOwnerRenderer":{
             "title":{"simpleText":"Curator"},
             "navigationEndpoint":{"browseEndpoint":{"browseId":"UCcurator"}}}}}}]}}}"#,
    )
    .unwrap();
    let next = json::parse(
        r#"{"responseContext":{"visitorData":"token"},
            "contents":{"twoColumnWatchNextResults":{"playlist":{"playlist":{
              "title":"Best of 2020","ownerName":{"simpleText":"Curator"},
              "contents":[{"playlistPanelVideoRenderer":{"videoId":"aaaaaaaaaaa","lengthText":{"simpleText":"1:00"}}}]}}}}}"#,
    )
    .unwrap();

    let playlists: [Playlist<'_>; 2] = [
        PlaylistBrowseResponse::new(&browse).into(),
        PlaylistNextResponse::new(&next).into(),
    ];

    for playlist in &playlists {
        assert!(playlist.is_available());
        assert_eq!(playlist.title(), Some("Best of 2020"));
        assert_eq!(playlist.author(), Some("Curator"));
    }

    assert_eq!(playlists[0].channel_id(), Some("UCcurator"));
    assert_eq!(playlists[0].description(), Some("Hits"));
    assert_eq!(playlists[1].channel_id(), None);
    assert_eq!(playlists[1].description(), None);
    assert_eq!(playlists[1].visitor_data(), Some("token"));
    assert_eq!(
        playlists[1].videos()[0].duration(),
        Some(Duration::from_secs(60))
    );
}
