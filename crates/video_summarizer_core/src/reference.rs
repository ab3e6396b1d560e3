//! crates/video_summarizer_core/src/reference.rs
//!
//! Turns whatever the user pasted (a full URL, a short link, an embed link or
//! a bare ID) into a canonical [`VideoId`]. A URL may sit inside other text.

use regex::Regex;
use std::sync::OnceLock;

use crate::domain::VideoId;
use crate::error::SummarizeError;

const ID_CHARS: &str = "A-Za-z0-9_-";

fn url_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        let pattern = format!(
            r"(?i:(?:https?://)?(?:(?:www|m|music)\.)?(?:youtube(?:-nocookie)?\.com/(?:\S*?[?&]v=|embed/|v/|e/|shorts/|live/|[^/\s]+/\S+/)|youtu\.be/))([{ID_CHARS}]{{11}})(?:[^{ID_CHARS}]|$)"
        );
        Regex::new(&pattern).expect("video URL pattern is valid")
    })
}

fn bare_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(&format!(r"^[{ID_CHARS}]{{11}}$")).expect("bare video ID pattern is valid")
    })
}

impl VideoId {
    /// Extracts the video ID from a user-submitted reference.
    pub fn parse(reference: &str) -> Result<Self, SummarizeError> {
        let reference = reference.trim();
        if reference.is_empty() {
            return Err(SummarizeError::InvalidReference(String::new()));
        }

        if bare_pattern().is_match(reference) {
            return Ok(VideoId(reference.to_string()));
        }

        url_pattern()
            .captures(reference)
            .and_then(|caps| caps.get(1))
            .map(|m| VideoId(m.as_str().to_string()))
            .ok_or_else(|| SummarizeError::InvalidReference(reference.to_string()))
    }
}

impl std::str::FromStr for VideoId {
    type Err = SummarizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VideoId::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    const ID: &str = "dQw4w9WgXcQ";

    #[test]
    fn every_supported_url_shape_yields_the_same_id() {
        let references = [
            "dQw4w9WgXcQ",
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
            "http://youtube.com/watch?v=dQw4w9WgXcQ",
            "www.youtube.com/watch?v=dQw4w9WgXcQ",
            "youtube.com/watch?v=dQw4w9WgXcQ&t=42s",
            "https://www.youtube.com/watch?feature=share&v=dQw4w9WgXcQ",
            "https://m.youtube.com/watch?v=dQw4w9WgXcQ",
            "https://music.youtube.com/watch?v=dQw4w9WgXcQ&list=RDAMVM",
            "https://youtu.be/dQw4w9WgXcQ",
            "https://youtu.be/dQw4w9WgXcQ?si=abcdef",
            "https://www.youtube.com/embed/dQw4w9WgXcQ",
            "https://www.youtube-nocookie.com/embed/dQw4w9WgXcQ?start=10",
            "https://www.youtube.com/v/dQw4w9WgXcQ",
            "https://www.youtube.com/e/dQw4w9WgXcQ",
            "https://www.youtube.com/shorts/dQw4w9WgXcQ",
            "https://www.youtube.com/live/dQw4w9WgXcQ?feature=shared",
            "HTTPS://WWW.YOUTUBE.COM/watch?v=dQw4w9WgXcQ",
            "  https://youtu.be/dQw4w9WgXcQ  ",
            "Check this out: https://youtu.be/dQw4w9WgXcQ",
            "<https://www.youtube.com/watch?v=dQw4w9WgXcQ>",
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ is the one",
            "https://www.youtube.com/user/Foo#p/u/1/dQw4w9WgXcQ",
            "https://www.youtube.com/attribution_link?a=x&v=dQw4w9WgXcQ",
        ];
        for reference in references {
            let id = VideoId::parse(reference)
                .unwrap_or_else(|e| panic!("{reference} should parse: {e}"));
            assert_eq!(id.as_str(), ID, "reference: {reference}");
        }
    }

    #[test]
    fn ids_keep_hyphens_and_underscores() {
        let id = VideoId::parse("https://youtu.be/a-B_c1D2e3F").unwrap();
        assert_eq!(id.as_str(), "a-B_c1D2e3F");
    }

    #[test]
    fn strings_without_an_id_are_rejected() {
        let references = [
            "",
            "   ",
            "not a url",
            "dQw4w9WgXc",
            "dQw4w9WgXcQQ",
            "dQw4w9WgX!Q",
            "https://www.youtube.com/",
            "https://www.youtube.com/watch?v=short",
            "https://www.youtube.com/watch?v=dQw4w9WgXcQextra",
            "https://www.youtube.com/channel/UCuAXFkgsw1L7xaCfnd5JJOw",
            "https://vimeo.com/dQw4w9WgXcQ",
            "https://example.com/watch?v=dQw4w9WgXcQ",
            "https://youtu.be/",
            "watch this: dQw4w9WgXcQ",
            "see https://youtu.be/ later",
            "https://www.youtube.com/user/Foo#p/u/1/dQw4w9WgXcQQ",
        ];
        for reference in references {
            let err = VideoId::parse(reference).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidReference, "reference: {reference:?}");
        }
    }

    #[test]
    fn from_str_delegates_to_parse() {
        let id: VideoId = "https://youtu.be/dQw4w9WgXcQ".parse().unwrap();
        assert_eq!(id.to_string(), ID);
    }
}
