/// URL generation from extracted identifiers
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Everything except alphanumerics and `- _ . ! ~ * ' ( )`, matching
/// JavaScript's `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Which URL template and identifier semantics apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Artwork,
    User,
    Manga,
    Keyword,
}

/// A mode string that is not one of the four popup select values.
/// The select values are fixed, so hitting this is a caller bug.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown mode: {0}")]
pub struct UnknownMode(pub String);

impl FromStr for Mode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "artwork" => Ok(Mode::Artwork),
            "user" => Ok(Mode::User),
            "manga" => Ok(Mode::Manga),
            "keyword" => Ok(Mode::Keyword),
            other => Err(UnknownMode(other.to_string())),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Mode::Artwork => "artwork",
            Mode::User => "user",
            Mode::Manga => "manga",
            Mode::Keyword => "keyword",
        })
    }
}

impl Mode {
    pub const ALL: [Mode; 4] = [Mode::Artwork, Mode::User, Mode::Manga, Mode::Keyword];

    /// Human-readable label for the mode selector and history list.
    pub fn label(self) -> &'static str {
        match self {
            Mode::Artwork => "Artwork ID",
            Mode::User => "Artist ID",
            Mode::Manga => "Manga ID",
            Mode::Keyword => "Keyword",
        }
    }

    /// Manga pages live under the same /artworks/ path as illustrations.
    fn template(self) -> &'static str {
        match self {
            Mode::Artwork | Mode::Manga => "https://www.pixiv.net/artworks/{id}",
            Mode::User => "https://www.pixiv.net/users/{id}",
            Mode::Keyword => "https://www.pixiv.net/tags/{keyword}/artworks?s_mode=s_tag",
        }
    }
}

/// One generated target: the cleaned token and its substituted URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlEntry {
    pub id: String,
    pub url: String,
}

/// Map identifiers to URLs for the given mode.
///
/// Ids are trimmed before substitution. Keyword mode percent-encodes the
/// token; the ID modes substitute it verbatim. Ids are numeric by
/// construction on the extractor's digit path, so a non-numeric id from
/// another caller produces a malformed URL. Output order equals input
/// order and no deduplication happens here.
pub fn generate(mode: Mode, ids: &[String]) -> Vec<UrlEntry> {
    ids.iter()
        .map(|id| {
            let clean = id.trim();
            let url = match mode {
                Mode::Keyword => {
                    let encoded = utf8_percent_encode(clean, URI_COMPONENT).to_string();
                    mode.template().replace("{keyword}", &encoded)
                }
                _ => mode.template().replace("{id}", clean),
            };
            UrlEntry {
                id: clean.to_string(),
                url,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_artwork_url() {
        let urls = generate(Mode::Artwork, &ids(&["123456"]));
        assert_eq!(
            urls,
            vec![UrlEntry {
                id: "123456".to_string(),
                url: "https://www.pixiv.net/artworks/123456".to_string(),
            }]
        );
    }

    #[test]
    fn test_user_url() {
        let urls = generate(Mode::User, &ids(&["789012"]));
        assert_eq!(urls[0].url, "https://www.pixiv.net/users/789012");
    }

    #[test]
    fn test_manga_shares_artwork_path() {
        let urls = generate(Mode::Manga, &ids(&["123456"]));
        assert_eq!(urls[0].url, "https://www.pixiv.net/artworks/123456");
    }

    #[test]
    fn test_keyword_percent_encoding() {
        let urls = generate(Mode::Keyword, &ids(&["東方 Project"]));
        assert_eq!(
            urls[0].url,
            "https://www.pixiv.net/tags/%E6%9D%B1%E6%96%B9%20Project/artworks?s_mode=s_tag"
        );
        assert_eq!(urls[0].id, "東方 Project");
    }

    #[test]
    fn test_keyword_unreserved_marks_survive() {
        let urls = generate(Mode::Keyword, &ids(&["fate_stay-night.!~*'()"]));
        assert_eq!(
            urls[0].url,
            "https://www.pixiv.net/tags/fate_stay-night.!~*'()/artworks?s_mode=s_tag"
        );
    }

    #[test]
    fn test_keyword_reserved_chars_encoded() {
        let urls = generate(Mode::Keyword, &ids(&["a/b?c&d"]));
        assert_eq!(
            urls[0].url,
            "https://www.pixiv.net/tags/a%2Fb%3Fc%26d/artworks?s_mode=s_tag"
        );
    }

    #[test]
    fn test_ids_are_trimmed() {
        let urls = generate(Mode::Artwork, &ids(&["  123456  "]));
        assert_eq!(urls[0].id, "123456");
        assert_eq!(urls[0].url, "https://www.pixiv.net/artworks/123456");
    }

    #[test]
    fn test_output_order_matches_input() {
        let urls = generate(Mode::User, &ids(&["222222", "111111", "222222"]));
        let got: Vec<&str> = urls.iter().map(|u| u.id.as_str()).collect();
        assert_eq!(got, vec!["222222", "111111", "222222"]);
    }

    #[test]
    fn test_mode_from_str() {
        assert_eq!("artwork".parse(), Ok(Mode::Artwork));
        assert_eq!("user".parse(), Ok(Mode::User));
        assert_eq!("manga".parse(), Ok(Mode::Manga));
        assert_eq!("keyword".parse(), Ok(Mode::Keyword));
        assert_eq!(
            "bookmark".parse::<Mode>(),
            Err(UnknownMode("bookmark".to_string()))
        );
    }

    #[test]
    fn test_mode_display_round_trips() {
        for mode in Mode::ALL {
            assert_eq!(mode.to_string().parse(), Ok(mode));
        }
    }

    #[test]
    fn test_mode_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Mode::Artwork).unwrap(), "\"artwork\"");
        assert_eq!(
            serde_json::from_str::<Mode>("\"keyword\"").unwrap(),
            Mode::Keyword
        );
    }
}
