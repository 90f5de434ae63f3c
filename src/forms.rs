use serde::Deserialize;

pub const BLANK: &str = "can't be blank";
pub const LENGTH_OUT_OF_RANGE: &str = "Length in seconds must be greater than 0";

/// Raw album form payload, exactly as submitted.
#[derive(Deserialize, Clone, Debug, Default)]
pub struct AlbumForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub artist: String,
}

/// Presence failures, rendered inline next to their field.
#[derive(Debug, Default)]
pub struct AlbumErrors {
    pub title: Option<&'static str>,
    pub artist: Option<&'static str>,
}

#[derive(Debug)]
pub struct ValidAlbum {
    pub title: String,
    pub artist: String,
}

impl AlbumForm {
    pub fn validate(&self) -> Result<ValidAlbum, AlbumErrors> {
        let title = self.title.trim();
        let artist = self.artist.trim();
        if title.is_empty() || artist.is_empty() {
            return Err(AlbumErrors {
                title: title.is_empty().then_some(BLANK),
                artist: artist.is_empty().then_some(BLANK),
            });
        }
        Ok(ValidAlbum {
            title: title.to_string(),
            artist: artist.to_string(),
        })
    }
}

/// Raw track form payload. The length stays a string until validation so a
/// non-numeric submission re-renders with the entered value intact.
#[derive(Deserialize, Clone, Debug, Default)]
pub struct TrackForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub length_in_seconds: String,
}

/// Track failures split by how they surface: presence inline next to the
/// field, the numeric rule as a page-level danger banner.
#[derive(Debug, Default)]
pub struct TrackErrors {
    pub title: Option<&'static str>,
    pub length: Option<&'static str>,
}

#[derive(Debug)]
pub struct ValidTrack {
    pub title: String,
    pub length_in_seconds: i64,
}

impl TrackForm {
    pub fn validate(&self) -> Result<ValidTrack, TrackErrors> {
        let title = self.title.trim();
        let length = self
            .length_in_seconds
            .trim()
            .parse::<i64>()
            .ok()
            .filter(|n| *n > 0);
        match (title.is_empty(), length) {
            (false, Some(length_in_seconds)) => Ok(ValidTrack {
                title: title.to_string(),
                length_in_seconds,
            }),
            (title_blank, length) => Err(TrackErrors {
                title: title_blank.then_some(BLANK),
                length: length.is_none().then_some(LENGTH_OUT_OF_RANGE),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn album_with_both_fields_is_valid() {
        let form = AlbumForm {
            title: " Brat ".to_string(),
            artist: "Charli XCX".to_string(),
        };
        let valid = form.validate().unwrap();
        assert_eq!(valid.title, "Brat");
        assert_eq!(valid.artist, "Charli XCX");
    }

    #[test]
    fn album_missing_title_fails_presence() {
        let form = AlbumForm {
            title: "   ".to_string(),
            artist: "Charli XCX".to_string(),
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.title, Some(BLANK));
        assert_eq!(errors.artist, None);
    }

    #[test]
    fn album_missing_artist_fails_presence() {
        let form = AlbumForm {
            title: "Brat".to_string(),
            artist: String::new(),
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.title, None);
        assert_eq!(errors.artist, Some(BLANK));
    }

    #[test]
    fn track_with_positive_length_is_valid() {
        let form = TrackForm {
            title: "360".to_string(),
            length_in_seconds: "133".to_string(),
        };
        let valid = form.validate().unwrap();
        assert_eq!(valid.title, "360");
        assert_eq!(valid.length_in_seconds, 133);
    }

    #[test]
    fn track_length_zero_fails_numeric_rule() {
        let form = TrackForm {
            title: "360".to_string(),
            length_in_seconds: "0".to_string(),
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.title, None);
        assert_eq!(errors.length, Some(LENGTH_OUT_OF_RANGE));
    }

    #[test]
    fn track_length_negative_fails_numeric_rule() {
        let form = TrackForm {
            title: "360".to_string(),
            length_in_seconds: "-5".to_string(),
        };
        assert!(form.validate().is_err());
    }

    #[test]
    fn track_length_non_numeric_fails_numeric_rule() {
        let form = TrackForm {
            title: "360".to_string(),
            length_in_seconds: "three minutes".to_string(),
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.length, Some(LENGTH_OUT_OF_RANGE));
    }

    #[test]
    fn track_can_fail_both_rules_at_once() {
        let form = TrackForm::default();
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.title, Some(BLANK));
        assert_eq!(errors.length, Some(LENGTH_OUT_OF_RANGE));
    }
}
