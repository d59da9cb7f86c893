//! Image size-record normalization

use serde::{Deserialize, Serialize};

/// Artwork URLs keyed by nominal size
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub small: Option<String>,
    pub medium: Option<String>,
    pub large: Option<String>,
    pub extralarge: Option<String>,
}

/// One entry of the service's `image` array
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ImageRecord {
    #[serde(default)]
    pub size: Option<String>,
    #[serde(rename = "#text", default)]
    pub text: Option<String>,
}

impl Image {
    /// Collapse size records into one image.
    ///
    /// Records with a missing or unrecognized `size`, or with empty URL text,
    /// are skipped. Returns `None` when no record survives.
    pub(crate) fn from_records(records: &[ImageRecord]) -> Option<Self> {
        let mut image = Image::default();

        for record in records {
            let Some(url) = record.text.as_deref().filter(|url| !url.is_empty()) else {
                continue;
            };
            let slot = match record.size.as_deref() {
                Some("small") => &mut image.small,
                Some("medium") => &mut image.medium,
                Some("large") => &mut image.large,
                Some("extralarge") => &mut image.extralarge,
                _ => continue,
            };
            *slot = Some(url.to_string());
        }

        (!image.is_empty()).then_some(image)
    }

    fn is_empty(&self) -> bool {
        self.small.is_none()
            && self.medium.is_none()
            && self.large.is_none()
            && self.extralarge.is_none()
    }

    /// Largest available URL
    pub fn best(&self) -> Option<&str> {
        self.extralarge
            .as_deref()
            .or(self.large.as_deref())
            .or(self.medium.as_deref())
            .or(self.small.as_deref())
    }
}

/// Normalize an optional `image` field
pub(crate) fn normalize(records: Option<&[ImageRecord]>) -> Option<Image> {
    records.and_then(Image::from_records)
}
