use serde::Deserialize;

use crate::domain::entities::{MediaItem, MediaPage, Rendition};

/// Media listing response structure.
#[derive(Debug, Deserialize)]
pub struct MediaListingResponse {
    /// Items in source page order.
    pub items: Vec<MediaItemDto>,
    /// Whether more pages are available after this one.
    pub more_available: bool,
}

/// One media entry in a listing page.
#[derive(Debug, Deserialize)]
pub struct MediaItemDto {
    /// Item identifier, also used as the pagination cursor value.
    #[serde(deserialize_with = "id_from_string_or_number")]
    pub id: String,
    /// Available image renditions.
    pub images: Vec<RenditionDto>,
}

/// One image rendition of a media entry.
#[derive(Debug, Deserialize)]
pub struct RenditionDto {
    /// Direct image URL.
    pub url: String,
    /// Pixel width.
    pub width: u32,
}

/// Accepts item ids serialized either as JSON strings or as bare numbers.
fn id_from_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum IdRepr {
        Text(String),
        Number(u64),
    }

    Ok(match IdRepr::deserialize(deserializer)? {
        IdRepr::Text(text) => text,
        IdRepr::Number(number) => number.to_string(),
    })
}

impl From<RenditionDto> for Rendition {
    fn from(dto: RenditionDto) -> Self {
        Self::new(dto.width, dto.url)
    }
}

impl From<MediaItemDto> for MediaItem {
    fn from(dto: MediaItemDto) -> Self {
        Self::new(dto.id, dto.images.into_iter().map(Into::into).collect())
    }
}

impl From<MediaListingResponse> for MediaPage {
    fn from(dto: MediaListingResponse) -> Self {
        Self::new(
            dto.items.into_iter().map(Into::into).collect(),
            dto.more_available,
        )
    }
}
