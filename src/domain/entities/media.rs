//! Media listing entities and the rendition selection rule.

use std::fmt;

/// One available resolution variant of a media item's image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendition {
    /// Pixel width of this variant.
    pub width: u32,
    /// Direct URL of this variant.
    pub url: String,
}

impl Rendition {
    /// Creates a new rendition.
    #[must_use]
    pub fn new(width: u32, url: impl Into<String>) -> Self {
        Self {
            width,
            url: url.into(),
        }
    }
}

/// Opaque pagination token addressing the page after a given item.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MediaCursor(String);

impl MediaCursor {
    /// Creates a cursor from an item identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the cursor as string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MediaCursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One media entry returned by the listing endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaItem {
    /// Item identifier, doubling as the pagination cursor value.
    pub id: String,
    /// Available image renditions, in source order.
    pub renditions: Vec<Rendition>,
}

impl MediaItem {
    /// Creates a new media item.
    #[must_use]
    pub fn new(id: impl Into<String>, renditions: Vec<Rendition>) -> Self {
        Self {
            id: id.into(),
            renditions,
        }
    }

    /// Selects the widest rendition of this item.
    ///
    /// Scans renditions in source order and keeps the first one whose width
    /// is strictly greater than the running maximum, so an equal-width
    /// duplicate later in the list never displaces an earlier one. Returns
    /// `None` when the item has no renditions.
    #[must_use]
    pub fn largest_rendition(&self) -> Option<&Rendition> {
        let mut widest: Option<&Rendition> = None;
        let mut max_width = 0;

        for rendition in &self.renditions {
            if rendition.width > max_width {
                max_width = rendition.width;
                widest = Some(rendition);
            }
        }

        widest
    }
}

/// One page of the remote media listing.
///
/// Pages are discarded after parsing; only derived data survives the fetch
/// loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaPage {
    /// Items in source page order.
    pub items: Vec<MediaItem>,
    /// Whether the source reports more pages after this one.
    pub more_available: bool,
}

impl MediaPage {
    /// Creates a new page.
    #[must_use]
    pub fn new(items: Vec<MediaItem>, more_available: bool) -> Self {
        Self {
            items,
            more_available,
        }
    }

    /// Cursor addressing the page after this one.
    ///
    /// The cursor is the id of the positionally last item the source
    /// yielded. An empty page has no cursor, which the fetch loop treats as
    /// exhaustion.
    #[must_use]
    pub fn next_cursor(&self) -> Option<MediaCursor> {
        self.items.last().map(|item| MediaCursor::new(item.id.clone()))
    }

    /// Returns true when the page carries no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn item_with_widths(widths: &[u32]) -> MediaItem {
        let renditions = widths
            .iter()
            .enumerate()
            .map(|(i, w)| Rendition::new(*w, format!("https://cdn.example/r{i}.jpg")))
            .collect();
        MediaItem::new("1", renditions)
    }

    #[test]
    fn test_selects_first_strictly_largest() {
        let item = MediaItem::new(
            "1",
            vec![
                Rendition::new(10, "a"),
                Rendition::new(50, "b"),
                Rendition::new(50, "c"),
                Rendition::new(5, "d"),
            ],
        );

        assert_eq!(item.largest_rendition().unwrap().url, "b");
    }

    #[test_case(&[320, 640, 1080], 2; "ascending widths")]
    #[test_case(&[1080, 640, 320], 0; "descending widths")]
    #[test_case(&[640, 1080, 640], 1; "peak in the middle")]
    fn test_selection_by_position(widths: &[u32], expected_index: usize) {
        let item = item_with_widths(widths);
        let expected = format!("https://cdn.example/r{expected_index}.jpg");

        assert_eq!(item.largest_rendition().unwrap().url, expected);
    }

    #[test]
    fn test_no_renditions_selects_nothing() {
        let item = MediaItem::new("1", Vec::new());
        assert!(item.largest_rendition().is_none());
    }

    #[test]
    fn test_next_cursor_is_last_item_id() {
        let page = MediaPage::new(
            vec![
                MediaItem::new("300", Vec::new()),
                MediaItem::new("200", Vec::new()),
                MediaItem::new("100", Vec::new()),
            ],
            true,
        );

        assert_eq!(page.next_cursor().unwrap().as_str(), "100");
    }

    #[test]
    fn test_empty_page_has_no_cursor() {
        let page = MediaPage::new(Vec::new(), true);
        assert!(page.next_cursor().is_none());
        assert!(page.is_empty());
    }
}
