//! This module contains a stub dictionary.

use super::{DataDictionary, DataDictionaryEntryRef};
use crate::header::Tag;

/// An empty attribute dictionary.
///
/// Every lookup fails,
/// so decoding implicit VR content with it
/// yields untyped binary values.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StubDataDictionary;

impl DataDictionary for StubDataDictionary {
    type Entry = DataDictionaryEntryRef<'static>;

    fn by_name(&self, _: &str) -> Option<&DataDictionaryEntryRef<'static>> {
        None
    }

    fn by_tag(&self, _: Tag) -> Option<&DataDictionaryEntryRef<'static>> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn knows_nothing() {
        let dict = StubDataDictionary;
        assert!(dict.by_tag(Tag::PIXEL_DATA).is_none());
        assert!(dict.by_name("PixelData").is_none());
        // tag text still parses without a dictionary
        assert_eq!(dict.parse_tag("(7FE0,0010)"), Some(Tag::PIXEL_DATA));
        assert_eq!(dict.parse_tag("PixelData"), None);
    }
}
