//! The standard data element dictionary.

use crate::tags::ENTRIES;
use dcmtlv_core::dictionary::{
    DataDictionary, DataDictionaryEntryRef, TagRange, ValueMultiplicity, VirtualVr,
};
use dcmtlv_core::header::Tag;
use dcmtlv_core::VR;
use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};
use std::fmt;

type Entry = DataDictionaryEntryRef<'static>;

static REGISTRY: Lazy<StandardDataDictionaryRegistry> = Lazy::new(|| {
    let mut registry = StandardDataDictionaryRegistry::with_capacity(ENTRIES.len());
    for entry in ENTRIES {
        registry.index(entry);
    }
    registry.by_name.insert(GROUP_LENGTH_ENTRY.alias, &GROUP_LENGTH_ENTRY);
    registry
});

/// Retrieve the singleton instance of the standard dictionary registry.
///
/// Decoding routines take the unit type [`StandardDataDictionary`] instead,
/// which defers to this registry.
#[inline]
pub fn registry() -> &'static StandardDataDictionaryRegistry {
    &REGISTRY
}

/// The index over the standard attribute entries.
#[derive(Debug)]
pub struct StandardDataDictionaryRegistry {
    /// keyword → entry
    by_name: HashMap<&'static str, &'static Entry>,
    /// tag → entry, open tag portions zeroed
    by_tag: HashMap<Tag, &'static Entry>,
    /// keys of `(ggxx,eeee)` entries
    repeating_groups: HashSet<Tag>,
    /// keys of `(gggg,eexx)` entries
    repeating_elements: HashSet<Tag>,
}

impl StandardDataDictionaryRegistry {
    fn with_capacity(capacity: usize) -> Self {
        StandardDataDictionaryRegistry {
            by_name: HashMap::with_capacity(capacity),
            by_tag: HashMap::with_capacity(capacity),
            repeating_groups: HashSet::new(),
            repeating_elements: HashSet::new(),
        }
    }

    fn index(&mut self, entry: &'static Entry) {
        let key = entry.tag.inner();
        self.by_name.insert(entry.alias, entry);
        self.by_tag.insert(key, entry);
        match entry.tag {
            TagRange::Group100(_) => {
                self.repeating_groups.insert(key);
            }
            TagRange::Element100(_) => {
                self.repeating_elements.insert(key);
            }
            _ => {}
        }
    }

    /// The number of indexed attributes.
    pub fn len(&self) -> usize {
        self.by_tag.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.by_tag.is_empty()
    }

    /// Iterate over all indexed attribute entries, in no particular order.
    pub fn entries(&self) -> impl Iterator<Item = &'static Entry> + '_ {
        self.by_tag.values().copied()
    }

    fn get(&self, tag: Tag) -> Option<&'static Entry> {
        if let Some(entry) = self.by_tag.get(&tag) {
            return Some(entry);
        }

        // odd groups are private
        let group_key = Tag(tag.0 & 0xFF01, tag.1);
        if self.repeating_groups.contains(&group_key) {
            return self.by_tag.get(&group_key).copied();
        }
        let element_key = Tag(tag.0, tag.1 & 0xFF00);
        if self.repeating_elements.contains(&element_key) {
            return self.by_tag.get(&element_key).copied();
        }

        if tag.is_private_creator() {
            Some(&PRIVATE_CREATOR_ENTRY)
        } else if tag.is_group_length() {
            Some(&GROUP_LENGTH_ENTRY)
        } else {
            None
        }
    }
}

/// Generic Group Length dictionary entry.
static GROUP_LENGTH_ENTRY: Entry = DataDictionaryEntryRef {
    tag: TagRange::GroupLength,
    alias: "GenericGroupLength",
    vr: VirtualVr::Exact(VR::UL),
    vm: ValueMultiplicity::ONE,
    retired: false,
};

/// Generic Private Creator dictionary entry.
static PRIVATE_CREATOR_ENTRY: Entry = DataDictionaryEntryRef {
    tag: TagRange::PrivateCreator,
    alias: "PrivateCreator",
    vr: VirtualVr::Exact(VR::LO),
    vm: ValueMultiplicity::ONE,
    retired: false,
};

/// A data element dictionary which consults
/// the standard DICOM attribute registry.
///
/// This is the dictionary to pass to the decoding routines
/// unless a custom or partial dictionary is wanted.
/// The registry is immutable and built once, upon first use,
/// so the unit value can be copied into every decode call.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StandardDataDictionary;

impl DataDictionary for StandardDataDictionary {
    type Entry = Entry;

    fn by_name(&self, name: &str) -> Option<&Self::Entry> {
        registry().by_name.get(name).copied()
    }

    fn by_tag(&self, tag: Tag) -> Option<&Self::Entry> {
        registry().get(tag)
    }
}

impl fmt::Display for StandardDataDictionary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("Standard DICOM Data Dictionary")
    }
}

#[cfg(test)]
mod tests {
    use super::StandardDataDictionary;
    use dcmtlv_core::dictionary::{
        DataDictionary, DataDictionaryEntry, TagRange::*, ValueMultiplicity, VirtualVr,
    };
    use dcmtlv_core::header::{Tag, VR};

    #[test]
    fn smoke_test() {
        let dict = StandardDataDictionary;

        let patient_name = dict.by_name("PatientName").unwrap();
        assert_eq!(patient_name.tag, Single(Tag(0x0010, 0x0010)));
        assert_eq!(patient_name.vr, VirtualVr::Exact(VR::PN));
        assert_eq!(patient_name.vm, ValueMultiplicity::ONE);
        assert!(!patient_name.retired);

        let pixel_data = dict
            .by_tag(Tag(0x7FE0, 0x0010))
            .expect("Pixel Data attribute should exist");
        assert_eq!(pixel_data.tag, Single(Tag(0x7FE0, 0x0010)));
        assert_eq!(pixel_data.alias, "PixelData");
        assert_eq!(pixel_data.vr.relaxed(), VR::OW);

        let window_center = dict.by_tag(Tag(0x0028, 0x1050)).unwrap();
        assert_eq!(window_center.vr(), VirtualVr::Exact(VR::DS));
        assert!(window_center.vm().contains(3));

        let contour_data = dict.by_name("ContourData").unwrap();
        assert!(contour_data.vm.contains(6));
        assert!(!contour_data.vm.contains(4));
    }

    #[test]
    fn repeating_groups_and_elements() {
        let dict = StandardDataDictionary;

        let overlay_data = dict
            .by_tag(Tag(0x60EE, 0x3000))
            .expect("Repeated Overlay Data attribute should exist");
        assert_eq!(overlay_data.tag, Group100(Tag(0x6000, 0x3000)));
        assert_eq!(overlay_data.alias, "OverlayData");
        assert_eq!(overlay_data.vr.relaxed(), VR::OW);

        let curve = dict.by_tag(Tag(0x5002, 0x0010)).unwrap();
        assert_eq!(curve.alias, "NumberOfPoints");
        assert!(curve.retired);

        let source_ids = dict.by_tag(Tag(0x0020, 0x3105)).unwrap();
        assert_eq!(source_ids.tag, Element100(Tag(0x0020, 0x3100)));

        // not a repeating group
        assert!(dict.by_tag(Tag(0x0028, 0x3005)).is_none());
        // private groups within an overlay range
        assert!(dict.by_tag(Tag(0x6001, 0x3000)).is_none());
        assert_eq!(
            dict.by_tag(Tag(0x6001, 0x0010)).map(|e| e.alias),
            Some("PrivateCreator")
        );
    }

    #[test]
    fn registry_spans_all_modules() {
        let dict = StandardDataDictionary;
        assert!(super::registry().len() > 4000);

        let columns = dict.by_tag(Tag(0x0048, 0x0006)).unwrap();
        assert_eq!(columns.alias, "TotalPixelMatrixColumns");
        assert_eq!(columns.vr, VirtualVr::Exact(VR::UL));

        let segments = dict.by_tag(Tag(0x0062, 0x0002)).unwrap();
        assert_eq!(segments.alias, "SegmentSequence");
        assert_eq!(segments.vr, VirtualVr::Exact(VR::SQ));
        assert_eq!(
            dict.by_name("SegmentSequence").map(|e| e.tag),
            Some(Single(Tag(0x0062, 0x0002)))
        );

        for (tag, vr) in [
            (Tag(0x0040, 0xA730), VR::SQ),
            (Tag(0x300A, 0x00B0), VR::SQ),
            (Tag(0x0018, 0x9087), VR::FD),
            (Tag(0x0022, 0x1531), VR::OF),
            (Tag(0x0066, 0x0040), VR::OL),
            (Tag(0x0072, 0x0081), VR::OV),
        ] {
            assert_eq!(dict.by_tag(tag).and_then(|e| e.vr.exact()), Some(vr), "{}", tag);
        }

        let retired = dict.by_tag(Tag(0x0018, 0x1240)).unwrap();
        assert_eq!(retired.alias, "UpperLowerPixelValues");
        assert!(retired.retired);
    }

    #[test]
    fn generic_entries() {
        let dict = StandardDataDictionary;

        let creator = dict.by_tag(Tag(0x0029, 0x0010)).unwrap();
        assert_eq!(creator.tag, PrivateCreator);
        assert_eq!(creator.vr.exact(), Some(VR::LO));

        let group_length = dict.by_tag(Tag(0x0018, 0x0000)).unwrap();
        assert_eq!(group_length.tag, GroupLength);
        assert_eq!(group_length.vr.exact(), Some(VR::UL));

        // private data elements are unknown to the standard registry
        assert!(dict.by_tag(Tag(0x0029, 0x1010)).is_none());
    }

    #[test]
    fn constants_available() {
        use crate::tags::*;
        assert_eq!(PATIENT_NAME, Tag(0x0010, 0x0010));
        assert_eq!(MODALITY, Tag(0x0008, 0x0060));
        assert_eq!(PIXEL_DATA, Tag(0x7FE0, 0x0010));
        assert_eq!(STATUS, Tag(0x0000, 0x0900));
        assert_eq!(SOP_INSTANCE_UID, Tag(0x0008, 0x0018));
        assert_eq!(OVERLAY_DATA, Tag(0x6000, 0x3000));
    }

    #[test]
    fn can_parse_tags() {
        let dict = StandardDataDictionary;

        assert_eq!(dict.parse_tag("(7FE0,0010)"), Some(crate::tags::PIXEL_DATA));
        assert_eq!(dict.parse_tag("0010,21C0"), Some(Tag(0x0010, 0x21C0)));
        assert_eq!(
            dict.parse_tag("OperatorsName"),
            Some(crate::tags::OPERATORS_NAME)
        );
        assert_eq!(
            dict.by_expr("(0028,0010)").map(|e| e.alias),
            Some("Rows")
        );

        // can't parse these
        assert_eq!(dict.parse_tag(""), None);
        assert_eq!(dict.parse_tag("1111,2222,3333"), None);
        assert_eq!(dict.parse_tag("OperatorNickname"), None);
    }
}
