//! Creator-keyed registrations for private attributes.
//!
//! A private data element `(gggg,xxee)` belongs to the block
//! reserved by the private creator element `(gggg,00xx)`.
//! Its meaning, and thus its value representation,
//! can only be known from the creator's identifier string,
//! so private attributes cannot live in the public tag registry.

use std::collections::HashMap;

use super::{DataDictionaryEntryBuf, TagRange, ValueMultiplicity, VirtualVr};
use crate::header::Tag;

/// A dictionary of private attributes,
/// keyed by private creator identifier, group and element offset.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct PrivateDataDictionary {
    /// creator → (group, element offset) → entry
    creators: HashMap<String, HashMap<(u16, u8), DataDictionaryEntryBuf>>,
}

impl PrivateDataDictionary {
    /// Create an empty private dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a private attribute.
    ///
    /// `element` is the low byte of the element number,
    /// which is the offset of the attribute within the creator's block.
    pub fn register(
        &mut self,
        creator: &str,
        group: u16,
        element: u8,
        vr: impl Into<VirtualVr>,
        alias: impl Into<String>,
    ) -> &mut Self {
        let entry = DataDictionaryEntryBuf {
            tag: TagRange::Element100(Tag(group, u16::from(element))),
            alias: alias.into(),
            vr: vr.into(),
            vm: ValueMultiplicity::ONE,
            retired: false,
        };
        self.creators
            .entry(normalize_creator(creator).to_string())
            .or_default()
            .insert((group, element), entry);
        self
    }

    /// Builder-style variant of [`register`](PrivateDataDictionary::register).
    pub fn with(
        mut self,
        creator: &str,
        group: u16,
        element: u8,
        vr: impl Into<VirtualVr>,
        alias: impl Into<String>,
    ) -> Self {
        self.register(creator, group, element, vr, alias);
        self
    }

    /// Look up a private data element,
    /// given the identifier of the creator which reserved its block.
    ///
    /// Trailing padding in the creator string is ignored.
    pub fn get(&self, creator: &str, tag: Tag) -> Option<&DataDictionaryEntryBuf> {
        self.creators
            .get(normalize_creator(creator))?
            .get(&(tag.group(), (tag.element() & 0x00FF) as u8))
    }

    /// Whether no private attribute was registered.
    pub fn is_empty(&self) -> bool {
        self.creators.is_empty()
    }
}

fn normalize_creator(creator: &str) -> &str {
    creator.trim_end_matches([' ', '\0'])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::DataDictionaryEntry;
    use crate::VR;

    #[test]
    fn lookup_by_creator() {
        let dict = PrivateDataDictionary::new()
            .with("ACME 1.1", 0x0029, 0x10, VR::OB, "AcmeHeaderInfo")
            .with("ACME 1.1", 0x0029, 0x11, VR::DS, "AcmeScale");

        // block 0x10 of group 0029 was reserved by "ACME 1.1"
        let entry = dict.get("ACME 1.1 ", Tag(0x0029, 0x1011)).unwrap();
        assert_eq!(entry.alias(), "AcmeScale");
        assert_eq!(entry.vr().relaxed(), VR::DS);

        // same offset in another block
        assert!(dict.get("ACME 1.1", Tag(0x0029, 0x2010)).is_some());
        assert!(dict.get("OTHER", Tag(0x0029, 0x1010)).is_none());
        assert!(dict.get("ACME 1.1", Tag(0x0031, 0x1010)).is_none());
    }
}
