//! Core data element dictionary types

use std::fmt;
use std::str::FromStr;

use snafu::{ensure, Backtrace, OptionExt, ResultExt, Snafu};

use crate::{Tag, VR};

/// Specification of a range of tags pertaining to an attribute.
///
/// Most attributes have a unique group and element `(gggg,eeee)`,
/// but a few cover a range of groups or elements instead.
/// For example,
/// _Overlay Data_ (60xx,3000) has more than one possible tag,
/// since it is part of a repeating group.
/// Moreover, a unique variant is defined for group length tags
/// and another one for private creator tags.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TagRange {
    /// Only a specific tag
    Single(Tag),
    /// The two rightmost digits of the _group_ portion are open:
    /// `(GGxx,EEEE)`
    Group100(Tag),
    /// The two rightmost digits of the _element_ portion are open:
    /// `(GGGG,EExx)`
    Element100(Tag),
    /// Generic group length tag `(gggg,0000)`.
    GroupLength,
    /// Generic private creator tag,
    /// refers to any tag from (gggg,0010) to (gggg,00FF),
    /// where `gggg` is an odd number.
    PrivateCreator,
}

impl TagRange {
    /// Retrieve the inner tag representation of this range.
    ///
    /// Open components are zeroed out.
    /// A group length range yields `(0000,0000)`
    /// and a private creator range yields `(0009,0010)`.
    pub fn inner(self) -> Tag {
        match self {
            TagRange::Single(tag) => tag,
            TagRange::Group100(tag) => tag,
            TagRange::Element100(tag) => tag,
            TagRange::GroupLength => Tag(0x0000, 0x0000),
            TagRange::PrivateCreator => Tag(0x0009, 0x0010),
        }
    }

    /// Check whether the given tag falls within this range.
    pub fn contains(self, tag: Tag) -> bool {
        match self {
            TagRange::Single(t) => t == tag,
            // repeating groups are even, odd groups in the range are private
            TagRange::Group100(t) => tag.0 & 0xFF01 == t.0 && tag.1 == t.1,
            TagRange::Element100(t) => tag.0 == t.0 && tag.1 & 0xFF00 == t.1,
            TagRange::GroupLength => tag.is_group_length(),
            TagRange::PrivateCreator => tag.is_private_creator(),
        }
    }
}

/// An error returned when parsing an invalid tag range.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum TagRangeParseError {
    /// There is no group part.
    #[snafu(display("Not enough tag components, expected tag (group, element)"))]
    MissingTag { backtrace: Backtrace },
    /// There is no comma separated element part.
    #[snafu(display("Not enough tag components, expected tag element"))]
    MissingTagElement { backtrace: Backtrace },
    /// The group part is not 4 characters long.
    #[snafu(display("tag component `group` has an invalid length: got {} but must be 4", got))]
    InvalidGroupLength { got: usize, backtrace: Backtrace },
    /// The element part is not 4 characters long.
    #[snafu(display("tag component `element` has an invalid length: got {} but must be 4", got))]
    InvalidElementLength { got: usize, backtrace: Backtrace },
    /// The `x` wildcards do not form a supported range,
    /// such as `ggxx,eeee` or `gggg,eexx`.
    #[snafu(display("unsupported tag range"))]
    UnsupportedTagRange { backtrace: Backtrace },
    /// The group part is not hexadecimal.
    #[snafu(display("invalid tag component `group`"))]
    InvalidTagGroup {
        backtrace: Backtrace,
        source: std::num::ParseIntError,
    },
    /// The element part is not hexadecimal.
    #[snafu(display("invalid tag component `element`"))]
    InvalidTagElement {
        backtrace: Backtrace,
        source: std::num::ParseIntError,
    },
}

impl FromStr for TagRange {
    type Err = TagRangeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s
            .strip_prefix('(')
            .and_then(|s| s.strip_suffix(')'))
            .unwrap_or(s);
        let mut parts = s.split(',');
        let group = parts.next().context(MissingTagSnafu)?;
        let elem = parts.next().context(MissingTagElementSnafu)?;
        ensure!(group.len() == 4, InvalidGroupLengthSnafu { got: group.len() });
        ensure!(elem.len() == 4, InvalidElementLengthSnafu { got: elem.len() });

        match (&group.as_bytes()[2..], &elem.as_bytes()[2..]) {
            (b"xx", b"xx") => UnsupportedTagRangeSnafu.fail(),
            (b"xx", _) => {
                let group =
                    u16::from_str_radix(&group[..2], 16).context(InvalidTagGroupSnafu)? << 8;
                let elem = u16::from_str_radix(elem, 16).context(InvalidTagElementSnafu)?;
                Ok(TagRange::Group100(Tag(group, elem)))
            }
            (_, b"xx") => {
                let group = u16::from_str_radix(group, 16).context(InvalidTagGroupSnafu)?;
                let elem =
                    u16::from_str_radix(&elem[..2], 16).context(InvalidTagElementSnafu)? << 8;
                Ok(TagRange::Element100(Tag(group, elem)))
            }
            (_, _) => {
                let group = u16::from_str_radix(group, 16).context(InvalidTagGroupSnafu)?;
                let elem = u16::from_str_radix(elem, 16).context(InvalidTagElementSnafu)?;
                Ok(TagRange::Single(Tag(group, elem)))
            }
        }
    }
}

/// A "virtual" value representation (VR) descriptor
/// which extends the standard enumeration with context-dependent VRs.
///
/// As an example, the _Pixel Data_ attribute
/// can have a value representation of either [`OB`](VR::OB) or [`OW`](VR::OW).
#[derive(Debug, Copy, Clone, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum VirtualVr {
    /// The value representation is exactly known
    /// and does not depend on context.
    Exact(VR),
    /// A pixel sample value with a short magnitude:
    /// [`US`](VR::US) or [`SS`](VR::SS),
    /// depending on _Pixel Representation_.
    Xs,
    /// Overlay data, either [`OB`](VR::OB) or [`OW`](VR::OW).
    Ox,
    /// Pixel data, either [`OB`](VR::OB) or [`OW`](VR::OW).
    Px,
    /// LUT data, either [`US`](VR::US) or [`OW`](VR::OW).
    Lt,
    /// LUT data which may also be signed:
    /// [`US`](VR::US), [`SS`](VR::SS) or [`OW`](VR::OW).
    Xt,
}

impl From<VR> for VirtualVr {
    fn from(value: VR) -> Self {
        VirtualVr::Exact(value)
    }
}

impl VirtualVr {
    /// Return the underlying value representation
    /// in the case that it can be unambiguously defined without context.
    pub fn exact(self) -> Option<VR> {
        match self {
            VirtualVr::Exact(vr) => Some(vr),
            _ => None,
        }
    }

    /// Return the underlying value representation,
    /// making a relaxed conversion if it cannot be
    /// accurately resolved without context.
    ///
    /// - [`Xs`](VirtualVr::Xs) is relaxed to [`US`](VR::US)
    /// - [`Ox`](VirtualVr::Ox), [`Px`](VirtualVr::Px),
    ///   [`Lt`](VirtualVr::Lt) and [`Xt`](VirtualVr::Xt)
    ///   are relaxed to [`OW`](VR::OW)
    pub fn relaxed(self) -> VR {
        match self {
            VirtualVr::Exact(vr) => vr,
            VirtualVr::Xs => VR::US,
            VirtualVr::Ox | VirtualVr::Px | VirtualVr::Lt | VirtualVr::Xt => VR::OW,
        }
    }
}

/// Value multiplicity constraint of an attribute.
///
/// A multiplicity of `2-2n` is represented as
/// `min: 2, max: None, step: 2`.
#[derive(Debug, Copy, Clone, Eq, Hash, PartialEq)]
pub struct ValueMultiplicity {
    /// minimum number of values
    pub min: u32,
    /// maximum number of values, `None` if unbounded
    pub max: Option<u32>,
    /// the number of values must be a multiple of this
    pub step: u32,
}

impl ValueMultiplicity {
    /// Exactly one value.
    pub const ONE: ValueMultiplicity = ValueMultiplicity::exactly(1);

    /// Exactly `n` values.
    pub const fn exactly(n: u32) -> Self {
        ValueMultiplicity {
            min: n,
            max: Some(n),
            step: 1,
        }
    }

    /// Check whether `n` values satisfy this constraint.
    pub fn contains(&self, n: u32) -> bool {
        n >= self.min && self.max.map_or(true, |max| n <= max) && n % self.step == 0
    }
}

impl Default for ValueMultiplicity {
    fn default() -> Self {
        ValueMultiplicity::ONE
    }
}

/// An error returned when parsing an invalid value multiplicity.
#[derive(Debug, Snafu)]
#[snafu(display("invalid value multiplicity `{}`", text))]
pub struct ParseVmError {
    text: String,
    backtrace: Backtrace,
}

impl FromStr for ValueMultiplicity {
    type Err = ParseVmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseVmSnafu { text: s };
        let (min, max) = match s.split_once('-') {
            Some(parts) => parts,
            None => {
                let n: u32 = s.trim().parse().ok().with_context(err)?;
                return Ok(ValueMultiplicity::exactly(n));
            }
        };
        let min: u32 = min.trim().parse().ok().with_context(err)?;
        let max = max.trim();
        if let Some(factor) = max.strip_suffix('n') {
            let step = if factor.is_empty() {
                1
            } else {
                factor.parse().ok().with_context(err)?
            };
            ensure!(step > 0, err());
            Ok(ValueMultiplicity {
                min,
                max: None,
                step,
            })
        } else {
            let max: u32 = max.parse().ok().with_context(err)?;
            ensure!(max >= min, err());
            Ok(ValueMultiplicity {
                min,
                max: Some(max),
                step: 1,
            })
        }
    }
}

impl fmt::Display for ValueMultiplicity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match (self.max, self.step) {
            (Some(max), _) if max == self.min => write!(f, "{}", max),
            (Some(max), _) => write!(f, "{}-{}", self.min, max),
            (None, 1) => write!(f, "{}-n", self.min),
            (None, step) => write!(f, "{}-{}n", self.min, step),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tag_range() {
        let tag: TagRange = "(1234,5678)".parse().unwrap();
        assert_eq!(tag, TagRange::Single(Tag(0x1234, 0x5678)));

        let tag: TagRange = "1234,5678".parse().unwrap();
        assert_eq!(tag, TagRange::Single(Tag(0x1234, 0x5678)));

        let tag: TagRange = "60xx,3000".parse().unwrap();
        assert_eq!(tag, TagRange::Group100(Tag(0x6000, 0x3000)));
        assert!(tag.contains(Tag(0x601E, 0x3000)));
        assert!(!tag.contains(Tag(0x601E, 0x3001)));
        assert!(!tag.contains(Tag(0x6001, 0x3000)));
        assert!(!tag.contains(Tag(0x601F, 0x3000)));

        let tag: TagRange = "1234,56xx".parse().unwrap();
        assert_eq!(tag, TagRange::Element100(Tag(0x1234, 0x5600)));

        assert!("xxxx,xxxx".parse::<TagRange>().is_err());
        assert!("123,4567".parse::<TagRange>().is_err());
    }

    #[test]
    fn parse_value_multiplicity() {
        let vm: ValueMultiplicity = "1".parse().unwrap();
        assert_eq!(vm, ValueMultiplicity::ONE);
        assert!(vm.contains(1));
        assert!(!vm.contains(2));

        let vm: ValueMultiplicity = "1-3".parse().unwrap();
        assert!(vm.contains(3));
        assert!(!vm.contains(4));
        assert!(!vm.contains(0));

        let vm: ValueMultiplicity = "1-n".parse().unwrap();
        assert!(vm.contains(1));
        assert!(vm.contains(1000));

        let vm: ValueMultiplicity = "2-2n".parse().unwrap();
        assert_eq!(vm.to_string(), "2-2n");
        assert!(vm.contains(4));
        assert!(!vm.contains(3));

        assert!("n".parse::<ValueMultiplicity>().is_err());
        assert!("3-1".parse::<ValueMultiplicity>().is_err());
    }

    #[test]
    fn relaxed_vr() {
        assert_eq!(VirtualVr::Exact(VR::DS).relaxed(), VR::DS);
        assert_eq!(VirtualVr::Xs.relaxed(), VR::US);
        assert_eq!(VirtualVr::Px.relaxed(), VR::OW);
        assert_eq!(VirtualVr::Px.exact(), None);
    }
}
