//! This module contains reusable components for decoding text in DICOM
//! data structures, including support for character repertoires.
//!
//! The character repertoires supported here are:
//! - the default repertoire (ISO-IR 6)
//! - ISO 8859 parts 1 to 9 and 15
//! - JIS X 0201, JIS X 0208 and JIS X 0212 (Japanese)
//! - KS X 1001 (Korean)
//! - TIS 620-2533 (Thai)
//! - GB 2312, GBK and GB 18030 (Chinese)
//! - ISO 10646 in UTF-8
//!
//! A data set names its repertoires in _Specific Character Set_ (0008,0005).
//! A single value selects one repertoire for the whole text.
//! Multiple values, or defined terms of the form `ISO 2022 IR nnn`,
//! enable code extension techniques:
//! the text then switches repertoires through escape sequences
//! (see [`iso2022`]).
//!
//! Values are always decoded as a whole before splitting on the backslash,
//! since the second byte of a multi-byte character may be `0x5C`.

use encoding::all::{
    GB18030, GBK, ISO_8859_1, ISO_8859_15, ISO_8859_2, ISO_8859_3, ISO_8859_4, ISO_8859_5,
    ISO_8859_6, ISO_8859_7, ISO_8859_8, UTF_8, WINDOWS_1254, WINDOWS_874,
};
use encoding::{DecoderTrap, EncodingRef};
use snafu::{Backtrace, Snafu};
use std::borrow::Cow;
use std::fmt;

use dcmtlv_core::value::C;

pub mod iso2022;

/// An error type for text decoding issues.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum DecodeTextError {
    /// A custom error message,
    /// for when the underlying error type does not encode error semantics
    /// into type variants.
    #[snafu(display("{}", message))]
    DecodeCustom {
        /// The error message in plain text.
        message: Cow<'static, str>,
        /// The generated backtrace, if available.
        backtrace: Backtrace,
    },
    /// An escape sequence which does not designate a supported repertoire.
    #[snafu(display("Unsupported escape sequence at byte {}", position))]
    UnsupportedEscape {
        /// position of the escape byte in the text
        position: usize,
        backtrace: Backtrace,
    },
    /// A byte which does not belong to the active repertoire.
    #[snafu(display("Invalid byte {:#04X} at position {}", byte, position))]
    InvalidByte {
        /// the offending byte
        byte: u8,
        /// position of the byte in the text
        position: usize,
        backtrace: Backtrace,
    },
}

type DecodeResult<T> = Result<T, DecodeTextError>;

/// Error returned when a _Specific Character Set_ value is not supported.
#[derive(Debug, Snafu)]
#[snafu(display("Unsupported character set `{}`", term))]
pub struct UnsupportedCharacterSet {
    /// the defined term which was not recognized
    pub term: String,
    backtrace: Backtrace,
}

/// A holder of decoding mechanisms for text in DICOM content,
/// which according to the standard, depends on the specific character set.
pub trait TextCodec {
    /// Obtain the defined term (unique name) of the text encoding,
    /// as it would appear in _Specific Character Set_ (0008,0005).
    fn name(&self) -> Cow<'static, str>;

    /// Decode the given byte buffer as a single string. The resulting string
    /// _may_ contain backslash characters ('\') to delimit individual values,
    /// and should be split later on if required.
    fn decode(&self, text: &[u8]) -> DecodeResult<String>;

    /// Decode a person name value.
    ///
    /// Under code extensions,
    /// the `^` and `=` delimiters also restore the initial repertoires.
    fn decode_person_name(&self, text: &[u8]) -> DecodeResult<String> {
        self.decode(text)
    }
}

impl<'a, T: ?Sized> TextCodec for &'a T
where
    T: TextCodec,
{
    fn name(&self) -> Cow<'static, str> {
        (**self).name()
    }

    fn decode(&self, text: &[u8]) -> DecodeResult<String> {
        (**self).decode(text)
    }

    fn decode_person_name(&self, text: &[u8]) -> DecodeResult<String> {
        (**self).decode_person_name(text)
    }
}

/// A single character repertoire,
/// named by a defined term of _Specific Character Set_.
#[derive(Debug, Copy, Clone, Eq, Hash, PartialEq, PartialOrd, Ord)]
#[non_exhaustive]
pub enum CharacterSetTerm {
    /// **ISO-IR 6**: the default character repertoire.
    Default,
    /// **ISO-IR 100** (ISO-8859-1): Latin alphabet no. 1, Western Europe.
    IsoIr100,
    /// **ISO-IR 101** (ISO-8859-2): Latin alphabet no. 2, Central/Eastern Europe.
    IsoIr101,
    /// **ISO-IR 109** (ISO-8859-3): Latin alphabet no. 3, South Europe.
    IsoIr109,
    /// **ISO-IR 110** (ISO-8859-4): Latin alphabet no. 4, North Europe.
    IsoIr110,
    /// **ISO-IR 144** (ISO-8859-5): Latin/Cyrillic.
    IsoIr144,
    /// **ISO-IR 127** (ISO-8859-6): Latin/Arabic.
    IsoIr127,
    /// **ISO-IR 126** (ISO-8859-7): Latin/Greek.
    IsoIr126,
    /// **ISO-IR 138** (ISO-8859-8): Latin/Hebrew.
    IsoIr138,
    /// **ISO-IR 148** (ISO-8859-9): Latin alphabet no. 5, Turkish.
    IsoIr148,
    /// **ISO-IR 203** (ISO-8859-15): Latin alphabet no. 9.
    IsoIr203,
    /// **ISO-IR 13**: JIS X 0201 Romaji and half-width Katakana.
    IsoIr13,
    /// **ISO-IR 166**: TIS 620-2533 Thai.
    IsoIr166,
    /// **ISO-IR 87**: JIS X 0208 Kanji. Code extensions only.
    IsoIr87,
    /// **ISO-IR 159**: JIS X 0212 supplementary Kanji. Code extensions only.
    IsoIr159,
    /// **ISO-IR 149**: KS X 1001 Hangul and Hanja. Code extensions only.
    IsoIr149,
    /// **ISO-IR 58**: GB 2312 Simplified Chinese. Code extensions only.
    IsoIr58,
    /// **ISO-IR 192**: Unicode in UTF-8.
    IsoIr192,
    /// **GB18030**: Simplified Chinese.
    Gb18030,
    /// **GBK**: Simplified Chinese.
    Gbk,
}

impl CharacterSetTerm {
    /// Parse a defined term of _Specific Character Set_,
    /// also telling whether it was written in the ISO 2022 form.
    ///
    /// An empty term stands for the default repertoire.
    ///
    /// # Example
    ///
    /// ```
    /// # use dcmtlv_encoding::text::CharacterSetTerm;
    /// assert_eq!(
    ///     CharacterSetTerm::from_code("ISO_IR 100"),
    ///     Some((CharacterSetTerm::IsoIr100, false)),
    /// );
    /// assert_eq!(
    ///     CharacterSetTerm::from_code("ISO 2022 IR 87"),
    ///     Some((CharacterSetTerm::IsoIr87, true)),
    /// );
    /// ```
    pub fn from_code(code: &str) -> Option<(Self, bool)> {
        use self::CharacterSetTerm::*;
        let code = code.trim_matches(|c: char| c == ' ' || c == '\0');
        if code.is_empty() {
            return Some((Default, false));
        }
        if let Some(number) = code.strip_prefix("ISO 2022 IR ") {
            let term = match number {
                "6" => Default,
                "100" => IsoIr100,
                "101" => IsoIr101,
                "109" => IsoIr109,
                "110" => IsoIr110,
                "144" => IsoIr144,
                "127" => IsoIr127,
                "126" => IsoIr126,
                "138" => IsoIr138,
                "148" => IsoIr148,
                "203" => IsoIr203,
                "13" => IsoIr13,
                "166" => IsoIr166,
                "87" => IsoIr87,
                "159" => IsoIr159,
                "149" => IsoIr149,
                "58" => IsoIr58,
                _ => return None,
            };
            return Some((term, true));
        }
        let term = match code {
            "Default" | "ISO_IR_6" | "ISO_IR 6" => Default,
            "ISO_IR 100" | "ISO_IR_100" => IsoIr100,
            "ISO_IR 101" | "ISO_IR_101" => IsoIr101,
            "ISO_IR 109" | "ISO_IR_109" => IsoIr109,
            "ISO_IR 110" | "ISO_IR_110" => IsoIr110,
            "ISO_IR 144" | "ISO_IR_144" => IsoIr144,
            "ISO_IR 127" | "ISO_IR_127" => IsoIr127,
            "ISO_IR 126" | "ISO_IR_126" => IsoIr126,
            "ISO_IR 138" | "ISO_IR_138" => IsoIr138,
            "ISO_IR 148" | "ISO_IR_148" => IsoIr148,
            "ISO_IR 203" | "ISO_IR_203" => IsoIr203,
            "ISO_IR 13" | "ISO_IR_13" => IsoIr13,
            "ISO_IR 166" | "ISO_IR_166" => IsoIr166,
            "ISO_IR 192" | "ISO_IR_192" => IsoIr192,
            "GB18030" => Gb18030,
            "GBK" => Gbk,
            _ => return None,
        };
        Some((term, false))
    }

    /// The defined term in its single-value form,
    /// or in the ISO 2022 form for the repertoires only usable with code extensions.
    pub fn name(self) -> &'static str {
        use self::CharacterSetTerm::*;
        match self {
            Default => "ISO_IR 6",
            IsoIr100 => "ISO_IR 100",
            IsoIr101 => "ISO_IR 101",
            IsoIr109 => "ISO_IR 109",
            IsoIr110 => "ISO_IR 110",
            IsoIr144 => "ISO_IR 144",
            IsoIr127 => "ISO_IR 127",
            IsoIr126 => "ISO_IR 126",
            IsoIr138 => "ISO_IR 138",
            IsoIr148 => "ISO_IR 148",
            IsoIr203 => "ISO_IR 203",
            IsoIr13 => "ISO_IR 13",
            IsoIr166 => "ISO_IR 166",
            IsoIr87 => "ISO 2022 IR 87",
            IsoIr159 => "ISO 2022 IR 159",
            IsoIr149 => "ISO 2022 IR 149",
            IsoIr58 => "ISO 2022 IR 58",
            IsoIr192 => "ISO_IR 192",
            Gb18030 => "GB18030",
            Gbk => "GBK",
        }
    }

    /// The codec for single-byte repertoires whose
    /// upper half is an ISO 8859 style G1 set.
    pub(crate) fn single_byte_encoding(self) -> Option<EncodingRef> {
        use self::CharacterSetTerm::*;
        let encoding: EncodingRef = match self {
            IsoIr100 => ISO_8859_1,
            IsoIr101 => ISO_8859_2,
            IsoIr109 => ISO_8859_3,
            IsoIr110 => ISO_8859_4,
            IsoIr144 => ISO_8859_5,
            IsoIr127 => ISO_8859_6,
            IsoIr126 => ISO_8859_7,
            IsoIr138 => ISO_8859_8,
            IsoIr148 => WINDOWS_1254,
            IsoIr203 => ISO_8859_15,
            IsoIr166 => WINDOWS_874,
            _ => return None,
        };
        Some(encoding)
    }

    /// Whether this repertoire can only be used with code extensions.
    fn requires_extensions(self) -> bool {
        use self::CharacterSetTerm::*;
        matches!(self, IsoIr87 | IsoIr159 | IsoIr149 | IsoIr58)
    }

    /// Whether this repertoire replaces code extensions entirely.
    fn forbids_extensions(self) -> bool {
        use self::CharacterSetTerm::*;
        matches!(self, IsoIr192 | Gb18030 | Gbk)
    }

    /// Decode text entirely in this repertoire, without code extensions.
    fn decode_plain(self, text: &[u8]) -> DecodeResult<String> {
        use self::CharacterSetTerm::*;
        let encoding: EncodingRef = match self {
            // ISO-8859-1 is a superset of the default repertoire
            Default => ISO_8859_1,
            IsoIr13 => return iso2022::decode_jis_x0201(text),
            IsoIr192 => UTF_8,
            Gb18030 => GB18030,
            Gbk => GBK,
            IsoIr87 | IsoIr159 | IsoIr149 | IsoIr58 => {
                return iso2022::Iso2022Decoder::new(self).decode(text, false)
            }
            other => match other.single_byte_encoding() {
                Some(encoding) => encoding,
                None => ISO_8859_1,
            },
        };
        encoding
            .decode(text, DecoderTrap::Strict)
            .map_err(|message| DecodeCustomSnafu { message }.build())
    }
}

impl fmt::Display for CharacterSetTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The character set in effect for a data set,
/// as declared by _Specific Character Set_ (0008,0005).
#[derive(Debug, Clone, Eq, Hash, PartialEq)]
pub struct SpecificCharacterSet {
    terms: C<CharacterSetTerm>,
    extensions: bool,
}

impl Default for SpecificCharacterSet {
    fn default() -> Self {
        SpecificCharacterSet {
            terms: C::from_elem(CharacterSetTerm::Default, 1),
            extensions: false,
        }
    }
}

impl From<CharacterSetTerm> for SpecificCharacterSet {
    fn from(term: CharacterSetTerm) -> Self {
        SpecificCharacterSet {
            terms: C::from_elem(term, 1),
            extensions: term.requires_extensions(),
        }
    }
}

impl SpecificCharacterSet {
    /// Build the character set from the values of _Specific Character Set_.
    ///
    /// No values at all means the default repertoire.
    /// Fails on the first unrecognized defined term.
    pub fn from_values<S>(values: &[S]) -> Result<Self, UnsupportedCharacterSet>
    where
        S: AsRef<str>,
    {
        if values.is_empty() {
            return Ok(Self::default());
        }
        let mut terms = C::new();
        let mut extensions = values.len() > 1;
        for value in values {
            let value = value.as_ref();
            let (term, iso2022) = CharacterSetTerm::from_code(value)
                .ok_or_else(|| UnsupportedCharacterSetSnafu { term: value.trim() }.build())?;
            extensions |= iso2022 || term.requires_extensions();
            terms.push(term);
        }
        if terms[0].forbids_extensions() {
            extensions = false;
        }
        Ok(SpecificCharacterSet { terms, extensions })
    }

    /// The repertoire in effect at the start of each value.
    pub fn initial(&self) -> CharacterSetTerm {
        self.terms
            .first()
            .copied()
            .unwrap_or(CharacterSetTerm::Default)
    }

    /// All declared repertoires.
    pub fn terms(&self) -> &[CharacterSetTerm] {
        &self.terms
    }

    /// Whether escape sequences may switch repertoires within a value.
    pub fn has_extensions(&self) -> bool {
        self.extensions
    }

    /// Whether this is the default repertoire alone.
    pub fn is_default(&self) -> bool {
        !self.extensions && self.initial() == CharacterSetTerm::Default
    }

    fn decode_impl(&self, text: &[u8], person_name: bool) -> DecodeResult<String> {
        if self.extensions {
            iso2022::Iso2022Decoder::new(self.initial()).decode(text, person_name)
        } else {
            self.initial().decode_plain(text)
        }
    }
}

impl TextCodec for SpecificCharacterSet {
    fn name(&self) -> Cow<'static, str> {
        if self.terms.len() == 1 && !self.extensions {
            return Cow::Borrowed(self.initial().name());
        }
        let names: Vec<_> = self
            .terms
            .iter()
            .map(|term| match term {
                CharacterSetTerm::Default => String::new(),
                term => {
                    let name = term.name();
                    match name.strip_prefix("ISO_IR ") {
                        Some(number) => format!("ISO 2022 IR {}", number),
                        None => name.to_string(),
                    }
                }
            })
            .collect();
        Cow::Owned(names.join("\\"))
    }

    fn decode(&self, text: &[u8]) -> DecodeResult<String> {
        self.decode_impl(text, false)
    }

    fn decode_person_name(&self, text: &[u8]) -> DecodeResult<String> {
        self.decode_impl(text, true)
    }
}

/// Decode text with the default repertoire.
///
/// This never fails: bytes outside of the repertoire
/// are mapped as in ISO-8859-1.
pub fn decode_default_lossy(text: &[u8]) -> String {
    text.iter().map(|&b| char::from(b)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn charset(values: &[&str]) -> SpecificCharacterSet {
        SpecificCharacterSet::from_values(values).unwrap()
    }

    #[test]
    fn iso_ir_6_baseline() {
        let cs = SpecificCharacterSet::default();
        assert!(cs.is_default());
        assert_eq!(cs.decode(b"Smith^John").unwrap(), "Smith^John");
        assert_eq!(cs.name(), "ISO_IR 6");
    }

    #[test]
    fn iso_ir_192_baseline() {
        let cs = charset(&["ISO_IR 192"]);
        assert_eq!(
            cs.decode("Simões^John".as_bytes()).unwrap(),
            "Simões^John"
        );
        assert_eq!(
            cs.decode("Иванков^Андрей".as_bytes()).unwrap(),
            "Иванков^Андрей"
        );
        // invalid UTF-8
        assert!(cs.decode(b"Sim\xF5es").is_err());
    }

    #[test]
    fn iso_ir_100_baseline() {
        let cs = charset(&["ISO_IR 100"]);
        assert_eq!(cs.decode(b"Sim\xF5es^Jo\xE3o").unwrap(), "Simões^João");
        assert_eq!(cs.decode(b"G\xfcnther^Hans").unwrap(), "Günther^Hans");
    }

    #[test]
    fn iso_ir_101_baseline() {
        let cs = charset(&["ISO_IR 101"]);
        assert_eq!(cs.decode(b"G\xfcnther^Hans").unwrap(), "Günther^Hans");
    }

    #[test]
    fn iso_ir_144_baseline() {
        let cs = charset(&["ISO_IR 144"]);
        assert_eq!(
            cs.decode(b"\xb8\xd2\xd0\xdd\xda\xde\xd2^\xb0\xdd\xd4\xe0\xd5\xd9")
                .unwrap(),
            "Иванков^Андрей"
        );
    }

    #[test]
    fn iso_ir_126_greek() {
        // PS3.5 H.3.1
        let cs = charset(&["ISO_IR 126"]);
        assert_eq!(
            cs.decode(b"\xc4\xe9\xef\xed\xf5\xf3\xe9\xef\xf2").unwrap(),
            "Διονυσιος"
        );
    }

    #[test]
    fn iso_ir_13_katakana() {
        let cs = charset(&["ISO_IR 13"]);
        assert_eq!(cs.decode(b"\xd4\xcf\xc0\xde").unwrap(), "ﾔﾏﾀﾞ");
        // 0x5C stays a value delimiter
        assert_eq!(cs.decode(b"\xd4\xcf\xc0\xde\\ABC").unwrap(), "ﾔﾏﾀﾞ\\ABC");
        assert!(cs.decode(b"\xe0").is_err());
    }

    #[test]
    fn gb18030_baseline() {
        // PS3.5 K.2
        let cs = charset(&["GB18030"]);
        assert_eq!(
            cs.decode(b"Wang^XiaoDong=\xcd\xf5^\xd0\xa1\xb6\xab=")
                .unwrap(),
            "Wang^XiaoDong=王^小东="
        );
        assert!(!cs.has_extensions());
    }

    #[test]
    fn parse_values() {
        let cs = charset(&["", "ISO 2022 IR 87"]);
        assert!(cs.has_extensions());
        assert_eq!(
            cs.terms(),
            &[CharacterSetTerm::Default, CharacterSetTerm::IsoIr87]
        );
        assert_eq!(cs.name(), "\\ISO 2022 IR 87");

        let cs = charset(&["ISO 2022 IR 100"]);
        assert!(cs.has_extensions());

        let cs = charset(&["ISO_IR 192 "]);
        assert_eq!(cs.initial(), CharacterSetTerm::IsoIr192);
        assert!(!cs.has_extensions());

        let err = SpecificCharacterSet::from_values(&["ISO_IR 999"]).unwrap_err();
        assert_eq!(err.term, "ISO_IR 999");

        assert!(SpecificCharacterSet::from_values::<&str>(&[]).unwrap().is_default());
    }

    #[test]
    fn lossy_default_never_fails() {
        assert_eq!(decode_default_lossy(b"Sim\xF5es"), "Simões");
    }
}
