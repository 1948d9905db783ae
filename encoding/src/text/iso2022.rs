//! Text decoding with ISO 2022 code extension techniques.
//!
//! The G0 set (bytes below 0x80) and the G1 set (bytes from 0x80)
//! are designated by escape sequences.
//! Each value, and each line of a value,
//! starts with the repertoires of the first _Specific Character Set_ value.
//! These are restored at line breaks, tabulations, form feeds, value
//! delimiters and, in person names, at the component group delimiters.

use encoding::all::{
    EUC_JP, GB18030, ISO_8859_1, ISO_8859_15, ISO_8859_2, ISO_8859_3, ISO_8859_4, ISO_8859_5,
    ISO_8859_6, ISO_8859_7, ISO_8859_8, WINDOWS_1254, WINDOWS_874, WINDOWS_949,
};
use encoding::{DecoderTrap, EncodingRef};

use super::{
    CharacterSetTerm, DecodeCustomSnafu, DecodeResult, InvalidByteSnafu, UnsupportedEscapeSnafu,
};

const ESC: u8 = 0x1B;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum G0 {
    /// ISO-IR 6, also standing in for JIS X 0201 Romaji
    Ascii,
    /// JIS X 0208, two bytes per character
    JisX0208,
    /// JIS X 0212, two bytes per character
    JisX0212,
}

#[derive(Copy, Clone)]
enum G1 {
    Unset,
    /// JIS X 0201 Katakana
    Katakana,
    /// the upper half of a single-byte repertoire
    SingleByte(EncodingRef),
    /// KS X 1001, two bytes per character
    KsX1001,
    /// GB 2312, two bytes per character
    Gb2312,
}

enum Designation {
    G0(G0),
    G1(G1),
}

/// Decoder of text using code extensions,
/// starting each value with the repertoires of the given term.
#[derive(Copy, Clone)]
pub struct Iso2022Decoder {
    initial_g0: G0,
    initial_g1: G1,
}

impl Iso2022Decoder {
    pub fn new(initial: CharacterSetTerm) -> Self {
        let initial_g1 = match initial {
            CharacterSetTerm::IsoIr13 => G1::Katakana,
            CharacterSetTerm::IsoIr149 => G1::KsX1001,
            CharacterSetTerm::IsoIr58 => G1::Gb2312,
            term => term
                .single_byte_encoding()
                .map(G1::SingleByte)
                .unwrap_or(G1::Unset),
        };
        Iso2022Decoder {
            initial_g0: G0::Ascii,
            initial_g1,
        }
    }

    /// Decode the whole text.
    pub fn decode(&self, text: &[u8], person_name: bool) -> DecodeResult<String> {
        let mut out = String::with_capacity(text.len());
        let mut g0 = self.initial_g0;
        let mut g1 = self.initial_g1;
        let mut i = 0;

        while i < text.len() {
            let b = text[i];

            if b == ESC {
                let (len, designation) = parse_escape(&text[i + 1..])
                    .ok_or_else(|| UnsupportedEscapeSnafu { position: i }.build())?;
                match designation {
                    Designation::G0(set) => g0 = set,
                    Designation::G1(set) => g1 = set,
                }
                i += 1 + len;
                continue;
            }

            if b < 0x80 {
                match g0 {
                    G0::Ascii => {
                        out.push(char::from(b));
                        if is_reset_byte(b, person_name) {
                            g0 = self.initial_g0;
                            g1 = self.initial_g1;
                        }
                        i += 1;
                    }
                    G0::JisX0208 | G0::JisX0212 => {
                        if !is_graphic(b) {
                            // handled again in the initial state
                            g0 = self.initial_g0;
                            g1 = self.initial_g1;
                            continue;
                        }
                        let end = run_end(text, i, is_graphic);
                        let run = &text[i..end];
                        if run.len() % 2 != 0 {
                            return InvalidByteSnafu {
                                byte: text[end - 1],
                                position: end - 1,
                            }
                            .fail();
                        }
                        let mut euc = Vec::with_capacity(run.len() * 3 / 2);
                        for pair in run.chunks(2) {
                            if g0 == G0::JisX0212 {
                                euc.push(0x8F);
                            }
                            euc.push(pair[0] | 0x80);
                            euc.push(pair[1] | 0x80);
                        }
                        out.push_str(&decode_with(EUC_JP, &euc)?);
                        i = end;
                    }
                }
                continue;
            }

            let end = run_end(text, i, |b| b >= 0x80);
            let run = &text[i..end];
            match g1 {
                G1::Unset => {
                    return InvalidByteSnafu {
                        byte: b,
                        position: i,
                    }
                    .fail()
                }
                G1::Katakana => push_katakana(&mut out, run, i)?,
                G1::SingleByte(encoding) => out.push_str(&decode_with(encoding, run)?),
                G1::KsX1001 => out.push_str(&decode_with(WINDOWS_949, run)?),
                G1::Gb2312 => out.push_str(&decode_with(GB18030, run)?),
            }
            i = end;
        }

        Ok(out)
    }
}

/// Decode text in JIS X 0201 without code extensions.
///
/// The lower half is read as ASCII,
/// so that 0x5C remains the value delimiter.
pub fn decode_jis_x0201(text: &[u8]) -> DecodeResult<String> {
    let mut out = String::with_capacity(text.len());
    let mut i = 0;
    while i < text.len() {
        if text[i] < 0x80 {
            out.push(char::from(text[i]));
            i += 1;
        } else {
            let end = run_end(text, i, |b| b >= 0x80);
            push_katakana(&mut out, &text[i..end], i)?;
            i = end;
        }
    }
    Ok(out)
}

fn push_katakana(out: &mut String, run: &[u8], start: usize) -> DecodeResult<()> {
    for (k, &b) in run.iter().enumerate() {
        if !(0xA1..=0xDF).contains(&b) {
            return InvalidByteSnafu {
                byte: b,
                position: start + k,
            }
            .fail();
        }
        // half-width Katakana block starts at U+FF61
        let c = char::from_u32(0xFF61 + u32::from(b - 0xA1)).ok_or_else(|| {
            InvalidByteSnafu {
                byte: b,
                position: start + k,
            }
            .build()
        })?;
        out.push(c);
    }
    Ok(())
}

fn decode_with(encoding: EncodingRef, bytes: &[u8]) -> DecodeResult<String> {
    encoding
        .decode(bytes, DecoderTrap::Strict)
        .map_err(|message| DecodeCustomSnafu { message }.build())
}

fn run_end(text: &[u8], start: usize, pred: impl Fn(u8) -> bool) -> usize {
    text[start..]
        .iter()
        .position(|&b| b == ESC || !pred(b))
        .map(|k| start + k)
        .unwrap_or_else(|| text.len())
}

fn is_graphic(b: u8) -> bool {
    (0x21..=0x7E).contains(&b)
}

fn is_reset_byte(b: u8, person_name: bool) -> bool {
    match b {
        b'\r' | b'\n' | b'\t' | 0x0C | b'\\' => true,
        b'^' | b'=' => person_name,
        _ => false,
    }
}

fn parse_escape(seq: &[u8]) -> Option<(usize, Designation)> {
    let parsed = match seq {
        [b'(', b'B', ..] | [b'(', b'J', ..] => (2, Designation::G0(G0::Ascii)),
        [b')', b'I', ..] => (2, Designation::G1(G1::Katakana)),
        [b'$', b'B', ..] => (2, Designation::G0(G0::JisX0208)),
        [b'$', b'(', b'D', ..] => (3, Designation::G0(G0::JisX0212)),
        [b'$', b')', b'C', ..] => (3, Designation::G1(G1::KsX1001)),
        [b'$', b')', b'A', ..] => (3, Designation::G1(G1::Gb2312)),
        [b'-', f, ..] => (2, Designation::G1(G1::SingleByte(upper_half(*f)?))),
        _ => return None,
    };
    Some(parsed)
}

/// The single-byte repertoire designated to G1 by `ESC - F`.
fn upper_half(final_byte: u8) -> Option<EncodingRef> {
    let encoding: EncodingRef = match final_byte {
        b'A' => ISO_8859_1,
        b'B' => ISO_8859_2,
        b'C' => ISO_8859_3,
        b'D' => ISO_8859_4,
        b'L' => ISO_8859_5,
        b'G' => ISO_8859_6,
        b'F' => ISO_8859_7,
        b'H' => ISO_8859_8,
        b'M' => WINDOWS_1254,
        b'b' => ISO_8859_15,
        b'T' => WINDOWS_874,
        _ => return None,
    };
    Some(encoding)
}

#[cfg(test)]
mod tests {
    use crate::text::{DecodeTextError, SpecificCharacterSet, TextCodec};

    fn charset(values: &[&str]) -> SpecificCharacterSet {
        SpecificCharacterSet::from_values(values).unwrap()
    }

    #[test]
    fn japanese_kanji_and_hiragana() {
        // PS3.5 H.3.1
        let cs = charset(&["", "ISO 2022 IR 87"]);
        let text = b"Yamada^Tarou=\
            \x1b$B;3ED\x1b(B^\x1b$BB@O:\x1b(B=\
            \x1b$B$d$^$@\x1b(B^\x1b$B$?$m$&\x1b(B";
        assert_eq!(
            cs.decode_person_name(text).unwrap(),
            "Yamada^Tarou=山田^太郎=やまだ^たろう"
        );
    }

    #[test]
    fn japanese_katakana_initial() {
        // PS3.5 H.3.2
        let cs = charset(&["ISO 2022 IR 13", "ISO 2022 IR 87"]);
        let text = b"\xd4\xcf\xc0\xde^\xc0\xdb\xb3=\
            \x1b$B;3ED\x1b(J^\x1b$BB@O:\x1b(J=\
            \x1b$B$d$^$@\x1b(J^\x1b$B$?$m$&\x1b(J";
        assert_eq!(
            cs.decode_person_name(text).unwrap(),
            "ﾔﾏﾀﾞ^ﾀﾛｳ=山田^太郎=やまだ^たろう"
        );
    }

    #[test]
    fn korean_designated_per_component() {
        // PS3.5 I.2
        let cs = charset(&["", "ISO 2022 IR 149"]);
        let text = b"Hong^Gildong=\
            \x1b$)C\xfb\xf3^\x1b$)C\xd1\xce\xd4\xd7=\
            \x1b$)C\xc8\xab^\x1b$)C\xb1\xe6\xb5\xbf";
        assert_eq!(
            cs.decode_person_name(text).unwrap(),
            "Hong^Gildong=洪^吉洞=홍^길동"
        );
    }

    #[test]
    fn delimiter_inside_two_byte_set() {
        // 0x5C as the second byte of a JIS X 0208 character
        let cs = charset(&["", "ISO 2022 IR 87"]);
        let text = b"\x1b$B0\\\x1b(B\\ABC";
        let decoded = cs.decode(text).unwrap();
        let values: Vec<_> = decoded.split('\\').collect();
        assert_eq!(values.len(), 2);
        assert_eq!(values[1], "ABC");
    }

    #[test]
    fn latin_upper_half_switch() {
        let cs = charset(&["ISO 2022 IR 100", "ISO 2022 IR 126"]);
        // Latin-1 first, then Greek through ESC - F
        let text = b"Jo\xe3o \x1b-F\xc4\xe9\xef";
        assert_eq!(cs.decode(text).unwrap(), "João Διο");
    }

    #[test]
    fn unknown_escape_fails() {
        let cs = charset(&["", "ISO 2022 IR 87"]);
        let err = cs.decode(b"AB\x1b%G").unwrap_err();
        assert!(matches!(
            err,
            DecodeTextError::UnsupportedEscape { position: 2, .. }
        ));
    }

    #[test]
    fn high_bytes_without_g1_fail() {
        let cs = charset(&["", "ISO 2022 IR 87"]);
        assert!(matches!(
            cs.decode(b"A\xe9").unwrap_err(),
            DecodeTextError::InvalidByte { byte: 0xE9, position: 1, .. }
        ));
    }
}
