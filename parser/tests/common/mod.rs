//! Test-only encoder of data set streams.
#![allow(dead_code)]

use dcmtlv_core::{Tag, VR};
use dcmtlv_encoding::transfer_syntax::{Endianness, TransferSyntax};

const UNDEFINED: u32 = 0xFFFF_FFFF;

/// Writes element headers and values in the encoding of a transfer syntax.
#[derive(Debug)]
pub struct StreamWriter {
    ts: TransferSyntax,
    out: Vec<u8>,
}

impl StreamWriter {
    pub fn new(ts: TransferSyntax) -> Self {
        StreamWriter { ts, out: Vec::new() }
    }

    pub fn u16(&mut self, value: u16) -> &mut Self {
        match self.ts.endianness {
            Endianness::Little => self.out.extend_from_slice(&value.to_le_bytes()),
            Endianness::Big => self.out.extend_from_slice(&value.to_be_bytes()),
        }
        self
    }

    pub fn u32(&mut self, value: u32) -> &mut Self {
        match self.ts.endianness {
            Endianness::Little => self.out.extend_from_slice(&value.to_le_bytes()),
            Endianness::Big => self.out.extend_from_slice(&value.to_be_bytes()),
        }
        self
    }

    pub fn tag(&mut self, tag: Tag) -> &mut Self {
        self.u16(tag.group()).u16(tag.element())
    }

    /// Write an element header. `None` is an undefined length.
    pub fn header(&mut self, tag: Tag, vr: VR, len: Option<u32>) -> &mut Self {
        let len = len.unwrap_or(UNDEFINED);
        self.tag(tag);
        if !self.ts.explicit_vr {
            return self.u32(len);
        }
        self.out.extend_from_slice(&vr.to_bytes());
        if vr.has_long_length() {
            self.u16(0).u32(len)
        } else {
            self.u16(len as u16)
        }
    }

    /// Write a whole element with its raw value.
    pub fn element(&mut self, tag: Tag, vr: VR, value: &[u8]) -> &mut Self {
        self.header(tag, vr, Some(value.len() as u32));
        self.out.extend_from_slice(value);
        self
    }

    /// Write a textual element, padded to even length.
    pub fn text(&mut self, tag: Tag, vr: VR, text: &str) -> &mut Self {
        let mut value = text.as_bytes().to_vec();
        if value.len() % 2 == 1 {
            value.push(vr.padding());
        }
        self.element(tag, vr, &value)
    }

    pub fn u16s(&mut self, tag: Tag, vr: VR, values: &[u16]) -> &mut Self {
        self.header(tag, vr, Some(values.len() as u32 * 2));
        for v in values {
            self.u16(*v);
        }
        self
    }

    pub fn u32s(&mut self, tag: Tag, vr: VR, values: &[u32]) -> &mut Self {
        self.header(tag, vr, Some(values.len() as u32 * 4));
        for v in values {
            self.u32(*v);
        }
        self
    }

    pub fn f64s(&mut self, tag: Tag, values: &[f64]) -> &mut Self {
        self.header(tag, VR::FD, Some(values.len() as u32 * 8));
        for v in values {
            self.u64(v.to_bits());
        }
        self
    }

    pub fn u64(&mut self, value: u64) -> &mut Self {
        match self.ts.endianness {
            Endianness::Little => self.out.extend_from_slice(&value.to_le_bytes()),
            Endianness::Big => self.out.extend_from_slice(&value.to_be_bytes()),
        }
        self
    }

    pub fn tags(&mut self, tag: Tag, values: &[Tag]) -> &mut Self {
        self.header(tag, VR::AT, Some(values.len() as u32 * 4));
        for v in values {
            self.tag(*v);
        }
        self
    }

    /// Write a sequence of already encoded items.
    /// With `undefined`, the sequence and its items are delimited.
    pub fn sequence(&mut self, tag: Tag, items: &[Vec<u8>], undefined: bool) -> &mut Self {
        if undefined {
            self.header(tag, VR::SQ, None);
            for item in items {
                self.item_start(None);
                self.out.extend_from_slice(item);
                self.item_end();
            }
            self.sequence_end()
        } else {
            let len: usize = items.iter().map(|item| item.len() + 8).sum();
            self.header(tag, VR::SQ, Some(len as u32));
            for item in items {
                self.item_start(Some(item.len() as u32));
                self.out.extend_from_slice(item);
            }
            self
        }
    }

    pub fn item_start(&mut self, len: Option<u32>) -> &mut Self {
        self.tag(Tag::ITEM).u32(len.unwrap_or(UNDEFINED))
    }

    pub fn item_end(&mut self) -> &mut Self {
        self.tag(Tag::ITEM_DELIMITER).u32(0)
    }

    pub fn sequence_end(&mut self) -> &mut Self {
        self.tag(Tag::SEQUENCE_DELIMITER).u32(0)
    }

    pub fn raw(&mut self, bytes: &[u8]) -> &mut Self {
        self.out.extend_from_slice(bytes);
        self
    }

    pub fn position(&self) -> usize {
        self.out.len()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.out
    }

    pub fn to_vec(&self) -> Vec<u8> {
        self.out.clone()
    }
}
