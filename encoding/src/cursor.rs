//! A bounds-checked, endianness-aware cursor over an immutable byte buffer.
//!
//! All reads either succeed in full or fail with
//! [`Error::UnexpectedEndOfStream`] without moving the cursor.
//! Raw slice reads borrow from the backing buffer,
//! so values can be handed out without copying.

use byteordered::byteorder::{BigEndian, ByteOrder, LittleEndian};
use byteordered::Endianness;
use snafu::{Backtrace, Snafu};

/// Error type for cursor reads.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    /// A read would go past the end of the buffer.
    #[snafu(display(
        "Unexpected end of stream at offset {}: {} bytes requested at position {}",
        offset,
        requested,
        position
    ))]
    UnexpectedEndOfStream {
        /// the absolute offset at which the data ran out
        offset: usize,
        /// the position where the failed read started
        position: usize,
        /// the number of bytes requested
        requested: usize,
        backtrace: Backtrace,
    },
}

impl Error {
    /// The absolute byte offset at which the data ran out.
    pub fn offset(&self) -> usize {
        match self {
            Error::UnexpectedEndOfStream { offset, .. } => *offset,
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// A read cursor over a fully resident byte buffer.
///
/// The byte order used for numeric reads can be switched at any time
/// with [`set_endianness`](ByteCursor::set_endianness),
/// independently of anything else in the decoding context.
#[derive(Debug, Clone)]
pub struct ByteCursor<'a> {
    data: &'a [u8],
    pos: usize,
    endianness: Endianness,
}

macro_rules! impl_read_number {
    ($name: ident, $peek: ident, $typ: ty, $width: expr, $read: ident) => {
        #[doc = concat!("Read a `", stringify!($typ), "` in the cursor's byte order.")]
        pub fn $name(&mut self) -> Result<$typ> {
            let value = self.$peek()?;
            self.pos += $width;
            Ok(value)
        }

        #[doc = concat!("Read a `", stringify!($typ), "` without advancing the cursor.")]
        pub fn $peek(&self) -> Result<$typ> {
            let bytes = self.peek_bytes($width)?;
            Ok(match self.endianness {
                Endianness::Little => LittleEndian::$read(bytes),
                Endianness::Big => BigEndian::$read(bytes),
            })
        }
    };
}

impl<'a> ByteCursor<'a> {
    /// Create a cursor at the start of the given buffer.
    pub fn new(data: &'a [u8], endianness: Endianness) -> Self {
        ByteCursor {
            data,
            pos: 0,
            endianness,
        }
    }

    /// The byte order currently used for numeric reads.
    #[inline]
    pub fn endianness(&self) -> Endianness {
        self.endianness
    }

    /// Change the byte order used for subsequent numeric reads.
    #[inline]
    pub fn set_endianness(&mut self, endianness: Endianness) {
        self.endianness = endianness;
    }

    /// The absolute position of the cursor in the buffer.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// The number of bytes left to read.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Whether there is nothing left to read.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// The total length of the backing buffer.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Move the cursor to an absolute position.
    ///
    /// Seeking to the very end of the buffer is allowed.
    pub fn seek(&mut self, position: usize) -> Result<()> {
        if position > self.data.len() {
            return UnexpectedEndOfStreamSnafu {
                offset: self.data.len(),
                position,
                requested: 0_usize,
            }
            .fail();
        }
        self.pos = position;
        Ok(())
    }

    /// Advance the cursor by `n` bytes.
    pub fn skip(&mut self, n: usize) -> Result<()> {
        self.read_bytes(n).map(|_| ())
    }

    /// Read `n` bytes as a view into the backing buffer.
    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8]> {
        let bytes = self.peek_bytes(n)?;
        self.pos += n;
        Ok(bytes)
    }

    /// Obtain the next `n` bytes without advancing the cursor.
    pub fn peek_bytes(&self, n: usize) -> Result<&'a [u8]> {
        let data: &'a [u8] = self.data;
        match self.pos.checked_add(n) {
            Some(end) if end <= data.len() => Ok(&data[self.pos..end]),
            _ => UnexpectedEndOfStreamSnafu {
                offset: data.len(),
                position: self.pos,
                requested: n,
            }
            .fail(),
        }
    }

    /// Read a single byte.
    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.read_bytes(1)?[0])
    }

    impl_read_number!(read_u16, peek_u16, u16, 2, read_u16);
    impl_read_number!(read_u32, peek_u32, u32, 4, read_u32);
    impl_read_number!(read_u64, peek_u64, u64, 8, read_u64);
    impl_read_number!(read_i16, peek_i16, i16, 2, read_i16);
    impl_read_number!(read_i32, peek_i32, i32, 4, read_i32);
    impl_read_number!(read_i64, peek_i64, i64, 8, read_i64);
    impl_read_number!(read_f32, peek_f32, f32, 4, read_f32);
    impl_read_number!(read_f64, peek_f64, f64, 8, read_f64);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_in_both_byte_orders() {
        let data = [0x08, 0x00, 0x16, 0x00, 0x00, 0x00, 0x80, 0x3F];
        let mut cursor = ByteCursor::new(&data, Endianness::Little);
        assert_eq!(cursor.read_u16().unwrap(), 0x0008);
        assert_eq!(cursor.peek_u16().unwrap(), 0x0016);
        assert_eq!(cursor.read_u16().unwrap(), 0x0016);
        assert_eq!(cursor.read_f32().unwrap(), 1.0);
        assert!(cursor.is_empty());

        cursor.seek(0).unwrap();
        cursor.set_endianness(Endianness::Big);
        assert_eq!(cursor.read_u32().unwrap(), 0x0800_1600);
        assert_eq!(cursor.position(), 4);
        assert_eq!(cursor.remaining(), 4);
    }

    #[test]
    fn zero_copy_slices() {
        let data = b"ABCDEF";
        let mut cursor = ByteCursor::new(data, Endianness::Little);
        cursor.skip(2).unwrap();
        let bytes = cursor.read_bytes(3).unwrap();
        assert_eq!(bytes, b"CDE");
        assert_eq!(bytes.as_ptr(), data[2..].as_ptr());
    }

    #[test]
    fn out_of_bounds_reads_do_not_move() {
        let data = [0x01, 0x02, 0x03];
        let mut cursor = ByteCursor::new(&data, Endianness::Little);
        cursor.skip(1).unwrap();
        let err = cursor.read_u32().unwrap_err();
        assert!(matches!(
            err,
            Error::UnexpectedEndOfStream {
                offset: 3,
                position: 1,
                requested: 4,
                ..
            }
        ));
        assert_eq!(err.offset(), 3);
        assert_eq!(cursor.position(), 1);
        assert_eq!(cursor.read_u16().unwrap(), 0x0302);

        assert!(cursor.read_bytes(usize::MAX).is_err());
        assert!(cursor.seek(4).is_err());
        assert!(cursor.seek(3).is_ok());
    }
}
