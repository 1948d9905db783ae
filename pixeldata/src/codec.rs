//! Interface to pixel data codecs.
//!
//! Decompression happens outside of this crate:
//! a codec receives the bytes of one frame as extracted by [`extract`](crate::extract)
//! and turns them into native pixel samples.
use crate::attribute::PixelGeometry;
use crate::{EncapsulatedFrame, PixelPayload};
use snafu::Snafu;

#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum DecodeError {
    /// The codec does not handle this transfer syntax.
    #[snafu(display("Unsupported transfer syntax {}", uid))]
    UnsupportedTransferSyntax { uid: String },

    /// A custom error when decoding fails
    #[snafu(display("Error decoding pixel data: {}", message))]
    CustomDecodeError { message: String },
}

pub type DecodeResult<T, E = DecodeError> = Result<T, E>;

/// A decoder of compressed frames, keyed by transfer syntax UID.
pub trait PixelCodec {
    /// Decode the compressed bytes of one frame into native pixel samples,
    /// laid out as described by `geometry`.
    fn decode_frame(
        &self,
        ts_uid: &str,
        compressed: &[u8],
        geometry: &PixelGeometry,
    ) -> DecodeResult<Vec<u8>>;
}

impl<T: ?Sized> PixelCodec for &T
where
    T: PixelCodec,
{
    fn decode_frame(
        &self,
        ts_uid: &str,
        compressed: &[u8],
        geometry: &PixelGeometry,
    ) -> DecodeResult<Vec<u8>> {
        (**self).decode_frame(ts_uid, compressed, geometry)
    }
}

impl PixelPayload<'_> {
    /// Decode every frame with the given codec.
    ///
    /// Native frames are returned as they are.
    pub fn decode_with<C>(
        &self,
        codec: C,
        ts_uid: &str,
        geometry: &PixelGeometry,
    ) -> DecodeResult<Vec<Vec<u8>>>
    where
        C: PixelCodec,
    {
        match self {
            PixelPayload::Native(frames) => Ok(frames.iter().map(|f| f.to_vec()).collect()),
            PixelPayload::Encapsulated(frames) => frames
                .iter()
                .map(|frame: &EncapsulatedFrame| {
                    codec.decode_frame(ts_uid, &frame.to_bytes(), geometry)
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Reverses the bytes of each frame.
    struct Reverse;

    impl PixelCodec for Reverse {
        fn decode_frame(
            &self,
            ts_uid: &str,
            compressed: &[u8],
            _geometry: &PixelGeometry,
        ) -> DecodeResult<Vec<u8>> {
            if ts_uid != "1.2.840.10008.1.2.5" {
                return UnsupportedTransferSyntaxSnafu { uid: ts_uid }.fail();
            }
            Ok(compressed.iter().rev().copied().collect())
        }
    }

    #[test]
    fn decode_encapsulated_frames() {
        let geometry = PixelGeometry::new(1, 4, 1, 8, 2);
        let payload = PixelPayload::Encapsulated(vec![
            EncapsulatedFrame::new(vec![&[1, 2][..], &[3, 4][..]]),
            EncapsulatedFrame::new(vec![&[5, 6, 7, 8][..]]),
        ]);
        let frames = payload
            .decode_with(&Reverse, "1.2.840.10008.1.2.5", &geometry)
            .unwrap();
        assert_eq!(frames, vec![vec![4, 3, 2, 1], vec![8, 7, 6, 5]]);

        let err = payload
            .decode_with(Reverse, "1.2.840.10008.1.2.4.50", &geometry)
            .unwrap_err();
        assert!(matches!(err, DecodeError::UnsupportedTransferSyntax { .. }));
    }
}
