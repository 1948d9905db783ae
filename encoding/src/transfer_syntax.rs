//! The table of known DICOM transfer syntaxes.
//!
//! A transfer syntax tells the decoder whether the VR is explicit,
//! which byte order applies
//! and whether pixel data is encapsulated in fragments.
//! Compressed syntaxes share the data set encoding of
//! Explicit VR Little Endian;
//! decompressing their pixel data is left to an external codec.

pub use byteordered::Endianness;

/// A DICOM transfer syntax specifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferSyntax {
    /// The unique identifier of the transfer syntax.
    pub uid: &'static str,
    /// The name of the transfer syntax.
    pub name: &'static str,
    /// Whether the value representation is explicit in the stream.
    pub explicit_vr: bool,
    /// The byte order of the data set.
    pub endianness: Endianness,
    /// Whether pixel data is encapsulated in fragments.
    pub encapsulated: bool,
    /// Whether the data set is deflated,
    /// which must be undone before decoding.
    pub deflated: bool,
}

const fn native(
    uid: &'static str,
    name: &'static str,
    explicit_vr: bool,
    endianness: Endianness,
) -> TransferSyntax {
    TransferSyntax {
        uid,
        name,
        explicit_vr,
        endianness,
        encapsulated: false,
        deflated: false,
    }
}

const fn encapsulated(uid: &'static str, name: &'static str) -> TransferSyntax {
    TransferSyntax {
        uid,
        name,
        explicit_vr: true,
        endianness: Endianness::Little,
        encapsulated: true,
        deflated: false,
    }
}

const fn deflated(uid: &'static str, name: &'static str) -> TransferSyntax {
    TransferSyntax {
        uid,
        name,
        explicit_vr: true,
        endianness: Endianness::Little,
        encapsulated: false,
        deflated: true,
    }
}

impl TransferSyntax {
    /// Implicit VR Little Endian, the default transfer syntax.
    pub const IMPLICIT_VR_LITTLE_ENDIAN: TransferSyntax = native(
        "1.2.840.10008.1.2",
        "Implicit VR Little Endian",
        false,
        Endianness::Little,
    );
    /// Explicit VR Little Endian.
    pub const EXPLICIT_VR_LITTLE_ENDIAN: TransferSyntax = native(
        "1.2.840.10008.1.2.1",
        "Explicit VR Little Endian",
        true,
        Endianness::Little,
    );
    /// Explicit VR Big Endian (retired).
    pub const EXPLICIT_VR_BIG_ENDIAN: TransferSyntax = native(
        "1.2.840.10008.1.2.2",
        "Explicit VR Big Endian",
        true,
        Endianness::Big,
    );
    /// Encapsulated Uncompressed Explicit VR Little Endian.
    pub const ENCAPSULATED_UNCOMPRESSED: TransferSyntax = encapsulated(
        "1.2.840.10008.1.2.1.98",
        "Encapsulated Uncompressed Explicit VR Little Endian",
    );
    /// Deflated Explicit VR Little Endian.
    pub const DEFLATED_EXPLICIT_VR_LITTLE_ENDIAN: TransferSyntax = deflated(
        "1.2.840.10008.1.2.1.99",
        "Deflated Explicit VR Little Endian",
    );
    /// JPEG Baseline (Process 1).
    pub const JPEG_BASELINE: TransferSyntax =
        encapsulated("1.2.840.10008.1.2.4.50", "JPEG Baseline (Process 1)");
    /// JPEG Extended (Process 2 & 4).
    pub const JPEG_EXTENDED: TransferSyntax =
        encapsulated("1.2.840.10008.1.2.4.51", "JPEG Extended (Process 2 & 4)");
    /// JPEG Lossless, Non-Hierarchical (Process 14).
    pub const JPEG_LOSSLESS_NON_HIERARCHICAL: TransferSyntax = encapsulated(
        "1.2.840.10008.1.2.4.57",
        "JPEG Lossless, Non-Hierarchical (Process 14)",
    );
    /// JPEG Lossless, Non-Hierarchical, First-Order Prediction.
    pub const JPEG_LOSSLESS_SV1: TransferSyntax = encapsulated(
        "1.2.840.10008.1.2.4.70",
        "JPEG Lossless, Non-Hierarchical, First-Order Prediction",
    );
    /// JPEG-LS Lossless Image Compression.
    pub const JPEG_LS_LOSSLESS: TransferSyntax = encapsulated(
        "1.2.840.10008.1.2.4.80",
        "JPEG-LS Lossless Image Compression",
    );
    /// JPEG-LS Lossy (Near-Lossless) Image Compression.
    pub const JPEG_LS_NEAR_LOSSLESS: TransferSyntax = encapsulated(
        "1.2.840.10008.1.2.4.81",
        "JPEG-LS Lossy (Near-Lossless) Image Compression",
    );
    /// JPEG 2000 Image Compression (Lossless Only).
    pub const JPEG_2000_LOSSLESS: TransferSyntax = encapsulated(
        "1.2.840.10008.1.2.4.90",
        "JPEG 2000 Image Compression (Lossless Only)",
    );
    /// JPEG 2000 Image Compression.
    pub const JPEG_2000: TransferSyntax =
        encapsulated("1.2.840.10008.1.2.4.91", "JPEG 2000 Image Compression");
    /// High-Throughput JPEG 2000 Image Compression (Lossless Only).
    pub const HTJ2K_LOSSLESS: TransferSyntax = encapsulated(
        "1.2.840.10008.1.2.4.201",
        "High-Throughput JPEG 2000 Image Compression (Lossless Only)",
    );
    /// High-Throughput JPEG 2000 Image Compression.
    pub const HTJ2K: TransferSyntax = encapsulated(
        "1.2.840.10008.1.2.4.203",
        "High-Throughput JPEG 2000 Image Compression",
    );
    /// MPEG2 Main Profile / Main Level.
    pub const MPEG2_MAIN_PROFILE: TransferSyntax =
        encapsulated("1.2.840.10008.1.2.4.100", "MPEG2 Main Profile / Main Level");
    /// MPEG-4 AVC/H.264 High Profile / Level 4.1.
    pub const MPEG4_AVC_H264_HIGH_PROFILE: TransferSyntax = encapsulated(
        "1.2.840.10008.1.2.4.102",
        "MPEG-4 AVC/H.264 High Profile / Level 4.1",
    );
    /// RLE Lossless.
    pub const RLE_LOSSLESS: TransferSyntax =
        encapsulated("1.2.840.10008.1.2.5", "RLE Lossless");
    /// JPIP Referenced Deflate.
    pub const JPIP_REFERENCED_DEFLATE: TransferSyntax =
        deflated("1.2.840.10008.1.2.4.95", "JPIP Referenced Deflate");

    /// Whether pixel data in this transfer syntax is stored natively,
    /// as one contiguous value.
    pub fn is_native(&self) -> bool {
        !self.encapsulated
    }
}

/// All transfer syntaxes known to [`lookup`].
pub static ALL: &[TransferSyntax] = &[
    TransferSyntax::IMPLICIT_VR_LITTLE_ENDIAN,
    TransferSyntax::EXPLICIT_VR_LITTLE_ENDIAN,
    TransferSyntax::EXPLICIT_VR_BIG_ENDIAN,
    TransferSyntax::ENCAPSULATED_UNCOMPRESSED,
    TransferSyntax::DEFLATED_EXPLICIT_VR_LITTLE_ENDIAN,
    TransferSyntax::JPEG_BASELINE,
    TransferSyntax::JPEG_EXTENDED,
    TransferSyntax::JPEG_LOSSLESS_NON_HIERARCHICAL,
    TransferSyntax::JPEG_LOSSLESS_SV1,
    TransferSyntax::JPEG_LS_LOSSLESS,
    TransferSyntax::JPEG_LS_NEAR_LOSSLESS,
    TransferSyntax::JPEG_2000_LOSSLESS,
    TransferSyntax::JPEG_2000,
    TransferSyntax::HTJ2K_LOSSLESS,
    TransferSyntax::HTJ2K,
    TransferSyntax::MPEG2_MAIN_PROFILE,
    TransferSyntax::MPEG4_AVC_H264_HIGH_PROFILE,
    TransferSyntax::RLE_LOSSLESS,
    TransferSyntax::JPIP_REFERENCED_DEFLATE,
];

/// Obtain a transfer syntax by its UID.
///
/// Trailing null characters and spaces,
/// as found in padded UI values, are ignored.
pub fn lookup(uid: &str) -> Option<&'static TransferSyntax> {
    let uid = uid.trim_end_matches(|c: char| c == '\0' || c == ' ');
    ALL.iter().find(|ts| ts.uid == uid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_uid() {
        let ts = lookup("1.2.840.10008.1.2.1\0").unwrap();
        assert_eq!(ts, &TransferSyntax::EXPLICIT_VR_LITTLE_ENDIAN);
        assert!(ts.explicit_vr);
        assert!(ts.is_native());

        let ts = lookup("1.2.840.10008.1.2.2").unwrap();
        assert_eq!(ts.endianness, Endianness::Big);

        let ts = lookup("1.2.840.10008.1.2.4.50 ").unwrap();
        assert!(ts.encapsulated);
        assert_eq!(ts.endianness, Endianness::Little);

        assert!(lookup("1.2.840.10008.1.2.1.99").unwrap().deflated);
        assert!(lookup("1.2.3.4").is_none());
    }
}
