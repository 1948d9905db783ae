//! Grouping of encapsulated pixel data fragments into frames.
//!
//! Offsets in both the Basic and the Extended Offset Table
//! count from the first byte of the first fragment's item header,
//! so every fragment takes 8 bytes more than its value.
use crate::attribute::ExtendedOffsetTable;
use crate::{
    EncapsulatedFrame, InvalidOffsetTableSnafu, Result, UnsupportedFragmentationSnafu,
};
use dcmtlv_core::value::InMemFragment;
use snafu::ensure;
use tracing::warn;

/// Size of the item header preceding each fragment.
const ITEM_HEADER_SIZE: u64 = 8;

/// Split the fragments into frames.
///
/// The extended offset table is used when given,
/// then the basic offset table if not empty.
/// Without offsets, a single frame takes all fragments
/// and multiple frames take one fragment each.
pub(crate) fn group_fragments<'a>(
    fragments: &'a [InMemFragment],
    basic_offset_table: &[u32],
    extended: Option<&ExtendedOffsetTable>,
    number_of_frames: u32,
) -> Result<Vec<EncapsulatedFrame<'a>>> {
    if let Some(table) = extended {
        let frames = by_offsets(fragments, &table.offsets)?;
        for (i, (frame, &len)) in frames.iter().zip(&table.lengths).enumerate() {
            if frame.len() as u64 != len {
                warn!(
                    "Frame #{} takes {} bytes, extended offset table says {}",
                    i,
                    frame.len(),
                    len
                );
            }
        }
        check_frame_count(frames.len(), number_of_frames);
        return Ok(frames);
    }

    if !basic_offset_table.is_empty() {
        let offsets: Vec<u64> = basic_offset_table.iter().map(|&o| u64::from(o)).collect();
        let frames = by_offsets(fragments, &offsets)?;
        check_frame_count(frames.len(), number_of_frames);
        return Ok(frames);
    }

    if number_of_frames == 1 {
        return Ok(vec![EncapsulatedFrame::new(
            fragments.iter().map(|f| &f[..]).collect(),
        )]);
    }

    ensure!(
        fragments.len() as u64 == u64::from(number_of_frames),
        UnsupportedFragmentationSnafu {
            fragments: fragments.len(),
            frames: number_of_frames,
        }
    );
    Ok(fragments
        .iter()
        .map(|f| EncapsulatedFrame::new(vec![&f[..]]))
        .collect())
}

/// Frame `i` takes the fragments from the one at `offsets[i]`
/// up to the one at `offsets[i + 1]`.
fn by_offsets<'a>(
    fragments: &'a [InMemFragment],
    offsets: &[u64],
) -> Result<Vec<EncapsulatedFrame<'a>>> {
    // position of each fragment's item header
    let mut starts = Vec::with_capacity(fragments.len());
    let mut position = 0;
    for fragment in fragments {
        starts.push(position);
        position += ITEM_HEADER_SIZE + fragment.len() as u64;
    }

    let mut first_fragments = Vec::with_capacity(offsets.len());
    for (index, &offset) in offsets.iter().enumerate() {
        let fragment = starts.binary_search(&offset).ok();
        let previous = first_fragments.last().copied();
        match fragment {
            Some(f) if index > 0 || f == 0 => {
                ensure!(
                    previous.map_or(true, |p| f > p),
                    InvalidOffsetTableSnafu { index, offset }
                );
                first_fragments.push(f);
            }
            _ => return InvalidOffsetTableSnafu { index, offset }.fail(),
        }
    }

    let ends = first_fragments
        .iter()
        .skip(1)
        .copied()
        .chain(std::iter::once(fragments.len()));
    Ok(first_fragments
        .iter()
        .zip(ends)
        .map(|(&start, end)| {
            EncapsulatedFrame::new(fragments[start..end].iter().map(|f| &f[..]).collect())
        })
        .collect())
}

fn check_frame_count(found: usize, expected: u32) {
    if found as u64 != u64::from(expected) {
        warn!(
            "Offset table describes {} frames, but Number of Frames is {}",
            found, expected
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn fragments(sizes: &[usize]) -> Vec<InMemFragment> {
        sizes
            .iter()
            .enumerate()
            .map(|(i, &size)| vec![i as u8; size])
            .collect()
    }

    fn sizes(frames: &[EncapsulatedFrame]) -> Vec<Vec<usize>> {
        frames
            .iter()
            .map(|f| f.fragments().iter().map(|x| x.len()).collect())
            .collect()
    }

    #[test]
    fn basic_offset_table() {
        // fragment headers at 0, 12 and 28
        let fragments = fragments(&[4, 8, 6]);
        let frames = group_fragments(&fragments, &[0, 12], None, 2).unwrap();
        assert_eq!(sizes(&frames), vec![vec![4], vec![8, 6]]);

        let frames = group_fragments(&fragments, &[0, 28], None, 2).unwrap();
        assert_eq!(sizes(&frames), vec![vec![4, 8], vec![6]]);
    }

    #[test]
    fn extended_offset_table_takes_precedence() {
        let fragments = fragments(&[4, 8, 6]);
        let table = ExtendedOffsetTable {
            offsets: vec![0, 12, 28],
            lengths: vec![4, 8, 6],
        };
        let frames = group_fragments(&fragments, &[0, 12], Some(&table), 3).unwrap();
        assert_eq!(sizes(&frames), vec![vec![4], vec![8], vec![6]]);
    }

    #[test]
    fn without_offsets() {
        let fragments = fragments(&[4, 8, 6]);
        let frames = group_fragments(&fragments, &[], None, 1).unwrap();
        assert_eq!(sizes(&frames), vec![vec![4, 8, 6]]);

        let frames = group_fragments(&fragments, &[], None, 3).unwrap();
        assert_eq!(sizes(&frames), vec![vec![4], vec![8], vec![6]]);

        let err = group_fragments(&fragments, &[], None, 2).unwrap_err();
        assert!(matches!(
            err,
            Error::UnsupportedFragmentation {
                fragments: 3,
                frames: 2,
                ..
            }
        ));
    }

    #[test]
    fn offsets_must_land_on_fragments() {
        let fragments = fragments(&[4, 8, 6]);
        let err = group_fragments(&fragments, &[0, 10], None, 2).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidOffsetTable {
                index: 1,
                offset: 10,
                ..
            }
        ));

        // first frame must start at the first fragment
        let err = group_fragments(&fragments, &[12, 28], None, 2).unwrap_err();
        assert!(matches!(err, Error::InvalidOffsetTable { index: 0, .. }));

        // offsets must increase
        let err = group_fragments(&fragments, &[0, 28, 12], None, 3).unwrap_err();
        assert!(matches!(err, Error::InvalidOffsetTable { index: 2, .. }));
    }
}
