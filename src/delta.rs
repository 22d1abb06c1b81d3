// Byte-wise delta against a base buffer.
//
// `delta[i] = base[i] - payload[i]` in wrapping u8 arithmetic. Reversing it
// is the same subtraction, so one kernel serves both directions:
// `undiff(base, diff(base, p)) == p`.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Chunk size for the parallel kernel (64 KiB).
#[cfg(feature = "parallel")]
pub const PAR_CHUNK_LEN: usize = 64 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DeltaError {
    #[error("length mismatch: base is {base} bytes, delta is {encoded} bytes")]
    LengthMismatch { base: usize, encoded: usize },
}

#[inline]
fn check_len(base: &[u8], encoded: &[u8]) -> Result<(), DeltaError> {
    if base.len() != encoded.len() {
        log::debug!(
            "delta length mismatch: base={} encoded={}",
            base.len(),
            encoded.len()
        );
        return Err(DeltaError::LengthMismatch {
            base: base.len(),
            encoded: encoded.len(),
        });
    }
    Ok(())
}

#[inline]
fn undiff_kernel(base: &[u8], encoded: &mut [u8]) {
    for (e, &b) in encoded.iter_mut().zip(base) {
        *e = b.wrapping_sub(*e);
    }
}

/// Replace every delta byte in `encoded` with `base[i] - encoded[i]`.
///
/// Nothing is written when the lengths differ.
pub fn undiff_in_place(base: &[u8], encoded: &mut [u8]) -> Result<(), DeltaError> {
    check_len(base, encoded)?;
    undiff_kernel(base, encoded);
    Ok(())
}

/// Reconstruct a payload from `base` and a delta, leaving both untouched.
pub fn undiff(base: &[u8], encoded: &[u8]) -> Result<Vec<u8>, DeltaError> {
    check_len(base, encoded)?;
    Ok(base
        .iter()
        .zip(encoded)
        .map(|(&b, &e)| b.wrapping_sub(e))
        .collect())
}

/// Compute the delta of `payload` against `base`.
pub fn diff(base: &[u8], payload: &[u8]) -> Result<Vec<u8>, DeltaError> {
    undiff(base, payload)
}

/// Parallel `undiff_in_place` over disjoint `PAR_CHUNK_LEN` chunks.
#[cfg(feature = "parallel")]
pub fn undiff_in_place_par(base: &[u8], encoded: &mut [u8]) -> Result<(), DeltaError> {
    check_len(base, encoded)?;
    encoded
        .par_chunks_mut(PAR_CHUNK_LEN)
        .zip(base.par_chunks(PAR_CHUNK_LEN))
        .for_each(|(e, b)| undiff_kernel(b, e));
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_below_zero() {
        assert_eq!(
            diff(&[1, 2, 3, 4, 5], &[1, 2, 5, 1, 2]).unwrap(),
            &[0, 0, -2_i8 as u8, 3, 3]
        );
        assert_eq!(undiff(&[0], &[1]).unwrap(), &[255]);
        assert_eq!(undiff(&[255], &[0]).unwrap(), &[255]);
    }

    #[test]
    fn in_place_reverses_delta() {
        let base = [1, 2, 3, 4, 5];
        let mut buf = [0, 0, -2_i8 as u8, 3, 3];
        undiff_in_place(&base, &mut buf).unwrap();
        assert_eq!(buf, [1, 2, 5, 1, 2]);
    }

    #[test]
    fn applying_twice_is_identity() {
        let base: Vec<u8> = (0..=255).collect();
        let payload: Vec<u8> = (0..=255u8).rev().map(|b| b.wrapping_mul(7)).collect();
        let mut buf = payload.clone();
        undiff_in_place(&base, &mut buf).unwrap();
        undiff_in_place(&base, &mut buf).unwrap();
        assert_eq!(buf, payload);
    }

    #[test]
    fn length_mismatch_leaves_buffer_untouched() {
        let mut buf = [9u8, 9, 9];
        assert_eq!(
            undiff_in_place(&[1, 2], &mut buf),
            Err(DeltaError::LengthMismatch {
                base: 2,
                encoded: 3
            })
        );
        assert_eq!(buf, [9, 9, 9]);
        assert!(undiff(&[1, 2, 3], &[1]).is_err());
    }

    #[test]
    fn empty_buffers() {
        assert!(undiff(&[], &[]).unwrap().is_empty());
        undiff_in_place(&[], &mut []).unwrap();
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn parallel_matches_serial() {
        let len = PAR_CHUNK_LEN * 3 + 17;
        let base: Vec<u8> = (0..len).map(|i| (i % 251) as u8).collect();
        let delta: Vec<u8> = (0..len).map(|i| (i % 13) as u8).collect();

        let mut serial = delta.clone();
        undiff_in_place(&base, &mut serial).unwrap();
        let mut par = delta;
        undiff_in_place_par(&base, &mut par).unwrap();
        assert_eq!(par, serial);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn parallel_rejects_length_mismatch() {
        let base = vec![1u8; PAR_CHUNK_LEN + 1];
        let mut buf = vec![7u8; PAR_CHUNK_LEN];
        assert_eq!(
            undiff_in_place_par(&base, &mut buf),
            Err(DeltaError::LengthMismatch {
                base: PAR_CHUNK_LEN + 1,
                encoded: PAR_CHUNK_LEN
            })
        );
        assert!(buf.iter().all(|&b| b == 7));
    }
}
