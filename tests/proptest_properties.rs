use framerle::delta;
use framerle::rle::{self, DecodeError};
use proptest::prelude::*;

fn repeat_runs() -> impl Strategy<Value = Vec<(u8, u8)>> {
    proptest::collection::vec((0u8..=127, any::<u8>()), 0..64)
}

fn literal_runs() -> impl Strategy<Value = Vec<Vec<u8>>> {
    proptest::collection::vec(proptest::collection::vec(any::<u8>(), 0..=127), 0..16)
}

fn encode_repeats(runs: &[(u8, u8)]) -> Vec<u8> {
    runs.iter().flat_map(|&(n, v)| [n, v]).collect()
}

fn encode_literals(runs: &[Vec<u8>]) -> Vec<u8> {
    let mut out = Vec::new();
    for run in runs {
        out.push(0x80 | run.len() as u8);
        out.extend_from_slice(run);
    }
    out
}

proptest! {
    #[test]
    fn prop_repeat_streams_sum_counts(runs in repeat_runs()) {
        let decoded = rle::decode_all(&encode_repeats(&runs)).unwrap();
        let total: usize = runs.iter().map(|&(n, _)| n as usize).sum();
        prop_assert_eq!(decoded.len(), total);

        let mut pos = 0;
        for &(n, v) in &runs {
            let seg = &decoded[pos..pos + n as usize];
            prop_assert!(seg.iter().all(|&b| b == v));
            pos += n as usize;
        }
    }

    #[test]
    fn prop_literal_streams_concatenate(runs in literal_runs()) {
        let decoded = rle::decode_all(&encode_literals(&runs)).unwrap();
        prop_assert_eq!(decoded, runs.concat());
    }

    #[test]
    fn prop_undiff_is_self_inverse(
        pair in proptest::collection::vec((any::<u8>(), any::<u8>()), 0..2048)
    ) {
        let (base, payload): (Vec<u8>, Vec<u8>) = pair.into_iter().unzip();
        let encoded = delta::diff(&base, &payload).unwrap();
        let mut rebuilt = encoded.clone();
        delta::undiff_in_place(&base, &mut rebuilt).unwrap();
        prop_assert_eq!(&rebuilt, &payload);
        prop_assert_eq!(delta::undiff(&base, &encoded).unwrap(), payload);
    }

    #[test]
    fn prop_arbitrary_input_never_panics(input in proptest::collection::vec(any::<u8>(), 0..512)) {
        let len = rle::decoded_len(&input);
        let all = rle::decode_all(&input);
        match (len, all) {
            (Ok(n), Ok(out)) => prop_assert_eq!(n, out.len()),
            (Err(a), Err(b)) => prop_assert_eq!(a, b),
            (a, b) => prop_assert!(false, "decoded_len={a:?} decode_all={b:?}"),
        }
    }

    #[test]
    fn prop_small_buffer_fails_cleanly(
        runs in repeat_runs(),
        shrink in 1usize..16
    ) {
        let input = encode_repeats(&runs);
        let total = rle::decoded_len(&input).unwrap();
        prop_assume!(total >= shrink);

        let mut out = vec![0u8; total - shrink];
        let is_overflow = matches!(
            rle::decode_into(&input, &mut out),
            Err(DecodeError::OutputOverflow { .. })
        );
        prop_assert!(is_overflow);
    }

    #[test]
    fn prop_truncating_a_literal_is_detected(
        run in proptest::collection::vec(any::<u8>(), 1..=127),
        cut in 1usize..=127
    ) {
        let input = encode_literals(std::slice::from_ref(&run));
        prop_assume!(cut <= run.len());
        let truncated = &input[..input.len() - cut];
        let is_truncated = matches!(
            rle::decode_all(truncated),
            Err(DecodeError::TruncatedInput { offset: 0, .. })
        );
        prop_assert!(is_truncated);
    }
}
