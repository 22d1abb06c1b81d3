#![no_main]
use framerle::rle;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // The decoder must never panic, only return errors.
    let Ok(len) = rle::decoded_len(data) else {
        assert!(rle::decode_all(data).is_err());
        return;
    };

    let decoded = rle::decode_all(data).unwrap();
    assert_eq!(decoded.len(), len);

    // A buffer one byte short must overflow, never write past its end.
    if len > 0 {
        let mut short = vec![0u8; len - 1];
        assert!(rle::decode_into(data, &mut short).is_err());
    }
});
