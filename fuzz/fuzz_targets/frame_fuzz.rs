#![no_main]
use framerle::{delta, frame, rle};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    // First byte picks the split between base frame and compressed delta.
    let payload = &data[1..];
    let split = (data[0] as usize).min(payload.len());
    let (base, compressed) = payload.split_at(split);

    if let Ok(rebuilt) = frame::reconstruct(base, compressed) {
        assert_eq!(rebuilt.len(), base.len());
        // Diffing the frame against the base gives back the expanded delta,
        // zero-padded to the frame length.
        let delta = delta::diff(base, &rebuilt).unwrap();
        let expanded = rle::decode_all(compressed).unwrap();
        assert_eq!(&delta[..expanded.len()], &expanded[..]);
        assert!(delta[expanded.len()..].iter().all(|&b| b == 0));

        // Viewing the frame as a bitmap keeps every set byte.
        let width = (data[0] as usize).max(1);
        let bmp = frame::Bitmap::from_pages(width, &rebuilt).unwrap();
        let trimmed = rebuilt.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
        assert_eq!(bmp.to_bytes(), &rebuilt[..trimmed]);
    }
});
