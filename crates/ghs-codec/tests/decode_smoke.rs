use std::panic;

use ghs_codec::schedule::ScheduleRecord;
use ghs_codec::segment::{segment_record, SegmentHeader};

fn xorshift64(state: &mut u64) -> u64 {
    *state ^= *state << 13;
    *state ^= *state >> 7;
    *state ^= *state << 17;
    *state
}

fn random_bytes(seed: u64, len: usize) -> Vec<u8> {
    let mut s = seed.max(1);
    let mut out = vec![0_u8; len];
    for b in &mut out {
        *b = (xorshift64(&mut s) & 0xFF) as u8;
    }
    out
}

#[test]
fn fuzz_like_random_inputs_do_not_panic_schedule_decode() {
    for i in 0..2000_u64 {
        let len = ((i as usize) * 7) % 40;
        let data = random_bytes(0xBAD5EED ^ i, len);

        let decoded = panic::catch_unwind(|| ScheduleRecord::decode(&data));
        assert!(decoded.is_ok(), "schedule decode panicked at case {i}");
    }
}

#[test]
fn fuzz_like_random_control_bytes_do_not_panic_header_decode() {
    for byte in 0..=u8::MAX {
        let decoded = panic::catch_unwind(|| SegmentHeader::from_byte(byte));
        assert!(decoded.is_ok(), "header decode panicked for byte {byte:#04x}");
        if let Some(header) = decoded.expect("already checked") {
            assert_eq!(
                SegmentHeader::from_byte(header.to_byte()),
                Some(header),
                "decoded header for {byte:#04x} should re-encode consistently",
            );
        }
    }
}

#[test]
fn fuzz_like_random_records_segment_without_panicking() {
    for i in 0..500_u64 {
        let len = ((i as usize) * 13) % 96;
        let record = random_bytes(0xC0FFEE ^ i, len);
        let max_payload = (i as usize) % 32;

        let segments = panic::catch_unwind(|| segment_record(&record, max_payload));
        assert!(segments.is_ok(), "segmentation panicked at case {i}");

        if max_payload > 0 {
            let segments = segments
                .expect("already checked")
                .expect("nonzero capacity should segment");
            let rejoined: Vec<u8> = segments.iter().flat_map(|s| s.payload.clone()).collect();
            assert_eq!(rejoined, record, "case {i} should concatenate back");
        }
    }
}
