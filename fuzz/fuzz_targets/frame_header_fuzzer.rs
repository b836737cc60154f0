//! Fuzz target for frame header parsing
//!
//! # Invariants
//!
//! - NEVER panic on arbitrary header bytes
//! - A parsed header re-encodes to the same four bytes
//! - `encode_frame` output always parses back to the body length

#![no_main]

use libfuzzer_sys::fuzz_target;
use vernam_proto::{FrameHeader, encode_frame};

fuzz_target!(|data: &[u8]| {
    if let Ok(header) = FrameHeader::parse(data) {
        assert!(data.len() >= FrameHeader::SIZE);
        assert_eq!(&header.to_wire()[..], &data[..FrameHeader::SIZE]);
    }

    // Any body short enough to frame must survive the round trip.
    if let Ok(frame) = encode_frame(data) {
        let header = FrameHeader::parse(&frame).unwrap_or_else(|e| panic!("own frame: {e}"));
        assert_eq!(header.payload_len(), data.len());
        assert_eq!(&frame[FrameHeader::SIZE..], data);
    }
});
