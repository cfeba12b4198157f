//! Fuzz target for VOC annotation parsing.
//!
//! This fuzzer feeds arbitrary byte sequences to the VOC annotation parser,
//! checking for panics, crashes, or hangs.

#![no_main]

use detprep::source::voc::parse_voc_annotation_slice;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Cap input size to avoid excessive memory usage.
    if data.len() > 10 * 1024 * 1024 {
        return;
    }

    let _ = parse_voc_annotation_slice(data);
});
