//! Fuzz target for box re-projection.
//!
//! Arbitrary (possibly inverted or non-finite) boxes are resized and flipped;
//! the box count must never change and nothing may panic.

#![no_main]

use detprep::sample::{BBox, Original, Resized};
use detprep::transform::{flip_boxes, resize_boxes, FlipDecision};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (u16, u16, u16, u16, bool, Vec<[f64; 4]>)| {
    let (h, w, out_h, out_w, y_flip, raw) = input;
    let dims = |v: u16| usize::from(v.max(1));

    let boxes: Vec<BBox<Original>> = raw
        .iter()
        .map(|c| BBox::from_yxyx(c[0], c[1], c[2], c[3]))
        .collect();
    let resized: Vec<BBox<Resized>> =
        resize_boxes(&boxes, (dims(h), dims(w)), (dims(out_h), dims(out_w)));
    let flip = FlipDecision { x_flip: true, y_flip };
    let flipped = flip_boxes(&resized, (dims(out_h), dims(out_w)), flip);

    assert_eq!(flipped.len(), boxes.len());
});
