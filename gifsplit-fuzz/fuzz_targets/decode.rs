// cargo fuzz run decode corpus/decode -- -timeout=30

#![no_main]

use libfuzzer_sys::fuzz_target;
use std::io::Cursor;

use gifsplit::{Compositor, Decoder, DisposalMode, Stride};

fuzz_target!(|data: &[u8]| {
    let decoder = Decoder::new(Cursor::new(data)).max_image_sz(Some(1 << 20));
    if let Ok(seq) = decoder.into_sequence() {
        if let Ok(comp) = Compositor::new(&seq) {
            let comp = comp.with_disposal_mode(DisposalMode::Accurate);
            for snap in comp.snapshots(Stride::default().indices(seq.len())) {
                if snap.is_err() {
                    return;
                }
            }
        }
    }
});
