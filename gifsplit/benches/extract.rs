use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gifsplit::{
    AnimationFrame, AnimationSequence, Compositor, Disposal, DisposalMode,
    Extractor,
};
use pix::Raster;

/// Make an animation of small squares moving over a background
fn moving_squares() -> AnimationSequence {
    let bg = [0x20, 0x40, 0x60, 0xFF].repeat(128 * 128);
    let mut seq = AnimationSequence::new(128, 128)
        .with_frame(AnimationFrame::new(Raster::with_u8_buffer(128, 128, bg)));
    for i in 0..32 {
        let square = [i as u8 * 8, 0xFF, 0, 0xFF].repeat(16 * 16);
        let frame = AnimationFrame::new(Raster::with_u8_buffer(16, 16, square))
            .with_offset(i * 3, i * 2)
            .with_disposal(Disposal::RestorePrevious);
        seq.push(frame);
    }
    seq
}

fn composite_last(crit: &mut Criterion) {
    let seq = moving_squares();
    crit.bench_function("composite_last", |b| {
        b.iter(|| {
            let compositor = Compositor::new(black_box(&seq)).unwrap();
            black_box(compositor.composite(seq.len() - 1).unwrap());
        })
    });
}

fn extract_all(crit: &mut Criterion) {
    let seq = moving_squares();
    let extractor =
        Extractor::default().with_disposal_mode(DisposalMode::Accurate);
    crit.bench_function("extract_all", |b| {
        b.iter(|| {
            black_box(extractor.extract(black_box(&seq)).unwrap());
        })
    });
}

criterion_group!(benches, composite_last, extract_all);
criterion_main!(benches);
