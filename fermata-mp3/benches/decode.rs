// Fermata
// Copyright (c) 2026 The Fermata Project Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use criterion::{criterion_group, criterion_main, Criterion};

use fermata_mp3::Mp3Decoder;

/// A silent MPEG1 stereo frame at 128 kbps / 44.1 kHz.
fn silent_frame() -> Vec<u8> {
    let mut frame = vec![0u8; 417];
    frame[0..4].copy_from_slice(&[0xff, 0xfb, 0x90, 0x44]);
    frame
}

pub fn decode_benchmark(c: &mut Criterion) {
    let frame = silent_frame();

    c.bench_function("decode stereo frame", |b| {
        let mut decoder = Mp3Decoder::new();
        let mut pcm = [0i16; 2304];

        b.iter(|| {
            decoder.decode(&frame, &mut pcm).unwrap();
            pcm[0]
        })
    });
}

criterion_group!(benches, decode_benchmark);
criterion_main!(benches);
