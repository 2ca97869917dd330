// Fermata
// Copyright (c) 2026 The Fermata Project Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Whole-frame decoding tests over crafted bitstreams.

use fermata_mp3::{ErrorKind, Mp3Decoder};

/// Builds a silent MPEG1 stereo frame at 128 kbps / 44.1 kHz: an all-zero
/// side info section (two long-block granules, no coded data) followed by
/// zeroed main data, 417 bytes in total.
fn silent_frame() -> Vec<u8> {
    let mut frame = vec![0u8; 417];
    frame[0..4].copy_from_slice(&[0xff, 0xfb, 0x90, 0x44]);
    frame
}

#[test]
fn decode_silent_frame() {
    let frame = silent_frame();

    let mut decoder = Mp3Decoder::new();
    let mut pcm = [0x55i16; 2304];

    let decoded = decoder.decode(&frame, &mut pcm).unwrap();

    assert_eq!(decoded.consumed, 417);
    assert_eq!(decoded.samples, 2304);
    assert!(pcm.iter().all(|&s| s == 0));

    let info = decoder.last_frame_info();
    assert_eq!(info.bitrate, 128_000);
    assert_eq!(info.channels, 2);
    assert_eq!(info.sample_rate, 44_100);
    assert_eq!(info.bits_per_sample, 16);
    assert_eq!(info.output_samples, 2304);
    assert_eq!(info.layer, 3);
}

#[test]
fn decode_consecutive_frames() {
    let frame = silent_frame();
    let mut stream = frame.clone();
    stream.extend_from_slice(&frame);

    let mut decoder = Mp3Decoder::new();
    let mut pcm = [0i16; 2304];

    let first = decoder.decode(&stream, &mut pcm).unwrap();
    let second = decoder.decode(&stream[first.consumed..], &mut pcm).unwrap();

    assert_eq!(first.consumed, 417);
    assert_eq!(second.consumed, 417);
    assert!(pcm.iter().all(|&s| s == 0));
}

#[test]
fn find_sync_word_in_garbage() {
    let mut stream = vec![0x12u8, 0x34, 0x00];
    stream.extend_from_slice(&silent_frame());

    let offset = Mp3Decoder::find_sync_word(&stream).unwrap();
    assert_eq!(offset, 3);

    let mut decoder = Mp3Decoder::new();
    let mut pcm = [0i16; 2304];
    decoder.decode(&stream[offset..], &mut pcm).unwrap();
}

#[test]
fn reject_truncated_frame() {
    let frame = silent_frame();

    let mut decoder = Mp3Decoder::new();
    let mut pcm = [0i16; 2304];

    let err = decoder.decode(&frame[..100], &mut pcm).unwrap_err();
    assert_eq!(err.kind, ErrorKind::InDataUnderflow);
}

#[test]
fn reject_garbage_header() {
    let mut decoder = Mp3Decoder::new();
    let mut pcm = [0i16; 2304];

    let err = decoder.decode(&[0x12, 0x34, 0x56, 0x78], &mut pcm).unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidFrameHeader);
    assert_eq!(err.consumed, 0);
}

#[test]
fn main_data_underflow_is_recoverable() {
    // A frame that references 100 bytes of reservoir history the decoder has
    // not seen yet: main_data_begin != 0 in the first frame of the stream.
    let mut frame = silent_frame();
    // main_data_begin is the first 9 bits of the side info: the top 8 bits
    // land in the first side info byte.
    frame[4] = (100 >> 1) as u8;
    frame[5] = ((100 & 1) << 7) as u8;

    let mut decoder = Mp3Decoder::new();
    let mut pcm = [0x55i16; 2304];

    let err = decoder.decode(&frame, &mut pcm).unwrap_err();

    assert_eq!(err.kind, ErrorKind::MainDataUnderflow);
    // The whole frame was consumed, and the PCM zero-filled.
    assert_eq!(err.consumed, 417);
    assert!(pcm.iter().all(|&s| s == 0));

    // The reservoir accumulated the frame, so a subsequent frame with the
    // same backwards reference now succeeds.
    let decoded = decoder.decode(&frame, &mut pcm).unwrap();
    assert_eq!(decoded.samples, 2304);
}

#[test]
fn reset_is_idempotent() {
    let frame = silent_frame();

    let mut once = Mp3Decoder::new();
    once.reset();

    let mut twice = Mp3Decoder::new();
    twice.reset();
    twice.reset();

    let mut pcm_once = [0i16; 2304];
    let mut pcm_twice = [0i16; 2304];

    once.decode(&frame, &mut pcm_once).unwrap();
    twice.decode(&frame, &mut pcm_twice).unwrap();

    assert_eq!(pcm_once, pcm_twice);
}

#[test]
fn decode_mono_frame() {
    // MPEG1 mono, 128 kbps, 44.1 kHz: 17 bytes of side info.
    let mut frame = vec![0u8; 417];
    frame[0..4].copy_from_slice(&[0xff, 0xfb, 0x90, 0xc4]);

    let mut decoder = Mp3Decoder::new();
    let mut pcm = [0x55i16; 1152];

    let decoded = decoder.decode(&frame, &mut pcm).unwrap();

    assert_eq!(decoded.samples, 1152);
    assert!(pcm.iter().all(|&s| s == 0));
    assert_eq!(decoder.last_frame_info().channels, 1);
}

#[test]
fn free_format_locks_frame_spacing() {
    // Two consecutive free-format frames (bit-rate index 0), MPEG1 stereo at
    // 44.1 kHz, 200 bytes from sync to sync.
    let header = [0xffu8, 0xfb, 0x00, 0x44];
    let mut stream = vec![0u8; 600];
    stream[0..4].copy_from_slice(&header);
    stream[200..204].copy_from_slice(&header);
    stream[400..404].copy_from_slice(&header);

    let mut decoder = Mp3Decoder::new();
    let mut pcm = [0i16; 2304];

    let first = decoder.decode(&stream, &mut pcm).unwrap();
    assert_eq!(first.consumed, 200);

    // The derived bit rate: 200 bytes * 8 * 44100 / 1152 samples.
    let info = decoder.last_frame_info();
    assert_eq!(info.bitrate, 200 * 8 * 44_100 / 1152);

    // Subsequent frames reuse the locked spacing without rescanning.
    let second = decoder.decode(&stream[200..], &mut pcm).unwrap();
    assert_eq!(second.consumed, 200);
}

#[test]
fn self_contained_rejects_reservoir_reference() {
    let mut frame = silent_frame();
    frame[4] = (100 >> 1) as u8;
    frame[5] = ((100 & 1) << 7) as u8;

    let mut decoder = Mp3Decoder::new_self_contained();
    let mut pcm = [0i16; 2304];

    let err = decoder.decode(&frame, &mut pcm).unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidFrameHeader);
}

#[test]
fn self_contained_decodes_whole_input() {
    let frame = silent_frame();

    let mut decoder = Mp3Decoder::new_self_contained();
    let mut pcm = [0i16; 2304];

    let decoded = decoder.decode(&frame, &mut pcm).unwrap();

    // Self-contained frames consume the entire input buffer.
    assert_eq!(decoded.consumed, frame.len());
    assert!(pcm.iter().all(|&s| s == 0));
}
