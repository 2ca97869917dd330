// Fermata
// Copyright (c) 2026 The Fermata Project Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use fermata_core::errors::{decode_error, Result};

use crate::common::*;

/// The length in bytes of a MPEG frame header word.
pub const MPEG_HEADER_LEN: usize = 4;

/// Bit-rate lookup table for MPEG version 1 layer 3.
const BIT_RATES_MPEG1_L3: [u32; 15] = [
    0, 32_000, 40_000, 48_000, 56_000, 64_000, 80_000, 96_000, 112_000, 128_000, 160_000, 192_000,
    224_000, 256_000, 320_000,
];

/// Bit-rate lookup table for MPEG version 2 & 2.5 layer 3.
const BIT_RATES_MPEG2_L3: [u32; 15] = [
    0, 8_000, 16_000, 24_000, 32_000, 40_000, 48_000, 56_000, 64_000, 80_000, 96_000, 112_000,
    128_000, 144_000, 160_000,
];

/// Quickly check if a header word may be a valid frame header.
#[inline]
pub fn check_header(header: u32) -> bool {
    // Version (0x1 is not allowed).
    if (header >> 19) & 0x3 == 0x1 {
        return false;
    }
    // Layer (0x0 is not allowed).
    if (header >> 17) & 0x3 == 0x0 {
        return false;
    }
    // Bitrate (0xf is not allowed).
    if (header >> 12) & 0xf == 0xf {
        return false;
    }
    // Sample rate (0x3 is not allowed).
    if (header >> 10) & 0x3 == 0x3 {
        return false;
    }
    true
}

/// Returns true if the provided frame header word is synced.
#[inline(always)]
pub fn is_frame_header_word_synced(sync: u32) -> bool {
    (sync & 0xffe0_0000) == 0xffe0_0000
}

/// Scans forward for the first byte offset at which a plausible frame header
/// word begins. The header word always starts at a byte boundary with 11
/// consecutive 1 bits. Returns `None` if no sync word is found in the window.
pub fn find_sync_word(buf: &[u8]) -> Option<usize> {
    if buf.len() < MPEG_HEADER_LEN {
        return None;
    }

    for offset in 0..=(buf.len() - MPEG_HEADER_LEN) {
        let word = u32::from_be_bytes([
            buf[offset],
            buf[offset + 1],
            buf[offset + 2],
            buf[offset + 3],
        ]);

        if is_frame_header_word_synced(word) && check_header(word) {
            return Some(offset);
        }
    }

    None
}

/// Parses a MPEG audio frame header word into a `FrameHeader`.
pub fn parse_frame_header(header: u32) -> Result<FrameHeader> {
    // The MPEG audio header is structured as follows:
    //
    // 0b1111_1111 0b111v_vlly 0brrrr_hhpx 0bmmmm_coee
    // where:
    //     vv   = version, ll = layer      , y = crc
    //     rrrr = bitrate, hh = sample rate, p = padding , x  = private bit
    //     mmmm = mode   , c  = copyright  , o = original, ee = emphasis

    if !is_frame_header_word_synced(header) {
        return decode_error("mpa: frame header is not synced");
    }

    let version = match (header & 0x18_0000) >> 19 {
        0b00 => MpegVersion::Mpeg2p5,
        0b10 => MpegVersion::Mpeg2,
        0b11 => MpegVersion::Mpeg1,
        _ => return decode_error("mpa: invalid MPEG version"),
    };

    let layer = match (header & 0x6_0000) >> 17 {
        0b01 => MpegLayer::Layer3,
        0b10 => MpegLayer::Layer2,
        0b11 => MpegLayer::Layer1,
        _ => return decode_error("mpa: invalid MPEG layer"),
    };

    let bitrate = match ((header & 0xf000) >> 12, version) {
        // The free bit-rate. The actual rate is derived from the frame
        // spacing once the next sync word is found.
        (0b0000, _) => 0,
        // Invalid bit-rate.
        (0b1111, _) => return decode_error("mpa: invalid bit-rate"),
        (i, MpegVersion::Mpeg1) => BIT_RATES_MPEG1_L3[i as usize],
        (i, _) => BIT_RATES_MPEG2_L3[i as usize],
    };

    let (sample_rate, sample_rate_idx) = match ((header & 0xc00) >> 10, version) {
        (0b00, MpegVersion::Mpeg1) => (44_100, 0),
        (0b01, MpegVersion::Mpeg1) => (48_000, 1),
        (0b10, MpegVersion::Mpeg1) => (32_000, 2),
        (0b00, MpegVersion::Mpeg2) => (22_050, 3),
        (0b01, MpegVersion::Mpeg2) => (24_000, 4),
        (0b10, MpegVersion::Mpeg2) => (16_000, 5),
        (0b00, MpegVersion::Mpeg2p5) => (11_025, 6),
        (0b01, MpegVersion::Mpeg2p5) => (12_000, 7),
        (0b10, MpegVersion::Mpeg2p5) => (8_000, 8),
        _ => return decode_error("mpa: invalid sample rate"),
    };

    let channel_mode = match ((header & 0xc0) >> 6, layer) {
        // Stereo, for layers 1, 2, and 3.
        (0b00, _) => ChannelMode::Stereo,
        // Dual mono, for layers 1, 2, and 3.
        (0b10, _) => ChannelMode::DualMono,
        // Mono, for layers 1, 2, and 3.
        (0b11, _) => ChannelMode::Mono,
        // Joint stereo mode for layer 3 supports a combination of Mid-Side
        // and Intensity Stereo depending on the mode extension bits.
        (0b01, MpegLayer::Layer3) => ChannelMode::JointStereo(Mode::Layer3 {
            mid_side: header & 0x20 != 0x0,
            intensity: header & 0x10 != 0x0,
        }),
        // Joint stereo mode for layers 1 and 2 only supports Intensity
        // Stereo. The mode extension bits indicate for which sub-bands
        // intensity stereo coding is applied.
        (0b01, _) => {
            ChannelMode::JointStereo(Mode::Intensity { bound: (1 + ((header & 0x30) >> 4)) << 2 })
        }
        _ => unreachable!(),
    };

    let emphasis = match header & 0x3 {
        0b01 => Emphasis::Fifty15,
        0b11 => Emphasis::CcitJ17,
        _ => Emphasis::None,
    };

    let has_padding = header & 0x200 != 0;
    let has_crc = header & 0x1_0000 == 0;

    // Constant provided for size calculation in ISO/IEC 11172-3 section
    // 2.4.3.1. For layer 3 a slot is one byte.
    let factor = match version {
        MpegVersion::Mpeg1 => 144,
        _ => 72,
    };

    // Calculate the frame size in bytes, excluding the header word. For
    // free-format frames the size is not known until the decoder locks onto
    // the frame spacing.
    let frame_size = if bitrate > 0 {
        (factor * bitrate / sample_rate) as usize + usize::from(has_padding) - MPEG_HEADER_LEN
    }
    else {
        0
    };

    Ok(FrameHeader {
        version,
        layer,
        bitrate,
        sample_rate,
        sample_rate_idx,
        channel_mode,
        emphasis,
        has_padding,
        has_crc,
        frame_size,
    })
}

/// Scans for the next frame header whose version, layer, and sample rate
/// fields match `first`, starting the scan at `start`. Used to measure the
/// frame spacing of free-format streams. Returns the offset of the matching
/// sync word relative to the start of `buf`.
pub fn find_free_format_sync(buf: &[u8], first: u32, start: usize) -> Option<usize> {
    if buf.len() < MPEG_HEADER_LEN {
        return None;
    }

    // Compare the sync, version, layer, CRC, and sample-rate fields; the
    // bit-rate, padding, and private bits are allowed to differ between
    // frames.
    const MASK: u32 = 0xffff_0c00;

    for offset in start..=(buf.len() - MPEG_HEADER_LEN) {
        let word = u32::from_be_bytes([
            buf[offset],
            buf[offset + 1],
            buf[offset + 2],
            buf[offset + 3],
        ]);

        if (word & MASK) == (first & MASK) && check_header(word) {
            return Some(offset);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_find_sync_word() {
        // The sync word begins at offset 1.
        assert_eq!(find_sync_word(&[0x00, 0xff, 0xfb, 0x90, 0x00]), Some(1));
        // A sync pattern with layer bits 00 (reserved) is not a frame header.
        assert_eq!(find_sync_word(&[0xff, 0xe0, 0x00, 0x00, 0x00]), None);
        assert_eq!(find_sync_word(&[0x00, 0x12, 0x34]), None);
    }

    #[test]
    fn verify_parse_frame_header() {
        // MPEG1 layer 3, no CRC, 128 kbps, 44.1 kHz, no padding, stereo.
        let header = parse_frame_header(0xfffb_9044).unwrap();

        assert_eq!(header.version, MpegVersion::Mpeg1);
        assert_eq!(header.layer, MpegLayer::Layer3);
        assert!(!header.has_crc);
        assert_eq!(header.bitrate, 128_000);
        assert_eq!(header.sample_rate, 44_100);
        assert_eq!(header.sample_rate_idx, 0);
        assert!(!header.has_padding);
        assert_eq!(header.channel_mode, ChannelMode::JointStereo(Mode::Layer3 {
            mid_side: false,
            intensity: false,
        }));
        // 144 * 128000 / 44100 = 417 slots for the whole frame.
        assert_eq!(MPEG_HEADER_LEN + header.frame_size, 417);
        assert_eq!(header.n_granules(), 2);
        assert_eq!(header.n_channels(), 2);
    }

    #[test]
    fn verify_parse_rejects_bad_headers() {
        // Invalid bit-rate index (0b1111).
        assert!(parse_frame_header(0xfffb_f044).is_err());
        // Invalid sample-rate index (0b11).
        assert!(parse_frame_header(0xfffb_9c44).is_err());
        // Reserved version (0b01).
        assert!(parse_frame_header(0xffeb_9044).is_err());
    }

    #[test]
    fn verify_free_format_sync() {
        // Two matching free-format headers 40 bytes apart.
        let mut buf = vec![0u8; 64];
        let header = [0xff, 0xfb, 0x00, 0x44];
        buf[0..4].copy_from_slice(&header);
        buf[40..44].copy_from_slice(&header);

        let word = u32::from_be_bytes(header);
        assert_eq!(find_free_format_sync(&buf, word, 4), Some(40));
    }
}
