// Fermata
// Copyright (c) 2026 The Fermata Project Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

/// The block type (window shape) of a granule channel.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BlockType {
    /// A long block.
    Long,
    /// The long-to-short transitional block.
    Start,
    /// Three short blocks, optionally with the lowest two sub-bands coded as
    /// one long block.
    Short { is_mixed: bool },
    /// The short-to-long transitional block.
    End,
}

impl BlockType {
    /// Returns true if this is a short block (mixed or not).
    #[inline(always)]
    pub fn is_short(&self) -> bool {
        matches!(self, BlockType::Short { .. })
    }
}

/// The shape of the non-zero spectrum of a channel, produced by the
/// dequantizer and consumed by joint stereo reconstruction to bound its
/// processing regions.
#[derive(Copy, Clone, Debug, Default)]
pub struct CriticalBandInfo {
    /// True if the channel uses short windows for its upper bands.
    pub is_short: bool,
    /// For long (or the long part of mixed) blocks, the index of the last
    /// scale-factor band holding a non-zero sample.
    pub end_long: usize,
    /// For short blocks, per window, the index of the last scale-factor band
    /// holding a non-zero sample.
    pub end_short: [usize; 3],
    /// The maximum of `end_short`.
    pub end_short_max: usize,
}

/// The scale-factor band boundaries for long blocks, indexed by sample rate.
/// Each row holds 22 bands plus the end-of-spectrum sentinel.
pub const SFB_LONG_BANDS: [[usize; 23]; 9] = [
    // 44.1 kHz
    [
        0, 4, 8, 12, 16, 20, 24, 30, 36, 44, 52, 62, 74, 90, 110, 134, 162, 196, 238, 288, 342,
        418, 576,
    ],
    // 48 kHz
    [
        0, 4, 8, 12, 16, 20, 24, 30, 36, 42, 50, 60, 72, 88, 106, 128, 156, 190, 230, 276, 330,
        384, 576,
    ],
    // 32 kHz
    [
        0, 4, 8, 12, 16, 20, 24, 30, 36, 44, 54, 66, 82, 102, 126, 156, 194, 240, 296, 364, 448,
        550, 576,
    ],
    // 22.05 kHz
    [
        0, 6, 12, 18, 24, 30, 36, 44, 54, 66, 80, 96, 116, 140, 168, 200, 238, 284, 336, 396, 464,
        522, 576,
    ],
    // 24 kHz
    [
        0, 6, 12, 18, 24, 30, 36, 44, 54, 66, 80, 96, 114, 136, 162, 194, 232, 278, 332, 394, 464,
        540, 576,
    ],
    // 16 kHz
    [
        0, 6, 12, 18, 24, 30, 36, 44, 54, 66, 80, 96, 116, 140, 168, 200, 238, 284, 336, 396, 464,
        522, 576,
    ],
    // 11.025 kHz
    [
        0, 6, 12, 18, 24, 30, 36, 44, 54, 66, 80, 96, 116, 140, 168, 200, 238, 284, 336, 396, 464,
        522, 576,
    ],
    // 12 kHz
    [
        0, 6, 12, 18, 24, 30, 36, 44, 54, 66, 80, 96, 116, 140, 168, 200, 238, 284, 336, 396, 464,
        540, 576,
    ],
    // 8 kHz
    [
        0, 12, 24, 36, 48, 60, 72, 88, 108, 132, 160, 192, 232, 280, 336, 400, 476, 566, 568, 570,
        572, 574, 576,
    ],
];

/// The scale-factor band boundaries for short blocks, indexed by sample rate,
/// in units of one window. Each row holds 13 bands plus the end-of-window
/// sentinel at 192.
pub const SFB_SHORT_BANDS: [[usize; 14]; 9] = [
    [0, 4, 8, 12, 16, 22, 30, 40, 52, 66, 84, 106, 136, 192],
    [0, 4, 8, 12, 16, 22, 28, 38, 50, 64, 80, 100, 126, 192],
    [0, 4, 8, 12, 16, 22, 30, 42, 58, 78, 104, 138, 180, 192],
    [0, 4, 8, 12, 18, 24, 32, 42, 56, 74, 100, 132, 174, 192],
    [0, 4, 8, 12, 18, 26, 36, 48, 62, 80, 104, 136, 180, 192],
    [0, 4, 8, 12, 18, 26, 36, 48, 62, 80, 104, 134, 174, 192],
    [0, 4, 8, 12, 18, 26, 36, 48, 62, 80, 104, 134, 174, 192],
    [0, 4, 8, 12, 18, 26, 36, 48, 62, 80, 104, 134, 174, 192],
    [0, 8, 16, 24, 36, 52, 72, 96, 124, 160, 162, 164, 166, 192],
];

/// Sample boundaries of short scale-factor bands in bitstream order, indexed
/// by sample rate: every band contributes three consecutive windows, so each
/// row holds 13 * 3 intervals plus the end-of-spectrum sentinel.
#[rustfmt::skip]
pub const SFB_SHORT_SAMPLE_BANDS: [[usize; 40]; 9] = [
    [0, 4, 8, 12, 16, 20, 24, 28, 32, 36, 40, 44, 48, 54, 60, 66, 74, 82, 90, 100, 110, 120, 132,
     144, 156, 170, 184, 198, 216, 234, 252, 274, 296, 318, 348, 378, 408, 464, 520, 576],
    [0, 4, 8, 12, 16, 20, 24, 28, 32, 36, 40, 44, 48, 54, 60, 66, 72, 78, 84, 94, 104, 114, 126,
     138, 150, 164, 178, 192, 208, 224, 240, 260, 280, 300, 326, 352, 378, 444, 510, 576],
    [0, 4, 8, 12, 16, 20, 24, 28, 32, 36, 40, 44, 48, 54, 60, 66, 74, 82, 90, 102, 114, 126, 142,
     158, 174, 194, 214, 234, 260, 286, 312, 346, 380, 414, 456, 498, 540, 552, 564, 576],
    [0, 4, 8, 12, 16, 20, 24, 28, 32, 36, 42, 48, 54, 60, 66, 72, 80, 88, 96, 106, 116, 126, 140,
     154, 168, 186, 204, 222, 248, 274, 300, 332, 364, 396, 438, 480, 522, 540, 558, 576],
    [0, 4, 8, 12, 16, 20, 24, 28, 32, 36, 42, 48, 54, 62, 70, 78, 88, 98, 108, 120, 132, 144, 158,
     172, 186, 204, 222, 240, 264, 288, 312, 344, 376, 408, 452, 496, 540, 552, 564, 576],
    [0, 4, 8, 12, 16, 20, 24, 28, 32, 36, 42, 48, 54, 62, 70, 78, 88, 98, 108, 120, 132, 144, 158,
     172, 186, 204, 222, 240, 264, 288, 312, 342, 372, 402, 442, 482, 522, 540, 558, 576],
    [0, 4, 8, 12, 16, 20, 24, 28, 32, 36, 42, 48, 54, 62, 70, 78, 88, 98, 108, 120, 132, 144, 158,
     172, 186, 204, 222, 240, 264, 288, 312, 342, 372, 402, 442, 482, 522, 540, 558, 576],
    [0, 4, 8, 12, 16, 20, 24, 28, 32, 36, 42, 48, 54, 62, 70, 78, 88, 98, 108, 120, 132, 144, 158,
     172, 186, 204, 222, 240, 264, 288, 312, 342, 372, 402, 442, 482, 522, 540, 558, 576],
    [0, 8, 16, 24, 32, 40, 48, 56, 64, 72, 84, 96, 108, 124, 140, 156, 176, 196, 216, 240, 264,
     288, 316, 344, 372, 408, 444, 480, 482, 484, 486, 488, 490, 492, 494, 496, 498, 524, 550,
     576],
];

/// Sample boundaries of the scale-factor bands of a mixed block in bitstream
/// order, indexed by sample rate: the long bands below the switch point
/// followed by the short bands (three windows per band) above it.
pub const SFB_MIXED_BANDS: [&[usize]; 9] = [
    &[
        0, 4, 8, 12, 16, 20, 24, 30, 36, 40, 44, 48, 54, 60, 66, 74, 82, 90, 100, 110, 120, 132,
        144, 156, 170, 184, 198, 216, 234, 252, 274, 296, 318, 348, 378, 408, 464, 520, 576,
    ],
    &[
        0, 4, 8, 12, 16, 20, 24, 30, 36, 40, 44, 48, 54, 60, 66, 72, 78, 84, 94, 104, 114, 126,
        138, 150, 164, 178, 192, 208, 224, 240, 260, 280, 300, 326, 352, 378, 444, 510, 576,
    ],
    &[
        0, 4, 8, 12, 16, 20, 24, 30, 36, 40, 44, 48, 54, 60, 66, 74, 82, 90, 102, 114, 126, 142,
        158, 174, 194, 214, 234, 260, 286, 312, 346, 380, 414, 456, 498, 540, 552, 564, 576,
    ],
    &[
        0, 6, 12, 18, 24, 30, 36, 42, 48, 54, 60, 66, 72, 80, 88, 96, 106, 116, 126, 140, 154,
        168, 186, 204, 222, 248, 274, 300, 332, 364, 396, 438, 480, 522, 540, 558, 576,
    ],
    &[
        0, 6, 12, 18, 24, 30, 36, 42, 48, 54, 62, 70, 78, 88, 98, 108, 120, 132, 144, 158, 172,
        186, 204, 222, 240, 264, 288, 312, 344, 376, 408, 452, 496, 540, 552, 564, 576,
    ],
    &[
        0, 6, 12, 18, 24, 30, 36, 42, 48, 54, 62, 70, 78, 88, 98, 108, 120, 132, 144, 158, 172,
        186, 204, 222, 240, 264, 288, 312, 342, 372, 402, 442, 482, 522, 540, 558, 576,
    ],
    &[
        0, 6, 12, 18, 24, 30, 36, 42, 48, 54, 62, 70, 78, 88, 98, 108, 120, 132, 144, 158, 172,
        186, 204, 222, 240, 264, 288, 312, 342, 372, 402, 442, 482, 522, 540, 558, 576,
    ],
    &[
        0, 6, 12, 18, 24, 30, 36, 42, 48, 54, 62, 70, 78, 88, 98, 108, 120, 132, 144, 158, 172,
        186, 204, 222, 240, 264, 288, 312, 342, 372, 402, 442, 482, 522, 540, 558, 576,
    ],
    &[
        0, 12, 24, 36, 48, 60, 72, 84, 96, 108, 124, 140, 156, 176, 196, 216, 240, 264, 288, 316,
        344, 372, 408, 444, 480, 482, 484, 486, 488, 490, 492, 494, 496, 498, 524, 550, 576,
    ],
];

/// The number of long scale-factor bands below the switch point of a mixed
/// block, indexed by sample rate.
pub const SFB_MIXED_SWITCH_POINT: [usize; 9] = [8, 8, 8, 6, 6, 6, 6, 6, 6];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_band_tables() {
        for bands in &SFB_LONG_BANDS {
            assert_eq!(*bands.last().unwrap(), 576);
            assert!(bands.windows(2).all(|w| w[0] < w[1]));
        }
        for bands in &SFB_SHORT_BANDS {
            assert_eq!(*bands.last().unwrap(), 192);
            assert!(bands.windows(2).all(|w| w[0] < w[1]));
        }
        for (idx, bands) in SFB_SHORT_SAMPLE_BANDS.iter().enumerate() {
            assert_eq!(*bands.last().unwrap(), 576);
            // Each band contributes three windows of equal width.
            for band in 0..13 {
                let width = SFB_SHORT_BANDS[idx][band + 1] - SFB_SHORT_BANDS[idx][band];
                for w in 0..3 {
                    let i = 3 * band + w;
                    assert_eq!(bands[i + 1] - bands[i], width);
                }
            }
        }
        for (idx, bands) in SFB_MIXED_BANDS.iter().enumerate() {
            let switch = SFB_MIXED_SWITCH_POINT[idx];
            assert_eq!(*bands.last().unwrap(), 576);
            assert_eq!(bands[switch], SFB_LONG_BANDS[idx][switch]);
        }
    }
}
