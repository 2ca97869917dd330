// Fermata
// Copyright (c) 2026 The Fermata Project Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::cmp::{max, min};

use fermata_core::errors::{decode_error, Result};
use fermata_core::util::fixed::{guard_bits, mulshift32};

use crate::common::FrameHeader;

use super::common::*;
use super::{Granule, ScaleFactorJs};

/// The invalid intensity position for MPEG1 bitstreams.
const INTENSITY_INV_POS_MPEG1: u8 = 7;

/// (Left, right) channel weights for MPEG1 intensity stereo, Q30, indexed by
/// the mid-side flag and the intensity position.
///
/// For position p, the left weight is tan(p * PI/12) / (1 + tan(p * PI/12)),
/// and the right weight is the row's final entry minus the left weight. When
/// mid-side stereo is active the whole spectrum was pre-divided by sqrt(2) in
/// the dequantizer, so the second row is prescaled by sqrt(2) to compensate.
#[rustfmt::skip]
const ISF_MPEG1: [[i32; 7]; 2] = [
    [
        0x00000000, 0x0d8658ba, 0x176cf5d1, 0x20000000,
        0x28930a2f, 0x3279a746, 0x40000000,
    ],
    [
        0x00000000, 0x13207f5d, 0x2120fb83, 0x2d413ccd,
        0x39617e17, 0x4761fa3d, 0x5a82799a,
    ],
];

/// Intensity weights for MPEG2 and 2.5, Q30: powers of 2^(-1/4) (intensity
/// scale 0) or 2^(-1/2) (intensity scale 1), indexed by the mid-side flag and
/// (position + 1) / 2. The mid-side rows are prescaled by sqrt(2) as above.
#[rustfmt::skip]
const ISF_MPEG2: [[[i32; 16]; 2]; 2] = [
    [
        [
            0x40000000, 0x35d13f33, 0x2d413ccd, 0x260dfc14,
            0x20000000, 0x1ae89f99, 0x16a09e66, 0x1306fe0a,
            0x10000000, 0x0d744fcd, 0x0b504f33, 0x09837f05,
            0x08000000, 0x06ba27e6, 0x05a8279a, 0x04c1bf83,
        ],
        [
            0x5a82799a, 0x4c1bf829, 0x40000000, 0x35d13f33,
            0x2d413ccd, 0x260dfc14, 0x20000000, 0x1ae89f99,
            0x16a09e66, 0x1306fe0a, 0x10000000, 0x0d744fcd,
            0x0b504f33, 0x09837f05, 0x08000000, 0x06ba27e6,
        ],
    ],
    [
        [
            0x40000000, 0x2d413ccd, 0x20000000, 0x16a09e66,
            0x10000000, 0x0b504f33, 0x08000000, 0x05a8279a,
            0x04000000, 0x02d413cd, 0x02000000, 0x016a09e6,
            0x01000000, 0x00b504f3, 0x00800000, 0x005a827a,
        ],
        [
            0x5a82799a, 0x40000000, 0x2d413ccd, 0x20000000,
            0x16a09e66, 0x10000000, 0x0b504f33, 0x08000000,
            0x05a8279a, 0x04000000, 0x02d413cd, 0x02000000,
            0x016a09e6, 0x01000000, 0x00b504f3, 0x00800000,
        ],
    ],
];

/// (Left, right) weights for illegal intensity positions, Q30, indexed by the
/// mid-side flag.
const ISF_IIP: [(i32, i32); 2] = [
    // Mid-side off: pass the carrier to the left channel only.
    (0x40000000, 0x00000000),
    // Mid-side on: an illegal position marks a band that is mid-side coded
    // with a zero side channel.
    (0x40000000, 0x40000000),
];

/// Applies an intensity weight pair to the carrier samples in channel 0,
/// synthesizing both output channels. The weights are Q30, so the product is
/// restored with a 2-bit left shift.
#[inline]
fn apply_intensity(
    weights: (i32, i32),
    range: std::ops::Range<usize>,
    ch: &mut [[i32; 576]; 2],
    mask: &mut [i32; 2],
) {
    let (fl, fr) = weights;

    for i in range {
        let carrier = ch[0][i];
        let left = mulshift32(fl, carrier) << 2;
        let right = mulshift32(fr, carrier) << 2;
        ch[0][i] = left;
        ch[1][i] = right;
        mask[0] |= left.wrapping_abs();
        mask[1] |= right.wrapping_abs();
    }
}

/// Reconstructs left and right channels from the mid and side channels over
/// `n_samps` samples. The dequantizer pre-divided both channels by sqrt(2),
/// so reconstruction is a plain sum and difference.
fn mid_side(ch: &mut [[i32; 576]; 2], n_samps: usize, mask: &mut [i32; 2]) {
    let (mid, side) = ch.split_at_mut(1);

    for (m, s) in mid[0][..n_samps].iter_mut().zip(side[0][..n_samps].iter_mut()) {
        let left = *m + *s;
        let right = *m - *s;
        *m = left;
        *s = right;
        mask[0] |= left.wrapping_abs();
        mask[1] |= right.wrapping_abs();
    }
}

/// The MPEG1 intensity position of a long band, with the untransmitted final
/// band inheriting its neighbour's position.
#[inline]
fn mpeg1_long_position(scalefacs: &[u8; 39], sfb: usize) -> u8 {
    if sfb >= 21 {
        scalefacs[20]
    }
    else {
        scalefacs[sfb]
    }
}

/// Decodes the intensity stereo coded bands of a MPEG1 frame. The bands at
/// or beyond the right channel's non-zero bound are reconstructed from the
/// left-channel carrier and the right channel's scale factors, which hold
/// the intensity positions.
#[allow(clippy::too_many_arguments)]
fn intensity_mpeg1(
    header: &FrameHeader,
    right: &super::GranuleChannel,
    cbi: &CriticalBandInfo,
    mid_side_on: bool,
    n_samps: usize,
    ch: &mut [[i32; 576]; 2],
    mask: &mut [i32; 2],
) {
    let ms = usize::from(mid_side_on);
    let sr_idx = header.sample_rate_idx;

    let weights = |isf: u8| -> (i32, i32) {
        if isf >= INTENSITY_INV_POS_MPEG1 {
            ISF_IIP[ms]
        }
        else {
            let fl = ISF_MPEG1[ms][usize::from(isf)];
            (fl, ISF_MPEG1[ms][6] - fl)
        }
    };

    if !cbi.is_short {
        // Long blocks: process the bands past the last non-zero band of the
        // right channel.
        let bands = &SFB_LONG_BANDS[sr_idx];

        for sfb in (cbi.end_long + 1)..22 {
            let start = bands[sfb];
            let end = min(bands[sfb + 1], n_samps);
            if start >= end {
                break;
            }

            apply_intensity(weights(mpeg1_long_position(&right.scalefacs, sfb)), start..end, ch, mask);
        }
    }
    else {
        let is_mixed = matches!(right.block_type, BlockType::Short { is_mixed: true });
        let switch = if is_mixed { SFB_MIXED_SWITCH_POINT[sr_idx] } else { 0 };

        // The long bands below the switch point of a mixed block follow the
        // long-block rules.
        if is_mixed {
            let bands = &SFB_LONG_BANDS[sr_idx];

            for sfb in (cbi.end_long + 1)..switch {
                let start = bands[sfb];
                let end = min(bands[sfb + 1], n_samps);
                if start >= end {
                    break;
                }

                apply_intensity(weights(right.scalefacs[sfb]), start..end, ch, mask);
            }
        }

        // Short bands: each window advances through the window-interleaved
        // samples independently, starting past the window's last non-zero
        // band.
        let bands = &SFB_SHORT_BANDS[sr_idx];
        let first_band = if is_mixed { 3 } else { 0 };

        for win in 0..3 {
            for sfb in max(cbi.end_short[win] + 1, first_band)..13 {
                let width = bands[sfb + 1] - bands[sfb];
                let base = 3 * bands[sfb];

                // The intensity position of the untransmitted final band is
                // inherited from its neighbour.
                let sf_band = min(sfb, 11);
                let isf = right.scalefacs[switch + 3 * (sf_band - first_band) + win];
                let (fl, fr) = weights(isf);

                for j in 0..width {
                    let i = base + 3 * j + win;
                    if i >= n_samps {
                        break;
                    }

                    let carrier = ch[0][i];
                    let left = mulshift32(fl, carrier) << 2;
                    let right_s = mulshift32(fr, carrier) << 2;
                    ch[0][i] = left;
                    ch[1][i] = right_s;
                    mask[0] |= left.wrapping_abs();
                    mask[1] |= right_s.wrapping_abs();
                }
            }
        }
    }
}

/// Decodes the intensity stereo coded bands of a MPEG2 or 2.5 frame. Unlike
/// MPEG1, the intensity positions are partitioned by the `ScaleFactorJs`
/// descriptors, the illegal position of a partition is `(1 << slen) - 1`, and
/// the weights select the left or right channel by the position's parity.
#[allow(clippy::too_many_arguments)]
fn intensity_mpeg2(
    header: &FrameHeader,
    right: &super::GranuleChannel,
    cbi: &CriticalBandInfo,
    js: &ScaleFactorJs,
    mid_side_on: bool,
    n_samps: usize,
    ch: &mut [[i32; 576]; 2],
    mask: &mut [i32; 2],
) {
    let ms = usize::from(mid_side_on);
    let sr_idx = header.sample_rate_idx;
    let table = &ISF_MPEG2[usize::from(js.intensity_scale)][ms];

    // The illegal intensity position for the partition holding flat
    // scale-factor index `sf`. Indices past the transmitted partitions (the
    // untransmitted top bands) always decode as illegal.
    let illegal = |sf: usize| -> u32 {
        let mut start = 0;
        for (&slen, &nr) in js.slen.iter().zip(js.nr.iter()) {
            if sf < start + nr {
                return (1u32 << slen) - 1;
            }
            start += nr;
        }
        0
    };

    let weights = |sf: usize, isf: u32| -> (i32, i32) {
        if isf == illegal(sf) {
            ISF_IIP[ms]
        }
        else if isf == 0 {
            (table[0], table[0])
        }
        else if isf & 1 != 0 {
            (table[((isf + 1) >> 1) as usize], table[0])
        }
        else {
            (table[0], table[(isf >> 1) as usize])
        }
    };

    if !cbi.is_short {
        let bands = &SFB_LONG_BANDS[sr_idx];

        for sfb in (cbi.end_long + 1)..22 {
            let start = bands[sfb];
            let end = min(bands[sfb + 1], n_samps);
            if start >= end {
                break;
            }

            // Bands 21 and beyond have no transmitted scale factor and decode
            // through the illegal-position sentinel.
            let isf = if sfb < 21 { u32::from(right.scalefacs[sfb]) } else { illegal(sfb) };
            apply_intensity(weights(sfb, isf), start..end, ch, mask);
        }
    }
    else {
        let is_mixed = matches!(right.block_type, BlockType::Short { is_mixed: true });
        let switch = if is_mixed { SFB_MIXED_SWITCH_POINT[sr_idx] } else { 0 };

        if is_mixed {
            let bands = &SFB_LONG_BANDS[sr_idx];

            for sfb in (cbi.end_long + 1)..switch {
                let start = bands[sfb];
                let end = min(bands[sfb + 1], n_samps);
                if start >= end {
                    break;
                }

                apply_intensity(weights(sfb, u32::from(right.scalefacs[sfb])), start..end, ch, mask);
            }
        }

        let bands = &SFB_SHORT_BANDS[sr_idx];
        let first_band = if is_mixed { 3 } else { 0 };

        for win in 0..3 {
            for sfb in max(cbi.end_short[win] + 1, first_band)..13 {
                let width = bands[sfb + 1] - bands[sfb];
                let base = 3 * bands[sfb];

                // Band 12 has no transmitted scale factor and decodes through
                // the illegal-position sentinel.
                let sf = switch + 3 * (min(sfb, 12) - first_band) + win;
                let isf =
                    if sfb < 12 { u32::from(right.scalefacs[sf]) } else { illegal(sf) };
                let (fl, fr) = weights(sf, isf);

                for j in 0..width {
                    let i = base + 3 * j + win;
                    if i >= n_samps {
                        break;
                    }

                    let carrier = ch[0][i];
                    let left = mulshift32(fl, carrier) << 2;
                    let right_s = mulshift32(fr, carrier) << 2;
                    ch[0][i] = left;
                    ch[1][i] = right_s;
                    mask[0] |= left.wrapping_abs();
                    mask[1] |= right_s.wrapping_abs();
                }
            }
        }
    }
}

/// Performs joint stereo decoding on a channel pair: mid-side reconstruction
/// over the shared region and intensity reconstruction over the right
/// channel's zero region. Updates the guard-bit counts and aligns the
/// non-zero bounds of both channels.
#[allow(clippy::too_many_arguments)]
pub(super) fn stereo(
    header: &FrameHeader,
    granule: &Granule,
    js: &ScaleFactorJs,
    cbi: &[CriticalBandInfo; 2],
    gb: &mut [u32; 2],
    non_zero_bound: &mut [usize; 2],
    ch: &mut [[i32; 576]; 2],
) -> Result<()> {
    let mid_side_on = header.is_mid_side_stereo();
    let intensity_on = header.is_intensity_stereo();

    if !mid_side_on && !intensity_on {
        return Ok(());
    }

    // The channels must carry the same window shape for joint decoding.
    if granule.channels[0].block_type.is_short() != granule.channels[1].block_type.is_short() {
        return decode_error("mpa: stereo channel pair block_type mismatch");
    }

    // Joint stereo processing assumes at least one guard bit in both
    // channels. It is extremely rare not to have one; if so, clamp the
    // samples to [-2^30 + 1, 2^30 - 1].
    if gb[0] < 1 || gb[1] < 1 {
        for (chan, &bound) in ch.iter_mut().zip(non_zero_bound.iter()) {
            for sample in chan[..bound].iter_mut() {
                *sample = (*sample).clamp(-0x3fff_ffff, 0x3fff_ffff);
            }
        }
    }

    let mut mask = [0i32; 2];

    if mid_side_on {
        // With intensity stereo also active, mid-side processing stops at the
        // start of the right channel's zero region; otherwise it covers the
        // whole non-zero spectrum.
        let n_samps = if intensity_on {
            if !cbi[1].is_short {
                SFB_LONG_BANDS[header.sample_rate_idx][min(cbi[1].end_long + 1, 22)]
            }
            else {
                3 * SFB_SHORT_BANDS[header.sample_rate_idx][min(cbi[1].end_short_max + 1, 13)]
            }
        }
        else {
            max(non_zero_bound[0], non_zero_bound[1])
        };

        mid_side(ch, n_samps, &mut mask);
    }

    if intensity_on {
        let n_samps = non_zero_bound[0];

        if header.is_mpeg1() {
            intensity_mpeg1(
                header,
                &granule.channels[1],
                &cbi[1],
                mid_side_on,
                n_samps,
                ch,
                &mut mask,
            );
        }
        else {
            intensity_mpeg2(
                header,
                &granule.channels[1],
                &cbi[1],
                js,
                mid_side_on,
                n_samps,
                ch,
                &mut mask,
            );
        }
    }

    // Both channels now share a common non-zero bound, and the guard bits are
    // refreshed from the written samples.
    gb[0] = guard_bits(mask[0]);
    gb[1] = guard_bits(mask[1]);

    let bound = max(non_zero_bound[0], non_zero_bound[1]);
    non_zero_bound[0] = bound;
    non_zero_bound[1] = bound;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::header::parse_frame_header;

    #[test]
    fn verify_mid_side_identity() {
        // With an all-zero side channel, mid-side reconstruction must yield
        // identical left and right channels.
        let mut ch = [[0i32; 576]; 2];
        for i in 0..32 {
            ch[0][i] = (i as i32 + 1) * 1000;
        }

        let mut mask = [0i32; 2];
        mid_side(&mut ch, 32, &mut mask);

        assert_eq!(ch[0], ch[1]);
        assert_eq!(mask[0], mask[1]);
    }

    #[test]
    fn verify_stereo_mid_side() {
        // A joint stereo frame with mid-side enabled (mode extension 0b10).
        let header = parse_frame_header(0xfffb_9064).unwrap();
        assert!(header.is_mid_side_stereo());
        assert!(!header.is_intensity_stereo());

        let granule = Granule::default();
        let js = ScaleFactorJs::default();
        let cbi = [CriticalBandInfo::default(); 2];

        let mut ch = [[0i32; 576]; 2];
        ch[0][0] = 1 << 20;
        ch[1][0] = 1 << 20;

        let mut gb = [10, 10];
        let mut bound = [1, 1];

        stereo(&header, &granule, &js, &cbi, &mut gb, &mut bound, &mut ch).unwrap();

        // L = M + S, R = M - S.
        assert_eq!(ch[0][0], 1 << 21);
        assert_eq!(ch[1][0], 0);
        assert_eq!(bound, [1, 1]);
    }

    #[test]
    fn verify_intensity_weights_mpeg1() {
        // Position 6 maps the full carrier to the left channel.
        assert_eq!(ISF_MPEG1[0][6], 0x4000_0000);
        // Complementary positions sum to the row total.
        for isf in 0..7 {
            let fl = ISF_MPEG1[0][isf];
            let fr = ISF_MPEG1[0][6] - fl;
            assert!(fr >= 0 && fr <= 0x4000_0000);
        }
        // The mid-side row is the base row scaled by sqrt(2).
        let scaled = (f64::from(ISF_MPEG1[0][3]) * f64::sqrt(2.0)).round() as i32;
        assert!((ISF_MPEG1[1][3] - scaled).abs() <= 1);
    }
}
