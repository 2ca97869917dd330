// Fermata
// Copyright (c) 2026 The Fermata Project Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::cmp::min;

use fermata_core::errors::{decode_error, Result};
use fermata_core::io::BitReaderLtr;
use fermata_core::util::fixed::{guard_bits, mulshift32};

use log::info;

use crate::common::FrameHeader;

use super::codebooks::*;
use super::common::*;
use super::GranuleChannel;

/// The number of fraction bits in the output of the dequantizer. The stored
/// samples carry an implicit bias of 2^15 that is removed by the final
/// rounding shift of the synthesis filterbank.
#[allow(dead_code)]
pub const DQ_FRACBITS_OUT: i32 = 25;

/// Additional scaling (in quarter powers of two) pre-applied by the
/// dequantizer and restored by the sqrt(2)-prescaled IMDCT windows.
const IMDCT_SCALE: i32 = 2;

/// Three windows of the widest short scale-factor band (48 kHz, band 12),
/// sizing the short-block reorder scratch buffer.
const MAX_REORDER_SAMPS: usize = (192 - 126) * 3;

struct PairCodebook {
    /// The Huffman lookup table.
    codebook: &'static Codebook,
    /// Number of extra bits to read if a decoded sample is saturated.
    linbits: u32,
}

const PAIR_CODEBOOKS: [PairCodebook; 32] = [
    // Table 0
    PairCodebook { codebook: &HUFFMAN_TABLE_0, linbits: 0 },
    // Table 1
    PairCodebook { codebook: &HUFFMAN_TABLE_1, linbits: 0 },
    // Table 2
    PairCodebook { codebook: &HUFFMAN_TABLE_2, linbits: 0 },
    // Table 3
    PairCodebook { codebook: &HUFFMAN_TABLE_3, linbits: 0 },
    // Table 4 (not used)
    PairCodebook { codebook: &HUFFMAN_TABLE_0, linbits: 0 },
    // Table 5
    PairCodebook { codebook: &HUFFMAN_TABLE_5, linbits: 0 },
    // Table 6
    PairCodebook { codebook: &HUFFMAN_TABLE_6, linbits: 0 },
    // Table 7
    PairCodebook { codebook: &HUFFMAN_TABLE_7, linbits: 0 },
    // Table 8
    PairCodebook { codebook: &HUFFMAN_TABLE_8, linbits: 0 },
    // Table 9
    PairCodebook { codebook: &HUFFMAN_TABLE_9, linbits: 0 },
    // Table 10
    PairCodebook { codebook: &HUFFMAN_TABLE_10, linbits: 0 },
    // Table 11
    PairCodebook { codebook: &HUFFMAN_TABLE_11, linbits: 0 },
    // Table 12
    PairCodebook { codebook: &HUFFMAN_TABLE_12, linbits: 0 },
    // Table 13
    PairCodebook { codebook: &HUFFMAN_TABLE_13, linbits: 0 },
    // Table 14 (not used)
    PairCodebook { codebook: &HUFFMAN_TABLE_0, linbits: 0 },
    // Table 15
    PairCodebook { codebook: &HUFFMAN_TABLE_15, linbits: 0 },
    // Tables 16..=23 share one codebook with table-specific linbits.
    PairCodebook { codebook: &HUFFMAN_TABLE_16, linbits: 1 },
    PairCodebook { codebook: &HUFFMAN_TABLE_16, linbits: 2 },
    PairCodebook { codebook: &HUFFMAN_TABLE_16, linbits: 3 },
    PairCodebook { codebook: &HUFFMAN_TABLE_16, linbits: 4 },
    PairCodebook { codebook: &HUFFMAN_TABLE_16, linbits: 6 },
    PairCodebook { codebook: &HUFFMAN_TABLE_16, linbits: 8 },
    PairCodebook { codebook: &HUFFMAN_TABLE_16, linbits: 10 },
    PairCodebook { codebook: &HUFFMAN_TABLE_16, linbits: 13 },
    // Tables 24..=31 share one codebook with table-specific linbits.
    PairCodebook { codebook: &HUFFMAN_TABLE_24, linbits: 4 },
    PairCodebook { codebook: &HUFFMAN_TABLE_24, linbits: 5 },
    PairCodebook { codebook: &HUFFMAN_TABLE_24, linbits: 6 },
    PairCodebook { codebook: &HUFFMAN_TABLE_24, linbits: 7 },
    PairCodebook { codebook: &HUFFMAN_TABLE_24, linbits: 8 },
    PairCodebook { codebook: &HUFFMAN_TABLE_24, linbits: 9 },
    PairCodebook { codebook: &HUFFMAN_TABLE_24, linbits: 11 },
    PairCodebook { codebook: &HUFFMAN_TABLE_24, linbits: 13 },
];

/// Reads one codeword from a packed codebook and returns the decoded 8-bit
/// value: `x << 4 | y` for pair tables, the 4-bit `vwxy` group for quad
/// tables.
#[inline(always)]
fn read_codeword(bs: &mut BitReaderLtr<'_>, codebook: &Codebook) -> Result<u32> {
    let idx = bs.peek_bits(codebook.init_bits) as usize;

    let entry = codebook.data[idx];

    if entry & 0x8000_0000 != 0 {
        bs.ignore_bits((entry >> 16) & 0x1f);
        return Ok(entry & 0xff);
    }

    if entry == 0 {
        return decode_error("mpa: invalid huffman codeword");
    }

    // The codeword is longer than the root lookup; jump to a sub-table.
    bs.ignore_bits(codebook.init_bits);

    let sub_bits = (entry >> 16) & 0x1f;
    let offset = (entry & 0xffff) as usize;

    let idx = bs.peek_bits(sub_bits) as usize;

    let entry = codebook.data[offset + idx];

    if entry & 0x8000_0000 == 0 {
        return decode_error("mpa: invalid huffman codeword");
    }

    bs.ignore_bits((entry >> 16) & 0x1f);

    Ok(entry & 0xff)
}

/// Reads the Huffman coded spectral samples for a given channel in a granule
/// into the provided sample buffer. Returns the number of decoded samples
/// (the starting index of the rzero partition).
pub(super) fn read_huffman_samples(
    bs: &mut BitReaderLtr<'_>,
    channel: &GranuleChannel,
    part3_bits: u32,
    buf: &mut [i32; 576],
) -> Result<usize> {
    // If there are no Huffman code bits, zero all samples and return
    // immediately.
    if part3_bits == 0 {
        buf.fill(0);
        return Ok(0);
    }

    let start_bits = bs.bits_read();
    let bits_left = |bs: &BitReaderLtr<'_>| (bs.bits_read() - start_bits) < part3_bits as usize;

    let mut i = 0;

    // There are two samples per big_value, therefore multiply big_values by 2
    // to get number of samples in the big_value partition.
    let big_values_len = 2 * channel.big_values as usize;

    // There are up-to 3 regions in the big_value partition. Determine the
    // sample index denoting the end of each region (non-inclusive). Clamp to
    // the end of the big_values partition.
    let regions: [usize; 3] = [
        min(channel.region1_start, big_values_len),
        min(channel.region2_start, big_values_len),
        min(576, big_values_len),
    ];

    for (region_idx, region_end) in regions.iter().enumerate() {
        let table = &PAIR_CODEBOOKS[channel.table_select[region_idx] as usize];

        // If the table for a region is empty, fill the region with zeros and
        // move on to the next region.
        if table.codebook.is_empty() {
            while i < *region_end {
                buf[i] = 0;
                i += 1;
                buf[i] = 0;
                i += 1;
            }
            continue;
        }

        // Otherwise, read the big_values.
        while i < *region_end && bits_left(bs) {
            let value = read_codeword(bs, table.codebook)?;

            // In the big_values partition, each codeword decodes to two
            // samples, x and y, of 4 bits each.
            let mut x = (value >> 4) as i32;
            let mut y = (value & 0xf) as i32;

            // If a sample is saturated and the table specifies linbits, read
            // linbits more bits and add them to the sample. Each non-zero
            // sample is followed by a sign bit.
            if x > 0 {
                if x == 15 && table.linbits > 0 {
                    x += bs.read_bits(table.linbits) as i32;
                }
                if bs.read_bool() {
                    x = -x;
                }
            }
            buf[i] = x;
            i += 1;

            if y > 0 {
                if y == 15 && table.linbits > 0 {
                    y += bs.read_bits(table.linbits) as i32;
                }
                if bs.read_bool() {
                    y = -y;
                }
            }
            buf[i] = y;
            i += 1;
        }
    }

    // The big_values partition must not consume more bits than part2_3_length
    // allows.
    if bs.bits_read() - start_bits > part3_bits as usize {
        return decode_error("mpa: huffman big_values overrun");
    }

    // Select the codebook for the count1 partition.
    let count1_codebook = if channel.count1table_select == 1 {
        &QUAD_TABLE_B
    }
    else {
        &QUAD_TABLE_A
    };

    // Read the count1 partition.
    while i <= 572 && bits_left(bs) {
        let value = read_codeword(bs, count1_codebook)?;

        // In the count1 partition, each codeword decodes to 4 samples: v, w,
        // x, and y, each 1 bit long. Each non-zero sample is followed by a
        // sign bit.
        for j in 0..4 {
            let sample = if value & (0x8 >> j) != 0 {
                if bs.read_bool() {
                    -1
                }
                else {
                    1
                }
            }
            else {
                0
            };
            buf[i] = sample;
            i += 1;
        }
    }

    let bits_read = bs.bits_read() - start_bits;

    // Some encoders are poor at "stuffing" bits, resulting in part3_bits
    // being ever so slightly too small. This causes the count1 loop to decode
    // the next few bits as a group of samples. These bits are not real
    // samples, so erase the last group.
    if bits_read > part3_bits as usize {
        info!("mpa: count1 overrun, malformed bitstream");
        i -= 4;
        buf[i..i + 4].fill(0);
    }

    // The final partition after the count1 partition is the rzero partition.
    // Samples in this partition are all 0.
    buf[i..].fill(0);

    Ok(i)
}

/// Q31 fractional parts of 2^(-i/4), for i = 0..4. Entry 0 is saturated.
const POW14: [i32; 4] = [0x7fffffff, 0x6ba27e65, 0x5a82799a, 0x4c1bf829];

/// m^(4/3) * 2^(-i/4) for m = 0..16 and i = 0..4, Q25.
#[rustfmt::skip]
const POW43_14: [[i32; 16]; 4] = [
    [
        0x00000000, 0x02000000, 0x050a28be, 0x08a74b9b, 0x0cb2ff53, 0x111989d6, 0x15ce31c8, 0x1ac7f203,
        0x20000000, 0x257106b9, 0x2b16b4a3, 0x30ed74b4, 0x36f23fa5, 0x3d227bd3, 0x437be656, 0x49fc823c,
    ],
    [
        0x00000000, 0x01ae89fa, 0x043ce3e5, 0x0746d57b, 0x0aadc084, 0x0e610e6e, 0x12560c1d, 0x168523cf,
        0x1ae89f99, 0x1f7c03a4, 0x243bae49, 0x29249c67, 0x2e34420f, 0x33686f85, 0x38bf3dff, 0x3e370182,
    ],
    [
        0x00000000, 0x016a09e6, 0x039047c1, 0x061e734b, 0x08facd62, 0x0c176319, 0x0f6b3522, 0x12efe2ad,
        0x16a09e66, 0x1a79a317, 0x1e77e301, 0x2298d5b4, 0x26da56fc, 0x2b3a902a, 0x2fb7e7e7, 0x3450f650,
    ],
    [
        0x00000000, 0x01306fe1, 0x02ff221b, 0x052538f5, 0x078d0dfa, 0x0a2ae661, 0x0cf73154, 0x0fec91cb,
        0x1306fe0a, 0x16434a6c, 0x199ee595, 0x1d17ae3d, 0x20abd76a, 0x2459d551, 0x28204fbb, 0x2bfe1808,
    ],
];

/// m^(4/3) for m = 16..64, Q21.
#[rustfmt::skip]
const POW43: [i32; 48] = [
    0x050a28be, 0x0576c6f6, 0x05e58c0b, 0x06566361, 0x06c93a2f, 0x073dff3e, 0x07b4a2bc, 0x082d160a,
    0x08a74b9b, 0x092336d5, 0x09a0cbf6, 0x0a200000, 0x0aa0c8a2, 0x0b231c2a, 0x0ba6f176, 0x0c2c3fe6,
    0x0cb2ff53, 0x0d3b2800, 0x0dc4b299, 0x0e4f9822, 0x0edbd1f8, 0x0f6959c6, 0x0ff8297f, 0x10883b5d,
    0x111989d6, 0x11ac0f9f, 0x123fc7a2, 0x12d4acfd, 0x136abaff, 0x1401ed26, 0x149a3f18, 0x1533aca7,
    0x15ce31c8, 0x1669ca96, 0x1706734d, 0x17a4284a, 0x1842e608, 0x18e2a920, 0x19836e44, 0x1a253243,
    0x1ac7f203, 0x1b6baa83, 0x1c1058d8, 0x1cb5fa2c, 0x1d5c8bbe, 0x1e040ae1, 0x1eac74fb, 0x1f55c782,
];

/// Minimax polynomial approximations to m^(4/3) over [0.5, 1/sqrt(2)] and
/// [1/sqrt(2), 1.0]. The coefficients are scaled by 4, 2, 1, 0.5, and 0.25
/// for evaluation with `mulshift32`.
const POLY43LO: [i32; 5] = [0x29a0bda9, -0x4fd1b7d8, 0x5957aa1b, 0x236c498d, -0x00a7e7a7];
const POLY43HI: [i32; 5] = [0x10852163, -0x2ccc095c, 0x46e9408b, 0x27c2cef0, -0x010a884c];

/// Integer and Q31 fractional parts of 2^(i*4/3) for the normalization shift
/// of the polynomial branch.
const POW2EXP: [i32; 8] = [14, 13, 11, 10, 9, 7, 6, 5];
const POW2FRAC: [i32; 8] = [
    0x6597fa94, 0x50a28be6, 0x7fffffff, 0x6597fa94, 0x50a28be6, 0x7fffffff, 0x6597fa94,
    0x50a28be6,
];

/// sqrt(0.5) in Q31 format.
const SQRTHALF: i32 = 0x5a82799a;

/// Left-shifts `y` by `shift`, saturating to `i32::MAX`.
#[inline(always)]
fn sat_shl(y: i32, shift: i32) -> i32 {
    if shift >= 32 || y > (i32::MAX >> shift.min(31)) {
        i32::MAX
    }
    else {
        y << shift
    }
}

/// Right-shifts `y` by `shift`, or left with saturation when `shift` is
/// negative.
#[inline(always)]
fn scale_shift(y: i32, shift: i32) -> i32 {
    if shift >= 0 {
        if shift >= 32 {
            0
        }
        else {
            y >> shift
        }
    }
    else {
        sat_shl(y, -shift)
    }
}

/// Dequantizes a single sample magnitude: computes `m^(4/3) * 2^(-scale/4)`
/// in Q25.
///
/// Three strategies are used depending on the magnitude: a direct table for
/// m < 16, a table plus fractional multiply for m < 64, and a minimax
/// polynomial over the normalized magnitude otherwise.
fn dequant_sample(m: u32, scale: i32) -> i32 {
    if m == 0 {
        return 0;
    }

    let frac = (scale & 3) as usize;
    let scalei = scale >> 2;

    if m < 16 {
        scale_shift(POW43_14[frac][m as usize], scalei)
    }
    else if m < 64 {
        // Q21 * Q31 fractional scale yields Q20; 5 more bits reach Q25.
        let y = mulshift32(POW43[m as usize - 16], POW14[frac]);
        scale_shift(y, scalei - 5)
    }
    else {
        // Normalize m << 17 into [2^30, 2^31) and evaluate the polynomial
        // over the fraction.
        let mut x = (m << 17) as i32;
        let mut shift = 0;
        while x < 0x4000_0000 {
            x <<= 1;
            shift += 1;
        }

        let coef = if x < SQRTHALF { &POLY43LO } else { &POLY43HI };

        let mut y = coef[0];
        for &c in &coef[1..] {
            y = mulshift32(y, x) + c;
        }

        // Undo the normalization: multiply by the fractional part of
        // 2^(shift*4/3) and absorb the integer part into the final shift.
        y = mulshift32(y, POW2FRAC[shift as usize]) << 3;
        y = mulshift32(y, POW14[frac]);
        scale_shift(y, scalei - POW2EXP[shift as usize])
    }
}

/// Dequantizes one run of samples sharing a single scale, updating the
/// OR-mask of magnitudes. The samples hold the signed Huffman output and are
/// rewritten in place with Q25 coefficients.
#[inline]
fn dequant_band(samples: &mut [i32], scale: i32, mask: &mut i32) -> bool {
    let mut nonzero = false;

    for sample in samples.iter_mut() {
        if *sample == 0 {
            continue;
        }

        let y = dequant_sample(sample.unsigned_abs(), scale);

        *mask |= y;
        *sample = if *sample < 0 { -y } else { y };
        nonzero = true;
    }

    nonzero
}

/// Optional pre-emphasis for the high long scale-factor bands, from table
/// B.6 of ISO/IEC 11172-3.
const PRE_EMPHASIS: [u8; 22] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, //
    1, 1, 1, 1, 2, 2, 3, 3, 3, 2, 0,
];

/// Dequantizes all non-zero samples of a channel in place, reorders short
/// blocks into window-interleaved order, and derives the critical-band info
/// of the non-zero spectrum.
///
/// Returns the updated non-zero bound and the guard-bit count of the output.
pub(super) fn requantize(
    header: &FrameHeader,
    channel: &GranuleChannel,
    ms_active: bool,
    buf: &mut [i32; 576],
    cbi: &mut CriticalBandInfo,
) -> (usize, u32) {
    // The dequantizer scale of each band, in negated quarter powers of two,
    // starts from the granule's global gain. IMDCT_SCALE divides everything
    // by sqrt(2) for the prescaled hybrid windows, and mid-side frames are
    // divided by another sqrt(2) so that reconstruction is a plain
    // add/subtract.
    let gain = 210 - i32::from(channel.global_gain) + IMDCT_SCALE + if ms_active { 2 } else { 0 };

    // The scale-factor multiplier is 2 or 4 depending on scalefac_scale.
    let multiplier = if channel.scalefac_scale { 4 } else { 2 };

    let rzero = channel.rzero;
    let sr_idx = header.sample_rate_idx;

    let mut mask = 0;

    *cbi = CriticalBandInfo::default();

    match channel.block_type {
        BlockType::Short { is_mixed } => {
            let (bands, switch) = if is_mixed {
                (SFB_MIXED_BANDS[sr_idx], SFB_MIXED_SWITCH_POINT[sr_idx])
            }
            else {
                (&SFB_SHORT_SAMPLE_BANDS[sr_idx][..], 0)
            };

            cbi.is_short = true;

            // The long bands below the switch point of a mixed block.
            for sfb in 0..switch {
                let (start, end) = (bands[sfb], bands[sfb + 1]);
                if start >= rzero {
                    break;
                }

                let pre = if channel.preflag { PRE_EMPHASIS[sfb] } else { 0 };
                let scale =
                    gain + multiplier * i32::from(channel.scalefacs[sfb] + pre);

                if dequant_band(&mut buf[start..min(end, rzero)], scale, &mut mask) {
                    cbi.end_long = sfb;
                }
            }

            // The short bands, three windows per band in bitstream order.
            // Mixed blocks start at short band 3.
            let first_band = if is_mixed { 3 } else { 0 };

            for (i, pair) in bands[switch..].windows(2).enumerate() {
                let (start, end) = (pair[0], pair[1]);
                if start >= rzero {
                    break;
                }

                let band = first_band + i / 3;
                let win = i % 3;

                let scale = gain
                    + 8 * i32::from(channel.subblock_gain[win])
                    + multiplier * i32::from(channel.scalefacs[switch + i]);

                if dequant_band(&mut buf[start..min(end, rzero)], scale, &mut mask) {
                    cbi.end_short[win] = band;
                }
            }

            cbi.end_short_max =
                cbi.end_short.iter().copied().max().unwrap();

            // Reorder the short bands from (band, window) order to
            // window-interleaved order, and round the non-zero bound up to
            // the end of the last non-zero band.
            reorder(buf, bands, switch);

            let short_bands = &SFB_SHORT_BANDS[sr_idx];
            let bound = 3 * short_bands[min(cbi.end_short_max + 1, 13)];
            ((min(bound.max(rzero), 576)), guard_bits(mask))
        }
        _ => {
            let bands = &SFB_LONG_BANDS[sr_idx];

            for sfb in 0..22 {
                let (start, end) = (bands[sfb], bands[sfb + 1]);
                if start >= rzero {
                    break;
                }

                let pre = if channel.preflag { PRE_EMPHASIS[sfb] } else { 0 };
                let scale =
                    gain + multiplier * i32::from(channel.scalefacs[sfb] + pre);

                if dequant_band(&mut buf[start..min(end, rzero)], scale, &mut mask) {
                    cbi.end_long = sfb;
                }
            }

            (rzero, guard_bits(mask))
        }
    }
}

/// Reorders the short-band region of `buf` so that output index i holds the
/// samples of windows 0, 1, 2 interleaved, instead of the three whole windows
/// decoded back-to-back.
fn reorder(buf: &mut [i32; 576], bands: &[usize], switch: usize) {
    let mut scratch = [0i32; MAX_REORDER_SAMPS];

    let mut k = switch;
    while k + 3 < bands.len() {
        let start = bands[k];
        let width = bands[k + 1] - start;
        let end = bands[k + 3];
        let n = end - start;

        // Interleave the three windows of the band in the scratch buffer.
        for j in 0..width {
            scratch[3 * j] = buf[start + j];
            scratch[3 * j + 1] = buf[start + width + j];
            scratch[3 * j + 2] = buf[start + 2 * width + j];
        }

        buf[start..end].copy_from_slice(&scratch[..n]);

        k += 3;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_dequant_sample() {
        // Compare against the reference non-linearity m^(4/3) * 2^(-scale/4)
        // over the operating range.
        for &m in &[1u32, 2, 3, 7, 15, 16, 17, 40, 63, 64, 65, 100, 1000, 8191, 8206] {
            for &scale in &[-16, -4, -1, 0, 1, 2, 3, 4, 7, 16, 64, 120, 210] {
                let got = f64::from(dequant_sample(m, scale));
                let want =
                    f64::from(m).powf(4.0 / 3.0) * (-f64::from(scale) / 4.0).exp2() * f64::from(1 << 25);

                if want > f64::from(i32::MAX) {
                    continue;
                }

                // Right-shift truncation bounds the error to a couple of
                // output LSBs; at larger magnitudes the tables are accurate
                // to a relative 2e-5.
                assert!(
                    (got - want).abs() <= 2.5 + want * 2e-5,
                    "m={} scale={} got={} want={}",
                    m,
                    scale,
                    got,
                    want
                );
            }
        }
    }

    #[test]
    fn verify_read_codeword() {
        // Codeword 000 of table 1 decodes to (x, y) = (1, 1).
        let buf = [0b0001_1001, 0b0100_0000];
        let mut bs = BitReaderLtr::new(&buf);

        assert_eq!(read_codeword(&mut bs, &HUFFMAN_TABLE_1).unwrap(), 0x11);
        assert_eq!(bs.bits_read(), 3);
    }

    #[test]
    fn verify_read_huffman_samples() {
        // Two big_values pairs from table 1, then one all-zero count1 group
        // from quad table A:
        //
        //   000 1 1    (1, 1) with both signs negative
        //   001 0      (0, 1) with a positive sign
        //   1          (0, 0, 0, 0)
        let buf = [0b0001_1001, 0b0110_0000];

        let channel = GranuleChannel {
            big_values: 2,
            table_select: [1, 0, 0],
            region1_start: 576,
            region2_start: 576,
            ..Default::default()
        };

        let mut bs = BitReaderLtr::new(&buf);
        let mut samples = [0i32; 576];
        samples[575] = 123;
        let rzero = read_huffman_samples(&mut bs, &channel, 10, &mut samples).unwrap();

        assert_eq!(rzero, 8);
        assert_eq!(&samples[..8], &[-1, -1, 0, 1, 0, 0, 0, 0]);
        // Samples beyond rzero are all zero.
        assert!(samples[8..].iter().all(|&s| s == 0));
    }

    #[test]
    fn verify_requantize_long() {
        use crate::header::parse_frame_header;

        let header = parse_frame_header(0xfffb_90c4).unwrap();

        let mut channel = GranuleChannel { global_gain: 210, rzero: 2, ..Default::default() };
        channel.scalefacs[0] = 0;

        let mut buf = [0i32; 576];
        buf[0] = 1;
        buf[1] = -2;

        let mut cbi = CriticalBandInfo::default();
        let (bound, gb) = requantize(&header, &channel, false, &mut buf, &mut cbi);

        assert_eq!(bound, 2);
        assert!(!cbi.is_short);
        assert_eq!(cbi.end_long, 0);

        // With global_gain = 210 the scale is IMDCT_SCALE quarter powers:
        // 1^(4/3) / sqrt(2) and 2^(4/3) / sqrt(2) in Q25.
        let expect0 = (f64::from(1 << 25) / f64::sqrt(2.0)).round() as i32;
        let expect1 = -((f64::from(1 << 25) * f64::from(2.0f32).powf(4.0 / 3.0)
            / f64::sqrt(2.0))
        .round() as i32);

        assert!((buf[0] - expect0).abs() <= 4);
        assert!((buf[1] - expect1).abs() <= 16);

        // The guard-bit invariant: |coef| <= 2^(31 - gb).
        assert!(i64::from(buf[1].abs()) <= 1i64 << (31 - gb));
    }

    #[test]
    fn verify_reorder() {
        // Three 4-sample windows of one short band.
        let mut buf = [0i32; 576];
        for i in 0..12 {
            buf[i] = i as i32;
        }

        // A band table with a single 4-sample band and its sentinel.
        let bands = [0usize, 4, 8, 12];
        reorder(&mut buf, &bands, 0);

        assert_eq!(&buf[..12], &[0, 4, 8, 1, 5, 9, 2, 6, 10, 3, 7, 11]);
    }
}
