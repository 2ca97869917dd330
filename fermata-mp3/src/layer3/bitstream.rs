// Fermata
// Copyright (c) 2026 The Fermata Project Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use fermata_core::errors::{decode_error, Result};
use fermata_core::io::BitReaderLtr;

use crate::common::{ChannelMode, FrameHeader};

use super::common::*;
use super::{FrameData, Granule, GranuleChannel, ScaleFactorJs};

/// Pairs of bit lengths for MPEG version 1 scale factors. For MPEG version 1,
/// there are two possible bit lengths for scale factors: slen1 and slen2. The
/// first N bands have scale factors of bit length slen1, while the remaining
/// bands have length slen2. The value of the switch point, N, is determined
/// by block type.
///
/// This table is indexed by scalefac_compress.
const SCALE_FACTOR_SLEN: [(u32, u32); 16] = [
    (0, 0),
    (0, 1),
    (0, 2),
    (0, 3),
    (3, 0),
    (1, 1),
    (1, 2),
    (1, 3),
    (2, 1),
    (2, 2),
    (2, 3),
    (3, 1),
    (3, 2),
    (3, 3),
    (4, 2),
    (4, 3),
];

/// For MPEG version 2, each scale factor band has a different scale factor.
/// The length in bits of a scale factor (slen) can be one of 4 values. The
/// values in this table indicate the number of scale factors that have length
/// slen[0..4]. Slen[0..4] is calculated from scalefac_compress.
///
/// This table is indexed by channel mode, scalefac_compress, and block type.
const SCALE_FACTOR_MPEG2_NSFB: [[[usize; 4]; 3]; 6] = [
    // Intensity stereo channel modes.
    [[7, 7, 7, 0], [12, 12, 12, 0], [6, 15, 12, 0]],
    [[6, 6, 6, 3], [12, 9, 9, 6], [6, 12, 9, 6]],
    [[8, 8, 5, 0], [15, 12, 9, 0], [6, 18, 9, 0]],
    // Other channel modes.
    [[6, 5, 5, 5], [9, 9, 9, 9], [6, 9, 9, 9]],
    [[6, 5, 7, 3], [9, 9, 12, 6], [6, 9, 12, 6]],
    [[11, 10, 0, 0], [18, 18, 0, 0], [15, 18, 0, 0]],
];

/// Reads the side information for a single channel in a granule.
fn read_granule_channel_side_info(
    bs: &mut BitReaderLtr<'_>,
    channel: &mut GranuleChannel,
    header: &FrameHeader,
) -> Result<()> {
    channel.part2_3_length = bs.read_bits(12) as u16;
    channel.big_values = bs.read_bits(9) as u16;

    // The maximum number of samples in a granule is 576. One big_value
    // decodes to 2 samples, therefore there can be no more than 288 (576/2)
    // big_values.
    if channel.big_values > 288 {
        return decode_error("mpa: granule big_values > 288");
    }

    channel.global_gain = bs.read_bits(8) as u8;

    channel.scalefac_compress =
        if header.is_mpeg1() { bs.read_bits(4) } else { bs.read_bits(9) } as u16;

    let window_switching = bs.read_bool();

    if window_switching {
        let block_type_enc = bs.read_bits(2);

        let is_mixed = bs.read_bool();

        channel.block_type = match block_type_enc {
            // Long blocks are not allowed with window switching.
            0b00 => return decode_error("mpa: invalid block_type"),
            0b01 => BlockType::Start,
            0b10 => BlockType::Short { is_mixed },
            0b11 => BlockType::End,
            _ => unreachable!(),
        };

        // When window switching is used, there are only two regions,
        // therefore there are only two table selectors.
        for i in 0..2 {
            channel.table_select[i] = bs.read_bits(5) as u8;
        }
        channel.table_select[2] = 0;

        for i in 0..3 {
            channel.subblock_gain[i] = bs.read_bits(3) as u8;
        }

        // When using window switching, the boundaries of region0..3 are set
        // implicitly according to the MPEG version and block type.
        channel.region1_start = match channel.block_type {
            // Short blocks processed as three windows use the first 9 short
            // scale-factor bands (3 bands times 3 windows) for region0.
            BlockType::Short { is_mixed: false } => {
                SFB_SHORT_SAMPLE_BANDS[header.sample_rate_idx][9]
            }
            // All other block types use the first 8 long bands.
            _ => SFB_LONG_BANDS[header.sample_rate_idx][8],
        };

        // The second region, region1, spans the remaining samples. Therefore
        // the third region, region2, is not used.
        channel.region2_start = 576;
    }
    else {
        // If window switching is not used, the block type is always Long.
        channel.block_type = BlockType::Long;

        for i in 0..3 {
            channel.table_select[i] = bs.read_bits(5) as u8;
        }

        // When window switching is not used, only long scale-factor bands are
        // used for each region. The number of bands in region0 and region1
        // are defined in the side info. The stored value is 1 less than the
        // actual value.
        let region0_count = bs.read_bits(4) as usize + 1;
        let region0_1_count = bs.read_bits(3) as usize + region0_count + 1;

        channel.region1_start = SFB_LONG_BANDS[header.sample_rate_idx][region0_count];

        // The count in region0_1_count may exceed the last band (22) in the
        // long bands table. Protect against this.
        channel.region2_start = match region0_1_count {
            0..=22 => SFB_LONG_BANDS[header.sample_rate_idx][region0_1_count],
            _ => 576,
        };
    }

    // For MPEG2, preflag is determined implicitly when reading the scale
    // factors.
    channel.preflag = if header.is_mpeg1() { bs.read_bool() } else { false };

    channel.scalefac_scale = bs.read_bool();
    channel.count1table_select = bs.read_bit() as u8;

    Ok(())
}

/// Reads the side information for all channels in a granule.
fn read_granule_side_info(
    bs: &mut BitReaderLtr<'_>,
    granule: &mut Granule,
    header: &FrameHeader,
) -> Result<()> {
    for channel in &mut granule.channels[..header.n_channels()] {
        read_granule_channel_side_info(bs, channel, header)?;
    }
    Ok(())
}

/// Reads the side information of a frame into `FrameData`. Returns the length
/// of the side information in bytes.
pub(super) fn read_side_info(
    bs: &mut BitReaderLtr<'_>,
    header: &FrameHeader,
    frame_data: &mut FrameData,
) -> Result<usize> {
    // For MPEG version 1...
    if header.is_mpeg1() {
        // First 9 bits is main_data_begin.
        frame_data.main_data_begin = bs.read_bits(9) as u16;

        // Next 3 (>1 channel) or 5 (1 channel) bits are private and should be
        // ignored.
        match header.channel_mode {
            ChannelMode::Mono => bs.ignore_bits(5),
            _ => bs.ignore_bits(3),
        };

        // Next four (or 8, if more than one channel) are the SCFSI bits.
        for scfsi in &mut frame_data.scfsi[..header.n_channels()] {
            for band in scfsi.iter_mut() {
                *band = bs.read_bool();
            }
        }
    }
    // For MPEG version 2...
    else {
        // First 8 bits is main_data_begin.
        frame_data.main_data_begin = bs.read_bits(8) as u16;

        // Next 1 (1 channel) or 2 (>1 channel) bits are private and should be
        // ignored.
        match header.channel_mode {
            ChannelMode::Mono => bs.ignore_bits(1),
            _ => bs.ignore_bits(2),
        }
    }

    // Read the side information for each granule.
    for granule in frame_data.granules_mut(header.version) {
        read_granule_side_info(bs, granule, header)?;
    }

    Ok(header.side_info_len())
}

/// Reads the scale factors for a single channel in a granule in a MPEG
/// version 1 audio frame. Returns the number of bits read.
pub(super) fn read_scale_factors_mpeg1(
    bs: &mut BitReaderLtr<'_>,
    gr: usize,
    ch: usize,
    frame_data: &mut FrameData,
) -> Result<u32> {
    let mut bits_read = 0;

    let channel = &mut frame_data.granules[gr].channels[ch];

    // For MPEG1, scalefac_compress is a 4-bit index into a scale factor bit
    // length lookup table.
    let (slen1, slen2) = SCALE_FACTOR_SLEN[channel.scalefac_compress as usize];

    // Short or mixed blocks...
    if let BlockType::Short { is_mixed } = channel.block_type {
        // If the block is mixed, the first 8 scale factors belong to the long
        // bands below the switch point, followed by 3 short bands of 3
        // windows each. Otherwise all 6 lower bands are short bands with 3
        // windows each. In both cases the first partition's scale factors are
        // slen1 bits long, and there is no inter-granule reuse for short
        // blocks.
        let n_sfb = if is_mixed { 8 + 3 * 3 } else { 6 * 3 };

        if slen1 > 0 {
            for sfb in 0..n_sfb {
                channel.scalefacs[sfb] = bs.read_bits(slen1) as u8;
            }
            bits_read += n_sfb as u32 * slen1;
        }

        // The remaining 6 short bands (18 scale factors) are slen2 bits long.
        if slen2 > 0 {
            for sfb in n_sfb..(n_sfb + (6 * 3)) {
                channel.scalefacs[sfb] = bs.read_bits(slen2) as u8;
            }
            bits_read += 6 * 3 * slen2;
        }
    }
    // Normal (long, start, end) windows...
    else {
        // For normal windows there are 21 scale-factor bands, divided into
        // four groups. Scale factors in the first two groups, [0..6] and
        // [6..11], are slen1 bits long, while the last two groups, [11..16]
        // and [16..21], are slen2 bits long. If this is the second granule
        // and the respective SCFSI bit is set, a group's scale factors are
        // copied verbatim from the first granule instead.
        const SCALE_FACTOR_BANDS: [(usize, usize); 4] = [(0, 6), (6, 11), (11, 16), (16, 21)];

        for (i, (start, end)) in SCALE_FACTOR_BANDS.iter().enumerate() {
            let slen = if i < 2 { slen1 } else { slen2 };

            if gr > 0 && frame_data.scfsi[ch][i] {
                let (granule0, granule1) = frame_data.granules.split_first_mut().unwrap();

                granule1[0].channels[ch].scalefacs[*start..*end]
                    .copy_from_slice(&granule0.channels[ch].scalefacs[*start..*end]);
            }
            // Otherwise, read the scale factors from the bitstream. Since
            // scale factors are already zeroed out by default, don't do
            // anything if slen is 0.
            else if slen > 0 {
                for sfb in *start..*end {
                    frame_data.granules[gr].channels[ch].scalefacs[sfb] =
                        bs.read_bits(slen) as u8;
                }
                bits_read += slen * (*end - *start) as u32;
            }
        }
    }

    Ok(bits_read)
}

/// Reads the scale factors for a single channel in a granule in a MPEG
/// version 2 or 2.5 audio frame. If this is the intensity-coded channel of a
/// joint stereo frame, the partition descriptors are also saved into `js` for
/// the intensity stereo reconstruction. Returns the number of bits read.
pub(super) fn read_scale_factors_mpeg2(
    bs: &mut BitReaderLtr<'_>,
    is_intensity_stereo: bool,
    channel: &mut GranuleChannel,
    js: &mut ScaleFactorJs,
) -> Result<u32> {
    let mut bits_read = 0;

    let block_index = match channel.block_type {
        BlockType::Short { is_mixed: true } => 2,
        BlockType::Short { is_mixed: false } => 1,
        _ => 0,
    };

    let (slen_table, nsfb_table) = if is_intensity_stereo {
        // The actual value of scalefac_compress is a 9-bit unsigned integer
        // (0..512) for MPEG2. A right shift reduces it to an 8-bit value
        // (0..256); the dropped least-significant bit is the intensity scale.
        let sfc = u32::from(channel.scalefac_compress) >> 1;

        js.intensity_scale = channel.scalefac_compress & 1;

        match sfc {
            0..=179 => (
                [
                    (sfc / 36),     //
                    (sfc % 36) / 6, //
                    (sfc % 36) % 6, //
                    0,              //
                ],
                &SCALE_FACTOR_MPEG2_NSFB[0][block_index],
            ),
            180..=243 => (
                [
                    ((sfc - 180) % 64) >> 4, //
                    ((sfc - 180) % 16) >> 2, //
                    ((sfc - 180) % 4),       //
                    0,                       //
                ],
                &SCALE_FACTOR_MPEG2_NSFB[1][block_index],
            ),
            244..=255 => (
                [
                    (sfc - 244) / 3, //
                    (sfc - 244) % 3, //
                    0,               //
                    0,               //
                ],
                &SCALE_FACTOR_MPEG2_NSFB[2][block_index],
            ),
            _ => unreachable!(),
        }
    }
    else {
        // The actual value of scalefac_compress is a 9-bit unsigned integer
        // (0..512) for MPEG2.
        let sfc = u32::from(channel.scalefac_compress);

        // Preflag is set only if scalefac_compress >= 500 and this is not the
        // intensity stereo channel. See ISO/IEC 13818-3 section 2.4.3.4.
        channel.preflag = sfc >= 500;

        match sfc {
            0..=399 => (
                [
                    (sfc >> 4) / 5,  //
                    (sfc >> 4) % 5,  //
                    (sfc % 16) >> 2, //
                    (sfc % 4),       //
                ],
                &SCALE_FACTOR_MPEG2_NSFB[3][block_index],
            ),
            400..=499 => (
                [
                    ((sfc - 400) >> 2) / 5, //
                    ((sfc - 400) >> 2) % 5, //
                    (sfc - 400) % 4,        //
                    0,                      //
                ],
                &SCALE_FACTOR_MPEG2_NSFB[4][block_index],
            ),
            500..=512 => (
                [
                    (sfc - 500) / 3, //
                    (sfc - 500) % 3, //
                    0,               //
                    0,               //
                ],
                &SCALE_FACTOR_MPEG2_NSFB[5][block_index],
            ),
            _ => unreachable!(),
        }
    };

    // Save the partition descriptors for the intensity stereo stage: the
    // illegal intensity position of a partition is (1 << slen) - 1.
    if is_intensity_stereo {
        js.slen.copy_from_slice(&slen_table);
        js.nr.copy_from_slice(nsfb_table);
    }

    let mut start = 0;

    for (&slen, &n_sfb) in slen_table.iter().zip(nsfb_table.iter()) {
        // If slen > 0, read n_sfb scale factors, each slen bits long. If
        // slen == 0 the scale factors are zero; since the scalefacs are
        // preinitialized to 0, this case may be skipped.
        if slen > 0 {
            for sfb in start..(start + n_sfb) {
                channel.scalefacs[sfb] = bs.read_bits(slen) as u8;
            }
            bits_read += slen * n_sfb as u32;
        }

        start += n_sfb;
    }

    Ok(bits_read)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::header::parse_frame_header;

    #[test]
    fn verify_read_side_info_mono() {
        // MPEG1, mono, 44.1 kHz, 128 kbps: the all-zero side info decodes to
        // two long-block granules with zeroed fields.
        let header = parse_frame_header(0xfffb_90c4).unwrap();
        assert_eq!(header.side_info_len(), 17);

        let buf = [0u8; 17];
        let mut bs = BitReaderLtr::new(&buf);
        let mut frame_data = FrameData::default();

        let len = read_side_info(&mut bs, &header, &mut frame_data).unwrap();

        assert_eq!(len, 17);
        assert_eq!(frame_data.main_data_begin, 0);
        for gr in 0..2 {
            let channel = &frame_data.granules[gr].channels[0];
            assert_eq!(channel.part2_3_length, 0);
            assert_eq!(channel.big_values, 0);
            assert_eq!(channel.block_type, BlockType::Long);
            // region0_count of 0 decodes as 1 long band, region1 as one
            // more.
            assert_eq!(channel.region1_start, 4);
            assert_eq!(channel.region2_start, 8);
        }
    }

    #[test]
    fn verify_read_side_info_rejects_big_values_overflow() {
        // Craft a side info where big_values = 0x1ff (> 288).
        let header = parse_frame_header(0xfffb_90c4).unwrap();

        let mut buf = [0u8; 17];
        // main_data_begin (9 bits) + private (5 bits) + scfsi (4 bits) = 18
        // bits, then part2_3_length (12 bits), then big_values (9 bits).
        // Set bits 30..39 (big_values) to all ones.
        buf[3] = 0x03;
        buf[4] = 0xfe;

        let mut bs = BitReaderLtr::new(&buf);
        let mut frame_data = FrameData::default();

        assert!(read_side_info(&mut bs, &header, &mut frame_data).is_err());
    }

    #[test]
    fn verify_scale_factor_slen() {
        // scalefac_compress = 15 maps to (4, 3).
        assert_eq!(SCALE_FACTOR_SLEN[15], (4, 3));
        assert_eq!(SCALE_FACTOR_SLEN[0], (0, 0));
    }
}
