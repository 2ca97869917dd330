// Fermata
// Copyright (c) 2026 The Fermata Project Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use fermata_core::errors::{decode_error, Result};
use fermata_core::io::BitReaderLtr;

use log::warn;

use crate::common::*;
use crate::synthesis;

mod bitstream;
mod codebooks;
mod common;
mod hybrid_synthesis;
mod requantize;
mod stereo;

pub use common::BlockType;

use common::CriticalBandInfo;

/// Reads the side information of a frame into `FrameData`. Returns the length
/// of the side information in bytes.
pub fn read_side_info(
    bs: &mut BitReaderLtr<'_>,
    header: &FrameHeader,
    frame_data: &mut FrameData,
) -> Result<usize> {
    bitstream::read_side_info(bs, header, frame_data)
}

/// The size of the main data reservoir: the maximum main_data_begin history
/// (511 bytes) plus the largest possible frame payload.
pub const RESERVOIR_LEN: usize = 1940;

/// `BitReservoir` implements the bit reservoir mechanism for main data. Since
/// frames have a deterministic length based on the bit-rate, low-complexity
/// portions of the audio may not need every byte allocated to the frame. The
/// bit reservoir mechanism allows these unused portions of frames to be used
/// by future frames.
pub struct BitReservoir {
    buf: Box<[u8]>,
    len: usize,
}

impl BitReservoir {
    pub fn new() -> Self {
        BitReservoir { buf: vec![0u8; RESERVOIR_LEN].into_boxed_slice(), len: 0 }
    }

    /// Shifts the `main_data_begin` bytes of history to the front of the
    /// reservoir and appends the main data of the current frame. Returns
    /// false if the reservoir does not hold enough history yet; the new bytes
    /// are still accumulated so a later frame can resume.
    pub fn fill(&mut self, main_data: &[u8], main_data_begin: usize) -> Result<bool> {
        if main_data_begin + main_data.len() > self.buf.len() {
            return decode_error("mpa: main_data length exceeds reservoir");
        }

        if self.len >= main_data_begin {
            // Adequate history available: keep exactly main_data_begin bytes
            // of it.
            self.buf.copy_within(self.len - main_data_begin..self.len, 0);
            self.buf[main_data_begin..main_data_begin + main_data.len()].copy_from_slice(main_data);
            self.len = main_data_begin + main_data.len();

            Ok(true)
        }
        else {
            // Not enough history from previous frames, perhaps because the
            // stream was entered mid-way. Accumulate the new bytes and report
            // the underflow.
            if self.len + main_data.len() > self.buf.len() {
                self.len = 0;
            }

            self.buf[self.len..self.len + main_data.len()].copy_from_slice(main_data);
            self.len += main_data.len();

            warn!("mpa: bit reservoir underflow, zeroing frame");

            Ok(false)
        }
    }

    /// Returns the assembled main data.
    pub fn bytes_ref(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// Discards all buffered main data.
    pub fn clear(&mut self) {
        self.len = 0;
    }
}

/// MPEG2 joint stereo scale-factor partitioning, used by the intensity stereo
/// stage to reconstruct per-partition illegal positions.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScaleFactorJs {
    /// The intensity scale selector (the least-significant bit of the right
    /// channel's scalefac_compress).
    pub intensity_scale: u16,
    /// Scale factor length in bits, per partition.
    pub slen: [u32; 4],
    /// Number of scale factors, per partition.
    pub nr: [usize; 4],
}

/// `FrameData` contains the side_info fields of a MPEG audio frame.
#[derive(Default)]
pub struct FrameData {
    /// The byte offset into the bit reservoir indicating the location of the
    /// first bit of main data. If 0, the main data begins after the side info
    /// of this frame.
    pub main_data_begin: u16,
    /// Scale factor selector information, per channel. Each channel has 4
    /// groups of bands whose scale factors may be reused by the second
    /// granule; a true bit indicates reuse.
    pub scfsi: [[bool; 4]; 2],
    /// The granules.
    pub granules: [Granule; 2],
}

impl FrameData {
    /// Gets a mutable slice to the granule(s) in the side info: two for
    /// MPEG1, one for MPEG2 and 2.5.
    #[inline(always)]
    fn granules_mut(&mut self, version: MpegVersion) -> &mut [Granule] {
        match version {
            MpegVersion::Mpeg1 => &mut self.granules[..2],
            _ => &mut self.granules[..1],
        }
    }
}

#[derive(Default)]
pub struct Granule {
    /// Channels in the granule.
    pub channels: [GranuleChannel; 2],
}

pub struct GranuleChannel {
    /// Total number of bits used for scale factors (part2) and Huffman
    /// encoded data (part3).
    pub part2_3_length: u16,
    /// HALF the number of samples in the big_values partition.
    pub big_values: u16,
    /// Logarithmic quantization step size.
    pub global_gain: u8,
    /// Depending on the MPEG version, `scalefac_compress` determines how many
    /// bits are allocated per scale factor: a 4-bit lookup index for MPEG1, a
    /// 9-bit composite partition descriptor for MPEG2 and 2.5.
    pub scalefac_compress: u16,
    /// The block type (window shape) of the channel.
    pub block_type: BlockType,
    /// Gain factors for the three short windows, in units of 8 quarter
    /// powers.
    pub subblock_gain: [u8; 3],
    /// The Huffman table to use for decoding region[0..3] of big_values.
    pub table_select: [u8; 3],
    /// The index of the first sample in region1 of big_values.
    pub region1_start: usize,
    /// The index of the first sample in region2 of big_values.
    pub region2_start: usize,
    /// Whether the pre-emphasis amount for each scale-factor band should be
    /// added on to each scale factor before requantization.
    pub preflag: bool,
    /// A 0.5x (false) or 1x (true) multiplier for scale factors.
    pub scalefac_scale: bool,
    /// Use Huffman quads table A (0) or B (1) for decoding the count1
    /// partition.
    pub count1table_select: u8,
    /// Long and short window scale factors, in bitstream order. For short and
    /// mixed blocks the long bands (if any) come first, then each short band
    /// contributes its three windows consecutively. The untransmitted top
    /// band entries are always 0.
    pub scalefacs: [u8; 39],
    /// The starting sample index of the rzero partition after Huffman
    /// decoding, i.e. the count of big_values and count1 samples.
    pub rzero: usize,
}

impl Default for GranuleChannel {
    fn default() -> Self {
        GranuleChannel {
            part2_3_length: 0,
            big_values: 0,
            global_gain: 0,
            scalefac_compress: 0,
            block_type: BlockType::Long,
            subblock_gain: [0; 3],
            table_select: [0; 3],
            region1_start: 0,
            region2_start: 0,
            preflag: false,
            scalefac_scale: false,
            count1table_select: 0,
            scalefacs: [0; 39],
            rzero: 0,
        }
    }
}

/// The decoding state of the Layer III pipeline: the per-frame coefficient
/// buffers and the cross-frame reservoir, overlap-add history, and synthesis
/// FIFOs.
pub struct Layer3 {
    /// The coefficient buffer of each channel of the granule being decoded:
    /// first the signed Huffman output, then the dequantized Q25 spectrum.
    pub samples: [[[i32; 576]; 2]; 2],
    /// Overlap-add history of the hybrid filterbank, per channel.
    pub overlap: [[[i32; 18]; 32]; 2],
    /// Polyphase synthesis state, per channel.
    pub synthesis: [synthesis::SynthesisState; 2],
    /// MPEG2 intensity stereo partition descriptors of the current frame.
    pub scale_factor_js: ScaleFactorJs,
    /// Critical-band info of each channel, filled by the dequantizer and
    /// consumed by joint stereo reconstruction.
    pub cbi: [CriticalBandInfo; 2],
    /// Guard bits present in each channel's coefficient buffer.
    pub guard_bits: [u32; 2],
    /// Index past the last possibly non-zero coefficient, per channel.
    pub non_zero_bound: [usize; 2],
    /// Guard bits of each channel's hybrid output, updated per granule.
    #[allow(dead_code)]
    pub imdct_guard_bits: [u32; 2],
}

impl Layer3 {
    pub fn new() -> Self {
        Self {
            samples: [[[0; 576]; 2]; 2],
            overlap: [[[0; 18]; 32]; 2],
            synthesis: Default::default(),
            scale_factor_js: Default::default(),
            cbi: Default::default(),
            guard_bits: [0; 2],
            non_zero_bound: [0; 2],
            imdct_guard_bits: [0; 2],
        }
    }

    /// Clears all decoding state back to silence. The DSP stages rely on the
    /// buffers being zeroed on first use.
    pub fn clear(&mut self) {
        self.samples = [[[0; 576]; 2]; 2];
        self.overlap = [[[0; 18]; 32]; 2];
        for state in self.synthesis.iter_mut() {
            state.clear();
        }
        self.scale_factor_js = Default::default();
        self.cbi = Default::default();
        self.guard_bits = [0; 2];
        self.non_zero_bound = [0; 2];
        self.imdct_guard_bits = [0; 2];
    }

    /// Reads the scale factors for one granule channel from the main data.
    /// Returns the number of part2 bits read.
    pub fn read_scale_factors(
        &mut self,
        bs: &mut BitReaderLtr<'_>,
        header: &FrameHeader,
        gr: usize,
        ch: usize,
        frame_data: &mut FrameData,
    ) -> Result<u32> {
        if header.is_mpeg1() {
            bitstream::read_scale_factors_mpeg1(bs, gr, ch, frame_data)
        }
        else {
            bitstream::read_scale_factors_mpeg2(
                bs,
                ch > 0 && header.is_intensity_stereo(),
                &mut frame_data.granules[gr].channels[ch],
                &mut self.scale_factor_js,
            )
        }
    }

    /// Decodes the Huffman coded spectral samples for one granule channel.
    pub fn read_huffman(
        &mut self,
        bs: &mut BitReaderLtr<'_>,
        gr: usize,
        ch: usize,
        part3_bits: u32,
        frame_data: &mut FrameData,
    ) -> Result<()> {
        let channel = &mut frame_data.granules[gr].channels[ch];
        let rzero =
            requantize::read_huffman_samples(bs, channel, part3_bits, &mut self.samples[gr][ch])?;

        channel.rzero = rzero;

        Ok(())
    }

    /// Dequantizes both channels of a granule, and applies joint stereo
    /// reconstruction if the frame calls for it.
    pub fn dequantize(
        &mut self,
        header: &FrameHeader,
        gr: usize,
        frame_data: &FrameData,
    ) -> Result<()> {
        let granule = &frame_data.granules[gr];
        let ms_active = header.is_mid_side_stereo();

        for ch in 0..header.n_channels() {
            let (bound, gb) = requantize::requantize(
                header,
                &granule.channels[ch],
                ms_active,
                &mut self.samples[gr][ch],
                &mut self.cbi[ch],
            );

            self.non_zero_bound[ch] = bound;
            self.guard_bits[ch] = gb;
        }

        if header.n_channels() == 2 && header.is_joint_stereo() {
            stereo::stereo(
                header,
                granule,
                &self.scale_factor_js,
                &self.cbi,
                &mut self.guard_bits,
                &mut self.non_zero_bound,
                &mut self.samples[gr],
            )?;
        }

        Ok(())
    }

    /// Runs alias reduction and the hybrid filterbank (IMDCT, windowing,
    /// overlap-add, frequency inversion) on one channel of a granule.
    pub fn hybrid(&mut self, gr: usize, ch: usize, frame_data: &FrameData) {
        let channel = &frame_data.granules[gr].channels[ch];
        let samples = &mut self.samples[gr][ch];

        hybrid_synthesis::antialias(channel, samples);

        self.imdct_guard_bits[ch] =
            hybrid_synthesis::hybrid_synthesis(channel, &mut self.overlap[ch], samples);

        hybrid_synthesis::frequency_inversion(samples);
    }

    /// Runs the polyphase synthesis filterbank on one channel of a granule,
    /// producing 576 PCM samples interleaved at the channel count stride.
    pub fn subband(&mut self, gr: usize, ch: usize, n_channels: usize, out: &mut [i16]) {
        synthesis::synthesis(
            &mut self.synthesis[ch],
            &self.samples[gr][ch],
            n_channels,
            out,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_reservoir_carry() {
        let mut reservoir = BitReservoir::new();

        // Frame 1 deposits 200 bytes of main data.
        let frame1: Vec<u8> = (0..200).map(|i| i as u8).collect();
        assert!(reservoir.fill(&frame1, 0).unwrap());

        // Frame 2 references the last 100 bytes of frame 1.
        let frame2 = [0xaau8; 150];
        assert!(reservoir.fill(&frame2, 100).unwrap());

        let main = reservoir.bytes_ref();
        assert_eq!(main.len(), 250);
        // The first 100 bytes equal the tail of frame 1's main data.
        assert_eq!(&main[..100], &frame1[100..]);
        assert_eq!(&main[100..], &frame2[..]);
    }

    #[test]
    fn verify_reservoir_underflow() {
        let mut reservoir = BitReservoir::new();

        // Asking for more history than is buffered accumulates the data but
        // reports the underflow.
        let frame = [0x55u8; 100];
        assert!(!reservoir.fill(&frame, 64).unwrap());
        assert_eq!(reservoir.bytes_ref().len(), 100);

        // Once enough history accumulates, filling succeeds.
        assert!(reservoir.fill(&frame, 64).unwrap());
        assert_eq!(reservoir.bytes_ref().len(), 164);
    }

    #[test]
    fn verify_reservoir_rejects_oversize() {
        let mut reservoir = BitReservoir::new();
        let huge = vec![0u8; RESERVOIR_LEN];
        assert!(reservoir.fill(&huge, 511).is_err());
    }
}
