// Fermata
// Copyright (c) 2026 The Fermata Project Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

/// The MPEG audio version.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MpegVersion {
    /// Version 2.5
    Mpeg2p5,
    /// Version 2
    Mpeg2,
    /// Version 1
    Mpeg1,
}

/// The MPEG audio layer.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MpegLayer {
    /// Layer 1
    Layer1,
    /// Layer 2
    Layer2,
    /// Layer 3
    Layer3,
}

/// For the Joint Stereo channel mode, the mode extension describes the
/// features and parameters of the stereo encoding.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Joint Stereo in layer 3 may use both Mid-Side and Intensity encoding.
    Layer3 { mid_side: bool, intensity: bool },
    /// Joint Stereo in layers 1 and 2 may only use Intensity encoding on a set
    /// of bands. The range of bands using intensity encoding is `bound..32`.
    Intensity { bound: u32 },
}

/// The channel mode.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ChannelMode {
    /// Single mono audio channel.
    Mono,
    /// Dual mono audio channels.
    DualMono,
    /// Stereo channels.
    Stereo,
    /// Joint Stereo encoded channels (decodes to Stereo).
    JointStereo(Mode),
}

impl ChannelMode {
    /// Gets the number of channels.
    #[inline(always)]
    pub fn count(&self) -> usize {
        match self {
            ChannelMode::Mono => 1,
            _ => 2,
        }
    }
}

/// The emphasis applied during encoding.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Emphasis {
    /// No emphasis
    None,
    /// 50/15us
    Fifty15,
    /// CCIT J.17
    CcitJ17,
}

/// A MPEG 1, 2, or 2.5 audio frame header.
#[derive(Clone, Debug)]
pub struct FrameHeader {
    pub version: MpegVersion,
    pub layer: MpegLayer,
    /// The bit rate in bits per second. Zero for free-format streams, until
    /// the decoder derives the actual rate from the frame spacing.
    pub bitrate: u32,
    pub sample_rate: u32,
    pub sample_rate_idx: usize,
    pub channel_mode: ChannelMode,
    #[allow(dead_code)]
    pub emphasis: Emphasis,
    pub has_padding: bool,
    pub has_crc: bool,
    /// The size of the frame in bytes, excluding the 4-byte header word. Zero
    /// for free-format streams, until the decoder locks onto the frame
    /// spacing.
    pub frame_size: usize,
}

impl FrameHeader {
    /// Returns true if this a MPEG1 frame, false otherwise.
    #[inline(always)]
    pub fn is_mpeg1(&self) -> bool {
        self.version == MpegVersion::Mpeg1
    }

    /// Returns true if this a MPEG2.5 frame, false otherwise.
    #[inline(always)]
    #[allow(dead_code)]
    pub fn is_mpeg2p5(&self) -> bool {
        self.version == MpegVersion::Mpeg2p5
    }

    /// Returns true if the frame uses the free-format bit rate.
    #[inline(always)]
    pub fn is_free_format(&self) -> bool {
        self.bitrate == 0
    }

    /// Returns the number of audio samples in the frame per channel.
    pub fn duration(&self) -> usize {
        576 * self.n_granules()
    }

    /// Returns the number of granules in the frame.
    #[inline(always)]
    pub fn n_granules(&self) -> usize {
        match self.version {
            MpegVersion::Mpeg1 => 2,
            _ => 1,
        }
    }

    /// Returns the number of channels per granule.
    #[inline(always)]
    pub fn n_channels(&self) -> usize {
        self.channel_mode.count()
    }

    /// Returns true if Intensity Stereo encoding is used, false otherwise.
    #[inline(always)]
    pub fn is_intensity_stereo(&self) -> bool {
        match self.channel_mode {
            ChannelMode::JointStereo(Mode::Layer3 { intensity, .. }) => intensity,
            ChannelMode::JointStereo(Mode::Intensity { .. }) => true,
            _ => false,
        }
    }

    /// Returns true if Mid-Side stereo encoding is used, false otherwise.
    #[inline(always)]
    pub fn is_mid_side_stereo(&self) -> bool {
        match self.channel_mode {
            ChannelMode::JointStereo(Mode::Layer3 { mid_side, .. }) => mid_side,
            _ => false,
        }
    }

    /// Returns true if any joint stereo encoding is active for this frame.
    #[inline(always)]
    pub fn is_joint_stereo(&self) -> bool {
        self.is_intensity_stereo() || self.is_mid_side_stereo()
    }

    /// Gets the number of bytes of the CRC word following the header, if any.
    #[inline(always)]
    pub fn crc_len(&self) -> usize {
        if self.has_crc {
            2
        }
        else {
            0
        }
    }

    /// Get the side information length in bytes.
    #[inline(always)]
    pub fn side_info_len(&self) -> usize {
        match (self.version, self.channel_mode) {
            (MpegVersion::Mpeg1, ChannelMode::Mono) => 17,
            (MpegVersion::Mpeg1, _) => 32,
            (_, ChannelMode::Mono) => 9,
            (_, _) => 17,
        }
    }

    /// Gets the number of main data bytes in the frame: the frame size less
    /// the CRC word and the side information.
    #[inline(always)]
    pub fn main_data_len(&self) -> usize {
        self.frame_size.saturating_sub(self.crc_len() + self.side_info_len())
    }
}
