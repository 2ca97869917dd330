// Fermata
// Copyright (c) 2026 The Fermata Project Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::error;
use std::fmt;

use fermata_core::io::BitReaderLtr;

use log::warn;

use crate::common::*;
use crate::header::{self, MPEG_HEADER_LEN};
use crate::layer3;

/// The reason a frame could not be decoded.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Not enough input bytes to cover the frame's main data slots.
    InDataUnderflow,
    /// The bit reservoir lacks the history referenced by main_data_begin.
    /// The offered bytes were consumed and the frame's PCM zeroed; decoding
    /// may continue with the next frame.
    MainDataUnderflow,
    /// Scanning for the next sync word of a free-format stream failed.
    FreeBitrateSync,
    /// The frame header was malformed or unsupported.
    InvalidFrameHeader,
    /// The side information was malformed.
    InvalidSideInfo,
    /// The scale factors were malformed.
    InvalidScaleFactors,
    /// The Huffman coded spectral data was malformed.
    InvalidHuffmanCodes,
    /// The dequantizer or stereo reconstruction rejected the frame.
    InvalidDequantize,
    /// The hybrid filterbank rejected the frame.
    InvalidImdct,
    /// The synthesis filterbank rejected the frame.
    InvalidSubband,
}

impl ErrorKind {
    fn as_str(&self) -> &'static str {
        match *self {
            ErrorKind::InDataUnderflow => "input underflow",
            ErrorKind::MainDataUnderflow => "main data underflow",
            ErrorKind::FreeBitrateSync => "free-format sync not found",
            ErrorKind::InvalidFrameHeader => "invalid frame header",
            ErrorKind::InvalidSideInfo => "invalid side info",
            ErrorKind::InvalidScaleFactors => "invalid scale factors",
            ErrorKind::InvalidHuffmanCodes => "invalid huffman codes",
            ErrorKind::InvalidDequantize => "invalid dequantization",
            ErrorKind::InvalidImdct => "invalid hybrid synthesis",
            ErrorKind::InvalidSubband => "invalid subband synthesis",
        }
    }
}

/// An error returned by [`Mp3Decoder::decode`].
///
/// Cross-frame decoder state survives every error; after resynchronizing with
/// [`Mp3Decoder::find_sync_word`] the caller may attempt the next frame.
#[derive(Debug)]
pub struct DecodeError {
    /// The reason the frame failed to decode.
    pub kind: ErrorKind,
    /// The number of input bytes consumed before the failure. The caller
    /// should advance its buffer by this amount before resynchronizing.
    pub consumed: usize,
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "mp3 decode error: {}", self.kind.as_str())
    }
}

impl error::Error for DecodeError {}

/// Information about the last frame decoded.
#[derive(Copy, Clone, Debug, Default)]
pub struct FrameInfo {
    /// The bit rate in bits per second. For free-format streams this is the
    /// rate derived from the frame spacing.
    pub bitrate: u32,
    /// The number of output channels.
    pub channels: usize,
    /// The sample rate in Hz.
    pub sample_rate: u32,
    /// Bits per output sample. Always 16.
    pub bits_per_sample: u32,
    /// Total number of PCM samples produced by the frame, summed over
    /// channels.
    pub output_samples: usize,
    /// The MPEG layer. Always 3.
    pub layer: u32,
    /// The MPEG version of the stream.
    pub version: Option<MpegVersion>,
}

/// The result of a successful [`Mp3Decoder::decode`] call.
#[derive(Copy, Clone, Debug)]
pub struct Decoded {
    /// The number of input bytes consumed.
    pub consumed: usize,
    /// The number of PCM samples written, summed over channels.
    pub samples: usize,
}

/// The framing of the input the decoder is fed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum DataFormat {
    /// A standard MPEG audio stream in which main data may span frame
    /// boundaries through the bit reservoir.
    Streaming,
    /// Self-contained frames as reassembled by an RFC 3119 de-packetizer:
    /// every frame carries its own main data and main_data_begin must be 0.
    SelfContained,
}

/// The frame spacing of a free-format stream, locked on the first frame.
#[derive(Copy, Clone, Debug)]
struct FreeFormat {
    /// Main data bytes per frame, excluding the padding slot.
    slots: usize,
    /// The derived bit rate in bits per second.
    bitrate: u32,
}

/// A fixed-point MPEG-1, 2, and 2.5 Layer III decoder.
///
/// The decoder exposes a pure frame-in / PCM-out contract: one call to
/// [`decode`](Mp3Decoder::decode) consumes one frame from the input and
/// produces one frame of interleaved 16-bit PCM. The caller drives the
/// stream: it locates frames with
/// [`find_sync_word`](Mp3Decoder::find_sync_word), feeds bytes, and
/// resynchronizes after errors. A decoder instance holds all mutable state,
/// so independent streams decode with independent instances.
pub struct Mp3Decoder {
    state: layer3::Layer3,
    reservoir: layer3::BitReservoir,
    info: FrameInfo,
    data_format: DataFormat,
    free_format: Option<FreeFormat>,
}

impl Mp3Decoder {
    /// Instantiates a decoder for a standard MPEG audio stream. All state
    /// starts zeroed.
    pub fn new() -> Self {
        Mp3Decoder {
            state: layer3::Layer3::new(),
            reservoir: layer3::BitReservoir::new(),
            info: Default::default(),
            data_format: DataFormat::Streaming,
            free_format: None,
        }
    }

    /// Instantiates a decoder for self-contained (RFC 3119) frames. The
    /// framing of a decoder is fixed at construction: feeding a reservoir
    /// stream to a self-contained decoder, or vice versa, is rejected per
    /// frame rather than silently corrupting the reservoir.
    pub fn new_self_contained() -> Self {
        Mp3Decoder { data_format: DataFormat::SelfContained, ..Mp3Decoder::new() }
    }

    /// Resets all decoder state to silence, as if freshly constructed.
    /// Resetting is idempotent.
    pub fn reset(&mut self) {
        self.state.clear();
        self.reservoir.clear();
        self.info = Default::default();
        self.free_format = None;
    }

    /// Scans forward for the first byte offset of `buf` at which a plausible
    /// frame header begins, or `None` if no sync word was found.
    pub fn find_sync_word(buf: &[u8]) -> Option<usize> {
        header::find_sync_word(buf)
    }

    /// Returns information about the last successfully decoded frame. The
    /// info is zeroed until the first successful decode.
    pub fn last_frame_info(&self) -> FrameInfo {
        self.info
    }

    /// Decodes one frame from `input`, writing interleaved PCM into `pcm`.
    ///
    /// `input` must begin at a frame header (use
    /// [`find_sync_word`](Mp3Decoder::find_sync_word) to locate one), and
    /// `pcm` must be large enough for one frame: 1152 samples per channel for
    /// MPEG1, 576 for MPEG2 and 2.5.
    ///
    /// On most errors the frame's worth of PCM is zeroed and the error
    /// reports how many bytes were consumed; no error is fatal to the
    /// decoder.
    pub fn decode(&mut self, input: &[u8], pcm: &mut [i16]) -> Result<Decoded, DecodeError> {
        if input.len() < MPEG_HEADER_LEN {
            return Err(DecodeError { kind: ErrorKind::InDataUnderflow, consumed: 0 });
        }

        let header_word = u32::from_be_bytes(input[0..4].try_into().unwrap());

        let mut header = match header::parse_frame_header(header_word) {
            Ok(header) => header,
            // The PCM is not cleared here, since its size is unknown without
            // a header.
            Err(_) => {
                return Err(DecodeError { kind: ErrorKind::InvalidFrameHeader, consumed: 0 });
            }
        };

        if header.layer != MpegLayer::Layer3 {
            return Err(DecodeError { kind: ErrorKind::InvalidFrameHeader, consumed: 0 });
        }

        let n_channels = header.n_channels();
        let output_samples = header.duration() * n_channels;

        assert!(pcm.len() >= output_samples, "pcm buffer too small for one frame");

        // The fixed-position frame sections: header word, optional CRC word
        // (skipped without verification), and side info.
        let header_len = MPEG_HEADER_LEN + header.crc_len() + header.side_info_len();

        if input.len() < header_len {
            return Err(DecodeError { kind: ErrorKind::InDataUnderflow, consumed: 0 });
        }

        // Parse the side info.
        let mut frame_data = layer3::FrameData::default();

        let side_info_start = MPEG_HEADER_LEN + header.crc_len();
        let mut bs = BitReaderLtr::new(&input[side_info_start..header_len]);

        if layer3::read_side_info(&mut bs, &header, &mut frame_data).is_err() {
            // The discontinuity makes the buffered reservoir unusable for the
            // next frame too.
            self.reservoir.clear();
            clear_bad_frame(&mut pcm[..output_samples]);
            return Err(DecodeError { kind: ErrorKind::InvalidSideInfo, consumed: 0 });
        }

        // For free-format streams the slot count is not derivable from the
        // header; measure the spacing to the next sync word once, then reuse
        // it, accounting for the padding bit each frame.
        let main_data_len = if header.is_free_format() {
            let free = match self.free_format {
                Some(free) => free,
                None => match self.lock_free_format(input, header_word, &header, header_len) {
                    Some(free) => free,
                    None => {
                        clear_bad_frame(&mut pcm[..output_samples]);
                        return Err(DecodeError { kind: ErrorKind::FreeBitrateSync, consumed: 0 });
                    }
                },
            };

            header.bitrate = free.bitrate;
            free.slots + usize::from(header.has_padding)
        }
        else {
            header.main_data_len()
        };

        // Out of data: assume a truncated or final frame.
        if self.data_format == DataFormat::Streaming && input.len() < header_len + main_data_len {
            clear_bad_frame(&mut pcm[..output_samples]);
            return Err(DecodeError { kind: ErrorKind::InDataUnderflow, consumed: header_len });
        }

        let (frame_main, consumed) = match self.data_format {
            DataFormat::Streaming => {
                (&input[header_len..header_len + main_data_len], header_len + main_data_len)
            }
            DataFormat::SelfContained => {
                // Self-contained frames carry all of their main data after
                // the side info, so the reservoir offset must be zero.
                if frame_data.main_data_begin != 0 || input.len() == header_len {
                    clear_bad_frame(&mut pcm[..output_samples]);
                    return Err(DecodeError { kind: ErrorKind::InvalidFrameHeader, consumed: 0 });
                }
                (&input[header_len..], input.len())
            }
        };

        // Assemble the frame's main data. In streaming mode the bit reservoir
        // prepends the main_data_begin bytes of history carried over from
        // previous frames; self-contained frames are decoded in place.
        let main: &[u8] = match self.data_format {
            DataFormat::Streaming => {
                match self.reservoir.fill(frame_main, usize::from(frame_data.main_data_begin)) {
                    Ok(true) => self.reservoir.bytes_ref(),
                    Ok(false) => {
                        // Recoverable: not enough history yet (e.g. the
                        // stream was entered mid-way). The bytes were
                        // accumulated for the next frame.
                        clear_bad_frame(&mut pcm[..output_samples]);
                        return Err(DecodeError {
                            kind: ErrorKind::MainDataUnderflow,
                            consumed,
                        });
                    }
                    Err(_) => {
                        clear_bad_frame(&mut pcm[..output_samples]);
                        return Err(DecodeError {
                            kind: ErrorKind::InvalidFrameHeader,
                            consumed,
                        });
                    }
                }
            }
            DataFormat::SelfContained => frame_main,
        };

        // Decode one complete frame.
        match decode_main(&mut self.state, &header, &mut frame_data, main, pcm) {
            Ok(()) => {
                self.info = FrameInfo {
                    bitrate: header.bitrate,
                    channels: n_channels,
                    sample_rate: header.sample_rate,
                    bits_per_sample: 16,
                    output_samples,
                    layer: 3,
                    version: Some(header.version),
                };

                Ok(Decoded { consumed, samples: output_samples })
            }
            Err(kind) => {
                clear_bad_frame(&mut pcm[..output_samples]);
                Err(DecodeError { kind, consumed })
            }
        }
    }

    /// Measures the frame spacing of a free-format stream by scanning for the
    /// next matching sync word, and locks the derived slot count and bit
    /// rate.
    fn lock_free_format(
        &mut self,
        input: &[u8],
        header_word: u32,
        header: &FrameHeader,
        header_len: usize,
    ) -> Option<FreeFormat> {
        let offset = header::find_free_format_sync(input, header_word, MPEG_HEADER_LEN)?;

        let padding = usize::from(header.has_padding);

        // The measured frame length includes this frame's padding slot;
        // exclude it from the locked spacing.
        let slots = offset.checked_sub(header_len + padding)?;

        // A frame and the deepest reservoir reference must fit the reservoir.
        if slots + 1 + 511 > layer3::RESERVOIR_LEN {
            warn!("mpa: free-format frame too large for the bit reservoir");
            return None;
        }

        let bitrate = ((offset - padding) as u64 * 8 * u64::from(header.sample_rate)
            / header.duration() as u64) as u32;

        let free = FreeFormat { slots, bitrate };
        self.free_format = Some(free);

        Some(free)
    }
}

impl Default for Mp3Decoder {
    fn default() -> Self {
        Mp3Decoder::new()
    }
}

/// Decodes the scale factors, spectral data, and all DSP stages of one frame
/// from the assembled main data.
fn decode_main(
    state: &mut layer3::Layer3,
    header: &FrameHeader,
    frame_data: &mut layer3::FrameData,
    main: &[u8],
    pcm: &mut [i16],
) -> Result<(), ErrorKind> {
    let n_channels = header.n_channels();
    let main_bits = 8 * main.len();

    // The bit position of the next part2_3 section in the main data.
    let mut part2_3_begin = 0usize;

    for gr in 0..header.n_granules() {
        for ch in 0..n_channels {
            let byte = part2_3_begin >> 3;
            if byte >= main.len() {
                return Err(ErrorKind::InvalidScaleFactors);
            }

            let mut bs = BitReaderLtr::new(&main[byte..]);
            bs.ignore_bits((part2_3_begin & 0x7) as u32);

            // Unpack the scale factors (part2).
            let part2_bits = match state.read_scale_factors(&mut bs, header, gr, ch, frame_data)
            {
                Ok(bits) => bits,
                Err(_) => return Err(ErrorKind::InvalidScaleFactors),
            };

            let part2_3_length = u32::from(frame_data.granules[gr].channels[ch].part2_3_length);

            // The scale factors must fit into part2_3_length, and the
            // remaining Huffman bits must be present in the main data.
            if part2_bits > part2_3_length
                || main_bits < part2_3_begin + part2_3_length as usize
            {
                return Err(ErrorKind::InvalidScaleFactors);
            }

            let part3_bits = part2_3_length - part2_bits;

            // Decode the Huffman code words (part3).
            if state.read_huffman(&mut bs, gr, ch, part3_bits, frame_data).is_err() {
                return Err(ErrorKind::InvalidHuffmanCodes);
            }

            part2_3_begin += part2_3_length as usize;
        }

        // Dequantize coefficients, decode stereo, reorder short blocks.
        if state.dequantize(header, gr, frame_data).is_err() {
            return Err(ErrorKind::InvalidDequantize);
        }

        // Alias reduction, IMDCT, overlap-add, frequency inversion.
        for ch in 0..n_channels {
            state.hybrid(gr, ch, frame_data);
        }

        // Subband transform; if stereo, the PCM interleaves as L R L R.
        let base = gr * 576 * n_channels;
        for ch in 0..n_channels {
            state.subband(gr, ch, n_channels, &mut pcm[base + ch..]);
        }
    }

    Ok(())
}

/// Zeroes the PCM output of a frame that failed to decode.
fn clear_bad_frame(pcm: &mut [i16]) {
    pcm.fill(0);
}
