// Fermata
// Copyright (c) 2026 The Fermata Project Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::fs;
use std::path::Path;
use std::process::ExitCode;

use clap::{Arg, Command};
use log::{info, warn};

use fermata_mp3::{ErrorKind, Mp3Decoder};

fn main() -> ExitCode {
    pretty_env_logger::init();

    let matches = Command::new("Fermata Play")
        .version("1.0")
        .about("Decode MP3 files to WAV with Fermata")
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .value_name("FILE")
                .help("Write the decoded PCM to the given WAV file"),
        )
        .arg(Arg::new("INPUT").help("The MP3 file to decode").required(true).index(1))
        .get_matches();

    let input = matches.get_one::<String>("INPUT").unwrap();

    let output = match matches.get_one::<String>("output") {
        Some(path) => path.clone(),
        None => {
            Path::new(input).with_extension("wav").to_string_lossy().into_owned()
        }
    };

    let data = match fs::read(input) {
        Ok(data) => data,
        Err(err) => {
            eprintln!("failed to read {}: {}", input, err);
            return ExitCode::FAILURE;
        }
    };

    match decode_to_wav(&data, &output) {
        Ok(stats) => {
            println!(
                "{}: {} Hz, {} channel(s), {} kbps, {} frames decoded, {} skipped",
                input,
                stats.sample_rate,
                stats.channels,
                stats.bitrate / 1000,
                stats.frames,
                stats.skipped
            );
            println!("wrote {}", output);
            ExitCode::SUCCESS
        }
        Err(msg) => {
            eprintln!("{}: {}", input, msg);
            ExitCode::FAILURE
        }
    }
}

struct DecodeStats {
    sample_rate: u32,
    channels: usize,
    bitrate: u32,
    frames: u64,
    skipped: u64,
}

/// Decodes every frame in `data` and writes the PCM to a WAV file. Damaged
/// frames are skipped by resynchronizing on the next sync word.
fn decode_to_wav(data: &[u8], output: &str) -> Result<DecodeStats, String> {
    let mut decoder = Mp3Decoder::new();
    let mut pcm = [0i16; 2304];

    let mut writer: Option<hound::WavWriter<std::io::BufWriter<std::fs::File>>> = None;

    let mut stats =
        DecodeStats { sample_rate: 0, channels: 0, bitrate: 0, frames: 0, skipped: 0 };

    let mut pos = 0;

    while let Some(offset) = Mp3Decoder::find_sync_word(&data[pos..]) {
        pos += offset;

        match decoder.decode(&data[pos..], &mut pcm) {
            Ok(decoded) => {
                let frame = decoder.last_frame_info();

                // The WAV writer is created from the first decoded frame's
                // signal parameters.
                if writer.is_none() {
                    stats.sample_rate = frame.sample_rate;
                    stats.channels = frame.channels;

                    let spec = hound::WavSpec {
                        channels: frame.channels as u16,
                        sample_rate: frame.sample_rate,
                        bits_per_sample: 16,
                        sample_format: hound::SampleFormat::Int,
                    };

                    info!(
                        "stream: {} Hz, {} channel(s), MPEG {:?}",
                        frame.sample_rate, frame.channels, frame.version
                    );

                    writer =
                        Some(hound::WavWriter::create(output, spec).map_err(|e| e.to_string())?);
                }

                let out = writer.as_mut().unwrap();

                for &sample in &pcm[..decoded.samples] {
                    out.write_sample(sample).map_err(|e| e.to_string())?;
                }

                stats.bitrate = frame.bitrate;
                stats.frames += 1;
                pos += decoded.consumed;
            }
            Err(err) => {
                match err.kind {
                    // Out of input: the stream is done.
                    ErrorKind::InDataUnderflow => break,
                    // Everything else: skip the damaged frame and resync.
                    kind => {
                        warn!("skipping frame at byte {}: {:?}", pos, kind);
                        stats.skipped += 1;
                        pos += err.consumed.max(1);
                    }
                }
            }
        }
    }

    if stats.frames == 0 {
        return Err("no decodable MPEG audio frames found".to_string());
    }

    if let Some(writer) = writer {
        writer.finalize().map_err(|e| e.to_string())?;
    }

    Ok(stats)
}
