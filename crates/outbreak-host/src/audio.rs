//! Sound bank and playback.
//!
//! Buffers are loaded once from `<audio_dir>/<name>.wav` for every name the
//! simulation can request. Audio is optional: a buffer that fails to load
//! is skipped with a warning and its events play nothing.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use outbreak_core::error::AudioError;
use outbreak_core::events::AudioEvent;

/// A decoded PCM buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct SoundBuffer {
    pub name: String,
    pub channels: u16,
    pub sample_rate: u32,
    pub bits_per_sample: u16,
    /// Raw sample bytes of the `data` chunk.
    pub samples: Vec<u8>,
}

impl SoundBuffer {
    pub fn duration_secs(&self) -> f64 {
        let frame_bytes = self.channels as u64 * (self.bits_per_sample as u64 / 8);
        if frame_bytes == 0 || self.sample_rate == 0 {
            return 0.0;
        }
        (self.samples.len() as u64 / frame_bytes) as f64 / self.sample_rate as f64
    }
}

/// Parse a RIFF/WAVE file into a buffer.
pub fn decode_wav(name: &str, bytes: &[u8]) -> Result<SoundBuffer, AudioError> {
    let decode_err = |reason: &str| AudioError::Decode {
        name: name.to_string(),
        reason: reason.to_string(),
    };

    if bytes.len() < 12 || &bytes[0..4] != b"RIFF" || &bytes[8..12] != b"WAVE" {
        return Err(decode_err("missing RIFF/WAVE header"));
    }

    let mut format: Option<(u16, u32, u16)> = None;
    let mut samples: Option<Vec<u8>> = None;
    let mut cursor = 12;

    while cursor + 8 <= bytes.len() {
        let id = &bytes[cursor..cursor + 4];
        let size = u32::from_le_bytes([
            bytes[cursor + 4],
            bytes[cursor + 5],
            bytes[cursor + 6],
            bytes[cursor + 7],
        ]) as usize;
        let body_start = cursor + 8;
        let body_end = body_start
            .checked_add(size)
            .filter(|end| *end <= bytes.len())
            .ok_or_else(|| decode_err("chunk runs past end of file"))?;
        let body = &bytes[body_start..body_end];

        match id {
            b"fmt " => {
                if body.len() < 16 {
                    return Err(decode_err("fmt chunk too short"));
                }
                let channels = u16::from_le_bytes([body[2], body[3]]);
                let sample_rate = u32::from_le_bytes([body[4], body[5], body[6], body[7]]);
                let bits = u16::from_le_bytes([body[14], body[15]]);
                format = Some((channels, sample_rate, bits));
            }
            b"data" => samples = Some(body.to_vec()),
            _ => {}
        }

        // Chunks are padded to even length.
        cursor = body_end + (size & 1);
    }

    let (channels, sample_rate, bits_per_sample) =
        format.ok_or_else(|| decode_err("no fmt chunk"))?;
    let samples = samples.ok_or_else(|| decode_err("no data chunk"))?;
    if channels == 0 || sample_rate == 0 {
        return Err(decode_err("zero channels or sample rate"));
    }

    Ok(SoundBuffer {
        name: name.to_string(),
        channels,
        sample_rate,
        bits_per_sample,
        samples,
    })
}

/// Named sound buffers.
#[derive(Debug, Default)]
pub struct AudioBank {
    buffers: HashMap<String, SoundBuffer>,
}

impl AudioBank {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every known sound from `dir`. Failures are logged and skipped.
    pub fn load_dir(dir: &Path) -> Self {
        let mut bank = Self::new();
        for name in AudioEvent::SOUND_NAMES {
            match load_sound(dir, name) {
                Ok(buffer) => {
                    bank.insert(buffer);
                }
                Err(e) => log::warn!("{e}"),
            }
        }
        log::info!(
            "loaded {}/{} sounds from {}",
            bank.len(),
            AudioEvent::SOUND_NAMES.len(),
            dir.display()
        );
        bank
    }

    pub fn insert(&mut self, buffer: SoundBuffer) {
        self.buffers.insert(buffer.name.clone(), buffer);
    }

    pub fn get(&self, name: &str) -> Result<&SoundBuffer, AudioError> {
        self.buffers
            .get(name)
            .ok_or_else(|| AudioError::Missing(name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.buffers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffers.is_empty()
    }
}

fn load_sound(dir: &Path, name: &str) -> Result<SoundBuffer, AudioError> {
    let path = dir.join(format!("{name}.wav"));
    let bytes = fs::read(&path).map_err(|source| AudioError::Io {
        name: name.to_string(),
        source,
    })?;
    decode_wav(name, &bytes)
}

/// Device that actually makes noise.
pub trait AudioOutput {
    fn play(&mut self, buffer: &SoundBuffer) -> Result<(), AudioError>;
}

/// Output for headless runs: records playback in the log.
#[derive(Debug, Default)]
pub struct LogAudioOutput {
    pub played: u64,
}

impl AudioOutput for LogAudioOutput {
    fn play(&mut self, buffer: &SoundBuffer) -> Result<(), AudioError> {
        self.played += 1;
        log::debug!(
            "play {} ({:.2}s)",
            buffer.name,
            buffer.duration_secs()
        );
        Ok(())
    }
}

/// Plays simulation audio events through a bank and an output.
pub struct AudioPlayer<O: AudioOutput> {
    bank: AudioBank,
    output: O,
}

impl<O: AudioOutput> AudioPlayer<O> {
    pub fn new(bank: AudioBank, output: O) -> Self {
        Self { bank, output }
    }

    /// Play one event. Never fails; returns whether a sound was started.
    pub fn play_event(&mut self, event: &AudioEvent) -> bool {
        let name = event.sound_name();
        let buffer = match self.bank.get(name) {
            Ok(buffer) => buffer,
            // Already warned about at load time.
            Err(_) => return false,
        };
        match self.output.play(buffer) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("{e}");
                false
            }
        }
    }

    pub fn play_all(&mut self, events: &[AudioEvent]) -> usize {
        events.iter().filter(|e| self.play_event(e)).count()
    }

    pub fn output(&self) -> &O {
        &self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use outbreak_core::enums::{HostileKind, WeaponKind};

    fn wav_bytes(samples: &[u8]) -> Vec<u8> {
        let mut fmt = Vec::new();
        fmt.extend_from_slice(&1u16.to_le_bytes()); // PCM
        fmt.extend_from_slice(&1u16.to_le_bytes()); // mono
        fmt.extend_from_slice(&8000u32.to_le_bytes());
        fmt.extend_from_slice(&16000u32.to_le_bytes());
        fmt.extend_from_slice(&2u16.to_le_bytes());
        fmt.extend_from_slice(&16u16.to_le_bytes());

        let mut body = Vec::new();
        body.extend_from_slice(b"WAVE");
        body.extend_from_slice(b"fmt ");
        body.extend_from_slice(&(fmt.len() as u32).to_le_bytes());
        body.extend_from_slice(&fmt);
        body.extend_from_slice(b"data");
        body.extend_from_slice(&(samples.len() as u32).to_le_bytes());
        body.extend_from_slice(samples);

        let mut out = Vec::new();
        out.extend_from_slice(b"RIFF");
        out.extend_from_slice(&(body.len() as u32).to_le_bytes());
        out.extend_from_slice(&body);
        out
    }

    struct FailingOutput;

    impl AudioOutput for FailingOutput {
        fn play(&mut self, buffer: &SoundBuffer) -> Result<(), AudioError> {
            Err(AudioError::Playback {
                name: buffer.name.clone(),
                reason: "device busy".into(),
            })
        }
    }

    #[test]
    fn test_decode_reads_format() {
        let buffer = decode_wav("hit", &wav_bytes(&[0u8; 16000])).unwrap();
        assert_eq!(buffer.channels, 1);
        assert_eq!(buffer.sample_rate, 8000);
        assert_eq!(buffer.bits_per_sample, 16);
        assert!((buffer.duration_secs() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(matches!(
            decode_wav("hit", b"OggS not a wav"),
            Err(AudioError::Decode { .. })
        ));
        let mut truncated = wav_bytes(&[0u8; 64]);
        truncated.truncate(truncated.len() - 10);
        assert!(decode_wav("hit", &truncated).is_err());
    }

    #[test]
    fn test_load_dir_skips_missing_and_broken() {
        let dir = std::env::temp_dir().join("outbreak_test_audio_bank");
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("pistol.wav"), wav_bytes(&[0u8; 32])).unwrap();
        fs::write(dir.join("hit.wav"), b"broken").unwrap();

        let bank = AudioBank::load_dir(&dir);
        assert_eq!(bank.len(), 1);
        assert!(bank.get("pistol").is_ok());
        assert!(matches!(bank.get("hit"), Err(AudioError::Missing(_))));

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_player_plays_loaded_and_skips_missing() {
        let mut bank = AudioBank::new();
        bank.insert(decode_wav("pistol", &wav_bytes(&[0u8; 8])).unwrap());
        let mut player = AudioPlayer::new(bank, LogAudioOutput::default());

        let events = vec![
            AudioEvent::Shot {
                weapon: WeaponKind::Pistol,
            },
            AudioEvent::HostileKilled {
                kind: HostileKind::Zombie,
            },
        ];
        assert_eq!(player.play_all(&events), 1);
        assert_eq!(player.output().played, 1);
    }

    #[test]
    fn test_playback_failure_is_swallowed() {
        let mut bank = AudioBank::new();
        bank.insert(decode_wav("game_over", &wav_bytes(&[0u8; 8])).unwrap());
        let mut player = AudioPlayer::new(bank, FailingOutput);
        assert!(!player.play_event(&AudioEvent::GameOver));
    }
}
