use std::{
    fs::File,
    path::Path,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
    thread,
    time::Duration,
};

use crossbeam_channel::{Receiver, RecvTimeoutError, Sender, unbounded};
use rodio::{Decoder, Source};

use crate::{
    commands::{MediaEvent, ResourceCommand},
    engine::OutputEngine,
    error::ErrorKind,
};

/// How often a playing resource reports its cursor position
const TIME_UPDATE_INTERVAL: Duration = Duration::from_millis(250);

/// The player-side end of a media resource: commands out, events in.
///
/// A player owns exactly one handle; the resource behind it is never shared.
pub struct ResourceHandle {
    pub cmd_tx: Sender<ResourceCommand>,
    pub event_rx: Receiver<(u64, MediaEvent)>,
}

/// The resource-side end: commands in, events out.
///
/// Every event carries the generation stamp of the `Load` it belongs to.
/// Held by the thread that services the resource. Tests hold one directly
/// to script event sequences without any audio device.
pub struct ResourceDriver {
    pub cmd_rx: Receiver<ResourceCommand>,
    pub event_tx: Sender<(u64, MediaEvent)>,
}

/// Create a connected handle/driver pair.
pub fn channel() -> (ResourceHandle, ResourceDriver) {
    let (cmd_tx, cmd_rx) = unbounded();
    let (event_tx, event_rx) = unbounded();
    (
        ResourceHandle { cmd_tx, event_rx },
        ResourceDriver { cmd_rx, event_tx },
    )
}

/// Playback cursor in interleaved samples, shared between the sink's source
/// and the service loop. Atomic so a live seek lands mid-playback.
#[derive(Clone)]
pub struct PositionTracker {
    cursor: Arc<AtomicUsize>,
    total_samples: usize,
    sample_rate: u32,
    channels: u16,
}

impl PositionTracker {
    pub fn new(total_samples: usize, sample_rate: u32, channels: u16) -> Self {
        Self {
            cursor: Arc::new(AtomicUsize::new(0)),
            total_samples,
            sample_rate,
            channels,
        }
    }

    /// Current cursor position in seconds
    pub fn position_seconds(&self) -> f32 {
        self.samples_to_seconds(self.cursor.load(Ordering::Relaxed))
    }

    /// Total duration in seconds
    pub fn duration_seconds(&self) -> f32 {
        self.samples_to_seconds(self.total_samples)
    }

    /// Move the cursor to a position in seconds, capped at the end
    pub fn seek_to_seconds(&self, seconds: f32) {
        let frame = (seconds.max(0.0) * self.sample_rate as f32) as usize;
        let sample = (frame * self.channels as usize).min(self.total_samples);
        self.cursor.store(sample, Ordering::Relaxed);
    }

    /// Rewind the cursor to the start
    pub fn reset(&self) {
        self.cursor.store(0, Ordering::Relaxed);
    }

    fn samples_to_seconds(&self, samples: usize) -> f32 {
        if self.sample_rate == 0 || self.channels == 0 {
            return 0.0;
        }
        let frames = samples / self.channels as usize;
        frames as f32 / self.sample_rate as f32
    }
}

/// A fully decoded local audio file
struct LoadedTrack {
    samples: Arc<Vec<f32>>,
    sample_rate: u32,
    channels: u16,
    tracker: PositionTracker,
}

impl LoadedTrack {
    /// Open and fully decode `url`, mapping failures onto the error taxonomy.
    fn decode(url: &str) -> Result<LoadedTrack, ErrorKind> {
        let file = File::open(url).map_err(|e| {
            log::error!("Cannot open audio source '{}': {}", url, e);
            if e.kind() == std::io::ErrorKind::Interrupted {
                ErrorKind::LoadAborted
            } else {
                ErrorKind::NetworkError
            }
        })?;

        let decoder = Decoder::try_from(file).map_err(|e| {
            log::error!("Cannot decode audio source '{}': {}", url, e);
            if has_known_audio_extension(url) {
                ErrorKind::DecodeError
            } else {
                ErrorKind::UnsupportedFormat
            }
        })?;

        let sample_rate = decoder.sample_rate();
        let channels = decoder.channels();

        let samples: Vec<f32> = decoder.collect();
        log::debug!("Decoded {} samples from '{}'", samples.len(), url);

        let tracker = PositionTracker::new(samples.len(), sample_rate, channels);

        Ok(LoadedTrack {
            samples: Arc::new(samples),
            sample_rate,
            channels,
            tracker,
        })
    }

    /// Fresh rodio source reading from the shared cursor
    fn source(&self) -> TrackSource {
        TrackSource {
            samples: Arc::clone(&self.samples),
            sample_rate: self.sample_rate,
            channels: self.channels,
            tracker: self.tracker.clone(),
        }
    }
}

/// Would this path's extension normally be decodable here?
///
/// Used only to tell a corrupt file in a known container apart from an
/// unsupported format when the decoder refuses the data.
fn has_known_audio_extension(url: &str) -> bool {
    let ext = Path::new(url)
        .extension()
        .and_then(|s| s.to_str())
        .map(|s| s.to_ascii_lowercase());
    matches!(
        ext.as_deref(),
        Some("mp3" | "flac" | "wav" | "ogg" | "m4a" | "aac")
    )
}

/// rodio source over the decoded buffer, cursor-driven so seeks apply live
struct TrackSource {
    samples: Arc<Vec<f32>>,
    sample_rate: u32,
    channels: u16,
    tracker: PositionTracker,
}

impl Iterator for TrackSource {
    type Item = f32;

    fn next(&mut self) -> Option<Self::Item> {
        let pos = self.tracker.cursor.load(Ordering::Relaxed);
        if pos < self.samples.len() {
            self.tracker.cursor.store(pos + 1, Ordering::Relaxed);
            Some(self.samples[pos])
        } else {
            None
        }
    }
}

impl Source for TrackSource {
    fn current_span_len(&self) -> Option<usize> {
        let pos = self.tracker.cursor.load(Ordering::Relaxed);
        Some(self.samples.len().saturating_sub(pos))
    }

    fn channels(&self) -> u16 {
        self.channels
    }

    fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    fn total_duration(&self) -> Option<Duration> {
        let frames = self.samples.len() / self.channels.max(1) as usize;
        Some(Duration::from_secs_f64(
            frames as f64 / self.sample_rate.max(1) as f64,
        ))
    }
}

/// Production media resource: one dedicated thread decoding local audio
/// files and feeding one rodio sink.
///
/// Services [`ResourceCommand`]s and emits [`MediaEvent`]s, including a
/// periodic `TimeUpdate` while playing and `Ended` (cursor already reset)
/// when the source runs out.
pub struct LocalResource;

impl LocalResource {
    /// Spawn the resource thread and return the handle a player owns.
    ///
    /// The thread exits on `Quit` or when the handle is dropped.
    pub fn spawn() -> ResourceHandle {
        let (handle, driver) = channel();
        thread::Builder::new()
            .name("media-resource".into())
            .spawn(move || Service::new(driver).run())
            .expect("failed to spawn media resource thread");
        handle
    }
}

/// State owned by the resource thread
struct Service {
    driver: ResourceDriver,
    engine: Option<OutputEngine>,
    track: Option<LoadedTrack>,
    playing: bool,
    /// Stamp of the most recent `Load`, echoed in every emitted event
    generation: u64,
}

impl Service {
    fn new(driver: ResourceDriver) -> Self {
        Self {
            driver,
            engine: None,
            track: None,
            playing: false,
            generation: 0,
        }
    }

    fn run(mut self) {
        log::debug!("Media resource thread started");
        loop {
            match self.driver.cmd_rx.recv_timeout(TIME_UPDATE_INTERVAL) {
                Ok(ResourceCommand::Quit) => break,
                Ok(cmd) => self.handle_command(cmd),
                Err(RecvTimeoutError::Timeout) => self.tick(),
                // Player dropped its handle
                Err(RecvTimeoutError::Disconnected) => break,
            }
        }
        if let Some(engine) = &self.engine {
            engine.sink().stop();
        }
        log::debug!("Media resource thread stopped");
    }

    fn handle_command(&mut self, cmd: ResourceCommand) {
        match cmd {
            ResourceCommand::Load(generation, url) => self.load(generation, &url),
            ResourceCommand::Play => self.play(),
            ResourceCommand::Pause => self.pause(),
            ResourceCommand::Seek(seconds) => self.seek(seconds),
            ResourceCommand::Stop => self.stop(),
            ResourceCommand::Quit => unreachable!("handled in run()"),
        }
    }

    /// Periodic work between commands: report the cursor and detect the end
    /// of the source.
    fn tick(&mut self) {
        if !self.playing {
            return;
        }
        let Some(track) = &self.track else { return };

        let sink_empty = self.engine.as_ref().is_some_and(|e| e.sink().empty());
        if sink_empty {
            // Source exhausted. Rewind so the next play starts from the top.
            track.tracker.reset();
            self.playing = false;
            self.emit(MediaEvent::Ended);
        } else {
            self.emit(MediaEvent::TimeUpdate(track.tracker.position_seconds()));
        }
    }

    fn load(&mut self, generation: u64, url: &str) {
        // Halt whatever was playing before the new source attaches. From
        // here on every event is stamped with the new load's generation.
        self.playing = false;
        self.generation = generation;
        if let Some(engine) = &self.engine {
            engine.sink().stop();
        }

        log::info!("Loading audio source '{}'", url);
        self.emit(MediaEvent::LoadStart);

        match LoadedTrack::decode(url) {
            Ok(track) => {
                self.emit(MediaEvent::DurationChange(track.tracker.duration_seconds()));
                self.emit(MediaEvent::CanPlay);
                self.track = Some(track);
            }
            Err(kind) => {
                self.track = None;
                self.emit(MediaEvent::Error(kind));
            }
        }
    }

    fn play(&mut self) {
        if self.playing {
            return;
        }
        let Some(track) = &self.track else {
            self.emit(MediaEvent::Error(ErrorKind::PlaybackRejected));
            return;
        };

        if self.engine.is_none() {
            match OutputEngine::try_new_default() {
                Ok(engine) => {
                    log::info!("Audio output ready on '{}'", engine.device_name());
                    self.engine = Some(engine);
                }
                Err(e) => {
                    log::error!("Audio output unavailable: {:#}", e);
                    self.emit(MediaEvent::Error(ErrorKind::PlaybackRejected));
                    return;
                }
            }
        }
        let engine = self.engine.as_ref().expect("engine initialized above");

        // After Ended or Stop the sink has drained; queue a fresh source
        if engine.sink().empty() {
            engine.sink().append(track.source());
        }
        engine.sink().play();
        self.playing = true;
        self.emit(MediaEvent::Playing);
    }

    fn pause(&mut self) {
        if !self.playing {
            return;
        }
        if let Some(engine) = &self.engine {
            engine.sink().pause();
        }
        self.playing = false;
        self.emit(MediaEvent::Paused);
    }

    fn seek(&mut self, seconds: f32) {
        let Some(track) = &self.track else { return };
        let clamped = seconds.clamp(0.0, track.tracker.duration_seconds());
        track.tracker.seek_to_seconds(clamped);
        self.emit(MediaEvent::TimeUpdate(track.tracker.position_seconds()));
    }

    fn stop(&mut self) {
        if let Some(engine) = &self.engine {
            engine.sink().pause();
        }
        if let Some(track) = &self.track {
            track.tracker.reset();
        }
        if self.playing {
            self.playing = false;
            self.emit(MediaEvent::Paused);
        }
        self.emit(MediaEvent::TimeUpdate(0.0));
    }

    fn emit(&self, event: MediaEvent) {
        // The player may already be gone during teardown
        let _ = self.driver.event_tx.send((self.generation, event));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracker_converts_between_samples_and_seconds() {
        // 2 seconds of stereo at 44.1 kHz
        let tracker = PositionTracker::new(44_100 * 2 * 2, 44_100, 2);
        assert_eq!(tracker.duration_seconds(), 2.0);
        assert_eq!(tracker.position_seconds(), 0.0);

        tracker.seek_to_seconds(1.0);
        assert_eq!(tracker.position_seconds(), 1.0);

        // Past the end caps at the total length
        tracker.seek_to_seconds(10.0);
        assert_eq!(tracker.position_seconds(), 2.0);

        tracker.reset();
        assert_eq!(tracker.position_seconds(), 0.0);
    }

    #[test]
    fn tracker_with_no_rate_reports_zero() {
        let tracker = PositionTracker::new(0, 0, 0);
        assert_eq!(tracker.duration_seconds(), 0.0);
        assert_eq!(tracker.position_seconds(), 0.0);
    }

    #[test]
    fn extension_probe_distinguishes_decode_from_format_errors() {
        assert!(has_known_audio_extension("/audio/upbeating.mp3"));
        assert!(has_known_audio_extension("track.FLAC"));
        assert!(!has_known_audio_extension("notes.txt"));
        assert!(!has_known_audio_extension("no_extension"));
    }

    #[test]
    fn missing_file_maps_to_network_error() {
        let err = LoadedTrack::decode("/definitely/not/here.mp3").err().unwrap();
        assert_eq!(err, ErrorKind::NetworkError);
    }
}
