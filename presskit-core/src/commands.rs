use crate::error::ErrorKind;

/// Commands sent from a player to its media resource
#[derive(Debug, Clone, PartialEq)]
pub enum ResourceCommand {
    /// Attach and start loading the given source URL. The generation stamp
    /// is echoed back in every event the resource emits from then on, so a
    /// player can discard events that belong to a replaced source.
    Load(u64, String),
    /// Start or resume playback
    Play,
    /// Pause playback
    Pause,
    /// Move the playback cursor to a position in seconds
    Seek(f32),
    /// Pause and reset the cursor to the start
    Stop,
    /// Shut down the resource
    Quit,
}

/// Events emitted by a media resource as loading and playback progress
#[derive(Debug, Clone, PartialEq)]
pub enum MediaEvent {
    /// The resource started fetching/decoding a source
    LoadStart,
    /// Enough of the source is available to start playback
    CanPlay,
    /// The playback cursor moved, position in seconds
    TimeUpdate(f32),
    /// The total duration became known or changed, in seconds
    DurationChange(f32),
    /// Playback actually started
    Playing,
    /// Playback paused
    Paused,
    /// Playback reached the end of the source; the resource has already
    /// reset its own cursor to 0
    Ended,
    /// The resource failed; loading and playback have stopped
    Error(ErrorKind),
}
