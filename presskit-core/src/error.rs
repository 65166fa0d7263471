use thiserror::Error;

/// Failure categories surfaced through [`PlaybackState::error`].
///
/// Mapped from the resource's native failure modes. Nothing in the player
/// API returns these directly; they only ever appear in the state field.
///
/// [`PlaybackState::error`]: crate::player::PlaybackState
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// The load was cancelled, usually because a new source superseded it
    #[error("audio load was cancelled")]
    LoadAborted,
    /// The resource could not be reached or the transfer was interrupted
    #[error("audio source unreachable")]
    NetworkError,
    /// The resource data is corrupt or not valid audio
    #[error("audio data is corrupt or invalid")]
    DecodeError,
    /// The container/codec is not supported by the runtime
    #[error("audio format not supported")]
    UnsupportedFormat,
    /// A play request was refused by the runtime (e.g. no output device)
    #[error("playback request was refused")]
    PlaybackRejected,
    /// Constructed with a missing or invalid source URL (mandatory sources only)
    #[error("missing or invalid audio source")]
    InvalidSource,
}

impl ErrorKind {
    /// Whether the condition can clear without supplying a different source.
    ///
    /// Recoverable errors are worth a retry button in the UI; the rest need
    /// a corrected URL before another attempt can succeed.
    pub fn is_recoverable(&self) -> bool {
        match self {
            ErrorKind::LoadAborted | ErrorKind::NetworkError | ErrorKind::PlaybackRejected => true,
            ErrorKind::DecodeError | ErrorKind::UnsupportedFormat | ErrorKind::InvalidSource => {
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retryable_classification() {
        assert!(ErrorKind::NetworkError.is_recoverable());
        assert!(ErrorKind::PlaybackRejected.is_recoverable());
        assert!(ErrorKind::LoadAborted.is_recoverable());
        assert!(!ErrorKind::DecodeError.is_recoverable());
        assert!(!ErrorKind::UnsupportedFormat.is_recoverable());
        assert!(!ErrorKind::InvalidSource.is_recoverable());
    }
}
