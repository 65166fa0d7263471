use crate::{
    commands::{MediaEvent, ResourceCommand},
    error::ErrorKind,
    resource::{LocalResource, ResourceHandle},
};

/// How a player treats a missing or invalid source URL.
///
/// The press kit has two calling contexts with deliberately different
/// behavior: the featured single always has a track, so an absent URL is a
/// real error; a collaboration card may simply have no audio attached yet.
/// Both behaviors are kept, selected at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourcePolicy {
    /// A missing URL is an error (`InvalidSource`)
    Required,
    /// A missing URL leaves the player idle with no error
    Optional,
}

/// UI-facing playback state, kept in sync with the resource's events.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackState {
    /// Which media resource is loaded; `None` means idle
    pub source_url: Option<String>,
    /// True only while the resource is actively emitting audio
    pub is_playing: bool,
    /// Playback cursor in seconds
    pub current_time: f32,
    /// Total duration in seconds; 0 means not yet known
    pub duration: f32,
    /// True between load start and the first ready-to-play signal
    pub is_loading: bool,
    /// Last failure, if any
    pub error: Option<ErrorKind>,
}

impl PlaybackState {
    fn idle() -> Self {
        Self {
            source_url: None,
            is_playing: false,
            current_time: 0.0,
            duration: 0.0,
            is_loading: false,
            error: None,
        }
    }
}

/// Binds a [`PlaybackState`] to one media resource: caller intents become
/// [`ResourceCommand`]s, the resource's [`MediaEvent`]s become state.
///
/// Every operation is a plain method call that returns immediately; the
/// asynchronous outcome of a play request (accepted or refused) arrives
/// later as an event, so callers must not assume `play()` implies
/// `is_playing` right away. Nothing here panics or returns an error to the
/// caller; failures land in `state().error`.
///
/// The owning UI drives [`AudioPlayer::pump`] on its tick to apply pending
/// events. Coordination across players ("only one card plays at a time")
/// is deliberately not handled here; that belongs to the owning layer.
pub struct AudioPlayer {
    handle: ResourceHandle,
    policy: SourcePolicy,
    state: PlaybackState,
    /// Stamp of the current source's `Load`; bumped on every source change
    generation: u64,
}

impl AudioPlayer {
    /// Build a player over an existing resource handle and attach the source.
    pub fn new(handle: ResourceHandle, policy: SourcePolicy, source_url: Option<&str>) -> Self {
        let mut player = Self {
            handle,
            policy,
            state: PlaybackState::idle(),
            generation: 0,
        };
        player.set_source(source_url);
        player
    }

    /// Build a player backed by its own local decoding resource.
    pub fn local(policy: SourcePolicy, source_url: Option<&str>) -> Self {
        Self::new(LocalResource::spawn(), policy, source_url)
    }

    /// Attach a new source, cancelling whatever came before.
    ///
    /// The previous playback is halted and the cursor, duration and error
    /// always reset. Every source change bumps the generation stamp, so
    /// events from the old source still in flight on the resource thread
    /// carry an older stamp and never touch the new source's state.
    pub fn set_source(&mut self, source_url: Option<&str>) {
        if self.state.source_url.is_some() {
            self.send(ResourceCommand::Stop);
        }
        self.generation += 1;
        self.state = PlaybackState::idle();

        let trimmed = source_url.map(str::trim).filter(|s| !s.is_empty());
        match trimmed {
            Some(url) => {
                log::debug!("Attaching audio source '{}'", url);
                self.state.source_url = Some(url.to_string());
                self.send(ResourceCommand::Load(self.generation, url.to_string()));
            }
            None => match self.policy {
                SourcePolicy::Required => {
                    log::error!("Audio source URL missing for a required track");
                    self.state.error = Some(ErrorKind::InvalidSource);
                }
                SourcePolicy::Optional => {
                    log::debug!("No audio source attached; player stays idle");
                }
            },
        }
    }

    /// Pause if playing, otherwise request play.
    pub fn toggle_play(&mut self) {
        if self.state.is_playing {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Request playback. No-op if already playing or no source is attached.
    ///
    /// A refusal surfaces later as `error = PlaybackRejected`.
    pub fn play(&mut self) {
        if self.state.is_playing || self.state.source_url.is_none() {
            return;
        }
        self.send(ResourceCommand::Play);
    }

    /// Pause playback. Idempotent: a no-op while not playing.
    pub fn pause(&mut self) {
        if !self.state.is_playing {
            return;
        }
        self.send(ResourceCommand::Pause);
    }

    /// Move the cursor, clamped into `[0, duration]`. Never fails; with an
    /// unknown duration the cursor clamps to 0.
    pub fn seek(&mut self, time: f32) {
        if self.state.source_url.is_none() {
            return;
        }
        let clamped = if time.is_finite() && self.state.duration > 0.0 {
            time.clamp(0.0, self.state.duration)
        } else {
            0.0
        };
        self.state.current_time = clamped;
        self.send(ResourceCommand::Seek(clamped));
    }

    /// Pause, zero the cursor and clear error/loading flags, keeping the
    /// source attached.
    pub fn reset(&mut self) {
        if self.state.source_url.is_some() {
            self.send(ResourceCommand::Stop);
        }
        self.state.is_playing = false;
        self.state.current_time = 0.0;
        self.state.is_loading = false;
        self.state.error = None;
    }

    /// Drain pending resource events and apply them to the state.
    ///
    /// Events stamped with an older generation belong to a source that has
    /// since been replaced and are discarded.
    pub fn pump(&mut self) {
        while let Ok((generation, event)) = self.handle.event_rx.try_recv() {
            if generation != self.generation {
                log::trace!("Discarding event from a replaced source: {:?}", event);
                continue;
            }
            self.apply(event);
        }
    }

    fn apply(&mut self, event: MediaEvent) {
        let state = &mut self.state;
        match event {
            MediaEvent::LoadStart => {
                state.is_loading = true;
                state.error = None;
            }
            MediaEvent::CanPlay => {
                state.is_loading = false;
            }
            MediaEvent::TimeUpdate(t) => {
                state.current_time = if state.duration > 0.0 {
                    t.clamp(0.0, state.duration)
                } else {
                    t.max(0.0)
                };
            }
            MediaEvent::DurationChange(d) => {
                state.duration = d.max(0.0);
                if state.duration > 0.0 && state.current_time > state.duration {
                    state.current_time = state.duration;
                }
            }
            MediaEvent::Playing => {
                state.is_playing = true;
                state.is_loading = false;
            }
            MediaEvent::Paused => {
                state.is_playing = false;
            }
            MediaEvent::Ended => {
                state.is_playing = false;
                state.current_time = 0.0;
            }
            MediaEvent::Error(kind) => {
                log::error!("Playback error: {}", kind);
                state.error = Some(kind);
                state.is_loading = false;
                state.is_playing = false;
            }
        }
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state.is_playing
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading
    }

    pub fn error(&self) -> Option<ErrorKind> {
        self.state.error
    }

    /// Cursor position as a fraction of the duration (0.0 to 1.0)
    pub fn progress(&self) -> f32 {
        if self.state.duration > 0.0 {
            (self.state.current_time / self.state.duration).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    fn send(&self, cmd: ResourceCommand) {
        if self.handle.cmd_tx.send(cmd).is_err() {
            log::warn!("Media resource is gone; command dropped");
        }
    }
}

impl Drop for AudioPlayer {
    fn drop(&mut self) {
        // Teardown: halt playback and release the resource thread
        let _ = self.handle.cmd_tx.send(ResourceCommand::Stop);
        let _ = self.handle.cmd_tx.send(ResourceCommand::Quit);
    }
}

/// Render seconds as `M:SS`, minutes unpadded. Total: any non-finite or
/// negative input renders as `"0:00"`.
pub fn format_time(seconds: f32) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return "0:00".to_string();
    }
    let mins = (seconds / 60.0).floor() as u64;
    let secs = (seconds % 60.0).floor() as u64;
    format!("{}:{:02}", mins, secs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::{self, ResourceDriver};

    /// Player wired to a scripted driver instead of a real resource
    fn scripted(policy: SourcePolicy, url: Option<&str>) -> (AudioPlayer, ResourceDriver) {
        let (handle, driver) = resource::channel();
        (AudioPlayer::new(handle, policy, url), driver)
    }

    fn drain_commands(driver: &ResourceDriver) -> Vec<ResourceCommand> {
        driver.cmd_rx.try_iter().collect()
    }

    /// Script an event as the resource would emit it, stamped with the
    /// generation of the load it answers (1 for the construction-time load)
    fn emit(driver: &ResourceDriver, generation: u64, event: MediaEvent) {
        driver.event_tx.send((generation, event)).unwrap();
    }

    #[test]
    fn format_time_renders_minutes_unpadded() {
        assert_eq!(format_time(0.0), "0:00");
        assert_eq!(format_time(65.0), "1:05");
        assert_eq!(format_time(3600.0), "60:00");
    }

    #[test]
    fn format_time_is_total() {
        assert_eq!(format_time(-5.0), "0:00");
        assert_eq!(format_time(f32::NAN), "0:00");
        assert_eq!(format_time(f32::INFINITY), "0:00");
    }

    #[test]
    fn required_policy_flags_a_missing_url() {
        let (player, driver) = scripted(SourcePolicy::Required, None);
        assert_eq!(player.error(), Some(ErrorKind::InvalidSource));
        assert!(!player.is_playing());
        assert!(!player.is_loading());
        assert!(drain_commands(&driver).is_empty());
    }

    #[test]
    fn required_policy_rejects_whitespace_urls() {
        let (player, _driver) = scripted(SourcePolicy::Required, Some("   "));
        assert_eq!(player.error(), Some(ErrorKind::InvalidSource));
    }

    #[test]
    fn optional_policy_stays_idle_without_a_url() {
        let (player, driver) = scripted(SourcePolicy::Optional, None);
        assert_eq!(player.error(), None);
        assert_eq!(*player.state(), PlaybackState::idle());
        assert!(drain_commands(&driver).is_empty());
    }

    #[test]
    fn construction_with_a_url_issues_a_load() {
        let (player, driver) = scripted(SourcePolicy::Required, Some("track.mp3"));
        assert_eq!(player.state().source_url.as_deref(), Some("track.mp3"));
        assert_eq!(
            drain_commands(&driver),
            vec![ResourceCommand::Load(1, "track.mp3".into())]
        );
    }

    #[test]
    fn seek_clamps_into_the_known_duration() {
        let (mut player, driver) = scripted(SourcePolicy::Required, Some("track.mp3"));
        emit(&driver, 1, MediaEvent::DurationChange(200.0));
        player.pump();

        player.seek(-10.0);
        assert_eq!(player.state().current_time, 0.0);
        player.seek(500.0);
        assert_eq!(player.state().current_time, 200.0);
        player.seek(120.0);
        assert_eq!(player.state().current_time, 120.0);

        let cmds = drain_commands(&driver);
        assert!(cmds.contains(&ResourceCommand::Seek(0.0)));
        assert!(cmds.contains(&ResourceCommand::Seek(200.0)));
        assert!(cmds.contains(&ResourceCommand::Seek(120.0)));
    }

    #[test]
    fn seek_with_unknown_duration_clamps_to_zero() {
        let (mut player, _driver) = scripted(SourcePolicy::Required, Some("track.mp3"));
        player.seek(42.0);
        assert_eq!(player.state().current_time, 0.0);
        player.seek(f32::NAN);
        assert_eq!(player.state().current_time, 0.0);
    }

    #[test]
    fn pause_while_not_playing_is_a_no_op() {
        let (mut player, driver) = scripted(SourcePolicy::Required, Some("track.mp3"));
        drain_commands(&driver);

        let before = player.state().clone();
        player.pause();
        assert_eq!(*player.state(), before);
        assert!(drain_commands(&driver).is_empty());
    }

    #[test]
    fn toggle_twice_lands_back_on_paused_without_error() {
        let (mut player, driver) = scripted(SourcePolicy::Required, Some("track.mp3"));
        drain_commands(&driver);

        player.toggle_play();
        assert_eq!(drain_commands(&driver), vec![ResourceCommand::Play]);
        emit(&driver, 1, MediaEvent::Playing);
        player.pump();
        assert!(player.is_playing());

        player.toggle_play();
        assert_eq!(drain_commands(&driver), vec![ResourceCommand::Pause]);
        emit(&driver, 1, MediaEvent::Paused);
        player.pump();

        assert!(!player.is_playing());
        assert_eq!(player.error(), None);
    }

    #[test]
    fn play_while_already_playing_is_a_no_op() {
        let (mut player, driver) = scripted(SourcePolicy::Required, Some("track.mp3"));
        drain_commands(&driver);
        emit(&driver, 1, MediaEvent::Playing);
        player.pump();

        player.play();
        assert!(drain_commands(&driver).is_empty());
    }

    #[test]
    fn loading_flag_tracks_load_start_and_can_play() {
        let (mut player, driver) = scripted(SourcePolicy::Required, Some("track.mp3"));
        emit(&driver, 1, MediaEvent::LoadStart);
        player.pump();
        assert!(player.is_loading());

        emit(&driver, 1, MediaEvent::CanPlay);
        player.pump();
        assert!(!player.is_loading());
    }

    #[test]
    fn ending_rewinds_instead_of_erroring() {
        let (mut player, driver) = scripted(SourcePolicy::Required, Some("track.mp3"));
        emit(&driver, 1, MediaEvent::DurationChange(180.0));
        emit(&driver, 1, MediaEvent::Playing);
        emit(&driver, 1, MediaEvent::TimeUpdate(180.0));
        emit(&driver, 1, MediaEvent::Ended);
        player.pump();

        assert!(!player.is_playing());
        assert_eq!(player.state().current_time, 0.0);
        assert_eq!(player.error(), None);
    }

    #[test]
    fn resource_errors_stop_loading_and_playback() {
        let (mut player, driver) = scripted(SourcePolicy::Required, Some("track.mp3"));
        emit(&driver, 1, MediaEvent::LoadStart);
        emit(&driver, 1, MediaEvent::Error(ErrorKind::NetworkError));
        player.pump();

        assert_eq!(player.error(), Some(ErrorKind::NetworkError));
        assert!(!player.is_loading());
        assert!(!player.is_playing());
    }

    #[test]
    fn rejected_play_surfaces_as_state_not_panic() {
        let (mut player, driver) = scripted(SourcePolicy::Required, Some("track.mp3"));
        drain_commands(&driver);

        player.play();
        assert_eq!(drain_commands(&driver), vec![ResourceCommand::Play]);
        emit(&driver, 1, MediaEvent::Error(ErrorKind::PlaybackRejected));
        player.pump();

        assert_eq!(player.error(), Some(ErrorKind::PlaybackRejected));
        assert!(!player.is_playing());
    }

    #[test]
    fn changing_the_source_resets_cursor_duration_and_error() {
        let (mut player, driver) = scripted(SourcePolicy::Required, Some("a.mp3"));
        emit(&driver, 1, MediaEvent::DurationChange(240.0));
        emit(&driver, 1, MediaEvent::Playing);
        emit(&driver, 1, MediaEvent::TimeUpdate(60.0));
        emit(&driver, 1, MediaEvent::Error(ErrorKind::DecodeError));
        player.pump();
        drain_commands(&driver);

        // A stale event still queued at switch time must not leak through
        emit(&driver, 1, MediaEvent::TimeUpdate(61.0));

        player.set_source(Some("b.mp3"));
        player.pump();
        assert_eq!(player.state().source_url.as_deref(), Some("b.mp3"));
        assert_eq!(player.state().current_time, 0.0);
        assert_eq!(player.state().duration, 0.0);
        assert_eq!(player.error(), None);
        assert!(!player.is_playing());

        let cmds = drain_commands(&driver);
        assert_eq!(
            cmds,
            vec![
                ResourceCommand::Stop,
                ResourceCommand::Load(2, "b.mp3".into())
            ]
        );
    }

    #[test]
    fn events_arriving_after_a_source_change_are_ignored() {
        let (mut player, driver) = scripted(SourcePolicy::Required, Some("a.mp3"));
        emit(&driver, 1, MediaEvent::DurationChange(240.0));
        player.pump();

        player.set_source(Some("b.mp3"));

        // The old source's resource work is still in flight and keeps
        // emitting after the switch
        emit(&driver, 1, MediaEvent::TimeUpdate(61.0));
        emit(&driver, 1, MediaEvent::DurationChange(240.0));
        emit(&driver, 1, MediaEvent::Error(ErrorKind::DecodeError));
        player.pump();

        assert_eq!(player.state().current_time, 0.0);
        assert_eq!(player.state().duration, 0.0);
        assert_eq!(player.error(), None);

        // The new source's own events still land
        emit(&driver, 2, MediaEvent::DurationChange(180.0));
        emit(&driver, 2, MediaEvent::TimeUpdate(5.0));
        player.pump();
        assert_eq!(player.state().duration, 180.0);
        assert_eq!(player.state().current_time, 5.0);
    }

    #[test]
    fn reset_keeps_the_source_but_clears_transient_state() {
        let (mut player, driver) = scripted(SourcePolicy::Optional, Some("track.mp3"));
        emit(&driver, 1, MediaEvent::DurationChange(90.0));
        emit(&driver, 1, MediaEvent::Playing);
        emit(&driver, 1, MediaEvent::TimeUpdate(30.0));
        player.pump();
        drain_commands(&driver);

        player.reset();
        assert_eq!(player.state().source_url.as_deref(), Some("track.mp3"));
        assert_eq!(player.state().current_time, 0.0);
        assert!(!player.is_playing());
        assert_eq!(player.error(), None);
        assert_eq!(drain_commands(&driver), vec![ResourceCommand::Stop]);
    }

    #[test]
    fn time_updates_are_clamped_to_the_duration() {
        let (mut player, driver) = scripted(SourcePolicy::Required, Some("track.mp3"));
        emit(&driver, 1, MediaEvent::DurationChange(100.0));
        emit(&driver, 1, MediaEvent::TimeUpdate(150.0));
        player.pump();
        assert_eq!(player.state().current_time, 100.0);
    }

    #[test]
    fn full_scenario_seek_pause_play_seek_past_end() {
        let (mut player, driver) = scripted(SourcePolicy::Required, Some("track.mp3"));
        emit(&driver, 1, MediaEvent::DurationChange(240.0));
        player.pump();

        player.seek(120.0);
        assert_eq!(player.state().current_time, 120.0);

        player.pause();
        assert!(!player.is_playing());

        player.play();
        emit(&driver, 1, MediaEvent::Playing);
        player.pump();
        assert!(player.is_playing());

        player.seek(300.0);
        assert_eq!(player.state().current_time, 240.0);
    }

    #[test]
    fn progress_is_a_clamped_fraction() {
        let (mut player, driver) = scripted(SourcePolicy::Required, Some("track.mp3"));
        assert_eq!(player.progress(), 0.0);

        emit(&driver, 1, MediaEvent::DurationChange(200.0));
        emit(&driver, 1, MediaEvent::TimeUpdate(50.0));
        player.pump();
        assert_eq!(player.progress(), 0.25);
    }

    #[test]
    fn dropping_the_player_releases_the_resource() {
        let (player, driver) = scripted(SourcePolicy::Optional, None);
        drop(player);
        let cmds: Vec<_> = driver.cmd_rx.try_iter().collect();
        assert_eq!(cmds, vec![ResourceCommand::Stop, ResourceCommand::Quit]);
    }
}
