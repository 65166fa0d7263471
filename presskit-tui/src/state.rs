use presskit_core::{
    AudioPlayer, Selection, SourcePolicy,
    catalog::{self, Collaboration, Track},
};
use ratatui::widgets::ListState;

use crate::router::Section;

/// One collaboration row with its own independent player.
///
/// Cards without attached audio keep an idle player; the optional source
/// policy means that is not an error.
pub struct CollabCard {
    pub collab: &'static Collaboration,
    pub player: AudioPlayer,
}

/// One discography row with its own independent player
pub struct TrackCard {
    pub track: &'static Track,
    pub player: AudioPlayer,
}

/// Application state for the press kit TUI
pub struct AppState {
    pub section: Section,

    /// The featured single always has a track, so a missing URL is an error
    pub featured: AudioPlayer,

    /// One player per discography track
    pub tracks: Vec<TrackCard>,
    /// Which discography track the UI currently treats as active
    pub track_selection: Selection,
    pub tracks_list: ListState,

    /// One player per collaboration card, fully independent of each other
    pub cards: Vec<CollabCard>,
    /// Which card the UI currently treats as active
    pub selection: Selection,
    pub cards_list: ListState,

    pub shows_list: ListState,
    pub press_list: ListState,
    pub links_list: ListState,

    pub status_message: String,
}

impl AppState {
    pub fn new() -> Self {
        let featured = AudioPlayer::local(
            SourcePolicy::Required,
            Some(catalog::FEATURED_SINGLE.audio_url),
        );

        let tracks = catalog::TRACKS
            .iter()
            .map(|track| TrackCard {
                track,
                player: AudioPlayer::local(SourcePolicy::Optional, track.audio_url),
            })
            .collect();

        let cards = catalog::COLLABORATIONS
            .iter()
            .map(|collab| CollabCard {
                collab,
                player: AudioPlayer::local(SourcePolicy::Optional, collab.audio_url),
            })
            .collect();

        let mut tracks_list = ListState::default();
        tracks_list.select(Some(0));
        let mut cards_list = ListState::default();
        cards_list.select(Some(0));
        let mut shows_list = ListState::default();
        shows_list.select(Some(0));
        let mut press_list = ListState::default();
        press_list.select(Some(0));
        let mut links_list = ListState::default();
        links_list.select(Some(0));

        Self {
            section: Section::Featured,
            featured,
            tracks,
            track_selection: Selection::new(),
            tracks_list,
            cards,
            selection: Selection::new(),
            cards_list,
            shows_list,
            press_list,
            links_list,
            status_message: format!(
                "{} — {}",
                catalog::ARTIST_NAME,
                catalog::ARTIST_TAGLINE
            ),
        }
    }

    /// Apply pending resource events on every player.
    pub fn pump(&mut self) {
        self.featured.pump();
        for track in &mut self.tracks {
            track.player.pump();
        }
        for card in &mut self.cards {
            card.player.pump();
        }
    }

    /// Toggle the discography track at `index`, pausing whichever track was
    /// active before. Same one-at-a-time policy as the collaboration cards,
    /// scoped to this section.
    pub fn toggle_track(&mut self, index: usize) {
        let Some(card) = self.tracks.get(index) else {
            return;
        };
        if card.track.audio_url.is_none() {
            self.status_message = format!("No audio attached to '{}'", card.track.title);
            return;
        }
        let id = card.track.id;

        if let Some(prev_id) = self.track_selection.active_id()
            && prev_id != id
            && let Some(prev) = self.tracks.iter_mut().find(|t| t.track.id == prev_id)
        {
            prev.player.pause();
        }

        self.track_selection.toggle(id);
        let card = &mut self.tracks[index];
        if self.track_selection.is_active(id) {
            card.player.play();
            self.status_message = format!("Playing '{}'", card.track.title);
        } else {
            card.player.pause();
            self.status_message = format!("Paused '{}'", card.track.title);
        }
    }

    /// Stop whatever track is active and clear the selection.
    pub fn stop_tracks(&mut self) {
        if let Some(id) = self.track_selection.active_id()
            && let Some(card) = self.tracks.iter_mut().find(|t| t.track.id == id)
        {
            card.player.pause();
        }
        self.track_selection.stop();
    }

    /// The active discography track's player, if any
    pub fn active_track(&mut self) -> Option<&mut AudioPlayer> {
        let id = self.track_selection.active_id()?;
        self.tracks
            .iter_mut()
            .find(|t| t.track.id == id)
            .map(|t| &mut t.player)
    }

    pub fn selected_track(&self) -> Option<usize> {
        self.tracks_list.selected()
    }

    /// Toggle the card at `index`, pausing whichever card was active before.
    ///
    /// Only one card plays at a time. The players do not know about each
    /// other; this is the owning layer's policy.
    pub fn toggle_card(&mut self, index: usize) {
        let Some(card) = self.cards.get(index) else {
            return;
        };
        if card.collab.audio_url.is_none() {
            self.status_message = format!("No audio attached to '{}'", card.collab.title);
            return;
        }
        let id = card.collab.id;

        if let Some(prev_id) = self.selection.active_id()
            && prev_id != id
            && let Some(prev) = self.cards.iter_mut().find(|c| c.collab.id == prev_id)
        {
            prev.player.pause();
        }

        self.selection.toggle(id);
        let card = &mut self.cards[index];
        if self.selection.is_active(id) {
            card.player.play();
            self.status_message = format!(
                "Playing '{}' with {}",
                card.collab.title, card.collab.collaborator
            );
        } else {
            card.player.pause();
            self.status_message = format!("Paused '{}'", card.collab.title);
        }
    }

    /// Stop whatever card is active and clear the selection.
    pub fn stop_cards(&mut self) {
        if let Some(id) = self.selection.active_id()
            && let Some(card) = self.cards.iter_mut().find(|c| c.collab.id == id)
        {
            card.player.pause();
        }
        self.selection.stop();
    }

    pub fn selected_card(&self) -> Option<usize> {
        self.cards_list.selected()
    }
}

/// Move a list selection down with wrap-around
pub fn list_next(list: &mut ListState, len: usize) {
    if len == 0 {
        return;
    }
    let i = match list.selected() {
        Some(i) if i + 1 >= len => 0,
        Some(i) => i + 1,
        None => 0,
    };
    list.select(Some(i));
}

/// Move a list selection up with wrap-around
pub fn list_prev(list: &mut ListState, len: usize) {
    if len == 0 {
        return;
    }
    let i = match list.selected() {
        Some(0) | None => len - 1,
        Some(i) => i - 1,
    };
    list.select(Some(i));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_tracks_keeps_one_active_at_a_time() {
        let mut state = AppState::new();

        state.toggle_track(0);
        assert!(state.track_selection.is_active(catalog::TRACKS[0].id));

        state.toggle_track(1);
        assert!(state.track_selection.is_active(catalog::TRACKS[1].id));
        assert!(!state.track_selection.is_active(catalog::TRACKS[0].id));

        state.toggle_track(1);
        assert_eq!(
            state.track_selection.active_id(),
            Some(catalog::TRACKS[1].id)
        );
        assert!(!state.track_selection.is_playing());

        state.stop_tracks();
        assert_eq!(state.track_selection.active_id(), None);
    }

    #[test]
    fn track_and_card_selections_are_independent() {
        let mut state = AppState::new();

        state.toggle_track(0);
        state.toggle_card(0);
        assert!(state.track_selection.is_active(catalog::TRACKS[0].id));
        assert!(state.selection.is_active(catalog::COLLABORATIONS[0].id));

        state.stop_cards();
        assert!(state.track_selection.is_playing());
    }
}
