/// Which list item the UI currently treats as its active selection.
///
/// This is UI bookkeeping, not playback state: it knows nothing about real
/// audio and deliberately lives outside [`AudioPlayer`]. The owning list
/// component watches it and pauses/starts the appropriate player.
///
/// [`AudioPlayer`]: crate::player::AudioPlayer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    active_id: Option<u32>,
    is_playing: bool,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle the given item: same id flips the playing flag, a different
    /// id switches the selection and marks it playing.
    pub fn toggle(&mut self, id: u32) {
        if self.active_id == Some(id) {
            self.is_playing = !self.is_playing;
        } else {
            self.active_id = Some(id);
            self.is_playing = true;
        }
    }

    /// Clear the selection entirely.
    pub fn stop(&mut self) {
        self.active_id = None;
        self.is_playing = false;
    }

    pub fn active_id(&self) -> Option<u32> {
        self.active_id
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    /// Whether the given item is the selection and marked playing.
    pub fn is_active(&self, id: u32) -> bool {
        self.active_id == Some(id) && self.is_playing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_the_same_item_flips_the_flag() {
        let mut sel = Selection::new();
        sel.toggle(3);
        assert!(sel.is_active(3));
        sel.toggle(3);
        assert_eq!(sel.active_id(), Some(3));
        assert!(!sel.is_playing());
        sel.toggle(3);
        assert!(sel.is_active(3));
    }

    #[test]
    fn toggling_another_item_switches_and_plays() {
        let mut sel = Selection::new();
        sel.toggle(1);
        sel.toggle(2);
        assert!(sel.is_active(2));
        assert!(!sel.is_active(1));
    }

    #[test]
    fn stop_clears_everything() {
        let mut sel = Selection::new();
        sel.toggle(7);
        sel.stop();
        assert_eq!(sel.active_id(), None);
        assert!(!sel.is_playing());
    }
}
