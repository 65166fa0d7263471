use strum::{Display, EnumIter, IntoEnumIterator};

/// Top-level sections of the press kit, one tab each
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum Section {
    #[strum(serialize = "Featured")]
    Featured,
    #[strum(serialize = "Music")]
    Music,
    #[strum(serialize = "Collaborations")]
    Collaborations,
    #[strum(serialize = "Live Shows")]
    Shows,
    #[strum(serialize = "Press")]
    Press,
    #[strum(serialize = "Links & Media")]
    Links,
    #[strum(serialize = "Log")]
    Log,
}

impl Section {
    /// The tab after this one, wrapping around
    pub fn next(self) -> Section {
        let all: Vec<Section> = Section::iter().collect();
        let idx = all.iter().position(|s| *s == self).unwrap_or(0);
        all[(idx + 1) % all.len()]
    }

    /// The tab before this one, wrapping around
    pub fn prev(self) -> Section {
        let all: Vec<Section> = Section::iter().collect();
        let idx = all.iter().position(|s| *s == self).unwrap_or(0);
        all[(idx + all.len() - 1) % all.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tabs_cycle_in_both_directions() {
        let mut section = Section::Featured;
        for _ in 0..Section::iter().count() {
            section = section.next();
        }
        assert_eq!(section, Section::Featured);
        assert_eq!(Section::Featured.prev(), Section::Log);
    }
}
