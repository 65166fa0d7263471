//! Static press-kit content: the artist's catalog, shows, press and
//! contacts. The playback layer never reads this; the front end wires the
//! two together.

use strum::Display;

/// The always-present lead track of the press kit
#[derive(Debug, Clone, Copy)]
pub struct FeaturedSingle {
    pub title: &'static str,
    pub year: &'static str,
    pub description: &'static str,
    pub audio_url: &'static str,
    pub spotify_url: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Track {
    pub id: u32,
    pub title: &'static str,
    pub genre: &'static str,
    pub year: &'static str,
    pub description: &'static str,
    pub audio_url: Option<&'static str>,
}

/// A collaboration card; audio is optional, many cards have none attached
#[derive(Debug, Clone, Copy)]
pub struct Collaboration {
    pub id: u32,
    pub title: &'static str,
    pub collaborator: &'static str,
    pub role: &'static str,
    pub year: &'static str,
    pub genre: &'static str,
    pub audio_url: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ShowStatus {
    #[strum(serialize = "Confirmed")]
    Confirmed,
    #[strum(serialize = "Pending")]
    Pending,
}

#[derive(Debug, Clone, Copy)]
pub struct LiveShow {
    pub id: u32,
    pub date: &'static str,
    pub venue: &'static str,
    pub city: &'static str,
    pub country: &'static str,
    pub kind: &'static str,
    pub status: ShowStatus,
}

#[derive(Debug, Clone, Copy)]
pub struct PressReview {
    pub id: u32,
    pub publication: &'static str,
    pub reviewer: &'static str,
    pub rating: f32,
    pub date: &'static str,
    pub headline: &'static str,
    pub excerpt: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct StreamingPlatform {
    pub name: &'static str,
    pub url: &'static str,
    pub followers: &'static str,
    pub monthly_listeners: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct SocialPlatform {
    pub name: &'static str,
    pub handle: &'static str,
    pub url: &'static str,
    pub followers: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct MediaAsset {
    pub name: &'static str,
    pub format: &'static str,
    pub size: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct ContactPerson {
    pub name: &'static str,
    pub role: &'static str,
    pub company: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
}

pub const ARTIST_NAME: &str = "Linarex";
pub const ARTIST_TAGLINE: &str = "Funk-Pop Composer & Music Producer";

pub const FEATURED_SINGLE: FeaturedSingle = FeaturedSingle {
    title: "Renacer",
    year: "2025",
    description: "The latest evolution of progressive electronic fusion",
    audio_url: "audio/upbeating.mp3",
    spotify_url: "https://open.spotify.com/artist/4GIlGL9p0s5IgGFu212QUS",
};

pub const TRACKS: &[Track] = &[
    Track {
        id: 1,
        title: "Castillo de Arena",
        genre: "Prog Metal",
        year: "2025",
        description: "Progressive metal meets electronic soundscapes",
        audio_url: Some("audio/track1.mp3"),
    },
    Track {
        id: 2,
        title: "Endless Sky",
        genre: "World Fusion",
        year: "2024",
        description: "International collaboration with world music elements",
        audio_url: Some("audio/track2.mp3"),
    },
];

pub const COLLABORATIONS: &[Collaboration] = &[
    Collaboration {
        id: 1,
        title: "Renacer",
        collaborator: "Paweł Skiwa",
        role: "Vocalist",
        year: "2025",
        genre: "Electronic Pop",
        audio_url: Some("audio/renacer-voc.mp3"),
    },
    Collaboration {
        id: 2,
        title: "Castillos de Arena",
        collaborator: "Daniel Rivero",
        role: "Producer",
        year: "2024",
        genre: "Hip Hop Fusion",
        audio_url: None,
    },
    Collaboration {
        id: 3,
        title: "Ecos Resuenan en el Corazon",
        collaborator: "Jackie Matthews",
        role: "Guitarist",
        year: "2023",
        genre: "Folk Electronic",
        audio_url: None,
    },
];

pub const UPCOMING_SHOWS: &[LiveShow] = &[
    LiveShow {
        id: 1,
        date: "2024-02-15",
        venue: "Metal Underground",
        city: "Berlin",
        country: "Germany",
        kind: "Headline Show",
        status: ShowStatus::Confirmed,
    },
    LiveShow {
        id: 2,
        date: "2024-03-08",
        venue: "Progressive Night",
        city: "Amsterdam",
        country: "Netherlands",
        kind: "Festival",
        status: ShowStatus::Confirmed,
    },
    LiveShow {
        id: 3,
        date: "2024-03-22",
        venue: "Rock Palace",
        city: "Madrid",
        country: "Spain",
        kind: "Support Act",
        status: ShowStatus::Pending,
    },
];

pub const PRESS_REVIEWS: &[PressReview] = &[
    PressReview {
        id: 1,
        publication: "Progressive Rock Magazine",
        reviewer: "Sarah Mitchell",
        rating: 4.5,
        date: "2024-01-15",
        headline: "Linarex Pushes Boundaries in Progressive Metal",
        excerpt: "Meticulous attention to sonic detail while never losing sight of the emotional core. This is progressive metal that actually progresses somewhere meaningful.",
    },
    PressReview {
        id: 2,
        publication: "Metal Underground",
        reviewer: "Hans Mueller",
        rating: 5.0,
        date: "2023-11-22",
        headline: "International Collaboration Done Right",
        excerpt: "In an era where cross-cultural musical collaborations often feel forced, Linarex achieves something genuinely organic and powerful.",
    },
    PressReview {
        id: 3,
        publication: "World Music Central",
        reviewer: "Dr. Elena Vasquez",
        rating: 4.8,
        date: "2023-10-08",
        headline: "A Producer Who Understands Heritage",
        excerpt: "A deep understanding and respect for world music traditions comes through in every note.",
    },
    PressReview {
        id: 4,
        publication: "Live Music Review",
        reviewer: "James Wilson",
        rating: 4.7,
        date: "2023-09-14",
        headline: "Electric Live Performance Energy",
        excerpt: "The energy is infectious, the musicianship flawless.",
    },
];

pub const STREAMING_PLATFORMS: &[StreamingPlatform] = &[
    StreamingPlatform {
        name: "Spotify",
        url: "https://open.spotify.com/artist/4GIlGL9p0s5IgGFu212QUS",
        followers: "12.5K",
        monthly_listeners: "45.2K",
        description: "Main catalog and playlists",
    },
    StreamingPlatform {
        name: "Apple Music",
        url: "https://music.apple.com/artist/linarex",
        followers: "8.3K",
        monthly_listeners: "32.1K",
        description: "High-quality streaming",
    },
    StreamingPlatform {
        name: "YouTube Music",
        url: "https://music.youtube.com/linarex",
        followers: "15.7K",
        monthly_listeners: "78.4K",
        description: "Music videos and live sessions",
    },
];

pub const SOCIAL_PLATFORMS: &[SocialPlatform] = &[
    SocialPlatform {
        name: "Instagram",
        handle: "@linarex_official",
        url: "https://instagram.com/linarex_official",
        followers: "18.4K",
        description: "Behind the scenes, studio life",
    },
    SocialPlatform {
        name: "TikTok",
        handle: "@linarexmusic",
        url: "https://tiktok.com/@linarexmusic",
        followers: "25.1K",
        description: "Short-form content, music clips",
    },
];

pub const MEDIA_ASSETS: &[MediaAsset] = &[
    MediaAsset {
        name: "Studio Portrait (High Res)",
        format: "JPG",
        size: "3.2 MB",
        description: "Professional studio portrait for press releases",
    },
    MediaAsset {
        name: "Live Performance",
        format: "JPG",
        size: "2.8 MB",
        description: "Dynamic live performance shot from recent concert",
    },
    MediaAsset {
        name: "Logo Pack",
        format: "SVG",
        size: "45 KB",
        description: "Main logo in scalable vector format",
    },
    MediaAsset {
        name: "Full Press Kit",
        format: "PDF",
        size: "180 KB",
        description: "Biography, discography and technical rider",
    },
];

pub const CONTACTS: &[ContactPerson] = &[
    ContactPerson {
        name: "Sarah Mitchell",
        role: "Booking Agent",
        company: "International Music Agency",
        email: "booking@linarex-music.com",
        phone: "+1 (555) 0123-456",
    },
    ContactPerson {
        name: "Marcus Rodriguez",
        role: "Artist Manager",
        company: "Progressive Management Group",
        email: "management@linarex-music.com",
        phone: "+1 (555) 0789-012",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collaboration_ids_are_unique() {
        let mut ids: Vec<u32> = COLLABORATIONS.iter().map(|c| c.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), COLLABORATIONS.len());
    }

    #[test]
    fn track_ids_are_unique() {
        let mut ids: Vec<u32> = TRACKS.iter().map(|t| t.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), TRACKS.len());
    }

    #[test]
    fn featured_single_always_has_audio() {
        assert!(!FEATURED_SINGLE.audio_url.is_empty());
    }
}
