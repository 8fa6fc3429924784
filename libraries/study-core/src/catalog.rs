//! Background and soundscape catalog
//!
//! The study room ships a fixed set of backgrounds and looping ambient
//! soundscapes. Sessions store catalog IDs, never URLs.

use serde::Serialize;

/// A selectable background image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Background {
    /// Catalog ID stored on sessions
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    /// Image asset file name
    pub image: &'static str,
}

/// A selectable ambient soundscape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Soundscape {
    /// Catalog ID stored on sessions
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    /// Looping audio source; empty for silence
    pub url: &'static str,
}

impl Soundscape {
    /// Whether selecting this soundscape means no audio at all
    pub fn is_silence(&self) -> bool {
        self.url.is_empty()
    }
}

/// ID of the soundscape that plays nothing
pub const SILENCE: &str = "none";

pub const BACKGROUNDS: &[Background] = &[
    Background {
        id: "library",
        name: "Library",
        image: "warm_cozy_library_study_space.png",
    },
    Background {
        id: "forest",
        name: "Forest",
        image: "peaceful_forest_clearing_scene.png",
    },
    Background {
        id: "space",
        name: "Space",
        image: "calming_cosmic_space_vista.png",
    },
    Background {
        id: "coffee",
        name: "Coffee Shop",
        image: "inviting_coffee_shop_interior.png",
    },
];

pub const SOUNDSCAPES: &[Soundscape] = &[
    Soundscape {
        id: "rain",
        name: "Rain",
        url: "https://cdn.pixabay.com/download/audio/2022/05/13/audio_257112ce8f.mp3",
    },
    Soundscape {
        id: "waves",
        name: "Ocean Waves",
        url: "https://cdn.pixabay.com/download/audio/2022/06/07/audio_6b2cfbebf7.mp3",
    },
    Soundscape {
        id: "fire",
        name: "Fireplace",
        url: "https://cdn.pixabay.com/download/audio/2022/03/10/audio_4dedf2f94a.mp3",
    },
    Soundscape {
        id: "cafe",
        name: "Café Ambience",
        url: "https://cdn.pixabay.com/download/audio/2022/03/15/audio_c9011bc3f0.mp3",
    },
    Soundscape {
        id: "forest",
        name: "Forest",
        url: "https://cdn.pixabay.com/download/audio/2022/05/27/audio_2dff3e0ca0.mp3",
    },
    Soundscape {
        id: "binaural",
        name: "Binaural Beats",
        url: "https://cdn.pixabay.com/download/audio/2022/10/06/audio_ce6fe5b45c.mp3",
    },
    Soundscape {
        id: SILENCE,
        name: "Silence",
        url: "",
    },
];

/// Look up a background by catalog ID
pub fn background(id: &str) -> Option<&'static Background> {
    BACKGROUNDS.iter().find(|bg| bg.id == id)
}

/// Look up a soundscape by catalog ID
pub fn soundscape(id: &str) -> Option<&'static Soundscape> {
    SOUNDSCAPES.iter().find(|s| s.id == id)
}

/// Background shown before the user picks one
pub fn default_background() -> &'static Background {
    &BACKGROUNDS[0]
}
