/// Playback attributes carried by audio and video elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlaybackFlags {
    pub controls: bool,
    pub looped: bool,
    pub muted: bool,
    pub autoplay: bool,
}

impl PlaybackFlags {
    /// Creation default: visible controls, everything else off.
    pub fn with_controls() -> Self {
        Self {
            controls: true,
            ..Self::default()
        }
    }
}

/// Kind-specific data-store references. The variant is fixed by the
/// element kind, so a heading can never carry a source key and an image
/// can never carry playback flags. Individual keys stay optional because
/// imported documents may omit them; the factory always fills them in.
#[derive(Debug, Clone, PartialEq)]
pub enum MediaAttrs {
    Image {
        src_key: Option<String>,
        alt_key: Option<String>,
    },
    Video {
        src_key: Option<String>,
        poster_key: Option<String>,
        playback: PlaybackFlags,
    },
    Audio {
        src_key: Option<String>,
        playback: PlaybackFlags,
    },
    Embed {
        src_key: Option<String>,
        title_key: Option<String>,
        allow_full_screen: bool,
    },
    Link {
        href_key: Option<String>,
    },
}

impl MediaAttrs {
    /// Every data-store key this payload references.
    pub fn data_keys(&self) -> Vec<&String> {
        let keys: [&Option<String>; 2] = match self {
            Self::Image { src_key, alt_key } => [src_key, alt_key],
            Self::Video {
                src_key,
                poster_key,
                ..
            } => [src_key, poster_key],
            Self::Audio { src_key, .. } => [src_key, &None],
            Self::Embed {
                src_key, title_key, ..
            } => [src_key, title_key],
            Self::Link { href_key } => [href_key, &None],
        };
        keys.into_iter().flatten().collect()
    }
}
