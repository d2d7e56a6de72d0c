pub use kind::ElementKind;
pub use media::{MediaAttrs, PlaybackFlags};

pub mod kind;
pub mod media;
