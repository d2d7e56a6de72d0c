use std::str::FromStr;

use strum_macros::{Display, EnumIter, EnumString};

use crate::error::{EditError, EditErrorKind, Result};

/// Tag set of every element the editor can place. The set is closed:
/// parsing any other tag is an error, never a coercion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum ElementKind {
    Container,
    Div,
    Grid,
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
    P,
    Span,
    Button,
    A,
    Ul,
    Ol,
    Li,
    Img,
    Video,
    Audio,
    Iframe,
    Strong,
    Em,
    Small,
    Br,
    Hr,
}

impl ElementKind {
    pub fn parse_tag(tag: &str) -> Result<Self> {
        Self::from_str(tag).map_err(|_| EditError::new(EditErrorKind::UnknownKind(tag.to_string())))
    }

    /// Kinds whose freshly created nodes carry a `children` sequence.
    /// `button` and `a` are wrappers: they hold children AND their own
    /// content entry, so container-ness and content are independent axes.
    pub fn is_container(self) -> bool {
        matches!(
            self,
            Self::Container | Self::Div | Self::Grid | Self::Ul | Self::Ol | Self::Button | Self::A
        )
    }

    /// Kinds that own a content entry in the data store.
    pub fn needs_content_key(self) -> bool {
        !matches!(
            self,
            Self::Container
                | Self::Div
                | Self::Grid
                | Self::Br
                | Self::Hr
                | Self::Ul
                | Self::Ol
                | Self::Img
                | Self::Video
                | Self::Audio
                | Self::Iframe
        )
    }

    /// Default presentation classes assigned at creation.
    pub fn default_classes(self) -> &'static str {
        match self {
            Self::Container => "py-12",
            Self::Div => "",
            Self::H1 => "text-4xl font-bold mb-4",
            Self::H2 => "text-3xl font-bold mb-4",
            Self::H3 => "text-2xl font-bold mb-3",
            Self::H4 => "text-xl font-bold mb-3",
            Self::H5 => "text-lg font-bold mb-2",
            Self::H6 => "text-base font-bold mb-2",
            Self::P => "text-base mb-4",
            Self::Span => "text-base",
            Self::Button => "px-6 py-3 rounded text-white font-semibold bg-blue-500 hover:bg-blue-600",
            Self::A => "text-blue-600 hover:underline",
            Self::Img => "w-full h-auto",
            Self::Video | Self::Audio => "w-full",
            Self::Iframe => "w-full h-96",
            Self::Grid => "grid grid-cols-1 gap-6 md:grid-cols-2 lg:grid-cols-3",
            Self::Ul | Self::Ol => "space-y-2",
            Self::Li => "text-base",
            Self::Strong => "font-bold",
            Self::Em => "italic",
            Self::Small => "text-sm",
            Self::Hr => "my-4 border-gray-300",
            Self::Br => "",
        }
    }
}
