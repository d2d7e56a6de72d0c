use im::OrdMap;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::template::node_type::{ElementKind, MediaAttrs, PlaybackFlags};

/// One element of the document tree.
///
/// `children` is tri-state: `None` means the node can never hold children,
/// `Some` with an empty vec is a container waiting for content (and a valid
/// drop-inside target). The distinction survives serialization untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub kind: ElementKind,
    pub class_name: String,
    /// CSS property name -> editable style key, resolved by the renderer.
    pub styles: OrdMap<String, String>,
    pub content_key: Option<String>,
    pub media: Option<MediaAttrs>,
    pub children: Option<Vec<Node>>,
}

impl Node {
    pub fn accepts_children(&self) -> bool {
        self.children.is_some()
    }

    pub fn child_count(&self) -> usize {
        self.children.as_ref().map_or(0, Vec::len)
    }

    pub fn raw(&self) -> RawNode {
        let mut raw = RawNode {
            ty: self.kind.to_string(),
            class_name: self.class_name.clone(),
            styles: self.styles.clone(),
            children: self
                .children
                .as_ref()
                .map(|children| children.iter().map(Node::raw).collect()),
            data_key: self.content_key.clone(),
            src_key: None,
            alt_key: None,
            poster_key: None,
            title_key: None,
            href_key: None,
            controls: None,
            looped: None,
            muted: None,
            autoplay: None,
            allow_full_screen: None,
        };
        match &self.media {
            Some(MediaAttrs::Image { src_key, alt_key }) => {
                raw.src_key = src_key.clone();
                raw.alt_key = alt_key.clone();
            }
            Some(MediaAttrs::Video {
                src_key,
                poster_key,
                playback,
            }) => {
                raw.src_key = src_key.clone();
                raw.poster_key = poster_key.clone();
                raw.set_playback(*playback);
            }
            Some(MediaAttrs::Audio { src_key, playback }) => {
                raw.src_key = src_key.clone();
                raw.set_playback(*playback);
            }
            Some(MediaAttrs::Embed {
                src_key,
                title_key,
                allow_full_screen,
            }) => {
                raw.src_key = src_key.clone();
                raw.title_key = title_key.clone();
                raw.allow_full_screen = Some(*allow_full_screen);
            }
            Some(MediaAttrs::Link { href_key }) => {
                raw.href_key = href_key.clone();
            }
            None => {}
        }
        raw
    }
}

/// Serde-facing form of [`Node`]: the flat field layout of the persisted
/// document. `transform` validates it into the runtime model; `Node::raw`
/// is the inverse.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RawNode {
    #[serde(rename = "type")]
    pub ty: String,

    #[serde(rename = "className", default)]
    pub class_name: String,

    #[serde(default)]
    pub styles: OrdMap<String, String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<RawNode>>,

    #[serde(rename = "dataKey", skip_serializing_if = "Option::is_none")]
    pub data_key: Option<String>,

    #[serde(rename = "srcKey", skip_serializing_if = "Option::is_none")]
    pub src_key: Option<String>,
    #[serde(rename = "altKey", skip_serializing_if = "Option::is_none")]
    pub alt_key: Option<String>,
    #[serde(rename = "posterKey", skip_serializing_if = "Option::is_none")]
    pub poster_key: Option<String>,
    #[serde(rename = "titleKey", skip_serializing_if = "Option::is_none")]
    pub title_key: Option<String>,
    #[serde(rename = "hrefKey", skip_serializing_if = "Option::is_none")]
    pub href_key: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub controls: Option<bool>,
    #[serde(rename = "loop", skip_serializing_if = "Option::is_none")]
    pub looped: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub muted: Option<bool>,
    #[serde(rename = "autoPlay", skip_serializing_if = "Option::is_none")]
    pub autoplay: Option<bool>,
    #[serde(rename = "allowFullScreen", skip_serializing_if = "Option::is_none")]
    pub allow_full_screen: Option<bool>,
}

impl RawNode {
    /// Validates the wire form and folds the per-kind optional fields into
    /// the typed payload. Unknown tags are rejected; stray media fields on
    /// non-media kinds are dropped, the payload model has no place for
    /// them.
    pub fn transform(self) -> Result<Node> {
        let kind = ElementKind::parse_tag(&self.ty)?;
        let playback = self.playback();
        let media = match kind {
            ElementKind::Img => Some(MediaAttrs::Image {
                src_key: self.src_key,
                alt_key: self.alt_key,
            }),
            ElementKind::Video => Some(MediaAttrs::Video {
                src_key: self.src_key,
                poster_key: self.poster_key,
                playback,
            }),
            ElementKind::Audio => Some(MediaAttrs::Audio {
                src_key: self.src_key,
                playback,
            }),
            ElementKind::Iframe => Some(MediaAttrs::Embed {
                src_key: self.src_key,
                title_key: self.title_key,
                allow_full_screen: self.allow_full_screen.unwrap_or(false),
            }),
            ElementKind::A => Some(MediaAttrs::Link {
                href_key: self.href_key,
            }),
            _ => None,
        };
        let children = match self.children {
            Some(children) => Some(
                children
                    .into_iter()
                    .map(RawNode::transform)
                    .collect::<Result<Vec<_>>>()?,
            ),
            None => None,
        };
        Ok(Node {
            kind,
            class_name: self.class_name,
            styles: self.styles,
            content_key: self.data_key,
            media,
            children,
        })
    }

    fn playback(&self) -> PlaybackFlags {
        // Absent flags read as false, the way the renderer treats them.
        PlaybackFlags {
            controls: self.controls.unwrap_or(false),
            looped: self.looped.unwrap_or(false),
            muted: self.muted.unwrap_or(false),
            autoplay: self.autoplay.unwrap_or(false),
        }
    }

    fn set_playback(&mut self, playback: PlaybackFlags) {
        self.controls = Some(playback.controls);
        self.looped = Some(playback.looped);
        self.muted = Some(playback.muted);
        self.autoplay = Some(playback.autoplay);
    }
}
