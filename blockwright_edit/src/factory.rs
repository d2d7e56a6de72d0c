use im::OrdMap;

use blockwright::keys::KeySource;
use blockwright::template::node_type::{ElementKind, MediaAttrs, PlaybackFlags};
use blockwright::template::nodes::node::Node;

pub const PLACEHOLDER_IMAGE_URL: &str = "https://via.placeholder.com/800x600";
pub const PLACEHOLDER_IMAGE_ALT: &str = "Image description";
pub const PLACEHOLDER_VIDEO_URL: &str =
    "https://assets.mixkit.co/videos/preview/mixkit-tree-with-yellow-flowers-1173-large.mp4";
pub const PLACEHOLDER_POSTER_URL: &str = "https://via.placeholder.com/1920x1080";
pub const PLACEHOLDER_AUDIO_URL: &str = "https://example.com/audio.mp3";
pub const PLACEHOLDER_EMBED_URL: &str = "https://www.youtube.com/embed/dQw4w9WgXcQ";
pub const PLACEHOLDER_EMBED_TITLE: &str = "Embedded content";
pub const PLACEHOLDER_LINK_HREF: &str = "#";

/// A freshly built node plus the data-store entries backing it. The
/// factory never touches a store itself; callers merge `data` when the
/// node actually lands in a tree.
#[derive(Debug, Clone)]
pub struct NewElement {
    pub node: Node,
    pub data: Vec<(String, String)>,
}

/// Builds a node of the given kind with its default classes, generated
/// keys and placeholder content.
pub fn create(kind: ElementKind, keys: &KeySource) -> NewElement {
    let mut data = Vec::new();
    let tag = kind.to_string();

    let content_key = if kind.needs_content_key() {
        let key = keys.next(&tag);
        data.push((key.clone(), format!("Sample {} text", tag)));
        Some(key)
    } else {
        None
    };

    let media = match kind {
        ElementKind::Img => {
            let src_key = keys.next("image");
            let alt_key = keys.next("alt");
            data.push((src_key.clone(), PLACEHOLDER_IMAGE_URL.to_string()));
            data.push((alt_key.clone(), PLACEHOLDER_IMAGE_ALT.to_string()));
            Some(MediaAttrs::Image {
                src_key: Some(src_key),
                alt_key: Some(alt_key),
            })
        }
        ElementKind::Video => {
            let src_key = keys.next(&tag);
            let poster_key = keys.next("poster");
            data.push((src_key.clone(), PLACEHOLDER_VIDEO_URL.to_string()));
            data.push((poster_key.clone(), PLACEHOLDER_POSTER_URL.to_string()));
            Some(MediaAttrs::Video {
                src_key: Some(src_key),
                poster_key: Some(poster_key),
                playback: PlaybackFlags::with_controls(),
            })
        }
        ElementKind::Audio => {
            let src_key = keys.next(&tag);
            data.push((src_key.clone(), PLACEHOLDER_AUDIO_URL.to_string()));
            Some(MediaAttrs::Audio {
                src_key: Some(src_key),
                playback: PlaybackFlags::with_controls(),
            })
        }
        ElementKind::Iframe => {
            let src_key = keys.next("iframe");
            let title_key = keys.next("title");
            data.push((src_key.clone(), PLACEHOLDER_EMBED_URL.to_string()));
            data.push((title_key.clone(), PLACEHOLDER_EMBED_TITLE.to_string()));
            Some(MediaAttrs::Embed {
                src_key: Some(src_key),
                title_key: Some(title_key),
                allow_full_screen: true,
            })
        }
        ElementKind::A => {
            let href_key = keys.next("link");
            data.push((href_key.clone(), PLACEHOLDER_LINK_HREF.to_string()));
            Some(MediaAttrs::Link {
                href_key: Some(href_key),
            })
        }
        _ => None,
    };

    let node = Node {
        kind,
        class_name: kind.default_classes().to_string(),
        styles: OrdMap::new(),
        content_key,
        media,
        children: if kind.is_container() {
            Some(Vec::new())
        } else {
            None
        },
    };

    NewElement { node, data }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn paragraph_gets_content_key_and_sample_text() {
        let keys = KeySource::with_base(100);
        let new = create(ElementKind::P, &keys);
        assert_eq!(new.node.kind, ElementKind::P);
        assert_eq!(new.node.class_name, "text-base mb-4");
        assert_eq!(new.node.content_key.as_deref(), Some("p_100"));
        assert!(new.node.children.is_none());
        assert_eq!(
            new.data,
            vec![("p_100".to_string(), "Sample p text".to_string())]
        );
    }

    #[test]
    fn container_starts_empty_without_data() {
        let keys = KeySource::with_base(100);
        let new = create(ElementKind::Container, &keys);
        assert_eq!(new.node.children, Some(vec![]));
        assert!(new.node.content_key.is_none());
        assert!(new.data.is_empty());
    }

    #[test]
    fn link_is_a_wrapper_with_href() {
        let keys = KeySource::with_base(100);
        let new = create(ElementKind::A, &keys);
        assert_eq!(new.node.content_key.as_deref(), Some("a_100"));
        assert_eq!(new.node.children, Some(vec![]));
        match &new.node.media {
            Some(MediaAttrs::Link { href_key }) => {
                assert_eq!(href_key.as_deref(), Some("link_101"))
            }
            other => panic!("unexpected payload: {:?}", other),
        }
        assert!(new
            .data
            .contains(&("link_101".to_string(), "#".to_string())));
    }

    #[test]
    fn image_seeds_source_and_alt() {
        let keys = KeySource::with_base(100);
        let new = create(ElementKind::Img, &keys);
        assert!(new.node.content_key.is_none());
        assert_eq!(
            new.data,
            vec![
                ("image_100".to_string(), PLACEHOLDER_IMAGE_URL.to_string()),
                ("alt_101".to_string(), PLACEHOLDER_IMAGE_ALT.to_string()),
            ]
        );
    }

    #[test]
    fn video_defaults_to_controls_only() {
        let keys = KeySource::with_base(100);
        let new = create(ElementKind::Video, &keys);
        match &new.node.media {
            Some(MediaAttrs::Video { playback, .. }) => {
                assert!(playback.controls);
                assert!(!playback.looped);
                assert!(!playback.muted);
                assert!(!playback.autoplay);
            }
            other => panic!("unexpected payload: {:?}", other),
        }
        assert_eq!(new.data[0].1, PLACEHOLDER_VIDEO_URL);
        assert_eq!(new.data[1].1, PLACEHOLDER_POSTER_URL);
    }

    #[test]
    fn iframe_allows_fullscreen_by_default() {
        let keys = KeySource::with_base(100);
        let new = create(ElementKind::Iframe, &keys);
        match &new.node.media {
            Some(MediaAttrs::Embed {
                allow_full_screen, ..
            }) => assert!(allow_full_screen),
            other => panic!("unexpected payload: {:?}", other),
        }
    }

    #[test]
    fn every_kind_obeys_the_policy_tables() {
        let keys = KeySource::with_base(0);
        for kind in ElementKind::iter() {
            let new = create(kind, &keys);
            assert_eq!(new.node.children.is_some(), kind.is_container());
            assert_eq!(new.node.content_key.is_some(), kind.needs_content_key());
            assert_eq!(new.node.class_name, kind.default_classes());
            // Every referenced key is seeded.
            for key in new.node.content_key.iter() {
                assert!(new.data.iter().any(|(k, _)| k == key));
            }
            if let Some(media) = &new.node.media {
                for key in media.data_keys() {
                    assert!(new.data.iter().any(|(k, _)| k == key));
                }
            }
        }
    }
}
