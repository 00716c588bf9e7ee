//! The fixed gallery of candidate image URLs
//!
//! Tasks are illustrated from a built-in set rather than user uploads.
//! The same list doubles as the display fallback for a record that
//! arrives with no images at all.

/// Candidate image URLs offered by the create and update forms
pub const GALLERY: &[&str] = &[
    "https://picsum.photos/id/1015/600/400",
    "https://picsum.photos/id/1025/600/400",
    "https://picsum.photos/id/1035/600/400",
    "https://picsum.photos/id/1043/600/400",
    "https://picsum.photos/id/1062/600/400",
    "https://picsum.photos/id/1074/600/400",
];

/// Images to display for a task, falling back to the gallery when the
/// record has none so a card never renders an empty image strip.
#[must_use]
pub fn display_images(task_images: &[String]) -> Vec<String> {
    if task_images.is_empty() {
        GALLERY.iter().map(|&u| u.to_owned()).collect()
    } else {
        task_images.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gallery_entries_are_absolute_urls() {
        for entry in GALLERY {
            assert!(url::Url::parse(entry).is_ok(), "bad gallery URL: {entry}");
        }
    }

    #[test]
    fn display_images_prefers_task_images() {
        let own = vec!["http://x/a.png".to_owned()];
        assert_eq!(display_images(&own), own);
    }

    #[test]
    fn display_images_falls_back_to_gallery() {
        let shown = display_images(&[]);
        assert_eq!(shown.len(), GALLERY.len());
        assert_eq!(shown[0], GALLERY[0]);
    }
}
