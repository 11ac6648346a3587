use dioxus_gallery::GalleryNav;

/// Keys the showcase reacts to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavKey {
    ArrowLeft,
    ArrowRight,
    Escape,
}

impl NavKey {
    /// Maps a DOM `KeyboardEvent.key` value
    pub fn from_key_name(name: &str) -> Option<Self> {
        match name {
            "ArrowLeft" => Some(NavKey::ArrowLeft),
            "ArrowRight" => Some(NavKey::ArrowRight),
            "Escape" | "Esc" => Some(NavKey::Escape),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    CarouselPrev,
    CarouselNext,
    ModalPhoto(GalleryNav),
    GalleryPhoto(GalleryNav),
    CloseGallery,
    CloseModal,
}

/// Routes a key press to the topmost open layer.
///
/// The overlay sits above the modal, which sits above the carousel; only the
/// topmost layer receives the key.
pub fn route_key(key: NavKey, modal_open: bool, gallery_open: bool) -> Option<KeyAction> {
    match (key, gallery_open, modal_open) {
        (NavKey::Escape, true, _) => Some(KeyAction::CloseGallery),
        (NavKey::ArrowLeft, true, _) => Some(KeyAction::GalleryPhoto(GalleryNav::Prev)),
        (NavKey::ArrowRight, true, _) => Some(KeyAction::GalleryPhoto(GalleryNav::Next)),
        (NavKey::Escape, false, true) => Some(KeyAction::CloseModal),
        (NavKey::ArrowLeft, false, true) => Some(KeyAction::ModalPhoto(GalleryNav::Prev)),
        (NavKey::ArrowRight, false, true) => Some(KeyAction::ModalPhoto(GalleryNav::Next)),
        (NavKey::ArrowLeft, false, false) => Some(KeyAction::CarouselPrev),
        (NavKey::ArrowRight, false, false) => Some(KeyAction::CarouselNext),
        (NavKey::Escape, false, false) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_names() {
        assert_eq!(NavKey::from_key_name("ArrowLeft"), Some(NavKey::ArrowLeft));
        assert_eq!(NavKey::from_key_name("ArrowRight"), Some(NavKey::ArrowRight));
        assert_eq!(NavKey::from_key_name("Escape"), Some(NavKey::Escape));
        // Legacy name some engines still report
        assert_eq!(NavKey::from_key_name("Esc"), Some(NavKey::Escape));
        assert_eq!(NavKey::from_key_name("Enter"), None);
        assert_eq!(NavKey::from_key_name("arrowleft"), None);
    }

    #[test]
    fn test_arrows_drive_carousel_only_without_layers() {
        assert_eq!(route_key(NavKey::ArrowLeft, false, false), Some(KeyAction::CarouselPrev));
        assert_eq!(route_key(NavKey::ArrowRight, false, false), Some(KeyAction::CarouselNext));
        assert_eq!(route_key(NavKey::Escape, false, false), None);
    }

    #[test]
    fn test_open_overlay_takes_precedence_over_modal() {
        assert_eq!(
            route_key(NavKey::ArrowRight, true, true),
            Some(KeyAction::GalleryPhoto(GalleryNav::Next))
        );
        assert_eq!(route_key(NavKey::Escape, true, true), Some(KeyAction::CloseGallery));
    }

    #[test]
    fn test_modal_keys() {
        assert_eq!(
            route_key(NavKey::ArrowLeft, true, false),
            Some(KeyAction::ModalPhoto(GalleryNav::Prev))
        );
        assert_eq!(route_key(NavKey::Escape, true, false), Some(KeyAction::CloseModal));
    }
}
