/// Navigation request coming from a gallery widget
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GalleryNav {
    Prev,
    Next,
    /// Jump straight to a photo position (thumbnail click)
    Jump(usize),
}

/// Bounded position inside an ordered photo sequence.
///
/// The position is the only addressing key for a photo. Navigation clamps at
/// both ends (no wraparound). An empty sequence has no current position and
/// ignores every navigation request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PhotoCursor {
    index: usize,
    len: usize,
}

impl PhotoCursor {
    /// Creates a cursor at the first photo
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Current position, `None` for an empty sequence
    pub fn current(&self) -> Option<usize> {
        if self.is_empty() {
            None
        } else {
            Some(self.index)
        }
    }

    pub fn has_prev(&self) -> bool {
        !self.is_empty() && self.index > 0
    }

    pub fn has_next(&self) -> bool {
        !self.is_empty() && self.index < self.len - 1
    }

    /// Steps back one photo. Returns `false` at the first photo.
    pub fn prev(&mut self) -> bool {
        if !self.has_prev() {
            return false;
        }
        self.index -= 1;
        true
    }

    /// Steps forward one photo. Returns `false` at the last photo.
    pub fn next(&mut self) -> bool {
        if !self.has_next() {
            return false;
        }
        self.index += 1;
        true
    }

    /// Moves to `position`; out-of-range positions are ignored
    pub fn jump(&mut self, position: usize) -> bool {
        if position >= self.len {
            log::debug!("Ignoring jump to photo {} of {}", position, self.len);
            return false;
        }
        self.index = position;
        true
    }

    pub fn apply(&mut self, nav: GalleryNav) -> bool {
        match nav {
            GalleryNav::Prev => self.prev(),
            GalleryNav::Next => self.next(),
            GalleryNav::Jump(position) => self.jump(position),
        }
    }

    /// `"k / n"` counter with a one-based position
    pub fn counter_label(&self) -> Option<String> {
        self.current().map(|index| format!("{} / {}", index + 1, self.len))
    }
}
