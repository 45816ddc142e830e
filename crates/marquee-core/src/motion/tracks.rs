//! Dual-track offset projection
//!
//! Two copies of the content are laid end to end: the primary track starts at
//! 0 and the mirror starts at `length`. Translating both by the same negative
//! offset makes the mirror slide into the primary's place exactly when the
//! offset wraps.

/// One rendered copy of the content sequence
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Track {
    origin: f64,
    translation: f64,
}

impl Track {
    /// Untranslated position of the track's first cell
    #[inline]
    pub fn origin(&self) -> f64 {
        self.origin
    }

    /// Applied horizontal translation
    #[inline]
    pub fn translation(&self) -> f64 {
        self.translation
    }

    /// On-screen position of the track's first cell
    #[inline]
    pub fn position(&self) -> f64 {
        self.origin + self.translation
    }
}

/// Primary track plus its mirrored continuation
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DualTrack {
    length: f64,
    primary: Track,
    mirror: Track,
}

impl DualTrack {
    /// Lay out both tracks for a new track length (keeps the current translation)
    pub fn set_length(&mut self, length: f64) {
        self.length = length;
        self.primary.origin = 0.0;
        self.mirror.origin = length;
    }

    /// Translate both tracks by `-offset` in one step
    pub fn apply(&mut self, offset: f64) {
        let translation = -offset;
        self.primary.translation = translation;
        self.mirror.translation = translation;
    }

    /// Drop layout and translation
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.length
    }

    #[inline]
    pub fn primary(&self) -> &Track {
        &self.primary
    }

    #[inline]
    pub fn mirror(&self) -> &Track {
        &self.mirror
    }

    /// Both tracks in draw order
    pub fn iter(&self) -> impl Iterator<Item = &Track> {
        [&self.primary, &self.mirror].into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_translates_both_tracks() {
        let mut tracks = DualTrack::default();
        tracks.set_length(120.0);
        tracks.apply(30.0);

        assert_eq!(tracks.primary().translation(), -30.0);
        assert_eq!(tracks.mirror().translation(), -30.0);
        assert_eq!(tracks.primary().position(), -30.0);
        assert_eq!(tracks.mirror().position(), 90.0);
    }

    #[test]
    fn test_mirror_takes_primary_place_at_full_length() {
        let mut tracks = DualTrack::default();
        tracks.set_length(80.0);
        tracks.apply(80.0);
        assert_eq!(tracks.mirror().position(), 0.0);
    }

    #[test]
    fn test_set_length_keeps_translation() {
        let mut tracks = DualTrack::default();
        tracks.set_length(100.0);
        tracks.apply(10.0);
        tracks.set_length(50.0);
        assert_eq!(tracks.primary().translation(), tracks.mirror().translation());
        assert_eq!(tracks.mirror().position(), 40.0);
    }
}
