//! Original/current image state.
//!
//! [`ImageState`] holds the raster a shell loaded (`original`), the raster it
//! currently shows (`current`) and the list of every `current` produced since
//! the last load or revert (`history`).
//!
//! Transforms always run on `original`; applying two transforms in a row does
//! not chain them. All mutation goes through `&mut self`, so a state has at
//! most one writer at a time.

use tracing::debug;

use crate::error::{Result, TransformError};
use crate::raster::Raster;
use crate::transform::PointTransform;

#[derive(Debug)]
struct Loaded {
    original: Raster,
    current: Raster,
    history: Vec<Raster>,
}

impl Loaded {
    fn fresh(original: Raster) -> Self {
        Self {
            current: original.clone(),
            history: vec![original.clone()],
            original,
        }
    }
}

/// Image state owned by the presentation layer.
///
/// Starts empty; [`ImageState::load`] is the only way to get a loaded state.
#[derive(Debug, Default)]
pub struct ImageState {
    loaded: Option<Loaded>,
}

impl ImageState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded.is_some()
    }

    /// Replace everything with a freshly loaded raster.
    ///
    /// `current` and the single history entry start as copies of `raster`.
    pub fn load(&mut self, raster: Raster) {
        debug!(
            width = raster.width(),
            height = raster.height(),
            channels = raster.channels(),
            "loading raster"
        );
        self.loaded = Some(Loaded::fresh(raster));
    }

    /// Derive a new `current` from `original` and append it to the history.
    pub fn apply(&mut self, transform: PointTransform) -> Result<&Raster> {
        let loaded = self.loaded.as_mut().ok_or(TransformError::NoImageLoaded)?;
        let derived = transform.apply(Some(&loaded.original))?;

        debug!(%transform, history = loaded.history.len() + 1, "applied transform");
        loaded.history.push(derived.clone());
        loaded.current = derived;
        Ok(&loaded.current)
    }

    /// Reset `current` to a copy of `original` and the history to one entry.
    pub fn revert(&mut self) -> Result<()> {
        let loaded = self.loaded.as_mut().ok_or(TransformError::NoImageLoaded)?;

        debug!(discarded = loaded.history.len() - 1, "reverted to original");
        loaded.current = loaded.original.clone();
        loaded.history.clear();
        loaded.history.push(loaded.original.clone());
        Ok(())
    }

    pub fn current_raster(&self) -> Option<&Raster> {
        self.loaded.as_ref().map(|l| &l.current)
    }

    pub fn original_raster(&self) -> Option<&Raster> {
        self.loaded.as_ref().map(|l| &l.original)
    }

    /// Every `current` since the last load or revert, oldest first.
    ///
    /// Empty only while nothing is loaded.
    pub fn history(&self) -> &[Raster] {
        match &self.loaded {
            Some(loaded) => &loaded.history,
            None => &[],
        }
    }

    pub fn history_len(&self) -> usize {
        self.history().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bgr(width: usize, height: usize) -> Raster {
        let samples = (0..width * height * 3).map(|i| (i * 37 % 256) as u8).collect();
        Raster::from_vec(width, height, 3, samples).unwrap()
    }

    #[test]
    fn test_empty_state() {
        let mut state = ImageState::new();

        assert!(!state.is_loaded());
        assert!(state.current_raster().is_none());
        assert!(state.history().is_empty());
        assert_eq!(
            state.apply(PointTransform::Linear).unwrap_err(),
            TransformError::NoImageLoaded
        );
        assert_eq!(state.revert().unwrap_err(), TransformError::NoImageLoaded);
    }

    #[test]
    fn test_load_initializes_current_and_history() {
        let raster = bgr(4, 3);
        let mut state = ImageState::new();
        state.load(raster.clone());

        assert_eq!(state.original_raster(), Some(&raster));
        assert_eq!(state.current_raster(), Some(&raster));
        assert_eq!(state.history(), &[raster][..]);
    }

    #[test]
    fn test_apply_appends_and_sets_current() {
        let mut state = ImageState::new();
        state.load(bgr(5, 5));

        let derived = state.apply(PointTransform::Grayscale).unwrap().clone();
        assert!(derived.is_gray());
        assert_eq!(state.current_raster(), Some(&derived));
        assert_eq!(state.history_len(), 2);
        assert_eq!(state.history().last(), Some(&derived));
    }

    #[test]
    fn test_apply_never_chains() {
        let mut state = ImageState::new();
        state.load(bgr(6, 4));

        state.apply(PointTransform::Exponential { exponent: 4 }).unwrap();
        let linear_after_exp = state.apply(PointTransform::Linear).unwrap().clone();

        let mut fresh = ImageState::new();
        fresh.load(bgr(6, 4));
        let linear_alone = fresh.apply(PointTransform::Linear).unwrap();

        assert_eq!(&linear_after_exp, linear_alone);
    }

    #[test]
    fn test_failed_apply_leaves_state_untouched() {
        let mut state = ImageState::new();
        state.load(bgr(3, 3));
        state.apply(PointTransform::Logarithmic).unwrap();
        let before = state.current_raster().cloned();

        let err = state
            .apply(PointTransform::Exponential { exponent: 42 })
            .unwrap_err();
        assert_eq!(err, TransformError::ExponentOutOfRange(42));
        assert_eq!(state.current_raster().cloned(), before);
        assert_eq!(state.history_len(), 2);
    }

    #[test]
    fn test_revert_resets_history() {
        let raster = bgr(4, 4);
        let mut state = ImageState::new();
        state.load(raster.clone());
        state.apply(PointTransform::Linear).unwrap();
        state.apply(PointTransform::Logarithmic).unwrap();
        assert_eq!(state.history_len(), 3);

        state.revert().unwrap();
        assert_eq!(state.current_raster(), Some(&raster));
        assert_eq!(state.history(), &[raster.clone()][..]);

        state.revert().unwrap();
        assert_eq!(state.current_raster(), Some(&raster));
        assert_eq!(state.history_len(), 1);
    }

    #[test]
    fn test_reload_discards_previous_image() {
        let mut state = ImageState::new();
        state.load(bgr(4, 4));
        state.apply(PointTransform::Linear).unwrap();

        let second = bgr(2, 7);
        state.load(second.clone());
        assert_eq!(state.original_raster(), Some(&second));
        assert_eq!(state.current_raster(), Some(&second));
        assert_eq!(state.history_len(), 1);
    }
}
