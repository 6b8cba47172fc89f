//! Measurement cache keyed by the last queried maximum size

use log::trace;

use crate::domain::Size;

/// Holds the result of the most recent measure call
///
/// A hit requires the exact same maximum size. Content changes are not
/// tracked; the owning layout must be invalidated explicitly.
#[derive(Clone, Debug)]
pub struct MeasureCache<T> {
    entry: Option<(Size, T)>,
}

impl<T> Default for MeasureCache<T> {
    fn default() -> Self {
        Self { entry: None }
    }
}

impl<T> MeasureCache<T> {
    pub fn get(&self, max: Size) -> Option<&T> {
        match &self.entry {
            Some((key, value)) if *key == max => Some(value),
            _ => None,
        }
    }

    /// Return the cached value for `max`, computing and storing it on a miss
    pub fn get_or_insert_with(&mut self, max: Size, compute: impl FnOnce() -> T) -> &T {
        if self.get(max).is_some() {
            trace!("measure cache hit for {}x{}", max.width, max.height);
        } else {
            trace!("measure cache miss for {}x{}", max.width, max.height);
            self.entry = None;
        }
        let (_, value) = self.entry.get_or_insert_with(|| (max, compute()));
        value
    }

    pub fn invalidate(&mut self) {
        self.entry = None;
    }
}
