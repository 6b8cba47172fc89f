//! Size groups - named sets of items sharing one cross-axis size

use std::collections::HashMap;

/// Group key to shared cross size, grown top-down through nested layouts
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SizeGroups {
    sizes: HashMap<String, i32>,
}

impl SizeGroups {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raise the group's size to at least `size` and return the new value
    pub fn raise(&mut self, key: &str, size: i32) -> i32 {
        match self.sizes.get_mut(key) {
            Some(current) => {
                *current = (*current).max(size);
                *current
            }
            None => {
                self.sizes.insert(key.to_string(), size);
                size
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<i32> {
        self.sizes.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i32)> {
        self.sizes.iter().map(|(k, v)| (k.as_str(), *v))
    }
}
