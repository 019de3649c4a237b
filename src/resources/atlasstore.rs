//! Atlas store resource.
//!
//! A non-send resource holding every loaded [`AnimFrame`] keyed by string ID.
//! Sprites refer to an atlas by key instead of holding a copy, so the store
//! must outlive every sprite bound to it.
//!
//! Note: This is a non-send resource because raylib textures must be accessed
//! from the main thread only.

use log::info;
use raylib::prelude::Texture2D;
use rustc_hash::FxHashMap;

use crate::resources::animframe::{AnimFrame, AtlasTexture};

/// Map of atlas keys to loaded atlases.
///
/// This is a non-send resource; use `NonSend<AtlasStore>` in system parameters.
pub struct AtlasStore<T: AtlasTexture = Texture2D> {
    atlases: FxHashMap<String, AnimFrame<T>>,
}

impl<T: AtlasTexture> Default for AtlasStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: AtlasTexture> AtlasStore<T> {
    /// Create an empty atlas store.
    pub fn new() -> Self {
        Self {
            atlases: FxHashMap::default(),
        }
    }

    /// Add an atlas with the given key. A previous atlas under the same key is released.
    pub fn insert(&mut self, id: impl Into<String>, frame: AnimFrame<T>) {
        if let Some(old) = self.atlases.insert(id.into(), frame) {
            old.release();
        }
    }

    /// Get an atlas by its key.
    pub fn get(&self, id: impl AsRef<str>) -> Option<&AnimFrame<T>> {
        self.atlases.get(id.as_ref())
    }

    /// Iterate over all atlases with their keys, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AnimFrame<T>)> {
        self.atlases.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Remove and release one atlas. Returns false if nothing was stored under `id`.
    pub fn release(&mut self, id: impl AsRef<str>) -> bool {
        match self.atlases.remove(id.as_ref()) {
            Some(frame) => {
                frame.release();
                true
            }
            None => false,
        }
    }

    /// Release all loaded atlases.
    pub fn clear(&mut self) {
        if !self.atlases.is_empty() {
            info!("Releasing {} atlas(es)", self.atlases.len());
        }
        for (_, frame) in self.atlases.drain() {
            frame.release();
        }
    }

    /// Get the number of loaded atlases.
    pub fn len(&self) -> usize {
        self.atlases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atlases.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Texture double that counts how many times it was dropped.
    struct CountedTexture {
        drops: Rc<Cell<u32>>,
    }

    impl AtlasTexture for CountedTexture {
        fn id(&self) -> u32 {
            1
        }
        fn width(&self) -> u32 {
            48
        }
        fn height(&self) -> u32 {
            28
        }
    }

    impl Drop for CountedTexture {
        fn drop(&mut self) {
            self.drops.set(self.drops.get() + 1);
        }
    }

    fn frame(drops: &Rc<Cell<u32>>) -> AnimFrame<CountedTexture> {
        AnimFrame::from_texture(
            CountedTexture {
                drops: Rc::clone(drops),
            },
            12,
            14,
        )
    }

    #[test]
    fn test_insert_and_get() {
        let drops = Rc::new(Cell::new(0));
        let mut store = AtlasStore::new();
        store.insert("slime", frame(&drops));
        assert_eq!(store.len(), 1);
        let atlas = store.get("slime").unwrap();
        assert_eq!(atlas.grid().columns, 4);
        assert_eq!(atlas.grid().rows, 2);
        assert!(store.get("missing").is_none());
    }

    #[test]
    fn test_release_frees_exactly_once() {
        let drops = Rc::new(Cell::new(0));
        let mut store = AtlasStore::new();
        store.insert("slime", frame(&drops));

        assert!(store.release("slime"));
        assert_eq!(drops.get(), 1);
        assert!(!store.release("slime"));
        assert_eq!(drops.get(), 1);
        assert!(store.is_empty());
    }

    #[test]
    fn test_replacing_key_releases_previous_atlas() {
        let drops = Rc::new(Cell::new(0));
        let mut store = AtlasStore::new();
        store.insert("slime", frame(&drops));
        store.insert("slime", frame(&drops));
        assert_eq!(drops.get(), 1);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_clear_releases_everything() {
        let drops = Rc::new(Cell::new(0));
        let mut store = AtlasStore::new();
        store.insert("a", frame(&drops));
        store.insert("b", frame(&drops));
        store.clear();
        assert_eq!(drops.get(), 2);
        assert!(store.is_empty());
        store.clear();
        assert_eq!(drops.get(), 2);
    }
}
