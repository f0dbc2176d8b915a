//! Font handle registry
//!
//! Maps the opaque handles the UI library passes around to the fonts they
//! stand for. Handles are allocated from a monotonic counter and never reused
//! after removal; handle 0 is reserved for "default font" and is never stored.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::font::{Font, FontId};
use crate::foundation::math::Vec2i;

/// Opaque font identifier understood by the UI library
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct FontHandle(u32);

impl FontHandle {
    /// Reserved handle meaning "use the default font"
    pub const DEFAULT: Self = Self(0);

    /// Wrap a raw handle received from the UI library
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Raw value to hand to the UI library
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// True for the reserved default handle
    pub const fn is_default(self) -> bool {
        self.0 == 0
    }
}

/// A registered font together with its draw offset
#[derive(Debug, Clone)]
pub struct RegisteredFont {
    /// The font resource
    pub font: Arc<Font>,
    /// Pixel offset added to the draw position
    pub offset: Vec2i,
}

#[derive(Default)]
struct RegistryState {
    by_handle: HashMap<FontHandle, RegisteredFont>,
    by_identity: HashMap<FontId, FontHandle>,
    last_handle: u32,
}

impl RegistryState {
    fn register(&mut self, font: &Arc<Font>) -> FontHandle {
        if let Some(handle) = self.by_identity.get(&font.id()) {
            return *handle;
        }

        self.last_handle += 1;
        let handle = FontHandle(self.last_handle);
        self.by_handle.insert(
            handle,
            RegisteredFont {
                font: Arc::clone(font),
                offset: Vec2i::ZERO,
            },
        );
        self.by_identity.insert(font.id(), handle);

        log::debug!("Registered font {:?} as handle {}", font.id(), handle.raw());
        handle
    }
}

/// Thread-safe font registry
///
/// Registration usually happens during setup while lookups happen every frame
/// on the render path, so the state sits behind a reader/writer lock.
#[derive(Default)]
pub struct FontRegistry {
    state: RwLock<RegistryState>,
}

impl std::fmt::Debug for FontRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.read();
        f.debug_struct("FontRegistry")
            .field("fonts", &state.by_handle.len())
            .field("last_handle", &state.last_handle)
            .finish()
    }
}

impl FontRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    // The maps are only ever mutated together under the write guard, so a
    // poisoned lock still guards consistent state.
    fn read(&self) -> RwLockReadGuard<'_, RegistryState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, RegistryState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Handle for `font`, registering it on first use
    pub fn register(&self, font: &Arc<Font>) -> FontHandle {
        // Fast path: already registered
        if let Some(handle) = self.handle_of(font) {
            return handle;
        }
        self.write().register(font)
    }

    /// Set the draw offset for `font`, registering it if needed
    pub fn set_offsets(&self, font: &Arc<Font>, x: i32, y: i32) -> FontHandle {
        let mut state = self.write();
        let handle = state.register(font);
        if let Some(entry) = state.by_handle.get_mut(&handle) {
            entry.offset = Vec2i::new(x, y);
        }
        handle
    }

    /// Forget `font`; its old handle will no longer resolve
    pub fn remove(&self, font: &Font) {
        let mut state = self.write();
        if let Some(handle) = state.by_identity.remove(&font.id()) {
            state.by_handle.remove(&handle);
            log::debug!("Removed font handle {}", handle.raw());
        }
    }

    /// Forget every font and restart handle numbering
    pub fn remove_all(&self) {
        let mut state = self.write();
        *state = RegistryState::default();
        log::debug!("Cleared font registry");
    }

    /// Font registered under `handle`
    pub fn lookup(&self, handle: FontHandle) -> Option<RegisteredFont> {
        if handle.is_default() {
            return None;
        }
        self.read().by_handle.get(&handle).cloned()
    }

    /// Handle `font` is registered under, if any
    pub fn handle_of(&self, font: &Font) -> Option<FontHandle> {
        self.read().by_identity.get(&font.id()).copied()
    }

    /// Number of registered fonts
    pub fn len(&self) -> usize {
        self.read().by_handle.len()
    }

    /// True when no fonts are registered
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
