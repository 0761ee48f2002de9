//! Ordered modifier chains for scalar stats

use std::fmt;

/// Token identifying one registration in a [`ModifierChain`]
///
/// Handles are only meaningful for the chain that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ModifierHandle(u64);

/// An ordered list of transforms folded left-to-right over a base value
///
/// Each modifier sees the output of every modifier registered before it.
/// Registering the same closure twice yields two independent handles, and
/// removal by handle touches exactly one registration.
pub struct ModifierChain<T> {
    entries: Vec<(ModifierHandle, Box<dyn Fn(T) -> T>)>,
    next_handle: u64,
}

impl<T> Default for ModifierChain<T> {
    fn default() -> Self {
        ModifierChain {
            entries: Vec::new(),
            next_handle: 0,
        }
    }
}

impl<T> fmt::Debug for ModifierChain<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModifierChain")
            .field("handles", &self.entries.iter().map(|(h, _)| h.0).collect::<Vec<_>>())
            .finish()
    }
}

impl<T: Copy> ModifierChain<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a modifier to the end of the chain
    pub fn add(&mut self, modifier: impl Fn(T) -> T + 'static) -> ModifierHandle {
        let handle = ModifierHandle(self.next_handle);
        self.next_handle += 1;
        self.entries.push((handle, Box::new(modifier)));
        handle
    }

    /// Remove the registration behind `handle`
    ///
    /// Returns false for unknown or already-removed handles.
    pub fn remove(&mut self, handle: ModifierHandle) -> bool {
        match self.entries.iter().position(|(h, _)| *h == handle) {
            Some(index) => {
                self.entries.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, handle: ModifierHandle) -> bool {
        self.entries.iter().any(|(h, _)| *h == handle)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Fold `base` through every modifier in insertion order
    pub fn fold(&self, base: T) -> T {
        self.entries.iter().fold(base, |value, (_, modifier)| modifier(value))
    }
}

/// A speed value derived from a base speed and a modifier chain
///
/// The derived value is cached and only recomputed when the chain or base
/// changes, or on an explicit [`SpeedStat::refresh`].
#[derive(Debug, Default)]
pub struct SpeedStat {
    base: f32,
    modifiers: ModifierChain<f32>,
    current: f32,
}

impl SpeedStat {
    pub fn new(base: f32) -> Self {
        SpeedStat {
            base,
            modifiers: ModifierChain::new(),
            current: base,
        }
    }

    pub fn base(&self) -> f32 {
        self.base
    }

    /// Cached effective speed
    pub fn current(&self) -> f32 {
        self.current
    }

    pub fn set_base(&mut self, base: f32) {
        self.base = base;
        self.refresh();
    }

    pub fn add(&mut self, modifier: impl Fn(f32) -> f32 + 'static) -> ModifierHandle {
        let handle = self.modifiers.add(modifier);
        self.refresh();
        handle
    }

    pub fn remove(&mut self, handle: ModifierHandle) -> bool {
        let removed = self.modifiers.remove(handle);
        self.refresh();
        removed
    }

    pub fn modifiers(&self) -> &ModifierChain<f32> {
        &self.modifiers
    }

    /// Recompute the cached speed
    pub fn refresh(&mut self) {
        self.current = self.modifiers.fold(self.base);
    }
}
