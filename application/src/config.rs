//! Application behavior configuration

/// Tunable behavior for the resolve-question flow.
#[derive(Debug, Clone, Copy, Default)]
pub struct BehaviorConfig {
    /// Surface an empty question listing as a visible error instead of
    /// completing silently with no navigation. Off by default to match
    /// the historical behavior.
    pub surface_empty_sets: bool,
}

impl BehaviorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_surface_empty_sets(mut self, surface: bool) -> Self {
        self.surface_empty_sets = surface;
        self
    }
}
