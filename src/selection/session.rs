//! Drill session state machine composing settings and selection
//!
//! ```text
//! Loading --start--> Ready(selection, revealed)
//! Ready --repick | apply_preferences--> Ready(new selection, revealed = false)
//! Ready --reveal--> Ready(selection, revealed = true)
//! ```

use crate::catalog::{Catalog, PatternRecord};
use crate::io::configuration::MIN_PATTERNS_FOR_REPICK;
use crate::io::error::{DrillError, Result};
use crate::selection::random::RandomSource;
use crate::selection::selector::Selector;
use crate::settings::document::PreferenceDocument;
use crate::settings::storage::KeyValueStorage;
use crate::settings::store::SettingsStore;
use tracing::{debug, info};

/// Lifecycle of a drill session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState<'c> {
    /// Preferences haven't been loaded yet
    Loading,
    /// A card (or the "no valid pattern" state) is on screen
    Ready {
        /// Current card, `None` when no pattern is eligible
        selection: Option<&'c PatternRecord>,
        /// Whether the move sequence is shown
        revealed: bool,
    },
}

/// One drill session, owned by the presentation layer
pub struct Session<'c, S: KeyValueStorage, R: RandomSource> {
    catalog: &'c Catalog,
    store: SettingsStore<'c, S>,
    selector: Selector<R>,
    preferences: PreferenceDocument,
    enabled: Vec<&'c PatternRecord>,
    state: SessionState<'c>,
}

impl<'c, S: KeyValueStorage, R: RandomSource> Session<'c, S, R> {
    /// Create a session in the `Loading` state
    pub fn new(catalog: &'c Catalog, storage: S, random: R) -> Self {
        Self {
            catalog,
            store: SettingsStore::new(catalog, storage),
            selector: Selector::new(random),
            preferences: PreferenceDocument::default_for(catalog),
            enabled: Vec::new(),
            state: SessionState::Loading,
        }
    }

    /// Load preferences and pick the first card
    ///
    /// Does nothing once the session is ready.
    pub fn start(&mut self) -> Option<&'c PatternRecord> {
        if self.is_ready() {
            return self.selection();
        }

        self.preferences = self.store.load();
        self.enabled = self.catalog.enabled_set(&self.preferences);
        let selection = self.selector.pick(&self.enabled, None);
        self.state = SessionState::Ready {
            selection,
            revealed: false,
        };

        info!(enabled = self.enabled.len(), "session ready");
        selection
    }

    /// Pick a different card
    ///
    /// # Errors
    ///
    /// Returns `SessionNotReady` before [`Session::start`]
    pub fn repick(&mut self) -> Result<Option<&'c PatternRecord>> {
        let current = self.ready_selection("pick again")?;
        Ok(self.select_excluding(current.map(|record| record.id.as_str())))
    }

    /// Show the move sequence of the current card
    ///
    /// Returns whether the move sequence is now shown, which stays `false`
    /// while no pattern is eligible.
    ///
    /// # Errors
    ///
    /// Returns `SessionNotReady` before [`Session::start`]
    pub fn reveal(&mut self) -> Result<bool> {
        match &mut self.state {
            SessionState::Loading => Err(DrillError::SessionNotReady {
                operation: "reveal the moves",
            }),
            SessionState::Ready {
                selection,
                revealed,
            } => {
                if selection.is_some() {
                    *revealed = true;
                }
                Ok(*revealed)
            }
        }
    }

    /// Persist new preferences and pick a card from the new enabled set
    ///
    /// The previous card is excluded only if it is still enabled. A failed
    /// save leaves the session untouched.
    ///
    /// # Errors
    ///
    /// Returns `SessionNotReady` before [`Session::start`], otherwise whatever
    /// [`SettingsStore::save`] returns
    pub fn apply_preferences(
        &mut self,
        preferences: &PreferenceDocument,
    ) -> Result<Option<&'c PatternRecord>> {
        let previous = self.ready_selection("change preferences")?;

        let (preferences, repairs) = preferences.reconcile(self.catalog);
        if !repairs.is_empty() {
            debug!(repairs = repairs.len(), "completed submitted preferences");
        }
        self.store.save(&preferences)?;

        Ok(self.install(preferences, previous))
    }

    /// Drop stored preferences and continue with defaults
    ///
    /// # Errors
    ///
    /// Returns `SessionNotReady` before [`Session::start`], otherwise whatever
    /// the storage backend returns
    pub fn reset_preferences(&mut self) -> Result<Option<&'c PatternRecord>> {
        let previous = self.ready_selection("reset preferences")?;
        self.store.reset()?;
        let defaults = PreferenceDocument::default_for(self.catalog);
        Ok(self.install(defaults, previous))
    }

    fn install(
        &mut self,
        preferences: PreferenceDocument,
        previous: Option<&'c PatternRecord>,
    ) -> Option<&'c PatternRecord> {
        self.enabled = self.catalog.enabled_set(&preferences);
        self.preferences = preferences;

        let exclude = previous
            .filter(|record| self.enabled.iter().any(|enabled| enabled.id == record.id))
            .map(|record| record.id.as_str());
        self.select_excluding(exclude)
    }

    fn ready_selection(&self, operation: &'static str) -> Result<Option<&'c PatternRecord>> {
        match self.state {
            SessionState::Loading => Err(DrillError::SessionNotReady { operation }),
            SessionState::Ready { selection, .. } => Ok(selection),
        }
    }

    fn select_excluding(&mut self, exclude_id: Option<&str>) -> Option<&'c PatternRecord> {
        let selection = self.selector.pick(&self.enabled, exclude_id);
        self.state = SessionState::Ready {
            selection,
            revealed: false,
        };
        debug!(
            selection = selection.map_or("none", |record| record.id.as_str()),
            "picked pattern"
        );
        selection
    }

    /// Current lifecycle state
    pub const fn state(&self) -> SessionState<'c> {
        self.state
    }

    /// Check whether [`Session::start`] has run
    pub const fn is_ready(&self) -> bool {
        matches!(self.state, SessionState::Ready { .. })
    }

    /// Current card, `None` while loading or when no pattern is eligible
    pub const fn selection(&self) -> Option<&'c PatternRecord> {
        match self.state {
            SessionState::Loading => None,
            SessionState::Ready { selection, .. } => selection,
        }
    }

    /// Whether the move sequence of the current card is shown
    pub const fn is_revealed(&self) -> bool {
        matches!(self.state, SessionState::Ready { revealed: true, .. })
    }

    /// Whether picking again can change the card
    pub fn can_repick(&self) -> bool {
        self.enabled.len() >= MIN_PATTERNS_FOR_REPICK
    }

    /// Patterns currently taking part in the drill, in catalog order
    pub fn enabled_set(&self) -> &[&'c PatternRecord] {
        &self.enabled
    }

    /// Preferences the enabled set was derived from
    pub const fn preferences(&self) -> &PreferenceDocument {
        &self.preferences
    }

    /// Settings store preferences are persisted through
    pub const fn store(&self) -> &SettingsStore<'c, S> {
        &self.store
    }

    /// Catalog the session draws from
    pub const fn catalog(&self) -> &'c Catalog {
        self.catalog
    }
}
