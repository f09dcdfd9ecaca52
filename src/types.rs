//! Domain types for tabstrip.
//!
//! Tabs are plain data. A [`TabSet`] is the only way to hand tabs to the
//! widget, so every set the widget sees is non-empty with unique ids.

use std::collections::HashSet;
use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

use crate::error::TabSetError;

// ============================================================================
// PRIMITIVES
// ============================================================================

/// Stable identity of a tab. Small sequential integers in the built-in set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TabId(pub u32);

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One selectable unit: a button label and the panel content behind it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tab {
    pub id: TabId,
    pub label: String,
    pub content: String,
}

impl Tab {
    pub fn new(id: u32, label: impl Into<String>, content: impl Into<String>) -> Self {
        Tab {
            id: TabId(id),
            label: label.into(),
            content: content.into(),
        }
    }
}

// ============================================================================
// TAB SET
// ============================================================================

/// Accessible name of the built-in tab strip.
pub const TABLIST_LABEL: &str = "opciones de usuario";

/// Ordered, immutable, non-empty collection of tabs.
///
/// Insertion order is display order and keyboard wrap-around order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabSet {
    label: String,
    tabs: Vec<Tab>,
}

impl TabSet {
    /// Build a set from caller-supplied tabs.
    ///
    /// # Errors
    ///
    /// [`TabSetError::Empty`] for an empty list, [`TabSetError::DuplicateId`]
    /// when two tabs share an id.
    pub fn new(label: impl Into<String>, tabs: Vec<Tab>) -> Result<Self, TabSetError> {
        if tabs.is_empty() {
            return Err(TabSetError::Empty);
        }

        let mut seen = HashSet::with_capacity(tabs.len());
        for tab in &tabs {
            if !seen.insert(tab.id) {
                return Err(TabSetError::DuplicateId(tab.id));
            }
        }

        Ok(TabSet {
            label: label.into(),
            tabs,
        })
    }

    /// The three user-option tabs shipped with the binary.
    pub fn user_options() -> Self {
        TabSet {
            label: TABLIST_LABEL.to_string(),
            tabs: vec![
                Tab::new(1, "Perfil", "Información de perfil"),
                Tab::new(2, "Configuración", "Opciones de configuración"),
                Tab::new(3, "Notificaciones", "Preferencias de notificaciones"),
            ],
        }
    }

    /// Accessible name of the tab strip.
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    /// Always false; kept for the `len`/`is_empty` convention.
    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    /// Index of the last tab. Never underflows since the set is non-empty.
    pub fn last_index(&self) -> usize {
        self.tabs.len() - 1
    }

    pub fn get(&self, index: usize) -> Option<&Tab> {
        self.tabs.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Tab> {
        self.tabs.iter()
    }

    pub fn as_slice(&self) -> &[Tab] {
        &self.tabs
    }
}

impl Default for TabSet {
    fn default() -> Self {
        TabSet::user_options()
    }
}

impl<'a> IntoIterator for &'a TabSet {
    type Item = &'a Tab;
    type IntoIter = std::slice::Iter<'a, Tab>;

    fn into_iter(self) -> Self::IntoIter {
        self.tabs.iter()
    }
}

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Output format for snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// HTML-like markup of the accessibility tree.
    #[default]
    Human,
    /// Machine-readable JSON.
    Json,
}

/// Runtime configuration assembled from CLI flags.
#[derive(Debug, Clone)]
pub struct Config {
    /// Where to write log records. None disables logging in the interactive
    /// session and sends records to stderr in headless commands.
    pub log_file: Option<PathBuf>,
    /// Default filter directive when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_file: None,
            log_level: "info".to_string(),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
