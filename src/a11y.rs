//! Accessibility tree derived from widget state.
//!
//! Pure functions: `&TabsWidget` in, tree out. Role names, id patterns and
//! attribute values follow the ARIA tabs pattern exactly, so the markup
//! rendering can be compared byte for byte against a browser DOM.

use serde::{Serialize, Serializer};

use crate::widget::TabsWidget;

// ============================================================================
// ATTRIBUTE VALUES
// ============================================================================

/// ARIA role of a node in the tab widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Tablist,
    Tab,
    Tabpanel,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Tablist => "tablist",
            Role::Tab => "tab",
            Role::Tabpanel => "tabpanel",
        }
    }
}

/// Roving tabindex value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabIndex {
    /// `tabindex="0"`: reachable with the Tab key.
    Sequential,
    /// `tabindex="-1"`: focusable only from script (the arrow-key handler).
    Programmatic,
}

impl TabIndex {
    pub fn value(self) -> i32 {
        match self {
            TabIndex::Sequential => 0,
            TabIndex::Programmatic => -1,
        }
    }
}

impl Serialize for TabIndex {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i32(self.value())
    }
}

/// Visual weight cue for the selected tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    Bold,
    Normal,
}

impl FontWeight {
    pub fn as_str(self) -> &'static str {
        match self {
            FontWeight::Bold => "bold",
            FontWeight::Normal => "normal",
        }
    }
}

/// DOM id of the button for tab `index`.
pub fn tab_element_id(index: usize) -> String {
    format!("tab-{index}")
}

/// DOM id of the panel controlled by tab `index`.
pub fn panel_element_id(index: usize) -> String {
    format!("panel-{index}")
}

// ============================================================================
// NODES
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TabNode {
    pub role: Role,
    pub id: String,
    pub label: String,
    #[serde(rename = "aria-selected")]
    pub aria_selected: bool,
    #[serde(rename = "aria-controls")]
    pub aria_controls: String,
    pub tabindex: TabIndex,
    #[serde(rename = "font-weight")]
    pub font_weight: FontWeight,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TablistNode {
    pub role: Role,
    #[serde(rename = "aria-label")]
    pub aria_label: String,
    pub tabs: Vec<TabNode>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PanelNode {
    pub role: Role,
    pub id: String,
    #[serde(rename = "aria-labelledby")]
    pub aria_labelledby: String,
    pub tabindex: TabIndex,
    pub content: String,
}

/// The whole widget as assistive technology sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccessibilityTree {
    pub tablist: TablistNode,
    pub panel: PanelNode,
}

/// Derive the accessibility tree from the widget's current state.
pub fn accessibility_tree(widget: &TabsWidget) -> AccessibilityTree {
    let active = widget.active_index();

    let tabs = widget
        .tabs()
        .iter()
        .enumerate()
        .map(|(i, tab)| {
            let selected = i == active;
            TabNode {
                role: Role::Tab,
                id: tab_element_id(i),
                label: tab.label.clone(),
                aria_selected: selected,
                aria_controls: panel_element_id(i),
                tabindex: if selected {
                    TabIndex::Sequential
                } else {
                    TabIndex::Programmatic
                },
                font_weight: if selected {
                    FontWeight::Bold
                } else {
                    FontWeight::Normal
                },
            }
        })
        .collect();

    AccessibilityTree {
        tablist: TablistNode {
            role: Role::Tablist,
            aria_label: widget.tabs().label().to_string(),
            tabs,
        },
        panel: PanelNode {
            role: Role::Tabpanel,
            id: panel_element_id(active),
            aria_labelledby: tab_element_id(active),
            tabindex: TabIndex::Sequential,
            content: widget.active_tab().content.clone(),
        },
    }
}

impl AccessibilityTree {
    /// Number of tabs reporting `aria-selected="true"`.
    pub fn selected_count(&self) -> usize {
        self.tablist.tabs.iter().filter(|t| t.aria_selected).count()
    }

    /// Ids of elements reachable by sequential (Tab-key) navigation,
    /// in document order.
    pub fn sequential_focus_order(&self) -> Vec<&str> {
        self.tablist
            .tabs
            .iter()
            .filter(|t| t.tabindex == TabIndex::Sequential)
            .map(|t| t.id.as_str())
            .chain(
                (self.panel.tabindex == TabIndex::Sequential).then_some(self.panel.id.as_str()),
            )
            .collect()
    }

    /// HTML-like rendering of the tree.
    pub fn to_markup(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "<div role=\"{}\" aria-label=\"{}\">\n",
            self.tablist.role.as_str(),
            escape(&self.tablist.aria_label)
        ));
        for tab in &self.tablist.tabs {
            out.push_str(&format!(
                "  <button id=\"{}\" role=\"{}\" aria-selected=\"{}\" aria-controls=\"{}\" tabindex=\"{}\" style=\"font-weight: {}\">{}</button>\n",
                tab.id,
                tab.role.as_str(),
                tab.aria_selected,
                tab.aria_controls,
                tab.tabindex.value(),
                tab.font_weight.as_str(),
                escape(&tab.label)
            ));
        }
        out.push_str("</div>\n");
        out.push_str(&format!(
            "<div id=\"{}\" role=\"{}\" aria-labelledby=\"{}\" tabindex=\"{}\">{}</div>\n",
            self.panel.id,
            self.panel.role.as_str(),
            self.panel.aria_labelledby,
            self.panel.tabindex.value(),
            escape(&self.panel.content)
        ));
        out
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            other => out.push(other),
        }
    }
    out
}

// ============================================================================
// TESTS
// ============================================================================
