//! Drill-down selection for the project, skill and event lists.
//!
//! Each list expands at most one item. Selecting the expanded item again
//! collapses it.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PanelKind {
    Project,
    Skill,
    Event,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct DrillDown {
    expanded: Option<String>,
}

impl DrillDown {
    /// Expand `name`, or collapse it if it is already expanded.
    /// Returns whether `name` is expanded afterwards.
    pub fn toggle(&mut self, name: &str) -> bool {
        if self.expanded.as_deref() == Some(name) {
            self.expanded = None;
            false
        } else {
            self.expanded = Some(name.to_string());
            true
        }
    }

    pub fn expanded(&self) -> Option<&str> {
        self.expanded.as_deref()
    }

    pub fn collapse(&mut self) {
        self.expanded = None;
    }
}

#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct DrillDownPanels {
    pub projects: DrillDown,
    pub skills: DrillDown,
    pub events: DrillDown,
}

impl DrillDownPanels {
    pub fn panel(&self, kind: PanelKind) -> &DrillDown {
        match kind {
            PanelKind::Project => &self.projects,
            PanelKind::Skill => &self.skills,
            PanelKind::Event => &self.events,
        }
    }

    pub fn toggle(&mut self, kind: PanelKind, name: &str) -> bool {
        let panel = match kind {
            PanelKind::Project => &mut self.projects,
            PanelKind::Skill => &mut self.skills,
            PanelKind::Event => &mut self.events,
        };
        panel.toggle(name)
    }

    pub fn collapse_all(&mut self) {
        self.projects.collapse();
        self.skills.collapse();
        self.events.collapse();
    }
}
