//! Active-section tracking for the display view.

use std::collections::BTreeSet;

const DEFAULT_SECTION: &str = "experience";

/// Tracks which on-page section anchor is active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionNavigator {
    anchors: BTreeSet<String>,
    active: String,
}

impl SectionNavigator {
    /// Creates a navigator over the rendered anchor ids.
    ///
    /// A non-empty URL fragment (with or without `#`) becomes the initial
    /// active section; otherwise `experience` is active.
    pub fn new<I, A>(anchors: I, fragment: Option<&str>) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<String>,
    {
        let active = fragment
            .map(|value| value.trim_start_matches('#'))
            .filter(|value| !value.is_empty())
            .unwrap_or(DEFAULT_SECTION)
            .to_string();
        Self {
            anchors: anchors.into_iter().map(Into::into).collect(),
            active,
        }
    }

    pub fn active_section(&self) -> &str {
        &self.active
    }

    pub fn has_anchor(&self, section_id: &str) -> bool {
        self.anchors.contains(section_id)
    }

    /// Marks the anchor for `section_id` active, matching case-insensitively.
    ///
    /// Returns `false` and leaves state untouched when no such anchor exists.
    pub fn scroll_to(&mut self, section_id: &str) -> bool {
        let target = section_id.to_lowercase();
        if target.is_empty() || !self.anchors.contains(&target) {
            return false;
        }
        self.active = target;
        true
    }
}
