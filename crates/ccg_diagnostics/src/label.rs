//! Labels that annotate locations within a diagnostic.

use ccg_source::Location;
use serde::{Deserialize, Serialize};

/// Whether a label marks the main location or supporting context.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelStyle {
    /// Underlined with `^` under the primary location.
    Primary,
    /// Context shown as a note-style line.
    Secondary,
}

/// A message attached to a location.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    /// The location this label annotates.
    pub location: Location,
    /// Text shown next to the underline.
    pub message: String,
    /// Primary or secondary.
    pub style: LabelStyle,
}

impl Label {
    /// Creates a primary label.
    pub fn primary(location: Location, message: impl Into<String>) -> Self {
        Self {
            location,
            message: message.into(),
            style: LabelStyle::Primary,
        }
    }

    /// Creates a secondary label.
    pub fn secondary(location: Location, message: impl Into<String>) -> Self {
        Self {
            location,
            message: message.into(),
            style: LabelStyle::Secondary,
        }
    }
}
