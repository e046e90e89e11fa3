// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Actions revealed behind a row.

use alloc::string::String;

/// What happens to the row after an action's handler runs.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Disposition {
    /// Leave the row as it is.
    Nothing,
    /// Animate the row back to center.
    #[default]
    Close,
    /// Report the row as deleted and collapse it.
    Delete,
}

/// Visual weight of an action, passed through to the host's renderer.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ActionStyle {
    /// Regular action.
    #[default]
    Default,
    /// Destructive action, typically drawn in a warning color.
    Destructive,
}

/// One action button's description.
///
/// `id` is the application's handle for the action; the delegate's
/// [`handle_action`](crate::SwipeDelegate::handle_action) receives the whole
/// action when it is selected.
#[derive(Clone, Debug, PartialEq)]
pub struct SwipeAction<A> {
    /// Application handle.
    pub id: A,
    /// Button title.
    pub title: Option<String>,
    /// Icon name, resolved by the host.
    pub icon: Option<String>,
    /// Visual weight.
    pub style: ActionStyle,
    /// Post-selection behavior.
    pub disposition: Disposition,
    /// Label read by assistive technology; defaults to the title.
    pub accessibility_label: Option<String>,
    /// Width the host measured for the title and icon.
    pub preferred_width: Option<f64>,
}

impl<A> SwipeAction<A> {
    /// Creates a titled action that closes the row when selected.
    #[must_use]
    pub fn new(id: A, title: impl Into<String>) -> Self {
        Self {
            id,
            title: Some(title.into()),
            icon: None,
            style: ActionStyle::Default,
            disposition: Disposition::Close,
            accessibility_label: None,
            preferred_width: None,
        }
    }

    /// Creates a destructive action that deletes the row when selected.
    #[must_use]
    pub fn destructive(id: A, title: impl Into<String>) -> Self {
        Self {
            style: ActionStyle::Destructive,
            disposition: Disposition::Delete,
            ..Self::new(id, title)
        }
    }

    /// Sets the icon name.
    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Sets the disposition.
    #[must_use]
    pub fn with_disposition(mut self, disposition: Disposition) -> Self {
        self.disposition = disposition;
        self
    }

    /// Sets the accessibility label.
    #[must_use]
    pub fn with_accessibility_label(mut self, label: impl Into<String>) -> Self {
        self.accessibility_label = Some(label.into());
        self
    }

    /// Sets the measured preferred width.
    #[must_use]
    pub fn with_preferred_width(mut self, width: f64) -> Self {
        self.preferred_width = Some(width);
        self
    }

    /// Label for assistive technology: the explicit label, else the title.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.accessibility_label
            .as_deref()
            .or(self.title.as_deref())
    }
}
