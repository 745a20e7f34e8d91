//! Shared control, overlay, and layout primitives.

use leptos::ev::MouseEvent;
use leptos::*;

mod controls;
mod layout;
mod overlays;

pub use controls::{Button, CheckboxInput, FieldError, FieldRow, SelectInput, TextInput};
pub use layout::{Cluster, Stack};
pub use overlays::ConfirmationModal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Semantic button variants.
pub enum ButtonVariant {
    /// Emphasized call-to-action button.
    Primary,
    /// Low-emphasis button.
    Quiet,
}

impl Default for ButtonVariant {
    fn default() -> Self {
        Self::Primary
    }
}

impl ButtonVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Quiet => "quiet",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Spacing steps for layout primitives.
pub enum LayoutGap {
    /// Tight spacing.
    Sm,
    /// Default spacing.
    Md,
    /// Generous spacing.
    Lg,
}

impl Default for LayoutGap {
    fn default() -> Self {
        Self::Md
    }
}

impl LayoutGap {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

pub(crate) fn merge_layout_class(base: &'static str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base.to_string(),
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}
