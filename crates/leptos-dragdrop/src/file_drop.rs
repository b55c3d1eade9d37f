//! File Drop Helpers
//!
//! A "helper" element stands in for a file input: clicking it opens the
//! picker, dropping files on it fills the input, and a label inside it
//! shows the chosen file name.

use std::cell::Cell;

/// Prefix of the label text shown once a file is chosen
pub const LABEL_PREFIX: &str = "Selected: ";

/// Border and background colors of a helper, as CSS values
#[derive(Clone, Debug, PartialEq)]
pub struct HelperTheme {
    pub hover_border: String,
    pub hover_background: String,
    pub idle_border: String,
    pub idle_background: String,
}

impl Default for HelperTheme {
    fn default() -> Self {
        Self {
            hover_border: "var(--primary)".to_string(),
            hover_background: "var(--bg-tertiary)".to_string(),
            idle_border: "var(--border)".to_string(),
            idle_background: "var(--bg-primary)".to_string(),
        }
    }
}

/// Label text for a chosen file
pub fn label_text(file_name: &str) -> String {
    format!("{LABEL_PREFIX}{file_name}")
}

/// Files handed over by a drop or by the native picker
pub trait FileSelection {
    fn count(&self) -> u32;
    fn first_name(&self) -> Option<String>;
}

/// Anything that can be checked for a marker class
pub trait HelperCandidate {
    fn has_class(&self, class: &str) -> bool;
}

/// The sibling following a file input is its helper only when marked
pub fn pair_helper<E: HelperCandidate>(sibling: Option<E>, marker_class: &str) -> Option<E> {
    sibling.filter(|el| el.has_class(marker_class))
}

/// One (input, helper) pair as seen by the controller
pub trait HelperSurface {
    type Files: FileSelection;

    /// Open the input's native file picker
    fn open_picker(&self);

    fn paint(&self, border_color: &str, background: &str);

    /// Replace the input's file list
    fn assign_files(&self, files: &Self::Files);

    /// Set the label text; false when the helper has no label
    fn set_label(&self, text: &str) -> bool;
}

/// Controller for one (input, helper) pair
pub struct FileHelper<H: HelperSurface> {
    surface: H,
    theme: HelperTheme,
    hovering: Cell<bool>,
}

impl<H: HelperSurface> FileHelper<H> {
    pub fn new(surface: H, theme: HelperTheme) -> Self {
        Self {
            surface,
            theme,
            hovering: Cell::new(false),
        }
    }

    pub fn surface(&self) -> &H {
        &self.surface
    }

    pub fn is_hovering(&self) -> bool {
        self.hovering.get()
    }

    pub fn click(&self) {
        self.surface.open_picker();
    }

    pub fn drag_over(&self) {
        self.hovering.set(true);
        self.surface
            .paint(&self.theme.hover_border, &self.theme.hover_background);
    }

    pub fn drag_leave(&self) {
        self.reset();
    }

    /// Accept dropped files. Returns the name shown on the label.
    pub fn drop_files(&self, files: Option<&H::Files>) -> Option<String> {
        self.reset();
        let files = files.filter(|f| f.count() > 0)?;
        self.surface.assign_files(files);
        self.show_selection(files)
    }

    /// The input's own selection changed
    pub fn change(&self, files: Option<&H::Files>) -> Option<String> {
        let files = files.filter(|f| f.count() > 0)?;
        self.show_selection(files)
    }

    fn reset(&self) {
        self.hovering.set(false);
        self.surface
            .paint(&self.theme.idle_border, &self.theme.idle_background);
    }

    fn show_selection(&self, files: &H::Files) -> Option<String> {
        let name = files.first_name()?;
        if self.surface.set_label(&label_text(&name)) {
            log::debug!("file selected: {}", name);
        }
        Some(name)
    }
}
