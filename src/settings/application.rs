//! Contract of the hosting editor application that settings are applied to.

/// Workspace surface of the editor.
pub trait Workspace {
    /// Sets the redraw throttle interval in milliseconds.
    fn set_throttle(&self, milliseconds: i64);
}

/// Running editor application.
///
/// Implementations use interior mutability; the registry only holds a shared
/// handle.
pub trait EditorApplication: Send + Sync {
    /// Switches the active theme.
    fn set_theme(&self, theme: &str);

    /// Switches the UI language.
    fn set_language(&self, language: &str);

    /// Re-evaluates night mode. Called unconditionally on every apply.
    fn toggle_night_mode(&self);

    /// Gets the workspace.
    fn workspace(&self) -> &dyn Workspace;
}
