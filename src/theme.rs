//! Theme resolution and persistence.
//!
//! The page carries exactly one persisted user preference: the theme. An
//! explicit choice (stored through [`ThemeStore`]) always beats the system
//! preference, and live system-preference changes are followed only while
//! no explicit choice exists.

/// The two page themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Theme {
    /// Light theme.
    Light,
    /// Dark theme.
    Dark,
}

impl Theme {
    /// Storage name for this theme.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a storage name. Unknown names yield `None` (treated as no
    /// stored preference).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// The other theme.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Applies a resolved theme to the page.
pub trait ThemeSink {
    /// Restyle the page for `theme`.
    fn apply_theme(&mut self, theme: Theme);
}

/// Key→string store holding the single persisted preference.
///
/// Storage failures are the implementation's concern; the controller
/// treats the store as infallible and degrades silently.
pub trait ThemeStore {
    /// The explicitly stored preference, if any.
    fn load(&self) -> Option<Theme>;

    /// Persist an explicit preference.
    fn save(&mut self, theme: Theme);
}

/// Resolves and applies the active theme.
#[derive(Debug, Clone, Copy)]
pub struct ThemeController {
    /// The user's explicit choice, if one was ever made.
    explicit: Option<Theme>,
    current: Theme,
}

impl ThemeController {
    /// Resolve the startup theme (stored preference, else `system`) and
    /// apply it.
    pub fn initialize<H: ThemeSink, S: ThemeStore>(
        host: &mut H,
        store: &S,
        system: Theme,
    ) -> Self {
        let explicit = store.load();
        let current = explicit.unwrap_or(system);
        host.apply_theme(current);
        Self { explicit, current }
    }

    /// The currently applied theme.
    #[must_use]
    pub fn current(&self) -> Theme {
        self.current
    }

    /// Whether the user has made an explicit choice.
    #[must_use]
    pub fn has_explicit_choice(&self) -> bool {
        self.explicit.is_some()
    }

    /// Record an explicit choice: apply and persist it.
    pub fn set_explicit<H: ThemeSink, S: ThemeStore>(
        &mut self,
        host: &mut H,
        store: &mut S,
        theme: Theme,
    ) {
        self.explicit = Some(theme);
        self.current = theme;
        store.save(theme);
        host.apply_theme(theme);
        log::debug!("theme set explicitly: {}", theme.as_str());
    }

    /// Flip to the other theme as an explicit choice.
    pub fn toggle<H: ThemeSink, S: ThemeStore>(
        &mut self,
        host: &mut H,
        store: &mut S,
    ) {
        self.set_explicit(host, store, self.current.opposite());
    }

    /// The system preference changed. Followed only while the user has
    /// not chosen explicitly.
    pub fn on_system_change<H: ThemeSink>(
        &mut self,
        host: &mut H,
        system: Theme,
    ) {
        if self.explicit.is_some() {
            return;
        }
        self.current = system;
        host.apply_theme(system);
    }
}
