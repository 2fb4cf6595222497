//! Theme preference repository.
//!
//! # Responsibility
//! - Read and write the single `theme` key in the preference slot.
//! - Apply the default-to-light fallback for absent or unrecognized values.
//!
//! # Invariants
//! - Last write wins; there is no versioning and no other key coupling.
//! - `load_theme` never fails on bad stored text; it falls back and logs.

use crate::model::view::Theme;
use crate::prefs::PrefsResult;
use log::{info, warn};
use rusqlite::{params, Connection, OptionalExtension};

const THEME_KEY: &str = "theme";

/// Repository interface for the theme preference.
pub trait ThemeRepository {
    /// Loads the persisted theme, defaulting to [`Theme::Light`] when the
    /// key is absent or holds unrecognized text.
    fn load_theme(&self) -> PrefsResult<Theme>;

    /// Persists the theme, replacing any previous value.
    fn save_theme(&self, theme: Theme) -> PrefsResult<()>;

    /// Loads, flips and persists the theme, returning the new value.
    fn toggle_theme(&self) -> PrefsResult<Theme> {
        let next = self.load_theme()?.toggled();
        self.save_theme(next)?;
        Ok(next)
    }
}

/// SQLite-backed theme repository.
pub struct SqliteThemeRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteThemeRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl ThemeRepository for SqliteThemeRepository<'_> {
    fn load_theme(&self) -> PrefsResult<Theme> {
        let stored: Option<String> = self
            .conn
            .query_row(
                "SELECT value FROM preferences WHERE key = ?1;",
                params![THEME_KEY],
                |row| row.get(0),
            )
            .optional()?;

        let Some(raw) = stored else {
            return Ok(Theme::Light);
        };
        match Theme::parse(&raw) {
            Some(theme) => Ok(theme),
            None => {
                warn!(
                    "event=theme_load module=prefs status=fallback stored=`{raw}` applied=light"
                );
                Ok(Theme::Light)
            }
        }
    }

    fn save_theme(&self, theme: Theme) -> PrefsResult<()> {
        self.conn.execute(
            "INSERT INTO preferences (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value;",
            params![THEME_KEY, theme.as_str()],
        )?;
        info!(
            "event=theme_save module=prefs status=ok theme={}",
            theme.as_str()
        );
        Ok(())
    }
}
