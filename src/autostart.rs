//! # Autostart Module
//!
//! Per-user login autostart registration.
//!
//! On Windows this writes a `HKEY_CURRENT_USER\...\Run` value pointing at the
//! running executable; on other platforms both operations are no-ops so the
//! settings dialog still works in development builds.
//!
//! Failures are surfaced to the caller as non-fatal errors: the settings
//! dialog shows the message and reverts the toggle.

use anyhow::Result;

/// Registry value / entry name used for the autostart registration
pub const APP_NAME: &str = "MiniCalendar";

#[cfg(windows)]
mod imp {
    use super::APP_NAME;
    use anyhow::{Context, Result};
    use winreg::enums::{HKEY_CURRENT_USER, KEY_READ, KEY_SET_VALUE};
    use winreg::RegKey;

    const RUN_KEY: &str = r"Software\Microsoft\Windows\CurrentVersion\Run";

    pub fn is_enabled() -> bool {
        RegKey::predef(HKEY_CURRENT_USER)
            .open_subkey_with_flags(RUN_KEY, KEY_READ)
            .and_then(|key| key.get_value::<String, _>(APP_NAME))
            .is_ok()
    }

    pub fn set_enabled(enable: bool) -> Result<()> {
        let key = RegKey::predef(HKEY_CURRENT_USER)
            .open_subkey_with_flags(RUN_KEY, KEY_SET_VALUE)
            .context("opening autostart registry key")?;

        if enable {
            let exe = std::env::current_exe().context("resolving executable path")?;
            let command = format!("\"{}\"", exe.display());
            key.set_value(APP_NAME, &command)
                .context("writing autostart registry value")?;
        } else {
            match key.delete_value(APP_NAME) {
                Ok(()) => {}
                // Already absent: nothing to remove
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => return Err(e).context("removing autostart registry value"),
            }
        }
        Ok(())
    }
}

#[cfg(not(windows))]
mod imp {
    use anyhow::Result;

    pub fn is_enabled() -> bool {
        false
    }

    pub fn set_enabled(_enable: bool) -> Result<()> {
        log::warn!("⚠️ Autostart registration is only supported on Windows");
        Ok(())
    }
}

/// Return true if the autostart entry currently exists
pub fn is_enabled() -> bool {
    imp::is_enabled()
}

/// Create or remove the autostart entry for the current user
pub fn set_enabled(enable: bool) -> Result<()> {
    imp::set_enabled(enable)
}
