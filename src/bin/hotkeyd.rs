//! Resident helper that registers the global Alt+Space hotkey and launches
//! the interactive matcher on every press.
//!
//! Pure OS glue: one registration, then a message loop. If another process
//! already owns the hotkey the helper stays resident without it rather than
//! crashing, so a later restart of the conflicting process does not strand
//! the user with a dead daemon.

#[cfg(windows)]
mod hotkey {
    use anyhow::Context;
    use windows_sys::Win32::UI::Input::KeyboardAndMouse::{MOD_ALT, RegisterHotKey, VK_SPACE};
    use windows_sys::Win32::UI::WindowsAndMessaging::{GetMessageW, MSG, WM_HOTKEY};

    const HOTKEY_ID: i32 = 9002;

    /// The binary the hotkey launches; resolved through PATH or the helper's
    /// own directory.
    const MATCHER: &str = "winhop.exe";

    pub(crate) fn run() -> anyhow::Result<()> {
        let registered = unsafe {
            RegisterHotKey(
                std::ptr::null_mut(),
                HOTKEY_ID,
                MOD_ALT,
                u32::from(VK_SPACE),
            )
        };
        if registered == 0 {
            tracing::warn!(
                error = %std::io::Error::last_os_error(),
                "Alt+Space is already claimed; staying resident without a hotkey"
            );
        } else {
            tracing::info!("registered global Alt+Space hotkey");
        }

        loop {
            let mut message = unsafe { std::mem::zeroed::<MSG>() };
            let status = unsafe { GetMessageW(&mut message, std::ptr::null_mut(), 0, 0) };
            if status <= 0 {
                // -1 is a message-loop failure, 0 is WM_QUIT.
                return if status < 0 {
                    Err(std::io::Error::last_os_error()).context("hotkey message loop failed")
                } else {
                    Ok(())
                };
            }
            if message.message == WM_HOTKEY && message.wParam == HOTKEY_ID as usize {
                launch_matcher();
            }
        }
    }

    fn launch_matcher() {
        match std::process::Command::new(MATCHER).spawn() {
            Ok(child) => tracing::debug!(pid = child.id(), "launched matcher"),
            Err(e) => tracing::error!(error = %e, "failed to launch {MATCHER}"),
        }
    }
}

#[cfg(windows)]
fn main() -> anyhow::Result<()> {
    winhop::tracing::init();
    hotkey::run()
}

#[cfg(not(windows))]
fn main() -> anyhow::Result<()> {
    anyhow::bail!("global hotkey registration is only supported on Windows")
}
