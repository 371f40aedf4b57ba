//! Platform backends behind the capability traits.
//!
//! The engine itself has no platform dependency; everything OS-specific
//! lives here. [`native`] wires up whatever the host supports.

pub mod terminal;
#[cfg(windows)]
pub mod win32;

use std::sync::Arc;

use crate::error::Result;
use crate::session::ActivationSink;
use crate::snapshot::{ProcessResolver, WindowSource};

/// The host's window backends, resolved at startup.
pub struct NativePlatform {
    pub windows: Box<dyn WindowSource>,
    pub resolver: Arc<dyn ProcessResolver>,
    pub activation: Box<dyn ActivationSink>,
}

/// Selects the native window backends for this host.
#[cfg(windows)]
pub fn native() -> Result<NativePlatform> {
    Ok(NativePlatform {
        windows: Box::new(win32::Win32WindowSource),
        resolver: Arc::new(win32::Win32ProcessResolver),
        activation: Box::new(win32::Win32ActivationSink),
    })
}

/// Selects the native window backends for this host.
#[cfg(not(windows))]
pub fn native() -> Result<NativePlatform> {
    Err(crate::error::PlatformError::Unsupported.into())
}
