//! One-time candidate snapshot taken at startup.
//!
//! Window titles come from a single [`WindowSource`] pass; each window's
//! owning executable is then resolved with bounded parallel fan-out, since
//! that is one blocking OS call per window. Once the snapshot is built the
//! candidate list is immutable for the rest of the session.

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Context;
use futures::StreamExt;

use crate::error::Result;
use crate::types::{Candidate, Entry, WindowHandle};

/// Upper bound on concurrent executable-name resolutions.
const MAX_RESOLVER_WORKERS: usize = 4;

/// Yields one snapshot of currently visible top-level windows.
///
/// A hard failure here aborts startup — without windows there are no
/// candidates to rank.
pub trait WindowSource {
    fn open_windows(&self) -> Result<Vec<(WindowHandle, String)>>;
}

/// Resolves the file name (without extension) of a window's owning
/// executable.
///
/// Never fails: permission-denied or already-gone processes come back as an
/// empty string and the candidate is ranked on its title alone.
pub trait ProcessResolver: Send + Sync {
    fn executable_name(&self, handle: WindowHandle) -> String;
}

/// Builds the session's candidate list.
///
/// Executable names are resolved on blocking worker tasks, at most
/// `min(available_parallelism, 4)` in flight. The stream is ordered, so each
/// worker fills its own slot and the snapshot keeps the enumeration order —
/// which is what makes equal-score ranking deterministic later. Windows owned
/// by the switcher's own executable are dropped.
pub async fn build_candidates(
    source: &dyn WindowSource,
    resolver: Arc<dyn ProcessResolver>,
) -> Result<Vec<Candidate>> {
    let start = Instant::now();
    let windows = source
        .open_windows()
        .context("failed to snapshot open windows")?;
    let window_count = windows.len();

    let workers = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
        .min(MAX_RESOLVER_WORKERS);

    let resolved: Vec<Candidate> = futures::stream::iter(windows)
        .map(|(handle, title)| {
            let resolver = Arc::clone(&resolver);
            tokio::task::spawn_blocking(move || {
                let file_name = resolver.executable_name(handle);
                if file_name.is_empty() {
                    tracing::debug!(?handle, "owning process not inspectable; ranking on title only");
                }
                Candidate::new(handle, Entry::new(file_name, title))
            })
        })
        .buffered(workers)
        .map(|joined| joined.context("executable resolver worker panicked"))
        .collect::<Vec<_>>()
        .await
        .into_iter()
        .collect::<Result<_>>()?;

    let own_name = own_executable_name();
    let candidates: Vec<Candidate> = resolved
        .into_iter()
        .filter(|candidate| {
            own_name
                .as_deref()
                .is_none_or(|own| candidate.entry.file_name() != own)
        })
        .collect();

    tracing::info!(
        windows = window_count,
        candidates = candidates.len(),
        workers,
        elapsed = ?start.elapsed(),
        "candidate snapshot built"
    );
    Ok(candidates)
}

/// File stem of the running executable, used to keep the switcher's own
/// window out of its candidate list.
fn own_executable_name() -> Option<String> {
    let exe = std::env::current_exe().ok()?;
    Path::new(&exe)
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
}
