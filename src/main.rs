use winhop::platform;
use winhop::platform::terminal::{RawModeGuard, TerminalInput, TerminalScreen};
use winhop::session::{Outcome, Session};
use winhop::snapshot::build_candidates;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    winhop::tracing::init();

    let backends = platform::native()?;

    println!("Start typing to search for windows to switch to");
    let candidates = build_candidates(backends.windows.as_ref(), backends.resolver).await?;
    tracing::info!(candidates = candidates.len(), "starting interactive session");

    let _guard = RawModeGuard::new()?;
    let mut keys = TerminalInput;
    let mut screen = TerminalScreen::new();
    let mut session = Session::new(&candidates);

    match session.run(&mut keys, &mut screen, backends.activation.as_ref())? {
        Outcome::Selected(handle) => tracing::debug!(?handle, "window activated"),
        Outcome::Cancelled => tracing::debug!("session cancelled"),
    }
    Ok(())
}
