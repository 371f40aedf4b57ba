//! The interactive read-key / recompute / redraw loop.
//!
//! [`Session`] owns the selection state machine: it starts in a typing state
//! and ends either with a window activation or a cancellation. The terminal
//! and the OS sit behind the [`KeySource`], [`RenderSink`] and
//! [`ActivationSink`] traits, so the whole loop is unit-testable with
//! scripted keys and synthetic candidates.

use ahash::AHashMap;

use crate::error::Result;
use crate::search::Ranking;
use crate::shortcut::shortcut_char;
use crate::types::{Candidate, IndexSet, WindowHandle};

/// Logical identity of a pressed key, already normalized by the key source
/// (e.g. Ctrl+`[` arrives as [`Key::Escape`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// A printable character.
    Char(char),
    Enter,
    Backspace,
    Escape,
}

/// One keystroke as delivered by a [`KeySource`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    /// Whether Alt was held — the shortcut-label selection path.
    pub alt: bool,
}

impl KeyEvent {
    pub fn plain(key: Key) -> Self {
        Self { key, alt: false }
    }

    pub fn alt(c: char) -> Self {
        Self {
            key: Key::Char(c),
            alt: true,
        }
    }
}

/// One line of the rendered display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRow {
    /// Combined text of the entry (file name + window title).
    pub text: String,
    /// Character offset where the title region begins.
    pub split_point: usize,
    /// Best alignment's character positions, for match highlighting.
    pub indices: IndexSet,
    /// Alt-selectable label for this row.
    pub shortcut: char,
}

/// Everything a render sink needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub query: String,
    pub rows: Vec<DisplayRow>,
}

/// Blocking source of normalized key events.
pub trait KeySource {
    fn next_key(&mut self) -> Result<KeyEvent>;
}

/// Consumer of display frames.
pub trait RenderSink {
    fn render(&mut self, frame: &Frame) -> Result<()>;
}

/// Brings a window to the foreground.
pub trait ActivationSink {
    fn activate(&self, handle: WindowHandle) -> Result<()>;
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A window was chosen and handed to the activation sink.
    Selected(WindowHandle),
    /// The user backed out; nothing was activated.
    Cancelled,
}

/// What one keystroke asks the loop to do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    /// No state change; keep reading keys without redrawing.
    Idle,
    /// The query changed and the ranking was recomputed; redraw.
    Redraw,
    Activate(WindowHandle),
    Cancel,
}

/// The typing-state session over a fixed candidate snapshot.
pub struct Session<'a> {
    candidates: &'a [Candidate],
    query: String,
    ranking: Ranking,
    /// Lazily computed shortcut labels; the label depends only on immutable
    /// entry text, so it is cached per handle for the whole session.
    shortcuts: AHashMap<WindowHandle, char>,
}

impl<'a> Session<'a> {
    pub fn new(candidates: &'a [Candidate]) -> Self {
        Self {
            candidates,
            query: String::new(),
            ranking: Ranking::rank(candidates, ""),
            shortcuts: AHashMap::new(),
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Drives the session to a terminal state: blocking key read, full
    /// synchronous recompute on every query change, one render before the
    /// next read.
    pub fn run(
        &mut self,
        keys: &mut dyn KeySource,
        screen: &mut dyn RenderSink,
        activation: &dyn ActivationSink,
    ) -> Result<Outcome> {
        screen.render(&self.frame())?;
        loop {
            let event = keys.next_key()?;
            match self.step(event) {
                Step::Idle => {}
                Step::Redraw => screen.render(&self.frame())?,
                Step::Activate(handle) => {
                    activation.activate(handle)?;
                    return Ok(Outcome::Selected(handle));
                }
                Step::Cancel => return Ok(Outcome::Cancelled),
            }
        }
    }

    /// Applies one keystroke to the state machine.
    fn step(&mut self, event: KeyEvent) -> Step {
        match event.key {
            // Escape cancels no matter which modifiers are held.
            Key::Escape => Step::Cancel,
            // Shortcut-label selection: never touches the query. Scan the
            // displayed entries in rank order for an exact (case-sensitive)
            // label match; a miss leaves the session untouched.
            Key::Char(label) if event.alt => {
                for entry in self.ranking.display() {
                    let candidate = &self.candidates[entry.candidate];
                    let shortcut = Self::shortcut_for(&mut self.shortcuts, candidate);
                    if shortcut == label {
                        tracing::debug!(label = %label, handle = ?candidate.handle, "shortcut selection");
                        return Step::Activate(candidate.handle);
                    }
                }
                Step::Idle
            }
            // Any other alt chord carries no label to scan for.
            _ if event.alt => Step::Idle,
            Key::Enter => match self.ranking.default_selection(self.candidates) {
                Some(handle) => Step::Activate(handle),
                // Nothing ranked above zero: Enter is a no-op, not an error.
                None => Step::Idle,
            },
            Key::Backspace => {
                if self.query.pop().is_some() {
                    self.requery()
                } else {
                    Step::Idle
                }
            }
            Key::Char(c) => {
                self.query.push(c);
                self.requery()
            }
        }
    }

    fn requery(&mut self) -> Step {
        tracing::trace!(query = %self.query, "recomputing ranking");
        self.ranking = Ranking::rank(self.candidates, &self.query);
        Step::Redraw
    }

    /// Builds the frame for the current query and ranking, warming the
    /// shortcut-label cache for every displayed entry.
    pub fn frame(&mut self) -> Frame {
        let mut rows = Vec::with_capacity(self.ranking.display().len());
        for entry in self.ranking.display() {
            let candidate = &self.candidates[entry.candidate];
            rows.push(DisplayRow {
                text: candidate.entry.combined_text(),
                split_point: candidate.entry.split_point(),
                indices: entry.indices.clone(),
                shortcut: Self::shortcut_for(&mut self.shortcuts, candidate),
            });
        }
        Frame {
            query: self.query.clone(),
            rows,
        }
    }

    /// Cached label lookup: the label depends only on immutable entry text,
    /// so it is computed once per handle and served from the cache after.
    fn shortcut_for(shortcuts: &mut AHashMap<WindowHandle, char>, candidate: &Candidate) -> char {
        *shortcuts
            .entry(candidate.handle)
            .or_insert_with(|| shortcut_char(&candidate.entry.combined_text()))
    }
}
