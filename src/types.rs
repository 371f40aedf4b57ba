//! Core data model: window candidates and match index sets.

/// Opaque OS-level window identifier.
///
/// The engine never inspects the value; it only has to hand it back to the
/// activation sink unchanged. On Win32 this is the `HWND` widened to 64 bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowHandle(pub u64);

/// One way a query matches as an in-order subsequence of an entry's combined
/// text: strictly increasing character positions, one per query character.
pub type IndexSet = Vec<usize>;

/// The searchable text of one window: owning executable name plus title.
///
/// Immutable after construction. All matching runs against
/// [`combined_text`](Entry::combined_text); [`split_point`](Entry::split_point)
/// marks where the executable-name region ends and the title region begins,
/// which the score model uses to weight matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    file_name: String,
    window_title: String,
}

impl Entry {
    pub fn new(file_name: impl Into<String>, window_title: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            window_title: window_title.into(),
        }
    }

    /// File name (without extension) of the owning executable. Empty when the
    /// owning process could not be inspected.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn window_title(&self) -> &str {
        &self.window_title
    }

    /// The substrate the matcher searches: file name followed by title.
    pub fn combined_text(&self) -> String {
        format!("{}{}", self.file_name, self.window_title)
    }

    /// Character offset separating the file-name region from the title region
    /// within the combined text. Index sets index characters, not bytes.
    pub fn split_point(&self) -> usize {
        self.file_name.chars().count()
    }
}

/// One switchable window: its searchable text plus the handle needed to
/// activate it. Built once from the startup snapshot, never mutated.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub handle: WindowHandle,
    pub entry: Entry,
}

impl Candidate {
    pub fn new(handle: WindowHandle, entry: Entry) -> Self {
        Self { handle, entry }
    }
}
