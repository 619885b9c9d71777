use std::sync::Mutex;

#[derive(PartialEq, Debug)]
pub enum ClipboardError {
    /// the environment refused clipboard access
    AccessDenied,
}

/// where copied share links end up. The server has no real system clipboard,
/// so the only implementation outside of tests is [`SimulatedClipboard`]
pub trait Clipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// an in-memory stand-in for a system clipboard. Holds the last written text
/// and can be constructed in a denying mode to exercise failure paths
pub struct SimulatedClipboard {
    contents: Mutex<Option<String>>,
    deny_access: bool,
}

impl SimulatedClipboard {
    pub fn new() -> Self {
        Self {
            contents: Mutex::new(None),
            deny_access: false,
        }
    }

    /// a clipboard that rejects every write, the way a browser does when the
    /// user has not granted clipboard permission
    pub fn denying() -> Self {
        Self {
            contents: Mutex::new(None),
            deny_access: true,
        }
    }

    /// the most recently written text, if anything has been written
    pub fn read(&self) -> Option<String> {
        crate::util::lock_mutex(&self.contents, "clipboard").clone()
    }
}

impl Clipboard for SimulatedClipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        if self.deny_access {
            return Err(ClipboardError::AccessDenied);
        }
        let mut contents = crate::util::lock_mutex(&self.contents, "clipboard");
        *contents = Some(text.to_string());
        Ok(())
    }
}

impl Default for SimulatedClipboard {
    fn default() -> Self {
        Self::new()
    }
}
