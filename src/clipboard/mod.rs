use anyhow::{Context, Result};
use arboard::Clipboard;

/// Longest link accepted for copying
const MAX_LINK_LEN: usize = 8 * 1024;

/// Trait for clipboard operations (allows mocking in tests)
trait ClipboardProvider {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// Real clipboard implementation using arboard
struct SystemClipboard {
    clipboard: Clipboard,
}

impl SystemClipboard {
    fn new() -> Result<Self> {
        let clipboard = Clipboard::new().context("Failed to initialize clipboard")?;
        Ok(Self { clipboard })
    }
}

impl ClipboardProvider for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        self.clipboard.set_text(text).context("Failed to set clipboard contents")?;
        Ok(())
    }
}

/// Checks that `link` looks like a record link before touching the clipboard
fn validate_link(link: &str) -> Result<()> {
    if link.is_empty() {
        anyhow::bail!("Cannot copy an empty link");
    }
    if link.len() > MAX_LINK_LEN {
        anyhow::bail!("Link too long ({} bytes, max {})", link.len(), MAX_LINK_LEN);
    }
    if !(link.starts_with("https://") || link.starts_with("http://")) {
        anyhow::bail!("Not a web link: {}", link);
    }
    if link.chars().any(|c| c.is_whitespace() || c.is_control()) {
        anyhow::bail!("Link contains whitespace or control characters");
    }
    Ok(())
}

#[cfg(test)]
fn copy_with_provider(link: &str, provider: &mut dyn ClipboardProvider) -> Result<()> {
    validate_link(link)?;
    provider.set_text(link)
}

/// Copy a meeting record link to the system clipboard.
///
/// # Errors
/// Returns error if:
/// - The link is empty, too long, not http(s), or contains whitespace
/// - The system clipboard is unavailable (headless session, no X11/Wayland)
/// - Clipboard access is denied
pub fn copy_link(link: &str) -> Result<()> {
    // Validate first so bad input reports a useful error even without a clipboard
    validate_link(link)?;

    let mut clipboard = SystemClipboard::new()?;
    clipboard.set_text(link)
}
