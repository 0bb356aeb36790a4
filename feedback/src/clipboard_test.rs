use std::cell::RefCell;

use futures::executor::block_on;

use super::*;

/// Scripted backend recording which paths were used.
struct FakeClipboard {
    primary: Result<(), ClipboardError>,
    fallback: Result<(), ClipboardError>,
    calls: RefCell<Vec<(CopyPath, String)>>,
}

impl FakeClipboard {
    fn new(primary: Result<(), ClipboardError>, fallback: Result<(), ClipboardError>) -> Self {
        Self { primary, fallback, calls: RefCell::new(Vec::new()) }
    }

    fn paths(&self) -> Vec<CopyPath> {
        self.calls.borrow().iter().map(|(p, _)| *p).collect()
    }
}

impl ClipboardBackend for FakeClipboard {
    async fn write_primary(&self, text: &str) -> Result<(), ClipboardError> {
        self.calls.borrow_mut().push((CopyPath::Primary, text.to_owned()));
        self.primary.clone()
    }

    fn write_fallback(&self, text: &str) -> Result<(), ClipboardError> {
        self.calls.borrow_mut().push((CopyPath::Fallback, text.to_owned()));
        self.fallback.clone()
    }
}

#[test]
fn primary_success_skips_fallback() {
    let clip = FakeClipboard::new(Ok(()), Ok(()));
    let outcome = block_on(copy_text(&clip, "-----BEGIN PUBLIC KEY-----"));
    assert_eq!(outcome, CopyOutcome::Copied(CopyPath::Primary));
    assert_eq!(clip.paths(), vec![CopyPath::Primary]);
    assert_eq!(outcome.message(), "Copied to clipboard!");
    assert_eq!(outcome.severity(), Severity::Success);
}

#[test]
fn primary_rejection_falls_back_silently() {
    let clip = FakeClipboard::new(Err(ClipboardError::Rejected("NotAllowedError".to_owned())), Ok(()));
    let outcome = block_on(copy_text(&clip, "secret"));
    assert_eq!(outcome, CopyOutcome::Copied(CopyPath::Fallback));
    assert_eq!(clip.paths(), vec![CopyPath::Primary, CopyPath::Fallback]);
    assert_eq!(outcome.severity(), Severity::Success);
}

#[test]
fn missing_primary_uses_fallback() {
    let clip = FakeClipboard::new(Err(ClipboardError::Unavailable), Ok(()));
    assert_eq!(block_on(copy_text(&clip, "x")), CopyOutcome::Copied(CopyPath::Fallback));
}

#[test]
fn fallback_failure_is_reported_as_warning() {
    let err = ClipboardError::CommandFailed("execCommand returned false".to_owned());
    let clip = FakeClipboard::new(Err(ClipboardError::Unavailable), Err(err.clone()));
    let outcome = block_on(copy_text(&clip, "x"));
    assert_eq!(outcome, CopyOutcome::Failed(err));
    assert_eq!(outcome.severity(), Severity::Warning);
    assert_eq!(outcome.message(), "Failed to copy to clipboard. Please copy manually.");
}

#[test]
fn both_paths_receive_the_same_text() {
    let clip = FakeClipboard::new(Err(ClipboardError::Unavailable), Ok(()));
    block_on(copy_text(&clip, "ciphertext=="));
    let texts: Vec<_> = clip.calls.borrow().iter().map(|(_, t)| t.clone()).collect();
    assert_eq!(texts, vec!["ciphertext==".to_owned(), "ciphertext==".to_owned()]);
}

#[test]
fn error_messages_are_descriptive() {
    assert_eq!(ClipboardError::Unavailable.to_string(), "clipboard API unavailable");
    assert_eq!(ClipboardError::Rejected("denied".to_owned()).to_string(), "clipboard write rejected: denied");
}
