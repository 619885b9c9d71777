use std::backtrace::Backtrace;

use sha2::{Digest, Sha256};

use crate::clipboard::Clipboard;
use crate::config::CLOUD_DRIVE_CONFIG;
use crate::model::api::ShareLinkApi;
use crate::model::error::share_errors::{CopyShareLinkError, GetShareError};
use crate::model::repository::ShareLink;
use crate::model::response::Notification;
use crate::repository::CatalogRepository;
use crate::service::file_service;

/// the url handed out for a file, e.g. `https://clouddrive.app/s/1`. Purely a
/// function of the file id, so the same file always gets the same link
pub fn build_share_link(file_id: &str) -> String {
    format!("{}/s/{file_id}", CLOUD_DRIVE_CONFIG.share.host)
}

/// the share record the dialog shows for an existing file
pub fn get_share_link(
    catalog: &impl CatalogRepository,
    file_id: &str,
) -> Result<ShareLinkApi, GetShareError> {
    let file =
        file_service::get_file(catalog, file_id).map_err(|_| GetShareError::FileNotFound)?;
    let link = ShareLink {
        id: format!("share-{}", file.id),
        file_id: file.id.clone(),
        token: share_token(&file.id),
        expires_at: None,
        password: None,
        downloads: 0,
        max_downloads: None,
    };
    Ok(ShareLinkApi::from_with_url(link, build_share_link(&file.id)))
}

/// puts the file's share link on the clipboard. This doesn't check the file
/// exists; the link template covers any id
pub fn copy_share_link(
    file_id: &str,
    clipboard: &impl Clipboard,
) -> Result<Notification, CopyShareLinkError> {
    let link = build_share_link(file_id);
    if let Err(e) = clipboard.write_text(&link) {
        log::error!(
            "Failed to copy share link to the clipboard. Error is {e:?}\n{}",
            Backtrace::force_capture()
        );
        return Err(CopyShareLinkError::ClipboardDenied);
    }
    Ok(Notification::success("Share link copied to clipboard!"))
}

/// an opaque token derived from the file id, for clients that want something
/// that doesn't look like a raw id
fn share_token(file_id: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(file_id.as_bytes());
    format!("{:x}", hasher.finalize())
}



#[cfg(test)]
mod copy_share_link_tests {
    use crate::clipboard::SimulatedClipboard;
    use crate::model::error::share_errors::CopyShareLinkError;
    use crate::model::response::NotificationLevel;

    use super::copy_share_link;

    #[test]
    fn writes_the_link_and_reports_success() {
        let clipboard = SimulatedClipboard::new();
        let notification = copy_share_link("1", &clipboard).unwrap();
        assert_eq!(NotificationLevel::Success, notification.level);
        assert_eq!("Share link copied to clipboard!", notification.message);
        assert_eq!(
            Some("https://clouddrive.app/s/1".to_string()),
            clipboard.read()
        );
    }

    #[test]
    fn copies_even_for_an_id_the_catalog_does_not_know() {
        let clipboard = SimulatedClipboard::new();
        copy_share_link("does-not-exist", &clipboard).unwrap();
        assert_eq!(
            Some("https://clouddrive.app/s/does-not-exist".to_string()),
            clipboard.read()
        );
    }

    #[test]
    fn denial_leaves_the_clipboard_untouched() {
        let clipboard = SimulatedClipboard::denying();
        let err = copy_share_link("1", &clipboard).unwrap_err();
        assert_eq!(CopyShareLinkError::ClipboardDenied, err);
        assert_eq!(None, clipboard.read());
    }
}
