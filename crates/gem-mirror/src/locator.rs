/// Normalize a configured source locator into a joinable base string.
///
/// - HTTP(S) URLs and bare host/path strings pass through untouched.
/// - `file:` locators are reduced to plain filesystem paths. Drive-letter
///   forms (`file:/D:/repo`, `file://D:/repo`) keep the drive letter;
///   ordinary `file:///var/repo` becomes `/var/repo`.
///
/// Trailing slashes are trimmed so callers can join path segments uniformly.
pub fn normalize(raw: &str) -> String {
    let trimmed = raw.trim_end_matches('/');

    let Some(rest) = trimmed.strip_prefix("file:") else {
        return trimmed.to_owned();
    };

    if let Some(drive) = strip_to_drive_letter(rest) {
        return drive.to_owned();
    }

    // file:///abs/path keeps a single leading slash.
    rest.strip_prefix("//").unwrap_or(rest).to_owned()
}

/// If `rest` is slashes followed by a drive letter (`/D:/...`), return the
/// path from the drive letter onward.
fn strip_to_drive_letter(rest: &str) -> Option<&str> {
    let after_slashes = rest.trim_start_matches('/');
    let mut chars = after_slashes.chars();
    let letter = chars.next()?;
    if letter.is_ascii_alphabetic() && chars.next() == Some(':') {
        Some(after_slashes)
    } else {
        None
    }
}
