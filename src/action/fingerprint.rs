use crate::action::action_model::{non_empty, RecordedAction};

/// Compute a stable element fingerprint from the signals captured at record
/// time. Returns None when no signal is present (nothing to fingerprint).
///
/// The fingerprint identifies "the same logical element" across recordings,
/// independent of which locator strategy currently resolves it, so it hashes
/// all identity signals together rather than privileging one.
pub fn element_fingerprint(action: &RecordedAction) -> Option<String> {
    let class = non_empty(action.element_class.as_ref());
    let id = non_empty(action.element_id.as_ref());
    let desc = non_empty(action.element_content_desc.as_ref());
    let text = non_empty(action.element_text.as_ref());

    if class.is_none() && id.is_none() && desc.is_none() && text.is_none() {
        return None;
    }

    let material = format!(
        "{}|{}|{}|{}",
        class.unwrap_or(""),
        id.unwrap_or(""),
        desc.unwrap_or(""),
        text.unwrap_or("")
    );

    Some(digest(&material))
}

/// Stamp `elementFingerprint` on an action that lacks one, so the bundle
/// fingerprint chain has something better than the `"{type}:{id}"` fallback.
/// Actions with no element signals pass through unchanged.
pub fn stamp_fingerprint(action: &RecordedAction) -> RecordedAction {
    if non_empty(action.element_fingerprint.as_ref()).is_some() {
        return action.clone();
    }

    match element_fingerprint(action) {
        Some(fp) => {
            let mut stamped = action.clone();
            stamped.element_fingerprint = Some(fp);
            stamped
        }
        None => action.clone(),
    }
}

fn digest(text: &str) -> String {
    use sha1::{Digest, Sha1};

    let mut hasher = Sha1::new();
    hasher.update(text.as_bytes());
    format!("{:x}", hasher.finalize())
}
