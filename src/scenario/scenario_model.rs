use serde::{Deserialize, Serialize};

use crate::action::action_model::RecordedAction;
use crate::action::fingerprint::stamp_fingerprint;
use crate::locator::bundle::ensure_locator_bundles;

/// A saved recording: an ordered sequence of interaction steps. Serialized
/// as YAML or JSON by the surrounding tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,

    #[serde(default)]
    pub actions: Vec<RecordedAction>,
}

impl Scenario {
    /// Heal a loaded scenario: stamp element fingerprints where signals
    /// allow, then attach locator bundles to every step that needs one.
    /// Recordings that predate the bundle schema come out fully bundled;
    /// already-bundled ones come out unchanged (the normalizer is
    /// idempotent and explicit primaries are sticky).
    pub fn with_bundles(&self) -> Scenario {
        let stamped: Vec<RecordedAction> = self.actions.iter().map(stamp_fingerprint).collect();

        Scenario {
            name: self.name.clone(),
            actions: ensure_locator_bundles(&stamped),
        }
    }
}
