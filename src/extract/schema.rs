//! Extracted step configuration record
//!
//! This is the wire shape delivered to the parent orchestrator: one JSON
//! object per invocation, keys always present, absent sequences encoded as
//! `null` rather than `[]`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A step's configuration as declared in its source file.
///
/// Produced once per invocation by the locator and serialized once by the
/// channel emitter. The `null` vs `[]` distinction on the sequence fields is
/// meaningful to consumers: `None` means the field was absent or not a
/// literal sequence, `Some(vec![])` means an explicitly empty one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StepConfig {
    /// Human-readable step name
    pub name: String,
    /// Trigger names this step reacts to, in source order
    pub subscribes: Option<Vec<String>>,
    /// Event names this step may produce, in source order
    pub emits: Option<Vec<String>>,
    /// Input schema expression; never evaluated statically, always null
    pub input: Value,
    /// Named flows this step participates in, in source order
    pub flows: Option<Vec<String>>,
}
