//! Inbound payload shapes decoded before validation.
//!
//! Every field is optional so that an absent key decodes cleanly and can be
//! reported by name instead of failing inside serde with a generic message.
//! Typed fields also read an explicit `null` as absent; the opaque task `log`
//! keeps it as a value.

pub mod project_draft;
pub mod rename_draft;
pub mod task_draft;
pub mod task_list_draft;
