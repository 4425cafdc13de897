//! Debugging feature flags.
//!
//! Toggle individual diagnostics here; keep them `false` by default so release
//! builds remain quiet. Every check is further gated by `cfg(debug_assertions)`.

pub struct DebugFlags {
    /// Emit a log line whenever a backend request is started or completes.
    pub print_requests: bool,
    /// Emit UI interaction logs (e.g., page switches, model selection, submit).
    pub print_ui_interactions: bool,
    /// Emit details of UI state serialization/deserialization.
    pub print_state_serde: bool,
    /// Emit shutdown app messages.
    pub print_shutdown: bool,
}

pub const DEBUG_FLAGS: DebugFlags = DebugFlags {
    print_requests: false,
    print_ui_interactions: false,
    print_state_serde: false,
    print_shutdown: false,
};
