/// Debug print toggles. All off for release use.
pub struct DebugFlags {
    pub print_ui_interactions: bool,
    pub print_fetch_events: bool,
    pub print_state_serde: bool,
    pub print_shutdown: bool,
}

pub const DEBUG_FLAGS: DebugFlags = DebugFlags {
    print_ui_interactions: false,
    print_fetch_events: false,
    print_state_serde: false,
    print_shutdown: false,
};
