//! Browser confirmation for irreversible actions.

pub const IRREVERSIBLE_PROMPT: &str = "¿Estás seguro?\nNo podrás revertir esta acción.";

/// `true` only when the operator explicitly accepts
pub fn confirm_irreversible() -> bool {
    web_sys::window()
        .and_then(|win| win.confirm_with_message(IRREVERSIBLE_PROMPT).ok())
        .unwrap_or(false)
}
