/// Keyboard shortcuts understood by the frontends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyCommand {
    /// Return all beads to their start positions and level the assembly.
    Reset,
    ToggleHelp,
    ToggleSound,
    /// Set the hovered column to this digit.
    SetDigit(u8),
    ToggleFullscreen,
    ExitFullscreen,
}

#[inline]
pub fn key_command(key: &str) -> Option<KeyCommand> {
    match key {
        "r" | "R" => Some(KeyCommand::Reset),
        "h" | "H" | "?" => Some(KeyCommand::ToggleHelp),
        "m" | "M" => Some(KeyCommand::ToggleSound),
        "Enter" => Some(KeyCommand::ToggleFullscreen),
        "Escape" => Some(KeyCommand::ExitFullscreen),
        _ => digit_for_key(key).map(KeyCommand::SetDigit),
    }
}

#[inline]
fn digit_for_key(key: &str) -> Option<u8> {
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => c.to_digit(10).map(|d| d as u8),
        _ => None,
    }
}
