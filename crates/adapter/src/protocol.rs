//! Wire tokens for the device bridge.
//!
//! The vocabulary is deliberately tiny because the real devices are tiny:
//! the button firmware emits one token, the display consumes bare digit
//! frames. Everything is a line of ASCII text.

/// Handshake line for the one-button controller.
pub const HELLO_BUTTON: &str = "HELLO BUTTON";
/// Handshake line for the status display.
pub const HELLO_DISPLAY: &str = "HELLO DISPLAY";
/// Server handshake response.
pub const WELCOME: &str = "WELCOME";
/// Handshake rejection for an unknown role line.
pub const ERROR_UNKNOWN_ROLE: &str = "ERROR unknown_role";
/// Press token emitted by the button firmware.
pub const BUTTON_PRESSED: &str = "BUTTON_PRESSED";

/// Device role, declared by the client's first line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Button,
    Display,
}

/// Event delivered to the game loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceEvent {
    /// A button client pressed its button.
    ButtonPressed { client_id: usize },
}

/// Parse a handshake line into a role.
pub fn parse_hello(line: &str) -> Option<Role> {
    match line.trim() {
        HELLO_BUTTON => Some(Role::Button),
        HELLO_DISPLAY => Some(Role::Display),
        _ => None,
    }
}

/// Whether a button-client line is a press.
///
/// The serial stream can carry noise (boot banners, partial lines); anything
/// that is not the press token is ignored rather than treated as an error.
pub fn is_button_press(line: &str) -> bool {
    line.trim() == BUTTON_PRESSED
}

/// Encode a status frame for the display stream.
pub fn encode_status(frame: u8) -> String {
    frame.to_string()
}
