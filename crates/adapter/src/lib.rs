//! Adapter module - external device bridge over TCP
//!
//! The original hardware rig wires two serial devices into the game: a
//! one-button controller that confirms the staged cell, and a status display
//! that shows whose turn it is. This module exposes the same two byte
//! streams over a local TCP port so a host-side serial bridge (or the
//! `device-probe` binary) can stand in for either device. Serial-port
//! plumbing itself stays outside the game.
//!
//! # Protocol Overview
//!
//! Line-delimited plain text over TCP, one connection per device:
//!
//! 1. **Connection**: client connects to the bridge port (default
//!    `127.0.0.1:7601`)
//! 2. **Handshake**: the first line declares the device role, `HELLO BUTTON`
//!    or `HELLO DISPLAY`; the server answers `WELCOME`
//! 3. **Button traffic**: button clients send `BUTTON_PRESSED` lines (the
//!    firmware token); each one becomes a confirm event in the game loop.
//!    Unknown lines are ignored, matching how the serial reader treats noise
//! 4. **Display traffic**: display clients receive one status frame per line
//!    (`1`, `2`, `3`, or the flash sentinel `5`). A newly connected display
//!    immediately receives the last broadcast frame so it never starts blank
//!
//! Outbound delivery is fire-and-forget: a slow or dead display is dropped,
//! never waited on, and transmission failures never reach the game logic.
//!
//! # Environment Variables
//!
//! - `CUBIC_DEVICE_HOST`: bind address (default `127.0.0.1`)
//! - `CUBIC_DEVICE_PORT`: port number (default `7601`)
//! - `CUBIC_DEVICE_MAX_PENDING`: bound on queued button events (default `8`)
//! - `CUBIC_DEVICE_DISABLED`: set to `1` or `true` to disable the bridge
//!
//! # Example Session
//!
//! ```text
//! Client -> Server: HELLO DISPLAY
//! Server -> Client: WELCOME
//! Server -> Client: 1
//! Server -> Client: 2
//! Client2 -> Server: HELLO BUTTON
//! Server -> Client2: WELCOME
//! Client2 -> Server: BUTTON_PRESSED
//! ```
//!
//! # Implementation
//!
//! - **tokio** for async networking, on a runtime owned by [`DeviceHub`]
//! - The sync game loop polls [`DeviceHub::try_recv`] once per frame and
//!   pushes frames with [`DeviceHub::send_status`]; both are non-blocking
//! - See [`protocol`] for the wire tokens and [`server`] for the listener

pub mod protocol;
pub mod runtime;
pub mod server;

pub use tui_cubic_types as types;

pub use protocol::{DeviceEvent, Role};
pub use runtime::DeviceHub;
pub use server::{run_server, ServerConfig, ServerState};
