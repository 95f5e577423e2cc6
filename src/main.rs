//! Terminal cube runner (default binary).
//!
//! This is the primary gameplay entrypoint. It wires the session engine to
//! crossterm input, the layer-pane renderer, and the device bridge: cell keys
//! stage a cell, Enter or a bridge button press commits it, and every turn
//! change streams a status frame to connected displays.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_cubic::adapter::{DeviceEvent, DeviceHub};
use tui_cubic::engine::{Session, SessionEvent};
use tui_cubic::input::{handle_key_event, should_quit};
use tui_cubic::term::{CubeView, FrameBuffer, TerminalRenderer, Viewport};
use tui_cubic::types::TICK_MS;

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut session = Session::new();
    let mut hub = DeviceHub::start_from_env();

    // Announce the opener so an already-connected display starts correct.
    if let Some(hub) = &hub {
        hub.send_status(session.opening_frame());
    }

    let view = CubeView::new();
    let mut fb = FrameBuffer::new(0, 0);
    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&session.snapshot(), Viewport::new(w, h), hub.is_some(), &mut fb);
        term.draw(&fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        let event = session.handle(action);
                        forward_status(&hub, &event);
                    }
                }
            }
        }

        // Device events: each button press is a confirm.
        while let Some(device_event) = hub.as_mut().and_then(DeviceHub::try_recv) {
            match device_event {
                DeviceEvent::ButtonPressed { .. } => {
                    let event = session.press_button();
                    forward_status(&hub, &event);
                }
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            if let Some(event) = session.tick(TICK_MS) {
                forward_status(&hub, &event);
            }
        }
    }
}

fn forward_status(hub: &Option<DeviceHub>, event: &SessionEvent) {
    if let Some(hub) = hub {
        for frame in Session::status_frames(event) {
            hub.send_status(frame);
        }
    }
}
