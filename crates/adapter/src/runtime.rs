//! Bridge runtime integration.
//!
//! Bridges the sync game loop with the async TCP server: the hub owns a
//! tokio runtime running [`run_server`](crate::server::run_server) and
//! exposes non-blocking channel endpoints to the frame loop.

use tokio::runtime::Runtime;
use tokio::sync::mpsc;

use crate::protocol::DeviceEvent;
use crate::server::{run_server, ServerConfig, ServerState};

/// Running device bridge instance.
pub struct DeviceHub {
    _rt: Runtime,
    event_rx: mpsc::Receiver<DeviceEvent>,
    status_tx: mpsc::UnboundedSender<u8>,
}

impl DeviceHub {
    /// Start the bridge from environment variables.
    ///
    /// Returns `None` when `CUBIC_DEVICE_DISABLED` is set or the runtime
    /// cannot start; the game is fully playable from the keyboard either
    /// way.
    pub fn start_from_env() -> Option<Self> {
        if ServerState::is_disabled() {
            return None;
        }
        Self::start(ServerConfig::from_env()).ok()
    }

    /// Start the bridge with an explicit configuration.
    pub fn start(config: ServerConfig) -> anyhow::Result<Self> {
        let max_pending = config.max_pending_events.max(1);
        let (event_tx, event_rx) = mpsc::channel::<DeviceEvent>(max_pending);
        let (status_tx, status_rx) = mpsc::unbounded_channel::<u8>();

        let rt = Runtime::new()?;
        rt.spawn(async move {
            let _ = run_server(config, event_tx, status_rx, None).await;
        });

        Ok(Self {
            _rt: rt,
            event_rx,
            status_tx,
        })
    }

    /// Non-blocking poll for the next device event.
    pub fn try_recv(&mut self) -> Option<DeviceEvent> {
        self.event_rx.try_recv().ok()
    }

    /// Queue a status frame for the displays. Fire-and-forget: a dead
    /// server just drops the frame.
    pub fn send_status(&self, frame: u8) {
        let _ = self.status_tx.send(frame);
    }
}
