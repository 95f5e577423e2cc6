//! TCP server for the device bridge.
//!
//! Handles incoming device connections and manages client lifecycle.
//! Uses tokio for async networking.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::{mpsc, oneshot, RwLock};

use crate::protocol::{
    encode_status, is_button_press, parse_hello, DeviceEvent, Role, ERROR_UNKNOWN_ROLE, WELCOME,
};

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Bound on button events queued toward the game loop; presses beyond it
    /// are dropped, matching the original's one-flag latch.
    pub max_pending_events: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 7601,
            max_pending_events: 8,
        }
    }
}

impl ServerConfig {
    /// Create from environment variables.
    pub fn from_env() -> Self {
        use std::env;

        let host = env::var("CUBIC_DEVICE_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("CUBIC_DEVICE_PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(7601);
        let max_pending_events = env::var("CUBIC_DEVICE_MAX_PENDING")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(8);

        Self {
            host,
            port,
            max_pending_events,
        }
    }
}

/// Handle to a connected device client.
pub struct ClientHandle {
    pub id: usize,
    pub addr: SocketAddr,
    pub role: Role,
    /// Channel to the client's writer task.
    pub tx: mpsc::UnboundedSender<String>,
}

/// Shared server state.
pub struct ServerState {
    clients: RwLock<Vec<ClientHandle>>,
    /// Last broadcast frame, replayed to displays that connect late.
    last_status: RwLock<Option<u8>>,
    next_id: AtomicUsize,
}

impl ServerState {
    pub fn new() -> Self {
        Self {
            clients: RwLock::new(Vec::new()),
            last_status: RwLock::new(None),
            next_id: AtomicUsize::new(0),
        }
    }

    /// Check if the bridge is disabled via environment.
    pub fn is_disabled() -> bool {
        std::env::var("CUBIC_DEVICE_DISABLED")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false)
    }

    async fn register(&self, addr: SocketAddr, role: Role, tx: mpsc::UnboundedSender<String>) -> usize {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.clients.write().await.push(ClientHandle { id, addr, role, tx });
        id
    }

    async fn deregister(&self, id: usize) {
        self.clients.write().await.retain(|c| c.id != id);
    }

    /// Best-effort broadcast to all display clients; dead ones are dropped.
    async fn broadcast_status(&self, frame: u8) {
        *self.last_status.write().await = Some(frame);
        self.clients
            .write()
            .await
            .retain(|c| c.role != Role::Display || c.tx.send(encode_status(frame)).is_ok());
    }
}

impl Default for ServerState {
    fn default() -> Self {
        Self::new()
    }
}

/// Start the bridge server.
///
/// Runs until the process exits: accepts device connections, forwards button
/// presses into `event_tx`, and broadcasts every frame from `status_rx` to
/// the connected displays. `ready_tx` reports the bound address (tests bind
/// port 0).
pub async fn run_server(
    config: ServerConfig,
    event_tx: mpsc::Sender<DeviceEvent>,
    mut status_rx: mpsc::UnboundedReceiver<u8>,
    ready_tx: Option<oneshot::Sender<SocketAddr>>,
) -> anyhow::Result<()> {
    let listener = TcpListener::bind((config.host.as_str(), config.port)).await?;
    let local_addr = listener.local_addr()?;
    if let Some(tx) = ready_tx {
        let _ = tx.send(local_addr);
    }

    let state = Arc::new(ServerState::new());

    // Status pump: game loop frames -> display clients.
    let pump_state = Arc::clone(&state);
    tokio::spawn(async move {
        while let Some(frame) = status_rx.recv().await {
            pump_state.broadcast_status(frame).await;
        }
    });

    loop {
        let (stream, addr) = listener.accept().await?;
        let state = Arc::clone(&state);
        let event_tx = event_tx.clone();
        tokio::spawn(async move {
            let _ = handle_client(stream, addr, state, event_tx).await;
        });
    }
}

async fn handle_client(
    stream: TcpStream,
    addr: SocketAddr,
    state: Arc<ServerState>,
    event_tx: mpsc::Sender<DeviceEvent>,
) -> anyhow::Result<()> {
    let _ = stream.set_nodelay(true);
    let (read_half, mut write_half) = stream.into_split();
    let mut lines = BufReader::new(read_half).lines();

    // The first line must declare the device role.
    let Some(first) = lines.next_line().await? else {
        return Ok(());
    };
    let Some(role) = parse_hello(&first) else {
        write_half
            .write_all(format!("{}\n", ERROR_UNKNOWN_ROLE).as_bytes())
            .await?;
        return Ok(());
    };

    let (tx, mut rx) = mpsc::unbounded_channel::<String>();
    let _ = tx.send(WELCOME.to_string());
    if role == Role::Display {
        if let Some(frame) = *state.last_status.read().await {
            let _ = tx.send(encode_status(frame));
        }
    }
    let id = state.register(addr, role, tx).await;

    // Writer task: owns the socket's write half so broadcasts and the
    // handshake share one ordered path.
    let writer = tokio::spawn(async move {
        while let Some(line) = rx.recv().await {
            if write_half.write_all(line.as_bytes()).await.is_err() {
                break;
            }
            if write_half.write_all(b"\n").await.is_err() {
                break;
            }
        }
    });

    while let Some(line) = lines.next_line().await? {
        if role == Role::Button && is_button_press(&line) {
            // try_send: a stuck game loop sheds presses instead of backing
            // up the socket reader.
            let _ = event_tx.try_send(DeviceEvent::ButtonPressed { client_id: id });
        }
    }

    state.deregister(id).await;
    writer.abort();
    Ok(())
}
