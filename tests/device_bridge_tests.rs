//! Device bridge integration tests - a display and a button over real TCP.

use std::net::SocketAddr;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::net::TcpStream;
use tokio::sync::{mpsc, oneshot};
use tokio::time::{timeout, Duration};

use tui_cubic::adapter::protocol::WELCOME;
use tui_cubic::adapter::{run_server, DeviceEvent, ServerConfig};
use tui_cubic::engine::{Session, SessionEvent};
use tui_cubic::types::{InputAction, STATUS_FLASH_REPEATS};

async fn spawn_server() -> (
    SocketAddr,
    mpsc::Receiver<DeviceEvent>,
    mpsc::UnboundedSender<u8>,
) {
    let config = ServerConfig {
        port: 0,
        ..ServerConfig::default()
    };
    let (event_tx, event_rx) = mpsc::channel(8);
    let (status_tx, status_rx) = mpsc::unbounded_channel();
    let (ready_tx, ready_rx) = oneshot::channel();
    tokio::spawn(async move {
        let _ = run_server(config, event_tx, status_rx, Some(ready_tx)).await;
    });
    let addr = ready_rx.await.expect("server ready");
    (addr, event_rx, status_tx)
}

async fn connect(addr: SocketAddr, hello: &str) -> (tokio::io::Lines<BufReader<OwnedReadHalf>>, OwnedWriteHalf) {
    let stream = TcpStream::connect(addr).await.expect("connect");
    let (read_half, mut write_half) = stream.into_split();
    write_half
        .write_all(format!("{}\n", hello).as_bytes())
        .await
        .expect("hello");
    let mut lines = BufReader::new(read_half).lines();
    assert_eq!(read_line(&mut lines).await, WELCOME);
    (lines, write_half)
}

async fn read_line(lines: &mut tokio::io::Lines<BufReader<OwnedReadHalf>>) -> String {
    timeout(Duration::from_secs(2), lines.next_line())
        .await
        .expect("line timeout")
        .expect("read")
        .expect("eof")
}

#[tokio::test]
async fn a_played_round_streams_its_frames_to_the_display() {
    let (addr, _event_rx, status_tx) = spawn_server().await;
    let (mut display, _keep) = connect(addr, "HELLO DISPLAY").await;

    // Play a winning round in the sync core and pipe its frames out exactly
    // the way the game loop does.
    let mut session = Session::new();
    status_tx.send(session.opening_frame()).expect("opener");

    let mut events = Vec::new();
    for index in [0u8, 9, 18, 1, 10, 19, 2] {
        session.handle(InputAction::Select(index));
        events.push(session.handle(InputAction::Confirm));
    }
    for event in &events {
        for frame in Session::status_frames(event) {
            status_tx.send(frame).expect("frame");
        }
    }

    // Opener, six turn changes, then the 40-frame flash burst.
    assert_eq!(read_line(&mut display).await, "1");
    for expected in ["2", "3", "1", "2", "3", "1"] {
        assert_eq!(read_line(&mut display).await, expected);
    }
    for _ in 0..STATUS_FLASH_REPEATS {
        assert_eq!(read_line(&mut display).await, "5");
        assert_eq!(read_line(&mut display).await, "1");
    }

    assert!(matches!(events.last(), Some(SessionEvent::Won { .. })));
}

#[tokio::test]
async fn button_press_confirms_a_staged_cell() {
    let (addr, mut event_rx, _status_tx) = spawn_server().await;
    let (_lines, mut button) = connect(addr, "HELLO BUTTON").await;

    let mut session = Session::new();
    session.handle(InputAction::Select(4));

    button.write_all(b"BUTTON_PRESSED\n").await.expect("press");
    let device_event = timeout(Duration::from_secs(2), event_rx.recv())
        .await
        .expect("event timeout")
        .expect("event");
    assert!(matches!(device_event, DeviceEvent::ButtonPressed { .. }));

    // The game loop maps the press onto the confirm path.
    let event = session.press_button();
    assert!(matches!(event, SessionEvent::Moved { .. }));
    assert_eq!(session.snapshot().cells[4], 1);
}

#[tokio::test]
async fn press_without_selection_is_a_no_op_like_the_original() {
    let (addr, mut event_rx, _status_tx) = spawn_server().await;
    let (_lines, mut button) = connect(addr, "HELLO BUTTON").await;

    button.write_all(b"BUTTON_PRESSED\n").await.expect("press");
    timeout(Duration::from_secs(2), event_rx.recv())
        .await
        .expect("event timeout")
        .expect("event");

    let mut session = Session::new();
    let event = session.press_button();
    assert!(matches!(event, SessionEvent::Rejected(_)));
    assert!(session.snapshot().cells.iter().all(|&id| id == 0));
}

#[tokio::test]
async fn two_displays_both_receive_the_broadcast() {
    let (addr, _event_rx, status_tx) = spawn_server().await;
    let (mut first, _keep_a) = connect(addr, "HELLO DISPLAY").await;
    let (mut second, _keep_b) = connect(addr, "HELLO DISPLAY").await;

    status_tx.send(3).expect("frame");
    assert_eq!(read_line(&mut first).await, "3");
    assert_eq!(read_line(&mut second).await, "3");
}
