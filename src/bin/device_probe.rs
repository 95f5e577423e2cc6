//! Device probe: a stand-in client for the bridge.
//!
//! Connects to the device bridge as either device and exercises it from a
//! plain terminal, which is handy when no hardware (or serial-to-TCP
//! forwarder) is around:
//!
//! - `device-probe display` prints every status frame the game broadcasts,
//!   annotated with what a real display would show
//! - `device-probe button` sends one `BUTTON_PRESSED` per stdin line, so
//!   hitting Enter acts the physical button
//!
//! Options: `--host <addr>` and `--port <port>` (defaults match the bridge).

use std::io::{BufRead, BufReader, Write};
use std::net::TcpStream;

use anyhow::{anyhow, Result};

use tui_cubic::adapter::protocol::{BUTTON_PRESSED, HELLO_BUTTON, HELLO_DISPLAY};
use tui_cubic::types::{Player, STATUS_FLASH_SENTINEL};

#[derive(Debug, Clone, PartialEq, Eq)]
struct ProbeConfig {
    role: ProbeRole,
    host: String,
    port: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ProbeRole {
    Display,
    Button,
}

fn parse_args(args: &[String]) -> Result<ProbeConfig> {
    let role = match args.first().map(String::as_str) {
        Some("display") => ProbeRole::Display,
        Some("button") => ProbeRole::Button,
        Some(other) => return Err(anyhow!("unknown role: {} (use display|button)", other)),
        None => return Err(anyhow!("usage: device-probe <display|button> [--host H] [--port P]")),
    };

    let mut host = String::from("127.0.0.1");
    let mut port: u16 = 7601;
    let mut i = 1usize;
    while i < args.len() {
        match args[i].as_str() {
            "--host" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --host"))?;
                host = v.clone();
            }
            "--port" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --port"))?;
                port = v
                    .parse::<u16>()
                    .map_err(|_| anyhow!("invalid --port value: {}", v))?;
            }
            other => {
                return Err(anyhow!("unknown argument: {}", other));
            }
        }
        i += 1;
    }

    Ok(ProbeConfig { role, host, port })
}

fn describe_frame(line: &str) -> String {
    match line.parse::<u8>() {
        Ok(id) if id == STATUS_FLASH_SENTINEL => String::from("flash"),
        Ok(id) => match Player::from_id(id) {
            Some(player) => format!("player {} ({})", id, player.mark()),
            None => format!("unknown id {}", id),
        },
        Err(_) => String::from("not a status frame"),
    }
}

fn run_display(stream: TcpStream) -> Result<()> {
    let reader = BufReader::new(stream);
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        println!("{:<8} {}", line, describe_frame(&line));
    }
    Ok(())
}

fn run_button(mut stream: TcpStream) -> Result<()> {
    // Drain the handshake reply in the background so the socket buffer
    // never fills.
    let reader_stream = stream.try_clone()?;
    std::thread::spawn(move || {
        let reader = BufReader::new(reader_stream);
        for line in reader.lines() {
            match line {
                Ok(line) => println!("<- {}", line),
                Err(_) => break,
            }
        }
    });

    println!("press Enter to send {}; Ctrl-D to quit", BUTTON_PRESSED);
    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let _ = line?;
        stream.write_all(BUTTON_PRESSED.as_bytes())?;
        stream.write_all(b"\n")?;
        stream.flush()?;
        println!("-> {}", BUTTON_PRESSED);
    }
    Ok(())
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = parse_args(&args)?;

    let mut stream = TcpStream::connect((config.host.as_str(), config.port))
        .map_err(|e| anyhow!("connect {}:{} failed: {}", config.host, config.port, e))?;
    stream.set_nodelay(true)?;

    let hello = match config.role {
        ProbeRole::Display => HELLO_DISPLAY,
        ProbeRole::Button => HELLO_BUTTON,
    };
    stream.write_all(hello.as_bytes())?;
    stream.write_all(b"\n")?;
    stream.flush()?;

    match config.role {
        ProbeRole::Display => run_display(stream),
        ProbeRole::Button => run_button(stream),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_args_requires_a_role() {
        assert!(parse_args(&[]).is_err());
        assert!(parse_args(&["gamepad".to_string()]).is_err());
    }

    #[test]
    fn parse_args_reads_host_and_port() {
        let args = vec![
            "display".to_string(),
            "--host".to_string(),
            "0.0.0.0".to_string(),
            "--port".to_string(),
            "9001".to_string(),
        ];
        let config = parse_args(&args).unwrap();
        assert_eq!(
            config,
            ProbeConfig {
                role: ProbeRole::Display,
                host: "0.0.0.0".to_string(),
                port: 9001,
            }
        );
    }

    #[test]
    fn parse_args_uses_defaults() {
        let config = parse_args(&["button".to_string()]).unwrap();
        assert_eq!(config.role, ProbeRole::Button);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 7601);
    }

    #[test]
    fn frames_are_described_for_humans() {
        assert_eq!(describe_frame("1"), "player 1 (X)");
        assert_eq!(describe_frame("5"), "flash");
        assert_eq!(describe_frame("9"), "unknown id 9");
        assert_eq!(describe_frame("WELCOME"), "not a status frame");
    }
}
