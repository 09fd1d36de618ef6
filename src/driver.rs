//! Best-effort UDP fan-out to a fixed group of Wiz lights.

use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use std::time::Duration;

use log::{debug, info, warn};

use crate::command::{EncodedCommand, LightCommand};
use crate::config::GroupConfig;
use crate::errors::Error;
use crate::runtime::{self, AsyncUdpSocket, UdpSocket};
use crate::types::{Brightness, Color, Kelvin};

type Result<T> = std::result::Result<T, Error>;

/// Drives a fixed group of Wiz lights over UDP.
///
/// One `GroupDriver` exists per light group and lives for the process
/// lifetime. Construction captures configuration only; the socket is
/// created lazily on the first send and then reused forever. Delivery is
/// send-and-forget: the same datagram goes to every target in configured
/// order, a send succeeds overall if at least one target accepts it, and a
/// failing target is simply retried fresh on the next send with no memory
/// of past failures.
///
/// The driver paces consecutive sends by 50 ms per target so the bulbs'
/// receive buffers are never burst-flooded. A send over N targets therefore
/// stalls the caller for at least N × 50 ms; treat it as a blocking
/// operation and keep it off latency-sensitive paths.
///
/// The driver holds no internal lock and lazy socket creation is not safe
/// under concurrent first use; callers that share a driver across tasks
/// must serialize access externally.
///
/// # Example
///
/// ```no_run
/// use wiz_bridge_rs::{GroupConfig, GroupDriver, Brightness};
///
/// # async fn run() -> Result<(), wiz_bridge_rs::Error> {
/// let config = GroupConfig::from_strs(
///     &["192.168.0.155", "192.168.0.139"],
///     GroupConfig::DEFAULT_PORT,
/// )?;
/// let mut driver = GroupDriver::new(config)?;
/// driver.set_power(true).await?;
/// driver.set_brightness(Brightness::clamping(80)).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct GroupDriver {
    targets: Vec<Ipv4Addr>,
    port: u16,
    socket: Option<UdpSocket>,
    last_brightness: Brightness,
}

impl GroupDriver {
    /// Pause between consecutive targets within one send. Deliberate
    /// serialization for receiver protection, not best-effort timing.
    const PACING: Duration = Duration::from_millis(50);

    /// Receive timeout set on the socket at creation. Defensive only; the
    /// driver never reads a reply.
    const RECV_TIMEOUT: Duration = Duration::from_secs(2);

    /// Create a driver from a validated configuration. Performs no I/O.
    pub fn new(config: GroupConfig) -> Result<Self> {
        info!(
            "group driver configured with {} lights on port {} (socket created on first send)",
            config.targets().len(),
            config.port()
        );
        Ok(GroupDriver {
            targets: config.targets().to_vec(),
            port: config.port(),
            socket: None,
            last_brightness: Brightness::new(),
        })
    }

    /// Whether the lazily-created socket exists yet.
    pub fn is_transport_open(&self) -> bool {
        self.socket.is_some()
    }

    /// The brightness carried by the most recent brightness-bearing command.
    ///
    /// Used by callers that need brightness context for RGB commands (e.g.
    /// a color change arriving without a level change).
    pub fn last_brightness(&self) -> Brightness {
        self.last_brightness
    }

    /// Encode and deliver a semantic command to every target.
    ///
    /// Updates the cached last brightness when the command carries one.
    pub async fn send(&mut self, command: &LightCommand) -> Result<()> {
        match command {
            LightCommand::Brightness(brightness)
            | LightCommand::Rgb { brightness, .. }
            | LightCommand::Temperature { brightness, .. } => {
                self.last_brightness = *brightness;
            }
            LightCommand::Hsv { value, .. } => {
                self.last_brightness = Brightness::clamping(*value);
            }
            LightCommand::Power(_) => {}
        }
        let encoded = command.encode()?;
        self.send_encoded(&encoded).await
    }

    /// Deliver an already-encoded command to every target.
    ///
    /// Iterates all targets regardless of individual failures (no
    /// short-circuit) and returns Ok iff at least one accepted the
    /// datagram. If the socket cannot be created the call fails with
    /// [`Error::TransportUnavailable`] and the next call retries creation.
    pub async fn send_encoded(&mut self, command: &EncodedCommand) -> Result<()> {
        self.ensure_socket()?;
        let Some(socket) = &self.socket else {
            // ensure_socket either filled the slot or returned early.
            return Err(Error::transport(
                "bind",
                std::io::Error::other("socket slot empty"),
            ));
        };

        let mut delivered = 0usize;
        for ip in &self.targets {
            let addr = SocketAddr::V4(SocketAddrV4::new(*ip, self.port));
            match socket.send_to(command.as_bytes(), addr).await {
                Ok(_) => {
                    delivered += 1;
                    debug!("sent to light {ip}: {command}");
                }
                Err(err) => {
                    warn!("failed to send to light {ip}: {err}");
                }
            }
            // Small delay between lights
            runtime::sleep(Self::PACING).await;
        }

        if delivered == 0 {
            return Err(Error::TotalDeliveryFailure {
                attempted: self.targets.len(),
            });
        }
        if delivered < self.targets.len() {
            warn!(
                "partial delivery: {delivered} of {} lights reachable",
                self.targets.len()
            );
        }
        Ok(())
    }

    pub async fn set_power(&mut self, on: bool) -> Result<()> {
        info!("setting power: {}", if on { "ON" } else { "OFF" });
        self.send(&LightCommand::Power(on)).await
    }

    pub async fn set_brightness(&mut self, brightness: Brightness) -> Result<()> {
        info!("setting brightness: {}%", brightness.value());
        self.send(&LightCommand::Brightness(brightness)).await
    }

    pub async fn set_rgb(&mut self, color: Color, brightness: Brightness) -> Result<()> {
        info!(
            "setting RGB: ({}, {}, {}) at {}%",
            color.red(),
            color.green(),
            color.blue(),
            brightness.value()
        );
        self.send(&LightCommand::Rgb { color, brightness }).await
    }

    pub async fn set_temperature(&mut self, kelvin: Kelvin, brightness: Brightness) -> Result<()> {
        info!(
            "setting temperature: {}K at {}%",
            kelvin.kelvin(),
            brightness.value()
        );
        self.send(&LightCommand::Temperature { kelvin, brightness })
            .await
    }

    pub async fn set_hsv(&mut self, hue: u16, saturation: u8, value: u8) -> Result<()> {
        info!("setting HSV: H={hue} S={saturation} V={value}");
        self.send(&LightCommand::Hsv {
            hue,
            saturation,
            value,
        })
        .await
    }

    /// Lazily create the socket on first use; reused for every later send.
    fn ensure_socket(&mut self) -> Result<()> {
        if self.socket.is_none() {
            let std_socket =
                std::net::UdpSocket::bind("0.0.0.0:0").map_err(|e| Error::transport("bind", e))?;
            std_socket
                .set_read_timeout(Some(Self::RECV_TIMEOUT))
                .map_err(|e| Error::transport("set timeout", e))?;
            let socket =
                UdpSocket::from_std(std_socket).map_err(|e| Error::transport("register", e))?;
            info!("UDP socket initialized successfully");
            self.socket = Some(socket);
        }
        Ok(())
    }
}
