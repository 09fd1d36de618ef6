//! smol runtime implementation.

use std::io;
use std::net::SocketAddr;
use std::time::Duration;

use smol::net::UdpSocket as SmolUdpSocket;

use super::AsyncUdpSocket;

/// smol-based UDP socket.
#[derive(Debug)]
pub struct UdpSocket(SmolUdpSocket);

impl AsyncUdpSocket for UdpSocket {
    fn from_std(socket: std::net::UdpSocket) -> io::Result<Self> {
        socket.set_nonblocking(true)?;
        SmolUdpSocket::try_from(socket).map(UdpSocket)
    }

    async fn send_to(&self, buf: &[u8], addr: SocketAddr) -> io::Result<usize> {
        self.0.send_to(buf, addr).await
    }

    fn local_addr(&self) -> io::Result<SocketAddr> {
        self.0.local_addr()
    }
}

/// Sleep for the specified duration using smol.
pub async fn sleep_impl(duration: Duration) {
    smol::Timer::after(duration).await;
}
