//! LIS3DH accelerometer SPI driver.
//!
//! Single-transaction register reads over 4-wire SPI.  The driver is
//! generic over an `embedded-hal-async` SPI bus and an `embedded-hal`
//! chip-select pin so the transport can be swapped out.  A read awaits
//! DMA completion with no retry and no timeout.
//!
//! The sensor is wired up and probed at boot but plays no part in the
//! light control flow.

pub mod protocol;

use embedded_hal::digital::OutputPin;
use embedded_hal_async::spi::SpiBus;

use crate::config::{LIS3DH_REG_WHO_AM_I, LIS3DH_WHO_AM_I};
use crate::error::Error;

pub struct Lis3dh<SPI, CS> {
    spi: SPI,
    cs: CS,
}

impl<SPI: SpiBus, CS: OutputPin> Lis3dh<SPI, CS> {
    pub fn new(spi: SPI, cs: CS) -> Self {
        Self { spi, cs }
    }

    /// Read `buf.len()` bytes of consecutive registers starting at
    /// `addr`.
    pub async fn read(&mut self, addr: u8, buf: &mut [u8]) -> Result<(), Error> {
        let cmd = protocol::read_command(addr, buf.len());

        self.cs.set_low().map_err(|_| Error::Spi)?;
        let res = self.transfer(cmd, buf).await;
        // Release the chip select even when the transfer failed.
        self.cs.set_high().map_err(|_| Error::Spi)?;
        res
    }

    async fn transfer(&mut self, cmd: u8, buf: &mut [u8]) -> Result<(), Error> {
        self.spi.write(&[cmd]).await.map_err(|_| Error::Spi)?;
        self.spi.read(buf).await.map_err(|_| Error::Spi)?;
        self.spi.flush().await.map_err(|_| Error::Spi)
    }

    /// Probe WHO_AM_I; `Ok` only when the LIS3DH signature answers.
    pub async fn probe(&mut self) -> Result<(), Error> {
        let mut id = [0u8; 1];
        self.read(LIS3DH_REG_WHO_AM_I, &mut id).await?;
        if id[0] != LIS3DH_WHO_AM_I {
            return Err(Error::AccelNotFound);
        }
        Ok(())
    }
}
