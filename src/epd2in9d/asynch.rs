//! Refresh completion for async executors
//!
//! Drives the same state machine as [`Epd2in9d::flush`], sleeping on an async delay
//! between two busy queries instead of blocking.

use embedded_hal::{
    digital::{InputPin, OutputPin},
    spi::SpiDevice,
};
use embedded_hal_async::delay::DelayNs;
use log::warn;

use super::Epd2in9d;
use crate::error::ErrorKind;

impl<SPI, BUSY, DC, RST> Epd2in9d<SPI, BUSY, DC, RST>
where
    SPI: SpiDevice,
    BUSY: InputPin,
    DC: OutputPin,
    RST: OutputPin,
{
    /// Runs a whole refresh, yielding to the executor between two busy queries
    ///
    /// Same poll budget as the blocking waits. On [`ErrorKind::BusyTimeout`] the refresh is
    /// still tracked and can be finished with [`flush`](Self::flush).
    pub async fn flush_async<DELAY: DelayNs>(
        &mut self,
        spi: &mut SPI,
        delay: &mut DELAY,
    ) -> Result<(), ErrorKind<SPI, BUSY, DC, RST>> {
        let mut polls = 0;
        while !self.flush(spi)? {
            polls += 1;
            if polls >= self.config.busy_timeout_polls {
                warn!("refresh still running after {} polls", polls);
                return Err(ErrorKind::BusyTimeout);
            }
            delay.delay_us(self.config.poll_interval_us).await;
        }
        Ok(())
    }
}
