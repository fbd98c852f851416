//! Non-blocking refresh of the panel
//!
//! A refresh is started with the first [`Epd2in9d::flush`] call and then polled by
//! the following ones. The status query is sent on every call, the controller only
//! updates the busy line after it.

use embedded_hal::{
    delay::DelayNs,
    digital::{InputPin, OutputPin},
    spi::SpiDevice,
};
use log::{trace, warn};

use super::{command::Command, Epd2in9d};
use crate::error::ErrorKind;

/// Progress of a refresh
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlushState {
    /// No refresh running, the next flush starts one
    #[default]
    Start,
    /// A refresh was started, waiting for the panel to report ready
    WaitingForBusy,
}

impl<SPI, BUSY, DC, RST> Epd2in9d<SPI, BUSY, DC, RST>
where
    SPI: SpiDevice,
    BUSY: InputPin,
    DC: OutputPin,
    RST: OutputPin,
{
    /// Advances the refresh by one step
    ///
    /// The first call triggers the refresh and checks the busy line right away. Returns
    /// `false` while the panel is busy and `true` on the call where it reports ready, after
    /// which the next call starts a new refresh. Never blocks.
    pub fn flush(&mut self, spi: &mut SPI) -> Result<bool, ErrorKind<SPI, BUSY, DC, RST>> {
        match self.flush_state {
            FlushState::Start => {
                trace!("starting refresh");
                self.interface.cmd(spi, Command::DisplayRefresh)?;
                self.flush_state = FlushState::WaitingForBusy;
            }
            FlushState::WaitingForBusy => {}
        }

        self.interface.cmd(spi, Command::GetStatus)?;
        if self.interface.is_busy()? {
            return Ok(false);
        }

        trace!("refresh done");
        self.flush_state = FlushState::Start;
        self.frame_pending = false;
        Ok(true)
    }

    /// Progress of the current refresh
    pub fn flush_state(&self) -> FlushState {
        self.flush_state
    }

    /// Forgets about a running refresh
    ///
    /// The next [`flush`](Self::flush) triggers a new refresh, even if the panel is still
    /// busy with the last one.
    pub fn reset_flush(&mut self) {
        self.flush_state = FlushState::Start;
    }

    /// Polls [`flush`](Self::flush) until the refresh is done
    pub(super) fn refresh_blocking<DELAY: DelayNs>(
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
            if self.config.poll_interval_us > 0 {
                delay.delay_us(self.config.poll_interval_us);
            }
        }
        Ok(())
    }
}
