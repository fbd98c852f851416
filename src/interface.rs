use crate::{error::ErrorKind, traits::Command};
use core::marker::PhantomData;
use embedded_hal::{
    delay::DelayNs,
    digital::{InputPin, OutputPin},
    spi::SpiDevice,
};

/// Number of bytes written per SPI transfer by [`DisplayInterface::data_x_times`]
const REPEAT_CHUNK: usize = 16;

/// The Connection Interface of the EPD
///
/// Every command and every data block is written as one transfer of the
/// [`SpiDevice`], which frames it with chip-select.
pub(crate) struct DisplayInterface<SPI, BUSY, DC, RST> {
    /// SPI
    _spi: PhantomData<SPI>,
    /// Low for busy, Wait until display is ready!
    busy: BUSY,
    /// Data/Command Control Pin (High for data, Low for command)
    dc: DC,
    /// Pin for Resetting
    rst: RST,
}

impl<SPI, BUSY, DC, RST> DisplayInterface<SPI, BUSY, DC, RST>
where
    SPI: SpiDevice,
    BUSY: InputPin,
    DC: OutputPin,
    RST: OutputPin,
{
    /// Creates a new `DisplayInterface` struct
    pub fn new(busy: BUSY, dc: DC, rst: RST) -> Self {
        DisplayInterface {
            _spi: PhantomData,
            busy,
            dc,
            rst,
        }
    }

    /// Returns the pins
    pub(crate) fn release(self) -> (BUSY, DC, RST) {
        (self.busy, self.dc, self.rst)
    }

    /// Basic function for sending [Commands](Command).
    ///
    /// Enables direct interaction with the device with the help of [data()](DisplayInterface::data())
    pub(crate) fn cmd<T: Command>(
        &mut self,
        spi: &mut SPI,
        command: T,
    ) -> Result<(), ErrorKind<SPI, BUSY, DC, RST>> {
        // low for commands
        self.dc.set_low().map_err(ErrorKind::DcError)?;

        // Transfer the command over spi
        self.write(spi, &[command.address()])
    }

    /// Basic function for sending an array of u8-values of data over spi
    ///
    /// The whole block is sent within one chip-select frame.
    pub(crate) fn data(
        &mut self,
        spi: &mut SPI,
        data: &[u8],
    ) -> Result<(), ErrorKind<SPI, BUSY, DC, RST>> {
        // high for data
        self.dc.set_high().map_err(ErrorKind::DcError)?;

        self.write(spi, data)
    }

    /// Basic function for sending [Commands](Command) and the data belonging to it.
    pub(crate) fn cmd_with_data<T: Command>(
        &mut self,
        spi: &mut SPI,
        command: T,
        data: &[u8],
    ) -> Result<(), ErrorKind<SPI, BUSY, DC, RST>> {
        self.cmd(spi, command)?;
        self.data(spi, data)
    }

    /// Basic function for sending the same byte of data (one u8) multiple times over spi
    pub(crate) fn data_x_times(
        &mut self,
        spi: &mut SPI,
        val: u8,
        repetitions: u32,
    ) -> Result<(), ErrorKind<SPI, BUSY, DC, RST>> {
        // high for data
        self.dc.set_high().map_err(ErrorKind::DcError)?;

        let chunk = [val; REPEAT_CHUNK];
        let mut remaining = repetitions as usize;
        while remaining > 0 {
            let len = remaining.min(REPEAT_CHUNK);
            self.write(spi, &chunk[..len])?;
            remaining -= len;
        }
        Ok(())
    }

    // spi write helper/abstraction function
    fn write(&mut self, spi: &mut SPI, data: &[u8]) -> Result<(), ErrorKind<SPI, BUSY, DC, RST>> {
        spi.write(data).map_err(ErrorKind::SpiError)
    }

    /// Checks if device is still busy
    ///
    /// The busy line of this controller is low while busy. The controller only updates the
    /// line after a status query, so send one first.
    pub(crate) fn is_busy(&mut self) -> Result<bool, ErrorKind<SPI, BUSY, DC, RST>> {
        self.busy.is_low().map_err(ErrorKind::BusyError)
    }

    /// Sends `status_command` until the device isn't busy anymore
    ///
    /// Gives up with [`ErrorKind::BusyTimeout`] after `max_polls` queries,
    /// sleeping `delay_us` between two of them.
    pub(crate) fn wait_until_idle_with_cmd<T: Command, DELAY: DelayNs>(
        &mut self,
        spi: &mut SPI,
        delay: &mut DELAY,
        status_command: T,
        delay_us: u32,
        max_polls: u32,
    ) -> Result<(), ErrorKind<SPI, BUSY, DC, RST>> {
        let mut polls = 0;
        loop {
            self.cmd(spi, status_command)?;
            if !self.is_busy()? {
                return Ok(());
            }
            polls += 1;
            if polls >= max_polls {
                log::warn!("busy line still low after {} polls", polls);
                return Err(ErrorKind::BusyTimeout);
            }
            if delay_us > 0 {
                delay.delay_us(delay_us);
            }
        }
    }

    /// Resets the device.
    ///
    /// Often used to awake the module from deep sleep. See [Epd2in9d::sleep()](crate::epd2in9d::Epd2in9d::sleep)
    ///
    /// The reset line is held high for `initial_delay` ms, pulled low for `duration` ms
    /// and then released for another 200ms before the first command may be sent.
    pub(crate) fn reset<DELAY: DelayNs>(
        &mut self,
        delay: &mut DELAY,
        initial_delay: u32,
        duration: u32,
    ) -> Result<(), ErrorKind<SPI, BUSY, DC, RST>> {
        self.rst.set_high().map_err(ErrorKind::RstError)?;
        delay.delay_ms(initial_delay);

        self.rst.set_low().map_err(ErrorKind::RstError)?;
        delay.delay_ms(duration);
        self.rst.set_high().map_err(ErrorKind::RstError)?;
        delay.delay_ms(200);
        Ok(())
    }
}
