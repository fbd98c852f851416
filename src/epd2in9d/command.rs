//! SPI Commands for the Waveshare 2.9" (D) E-Ink Display

use crate::{traits, waveform::LutRole};

use bit_field::BitField;

/// Epd2in9d commands
///
/// For more infos about the addresses and what they are doing look into the pdfs
#[allow(dead_code)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Command {
    /// Set Resolution, LUT selection, BWR pixels, gate scan direction, source shift
    /// direction, booster switch, soft reset.
    PanelSetting = 0x00,
    /// Selecting internal and external power
    PowerSetting = 0x01,
    /// After the Power Off command, the driver will power off following the Power Off
    /// Sequence; BUSY signal will become "0".
    PowerOff = 0x02,
    /// Setting Power OFF sequence
    PowerOffSequenceSetting = 0x03,
    /// Turning On the Power
    ///
    /// After the Power On command, the driver will power on following the Power ON
    /// sequence. The BUSY signal stays "0" until the sequence is finished.
    PowerOn = 0x04,
    /// This command enables the internal bandgap, which will be cleared by the next POF.
    PowerOnMeasure = 0x05,
    /// Starting data transmission
    BoosterSoftStart = 0x06,
    /// Enters deep sleep mode, only a hardware reset brings the controller back.
    ///
    /// Takes the check code 0xA5.
    DeepSleep = 0x07,
    /// Transmits the "old" frame (bit-1 plane) to SRAM
    DataStartTransmission1 = 0x10,
    /// To stop data transmission, this command must be issued to check the `data_flag`.
    DataStop = 0x11,
    /// While user sent this command, driver will refresh display (data/VCOM) according to
    /// SRAM data and LUT. The BUSY signal stays "0" until the refresh is finished.
    DisplayRefresh = 0x12,
    /// Transmits the "new" frame (bit-2 plane) to SRAM
    DataStartTransmission2 = 0x13,

    /// This command stores VCOM Look-Up Table with 7 groups of data.
    LutForVcom = 0x20,
    /// This command stores White-to-White Look-Up Table with 7 groups of data.
    LutWhiteToWhite = 0x21,
    /// This command stores Black-to-White Look-Up Table with 7 groups of data.
    LutBlackToWhite = 0x22,
    /// This command stores White-to-Black Look-Up Table with 7 groups of data.
    LutWhiteToBlack = 0x23,
    /// This command stores Black-to-Black Look-Up Table with 7 groups of data.
    LutBlackToBlack = 0x24,

    /// The command controls the PLL clock frequency.
    PllControl = 0x30,
    TemperatureSensor = 0x40,
    TemperatureSensorCalibration = 0x41,
    TemperatureSensorWrite = 0x42,
    TemperatureSensorRead = 0x43,
    /// This command indicates the interval of Vcom and data output. When setting the
    /// vertical back porch, the total blanking will be kept (20 Hsync).
    VcomAndDataIntervalSetting = 0x50,
    /// This command indicates the input power condition. Host can read this flag to learn
    /// the battery condition.
    LowPowerDetection = 0x51,
    TconSetting = 0x60,
    /// This command defines alternative resolution and this setting is of higher priority
    /// than the RES\[1:0\] in R00H (PSR).
    TconResolution = 0x61,
    SourceAndGateStartSetting = 0x62,
    /// Status query. The controller refreshes the BUSY line when receiving it.
    GetStatus = 0x71,
    AutoMeasureVcom = 0x80,
    VcomValue = 0x81,
    /// This command sets `VCOM_DC` value.
    VcmDcSetting = 0x82,
    /// This command sets partial window.
    PartialWindow = 0x90,
    /// This command makes the display enter partial mode.
    PartialIn = 0x91,
    /// This command makes the display exit partial mode and enter normal mode.
    PartialOut = 0x92,
    ProgramMode = 0xA0,
    ActiveProgramming = 0xA1,
    ReadOtp = 0xA2,
    /// This command is set for saving power during refresh period.
    PowerSaving = 0xE3,
}

impl Command {
    /// The command loading the LUT for `role`
    pub(crate) fn for_lut(role: LutRole) -> Command {
        match role {
            LutRole::Vcom => Command::LutForVcom,
            LutRole::WhiteToWhite => Command::LutWhiteToWhite,
            LutRole::BlackToWhite => Command::LutBlackToWhite,
            LutRole::WhiteToBlack => Command::LutWhiteToBlack,
            LutRole::BlackToBlack => Command::LutBlackToBlack,
        }
    }
}

impl traits::Command for Command {
    /// Returns the address of the command
    fn address(self) -> u8 {
        self as u8
    }
}

/// Gate/source resolution selected in the panel setting register
#[allow(dead_code)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Resolution {
    Res96x230 = 0b00,
    Res96x252 = 0b01,
    Res128x296 = 0b10,
    Res160x296 = 0b11,
}

/// Contents of the panel setting register
///
/// [7|6|5|4|3|2|1|0]
///  | | | | | | | `--- no soft reset
///  | | | | | | `----- booster on
///  | | | | | `------- source shift right
///  | | | | `--------- gate scan up
///  | | | `----------- black/white mode
///  | | `------------- LUT from register
///  `-`--------------- resolution
pub(crate) struct PanelSetting {
    pub resolution: Resolution,
    pub lut_from_register: bool,
    pub black_white: bool,
    pub scan_up: bool,
    pub shift_right: bool,
    pub booster_on: bool,
    pub soft_reset: bool,
    /// Pull VCOM to 0V fast when powering off
    pub vcom_fast_discharge: bool,
}

impl PanelSetting {
    pub fn to_bytes(&self) -> [u8; 2] {
        [
            *0u8.set_bits(6..8, self.resolution as u8)
                .set_bit(5, self.lut_from_register)
                .set_bit(4, self.black_white)
                .set_bit(3, self.scan_up)
                .set_bit(2, self.shift_right)
                .set_bit(1, self.booster_on)
                .set_bit(0, !self.soft_reset),
            if self.vcom_fast_discharge { 0x0e } else { 0x00 },
        ]
    }
}

/// Contents of the VCOM and data interval register
///
/// - bits 7-6: border data (VBD)
/// - bits 5-4: data polarity (DDX)
/// - bits 3-0: VCOM to data interval (CDI)
pub(crate) struct VcomAndDataInterval {
    pub border: u8,
    pub data_polarity: u8,
    pub interval: u8,
}

impl VcomAndDataInterval {
    /// Border follows the LUTs, used while refreshing
    pub const DRIVEN_BORDER: VcomAndDataInterval = VcomAndDataInterval {
        border: 0b10,
        data_polarity: 0b11,
        interval: 0b0111,
    };

    /// Border floating, used before powering off
    pub const FLOATING_BORDER: VcomAndDataInterval = VcomAndDataInterval {
        border: 0b11,
        data_polarity: 0b11,
        interval: 0b0111,
    };

    pub fn to_u8(&self) -> u8 {
        *0u8.set_bits(6..8, self.border)
            .set_bits(4..6, self.data_polarity)
            .set_bits(0..4, self.interval)
    }
}
