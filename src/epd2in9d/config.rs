/// Frame rate of the panel, set through the PLL control register
///
/// Higher rates make every waveform frame shorter.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum FrameRate {
    /// 100 Hz
    #[default]
    Hz100,
    /// 150 Hz
    Hz150,
    /// 171 Hz
    Hz171,
    /// 200 Hz
    Hz200,
}

impl FrameRate {
    pub(crate) fn pll_value(self) -> u8 {
        match self {
            FrameRate::Hz100 => 0x3a,
            FrameRate::Hz150 => 0x29,
            FrameRate::Hz171 => 0x31,
            FrameRate::Hz200 => 0x39,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// EPD Configuration
pub struct Config {
    /// Frame rate used by all waveforms
    pub frame_rate: FrameRate,
    /// `VCOM_DC` register value loaded during initialisation
    ///
    /// The partial refresh mode always uses 0.
    pub vcom_dc: u8,
    /// Number of us blocking waits sleep between two busy queries.
    /// Setting it to 0 implies busy waiting.
    pub poll_interval_us: u32,
    /// Number of busy queries after which blocking waits give up
    pub busy_timeout_polls: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            frame_rate: FrameRate::Hz100,
            vcom_dc: 0x28,
            // default delay of 10ms
            poll_interval_us: 10_000,
            // 10s with the default delay, a full refresh takes about 2s
            busy_timeout_polls: 1_000,
        }
    }
}
