//! Typed waveform lookup tables
//!
//! A LUT is a list of up to seven phases. Each phase drives the electrodes through four
//! sub-phases, each with its own voltage level and frame count, and is repeated as a whole.
//! On the wire every phase is six bytes:
//!
//! ```text
//! [levels A|B|C|D] [frames A] [frames B] [frames C] [frames D] [repeat]
//!  7-6 5-4 3-2 1-0
//! ```

use bit_field::BitField;

/// Number of phases in each LUT
pub const PHASES: usize = 7;

/// Encoded size of one [`Phase`]
pub const PHASE_LEN: usize = 6;

/// Size of the largest encoded LUT (VCOM)
pub const MAX_LUT_LEN: usize = PHASES * PHASE_LEN + VCOM_TRAILER;

/// The VCOM LUT carries two extra bytes after its phases
const VCOM_TRAILER: usize = 2;

/// Voltage level selected for one sub-phase
///
/// For the VCOM LUT the levels are relative to VCOM_DC and [`Level::Vdhr`] leaves VCOM floating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    /// GND (VCOM_DC for the VCOM LUT)
    Gnd = 0b00,
    /// VDH
    Vdh = 0b01,
    /// VDL
    Vdl = 0b10,
    /// VDHR (floating for the VCOM LUT)
    Vdhr = 0b11,
}

/// One phase of a waveform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Phase {
    /// Levels of the sub-phases A to D
    pub levels: [Level; 4],
    /// Duration of the sub-phases A to D in frames
    pub frames: [u8; 4],
    /// How often the phase is repeated
    pub repeat: u8,
}

impl Phase {
    /// An unused phase
    pub const EMPTY: Phase = Phase::new([Level::Gnd; 4], [0; 4], 0);

    /// Construct a new phase
    pub const fn new(levels: [Level; 4], frames: [u8; 4], repeat: u8) -> Phase {
        Phase {
            levels,
            frames,
            repeat,
        }
    }

    /// Encode the phase the way the controller expects it
    pub fn to_bytes(&self) -> [u8; PHASE_LEN] {
        let mut levels = 0u8;
        levels
            .set_bits(6..8, self.levels[0] as u8)
            .set_bits(4..6, self.levels[1] as u8)
            .set_bits(2..4, self.levels[2] as u8)
            .set_bits(0..2, self.levels[3] as u8);
        [
            levels,
            self.frames[0],
            self.frames[1],
            self.frames[2],
            self.frames[3],
            self.repeat,
        ]
    }

    /// Total duration in frames, repeats included
    pub fn duration(&self) -> u32 {
        let frames: u32 = self.frames.iter().map(|&f| u32::from(f)).sum();
        frames * u32::from(self.repeat)
    }
}

/// Which pixel transition (or the common electrode) a LUT drives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LutRole {
    /// Common electrode
    Vcom,
    /// White to white
    WhiteToWhite,
    /// Black to white
    BlackToWhite,
    /// White to black
    WhiteToBlack,
    /// Black to black
    BlackToBlack,
}

/// A complete LUT for one [`LutRole`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lut {
    /// What the LUT drives
    pub role: LutRole,
    /// The phases, unused ones are [`Phase::EMPTY`]
    pub phases: [Phase; PHASES],
}

impl Lut {
    /// Construct a LUT from its used phases, the rest is filled with [`Phase::EMPTY`]
    pub const fn new<const N: usize>(role: LutRole, used: [Phase; N]) -> Lut {
        let mut phases = [Phase::EMPTY; PHASES];
        let mut i = 0;
        while i < N && i < PHASES {
            phases[i] = used[i];
            i += 1;
        }
        Lut { role, phases }
    }

    /// Length of the encoded LUT in bytes
    pub fn len(&self) -> usize {
        match self.role {
            LutRole::Vcom => PHASES * PHASE_LEN + VCOM_TRAILER,
            _ => PHASES * PHASE_LEN,
        }
    }

    /// Always `false`, every LUT has a fixed number of phases
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Encode the LUT into `buf` and return the used part of it
    pub fn encode<'a>(&self, buf: &'a mut [u8; MAX_LUT_LEN]) -> &'a [u8] {
        *buf = [0; MAX_LUT_LEN];
        for (chunk, phase) in buf.chunks_exact_mut(PHASE_LEN).zip(self.phases.iter()) {
            chunk.copy_from_slice(&phase.to_bytes());
        }
        &buf[..self.len()]
    }

    /// Total duration of the waveform in frames
    pub fn duration(&self) -> u32 {
        self.phases.iter().map(Phase::duration).sum()
    }
}

/// The five LUTs needed for one refresh mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LutSet {
    /// Common electrode
    pub vcom: Lut,
    /// White to white
    pub ww: Lut,
    /// Black to white
    pub bw: Lut,
    /// White to black
    pub wb: Lut,
    /// Black to black
    pub bb: Lut,
}

impl LutSet {
    /// The LUTs in the order they are loaded into the controller
    pub fn tables(&self) -> [&Lut; 5] {
        [&self.vcom, &self.ww, &self.bw, &self.wb, &self.bb]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_encoding() {
        let phase = Phase::new(
            [Level::Vdh, Level::Vdl, Level::Gnd, Level::Gnd],
            [0x28, 0x28, 0, 0],
            1,
        );
        assert_eq!(phase.to_bytes(), [0x60, 0x28, 0x28, 0x00, 0x00, 0x01]);

        let phase = Phase::new([Level::Vdhr; 4], [1, 2, 3, 4], 5);
        assert_eq!(phase.to_bytes(), [0xff, 1, 2, 3, 4, 5]);
        assert_eq!(Phase::EMPTY.to_bytes(), [0; PHASE_LEN]);
    }

    #[test]
    fn lut_lengths() {
        let vcom = Lut::new(LutRole::Vcom, [Phase::EMPTY]);
        let ww = Lut::new(LutRole::WhiteToWhite, [Phase::EMPTY]);
        assert_eq!(vcom.len(), 44);
        assert_eq!(ww.len(), 42);

        let mut buf = [0xAA; MAX_LUT_LEN];
        assert_eq!(vcom.encode(&mut buf).len(), 44);
        assert_eq!(ww.encode(&mut buf), &[0u8; 42][..]);
    }

    #[test]
    fn duration() {
        let lut = Lut::new(
            LutRole::BlackToWhite,
            [
                Phase::new([Level::Vdh, Level::Gnd, Level::Gnd, Level::Gnd], [8, 0, 0, 0], 2),
                Phase::new([Level::Vdl, Level::Vdh, Level::Gnd, Level::Gnd], [4, 6, 0, 0], 1),
            ],
        );
        assert_eq!(lut.duration(), 26);
    }
}
