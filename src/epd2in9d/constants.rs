use crate::waveform::{
    Level::{Gnd as G, Vdh as H, Vdl as L},
    Lut, LutRole, LutSet, Phase,
};

/// Waveforms for a full refresh of the whole panel
pub(crate) const LUT_FULL: LutSet = LutSet {
    vcom: Lut::new(
        LutRole::Vcom,
        [
            Phase::new([G, G, G, G], [0x08, 0x00, 0x00, 0x00], 2),
            Phase::new([H, L, G, G], [0x28, 0x28, 0x00, 0x00], 1),
            Phase::new([G, G, G, G], [0x14, 0x00, 0x00, 0x00], 1),
            Phase::new([G, G, G, G], [0x12, 0x12, 0x00, 0x00], 1),
        ],
    ),
    ww: Lut::new(
        LutRole::WhiteToWhite,
        [
            Phase::new([H, G, G, G], [0x08, 0x00, 0x00, 0x00], 2),
            Phase::new([L, H, G, G], [0x28, 0x28, 0x00, 0x00], 1),
            Phase::new([H, G, G, G], [0x14, 0x00, 0x00, 0x00], 1),
            Phase::new([L, L, G, G], [0x12, 0x12, 0x00, 0x00], 1),
        ],
    ),
    bw: Lut::new(
        LutRole::BlackToWhite,
        [
            Phase::new([H, G, G, G], [0x17, 0x00, 0x00, 0x00], 2),
            Phase::new([L, H, G, G], [0x0F, 0x0F, 0x00, 0x00], 3),
            Phase::new([H, G, G, G], [0x0A, 0x01, 0x00, 0x00], 1),
            Phase::new([L, L, G, G], [0x0E, 0x0E, 0x00, 0x00], 2),
        ],
    ),
    wb: Lut::new(
        LutRole::WhiteToBlack,
        [
            Phase::new([L, G, G, G], [0x08, 0x00, 0x00, 0x00], 2),
            Phase::new([L, H, G, G], [0x28, 0x28, 0x00, 0x00], 1),
            Phase::new([L, G, G, G], [0x14, 0x00, 0x00, 0x00], 1),
            Phase::new([H, H, G, G], [0x12, 0x12, 0x00, 0x00], 1),
        ],
    ),
    bb: Lut::new(
        LutRole::BlackToBlack,
        [
            Phase::new([L, G, G, G], [0x08, 0x00, 0x00, 0x00], 2),
            Phase::new([L, H, G, G], [0x28, 0x28, 0x00, 0x00], 1),
            Phase::new([L, G, G, G], [0x14, 0x00, 0x00, 0x00], 1),
            Phase::new([H, H, G, G], [0x12, 0x12, 0x00, 0x00], 1),
        ],
    ),
};

/// Waveforms for a quick update of a partial window
pub(crate) const LUT_PARTIAL: LutSet = LutSet {
    vcom: Lut::new(
        LutRole::Vcom,
        [Phase::new([G, G, G, G], [0x19, 0x01, 0x00, 0x00], 1)],
    ),
    ww: Lut::new(
        LutRole::WhiteToWhite,
        [Phase::new([G, G, G, G], [0x19, 0x01, 0x00, 0x00], 1)],
    ),
    bw: Lut::new(
        LutRole::BlackToWhite,
        [Phase::new([L, G, G, G], [0x19, 0x01, 0x00, 0x00], 1)],
    ),
    wb: Lut::new(
        LutRole::WhiteToBlack,
        [Phase::new([H, G, G, G], [0x19, 0x01, 0x00, 0x00], 1)],
    ),
    bb: Lut::new(
        LutRole::BlackToBlack,
        [Phase::new([G, G, G, G], [0x19, 0x01, 0x00, 0x00], 1)],
    ),
};
