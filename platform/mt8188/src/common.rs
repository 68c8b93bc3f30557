//! MT8188 memif, channel-merge and DAI enumerations.
//!
//! Each enum's discriminant is its index into the matching table, and its
//! `COUNT` is the table length.

use afe_drv::{AfeError, HwId};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum MemifId {
    Dl2 = 0,
    Dl3,
    Ul4,
    Ul5,
    Ul10,
}

impl MemifId {
    pub const COUNT: usize = 5;
    /// `Dl2` and `Dl3`; playback memifs come first.
    pub const DL_NUM: usize = 2;
    pub const ALL: [MemifId; Self::COUNT] = [
        MemifId::Dl2,
        MemifId::Dl3,
        MemifId::Ul4,
        MemifId::Ul5,
        MemifId::Ul10,
    ];
}

impl HwId for MemifId {
    fn index(self) -> usize {
        self as usize
    }
}

impl TryFrom<usize> for MemifId {
    type Error = AfeError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(AfeError::InvalidMemif(index))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum CmId {
    Cm2 = 0,
}

impl CmId {
    pub const COUNT: usize = 1;
    pub const ALL: [CmId; Self::COUNT] = [CmId::Cm2];
}

impl HwId for CmId {
    fn index(self) -> usize {
        self as usize
    }
}

impl TryFrom<usize> for CmId {
    type Error = AfeError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::ALL.get(index).copied().ok_or(AfeError::InvalidCm(index))
    }
}

/// Backend DAIs routed to the memifs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum DaiId {
    Etdm1In = 0,
    Etdm2In,
    Etdm1Out,
    Etdm2Out,
    Etdm3Out,
    Dmic,
}

impl DaiId {
    pub const COUNT: usize = 6;
    pub const ALL: [DaiId; Self::COUNT] = [
        DaiId::Etdm1In,
        DaiId::Etdm2In,
        DaiId::Etdm1Out,
        DaiId::Etdm2Out,
        DaiId::Etdm3Out,
        DaiId::Dmic,
    ];
}
