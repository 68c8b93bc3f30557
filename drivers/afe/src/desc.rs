//! Static descriptor types the platform tables are built from.

use crate::error::AfeError;
use crate::reg::RegField;

/// Register layout of one memory interface.
///
/// Base, current and end pointers hold the low 32 bits of a buffer address.
/// `msb` and `msb2` hold bit 32 of the base and end addresses in shared
/// extension registers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MemifData {
    pub name: &'static str,
    /// Index of this entry in the platform's memif table.
    pub id: usize,
    pub reg_ofs_base: u32,
    pub reg_ofs_cur: u32,
    pub reg_ofs_end: u32,
    /// Sample-rate code.
    pub fs: RegField,
    /// Set for a single channel on capture memifs.
    pub mono: Option<RegField>,
    /// Interrupt on odd (instead of even) sample count.
    pub int_odd_flag: Option<RegField>,
    pub enable: RegField,
    /// 24/32-bit sample container.
    pub hd: Option<RegField>,
    /// Gates the memif's bus agent; cleared before enabling.
    pub agent_disable: Option<RegField>,
    /// Channel count, playback memifs only.
    pub ch_num: Option<RegField>,
    pub msb: Option<RegField>,
    pub msb2: Option<RegField>,
}

/// Register layout of one channel-merge unit.
///
/// All fields live in the unit's single control register `reg`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChannelMerge {
    pub id: usize,
    pub reg: u32,
    pub sel: RegField,
    pub sel_default: u32,
    /// Merged channel count minus one.
    pub ch_num: RegField,
    pub en: RegField,
    pub update_cnt: RegField,
    pub update_cnt_default: u32,
}

/// Register layout of one memif interrupt source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IrqData {
    pub id: usize,
    /// Period length in frames.
    pub cnt: RegField,
    pub fs: RegField,
    pub enable: RegField,
    /// Write 1 to clear the pending status.
    pub clear: RegField,
}

/// The hardware's encoding of a sample rate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FsCode(u8);

impl FsCode {
    pub const fn new(code: u8) -> Self {
        Self(code)
    }

    pub const fn get(self) -> u32 {
        self.0 as u32
    }
}

/// One row of a platform's rate table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RateEntry {
    pub rate: u32,
    pub code: FsCode,
}

impl RateEntry {
    pub const fn new(rate: u32, code: u8) -> Self {
        Self {
            rate,
            code: FsCode::new(code),
        }
    }
}

/// First entry whose rate matches exactly, in table order.
///
/// Rate tables are a couple dozen entries at most, so this is a plain scan.
pub fn lookup_rate(table: &[RateEntry], rate: u32) -> Result<FsCode, AfeError> {
    table
        .iter()
        .find(|entry| entry.rate == rate)
        .map(|entry| entry.code)
        .ok_or(AfeError::RateNotSupported(rate))
}
