//! MT8188 memif / channel-merge tables, rate table and resolvers.
//!
//! # Memifs
//!
//! | Memif | Dir | fs field          | enable | agent / msb bit | CM  |
//! |-------|-----|-------------------|--------|-----------------|-----|
//! | DL2   | DL  | `FS_CON0[14:10]`  | 18     | 18              |     |
//! | DL3   | DL  | `FS_CON0[19:15]`  | 19     | 19              |     |
//! | UL4   | UL  | `FS_CON2[19:15]`  | 4      | 3               |     |
//! | UL5   | UL  | `FS_CON2[24:20]`  | 5      | 4               |     |
//! | UL10  | UL  | `FS_CON3[19:15]`  | 10     | 9               | CM2 |
//!
//! DL memifs carry their channel count in `CON0[4:0]`. UL memifs only have a
//! mono bit; UL10 reaches higher channel counts through CM2.

use afe_drv::{
    AfeError, AfePlatform, AfePlatformDesc, ChannelMerge, FsCode, IrqData, MemifData, RateEntry,
    RegField, lookup_rate,
};

use crate::common::{CmId, DaiId, MemifId};
use crate::regs::*;

const MEMIF_32BIT_SUPPORTED: bool = cfg!(feature = "memif-32bit");

const fn dl_memif(
    name: &'static str,
    id: MemifId,
    [base, cur, end, con0]: [u32; 4],
    fs: RegField,
    enable_shift: u8,
    agent_shift: u8,
) -> MemifData {
    MemifData {
        name,
        id: id as usize,
        reg_ofs_base: base,
        reg_ofs_cur: cur,
        reg_ofs_end: end,
        fs,
        mono: None,
        int_odd_flag: None,
        enable: RegField::bit(AFE_DAC_CON0, enable_shift),
        hd: Some(RegField::bit(con0, MEMIF_HD_SHIFT)),
        agent_disable: Some(RegField::bit(AUDIO_TOP_CON5, agent_shift)),
        ch_num: Some(RegField::new(con0, 0, CH_NUM_MASK)),
        msb: Some(RegField::bit(AFE_NORMAL_BASE_ADR_MSB, agent_shift)),
        msb2: Some(RegField::bit(AFE_NORMAL_END_ADR_MSB, agent_shift)),
    }
}

const fn ul_memif(
    name: &'static str,
    id: MemifId,
    [base, cur, end, con0]: [u32; 4],
    fs: RegField,
    enable_shift: u8,
    agent_shift: u8,
) -> MemifData {
    MemifData {
        mono: Some(RegField::bit(con0, UL_MONO_SHIFT)),
        int_odd_flag: Some(RegField::bit(con0, UL_ODD_FLAG_SHIFT)),
        ch_num: None,
        ..dl_memif(name, id, [base, cur, end, con0], fs, enable_shift, agent_shift)
    }
}

pub static MEMIF_DATA: [MemifData; MemifId::COUNT] = [
    dl_memif(
        "DL2",
        MemifId::Dl2,
        [AFE_DL2_BASE, AFE_DL2_CUR, AFE_DL2_END, AFE_DL2_CON0],
        RegField::new(AFE_MEMIF_AGENT_FS_CON0, 10, FS_MASK),
        18,
        18,
    ),
    dl_memif(
        "DL3",
        MemifId::Dl3,
        [AFE_DL3_BASE, AFE_DL3_CUR, AFE_DL3_END, AFE_DL3_CON0],
        RegField::new(AFE_MEMIF_AGENT_FS_CON0, 15, FS_MASK),
        19,
        19,
    ),
    ul_memif(
        "UL4",
        MemifId::Ul4,
        [AFE_UL4_BASE, AFE_UL4_CUR, AFE_UL4_END, AFE_UL4_CON0],
        RegField::new(AFE_MEMIF_AGENT_FS_CON2, 15, FS_MASK),
        4,
        3,
    ),
    ul_memif(
        "UL5",
        MemifId::Ul5,
        [AFE_UL5_BASE, AFE_UL5_CUR, AFE_UL5_END, AFE_UL5_CON0],
        RegField::new(AFE_MEMIF_AGENT_FS_CON2, 20, FS_MASK),
        5,
        4,
    ),
    ul_memif(
        "UL10",
        MemifId::Ul10,
        [AFE_UL10_BASE, AFE_UL10_CUR, AFE_UL10_END, AFE_UL10_CON0],
        RegField::new(AFE_MEMIF_AGENT_FS_CON3, 15, FS_MASK),
        10,
        9,
    ),
];

pub static CM_DATA: [ChannelMerge; CmId::COUNT] = [ChannelMerge {
    id: CmId::Cm2 as usize,
    reg: AFE_CM2_CON,
    sel: RegField::new(AFE_CM2_CON, 30, CM_SEL_MASK),
    sel_default: 1,
    ch_num: RegField::new(AFE_CM2_CON, 2, CH_NUM_MASK),
    en: RegField::new(AFE_CM2_CON, 0, CM_EN_MASK),
    update_cnt: RegField::new(AFE_CM2_CON, 16, CM_UPDATE_CNT_MASK),
    update_cnt_default: 0x3,
}];

/// Memif interrupts are owned by the application processor on MT8188.
pub static IRQ_DATA: [IrqData; 0] = [];

/// 8k family codes 0..=8, 44.1k family codes 16..=24.
pub static RATES: [RateEntry; 18] = [
    RateEntry::new(8000, 0),
    RateEntry::new(12000, 1),
    RateEntry::new(16000, 2),
    RateEntry::new(24000, 3),
    RateEntry::new(32000, 4),
    RateEntry::new(48000, 5),
    RateEntry::new(96000, 6),
    RateEntry::new(192000, 7),
    RateEntry::new(384000, 8),
    RateEntry::new(7350, 16),
    RateEntry::new(11025, 17),
    RateEntry::new(14700, 18),
    RateEntry::new(22050, 19),
    RateEntry::new(29400, 20),
    RateEntry::new(44100, 21),
    RateEntry::new(88200, 22),
    RateEntry::new(176400, 23),
    RateEntry::new(352800, 24),
];

pub fn resolve_rate(rate: u32) -> Result<FsCode, AfeError> {
    lookup_rate(&RATES, rate)
}

/// Channel-merge unit wired in front of `memif`, if any.
pub fn resolve_cm(memif: MemifId) -> Option<CmId> {
    match memif {
        MemifId::Ul10 => Some(CmId::Cm2),
        _ => None,
    }
}

/// The MT8188 AFE.
#[derive(Clone, Copy, Debug)]
pub struct Mt8188 {
    desc: AfePlatformDesc,
}

impl Mt8188 {
    pub const fn new() -> Self {
        Self::with_memif_32bit(MEMIF_32BIT_SUPPORTED)
    }

    /// Same tables, explicit 32-bit memif flag.
    pub const fn with_memif_32bit(memif_32bit_supported: bool) -> Self {
        Self {
            desc: AfePlatformDesc {
                base_addr: AFE_BASE_ADDR,
                memifs: &MEMIF_DATA,
                memif_dl_num: MemifId::DL_NUM,
                memif_32bit_supported,
                cms: &CM_DATA,
                irqs: &IRQ_DATA,
                dai_num: DaiId::COUNT,
            },
        }
    }
}

impl Default for Mt8188 {
    fn default() -> Self {
        Self::new()
    }
}

impl AfePlatform for Mt8188 {
    type Memif = MemifId;
    type Cm = CmId;

    fn desc(&self) -> &AfePlatformDesc {
        &self.desc
    }

    fn afe_fs(&self, rate: u32, _block: usize) -> Result<FsCode, AfeError> {
        resolve_rate(rate)
    }

    fn irq_fs(&self, rate: u32) -> Result<FsCode, AfeError> {
        resolve_rate(rate)
    }

    fn found_cm(&self, memif: MemifId) -> Option<CmId> {
        resolve_cm(memif)
    }
}

/// The one MT8188 platform instance.
pub static PLATFORM: Mt8188 = Mt8188::new();

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dl_and_ul_layouts_differ_where_expected() {
        let dl2 = &MEMIF_DATA[MemifId::Dl2 as usize];
        assert!(dl2.mono.is_none());
        assert_eq!(dl2.ch_num, Some(RegField::new(AFE_DL2_CON0, 0, 0x1f)));

        let ul10 = &MEMIF_DATA[MemifId::Ul10 as usize];
        assert_eq!(ul10.mono, Some(RegField::bit(AFE_UL10_CON0, 1)));
        assert_eq!(ul10.int_odd_flag, Some(RegField::bit(AFE_UL10_CON0, 0)));
        assert!(ul10.ch_num.is_none());
        assert_eq!(ul10.msb, Some(RegField::bit(AFE_NORMAL_BASE_ADR_MSB, 9)));
    }

    #[test]
    fn cm2_defaults() {
        let cm2 = &CM_DATA[0];
        assert_eq!(cm2.sel.shift, 30);
        assert_eq!(cm2.sel_default, 1);
        assert_eq!(cm2.update_cnt.mask, 0x1fff);
        assert_eq!(cm2.update_cnt_default, 0x3);
    }
}
