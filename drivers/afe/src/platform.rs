//! The capability interface between a chip's tables and the generic driver.

use crate::desc::{ChannelMerge, FsCode, IrqData, MemifData};
use crate::error::AfeError;

bitflags::bitflags! {
    /// What a platform descriptor offers, derived from its tables.
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub struct AfeCaps: u8 {
        const MEMIF_32BIT   = 0b0000_0001;
        const CHANNEL_MERGE = 0b0000_0010;
        const IRQ_TABLE     = 0b0000_0100;
    }
}

/// Identifier from a chip's fixed enumeration, indexing one of its tables.
pub trait HwId: Copy + Eq + core::fmt::Debug {
    fn index(self) -> usize;
}

/// Fixed facts about one AFE variant.
///
/// Memifs are ordered playback first: indices `0..memif_dl_num` are DL.
#[derive(Clone, Copy, Debug)]
pub struct AfePlatformDesc {
    pub base_addr: u32,
    pub memifs: &'static [MemifData],
    pub memif_dl_num: usize,
    pub memif_32bit_supported: bool,
    pub cms: &'static [ChannelMerge],
    /// May be empty; the memif interrupts are then owned by another core.
    pub irqs: &'static [IrqData],
    pub dai_num: usize,
}

impl AfePlatformDesc {
    pub fn memif_num(&self) -> usize {
        self.memifs.len()
    }

    pub fn cm_num(&self) -> usize {
        self.cms.len()
    }

    pub fn irq_num(&self) -> usize {
        self.irqs.len()
    }

    pub fn memif(&self, index: usize) -> Result<&'static MemifData, AfeError> {
        let memifs = self.memifs;
        memifs.get(index).ok_or(AfeError::InvalidMemif(index))
    }

    pub fn cm(&self, index: usize) -> Result<&'static ChannelMerge, AfeError> {
        let cms = self.cms;
        cms.get(index).ok_or(AfeError::InvalidCm(index))
    }

    pub fn is_playback(&self, index: usize) -> bool {
        index < self.memif_dl_num
    }

    pub fn caps(&self) -> AfeCaps {
        let mut caps = AfeCaps::empty();
        caps.set(AfeCaps::MEMIF_32BIT, self.memif_32bit_supported);
        caps.set(AfeCaps::CHANNEL_MERGE, !self.cms.is_empty());
        caps.set(AfeCaps::IRQ_TABLE, !self.irqs.is_empty());
        caps
    }
}

/// One AFE variant, as seen by the generic driver.
///
/// Implementors are immutable; every method is a pure read of static data.
pub trait AfePlatform {
    type Memif: HwId;
    type Cm: HwId;

    fn desc(&self) -> &AfePlatformDesc;

    /// Rate code for a memif's agent. `block` is the memif index; variants
    /// with per-block rate encodings use it, others ignore it.
    fn afe_fs(&self, rate: u32, block: usize) -> Result<FsCode, AfeError>;

    /// Rate code for interrupt timing.
    fn irq_fs(&self, rate: u32) -> Result<FsCode, AfeError>;

    /// Channel-merge unit feeding `memif`. `None` means the memif doesn't
    /// need one, which is the common case.
    fn found_cm(&self, memif: Self::Memif) -> Option<Self::Cm>;
}

#[cfg(test)]
mod tests {
    use super::*;

    const EMPTY: AfePlatformDesc = AfePlatformDesc {
        base_addr: 0,
        memifs: &[],
        memif_dl_num: 0,
        memif_32bit_supported: true,
        cms: &[],
        irqs: &[],
        dai_num: 0,
    };

    #[test]
    fn caps_follow_tables() {
        assert_eq!(EMPTY.caps(), AfeCaps::MEMIF_32BIT);
        let no_32 = AfePlatformDesc {
            memif_32bit_supported: false,
            ..EMPTY
        };
        assert!(no_32.caps().is_empty());
    }

    #[test]
    fn out_of_range_lookups() {
        assert_eq!(EMPTY.memif(0), Err(AfeError::InvalidMemif(0)));
        assert_eq!(EMPTY.cm(3), Err(AfeError::InvalidCm(3)));
        assert!(!EMPTY.is_playback(0));
    }
}
