//! MT8188 AFE register offsets, relative to [`AFE_BASE_ADDR`].
//!
//! Only the registers the platform tables reference are listed.
//!
//! | Block                  | Offsets          |
//! |------------------------|------------------|
//! | Top clock/agent gating | `0x0000..0x0020` |
//! | Channel merge          | `0x0e50..0x0e80` |
//! | Memif enable           | `0x1200`         |
//! | DL memifs              | `0x1b10..0x1c00` |
//! | UL memifs              | `0x1d00..0x2000` |
//! | Agent fs / addr MSB    | `0x2e40..0x2e58` |

pub const AFE_BASE_ADDR: u32 = 0x10b1_0000;

pub const AUDIO_TOP_CON5: u32 = 0x0014;

pub const AFE_CM2_CON: u32 = 0x0e70;

pub const AFE_DAC_CON0: u32 = 0x1200;

pub const AFE_DL2_BASE: u32 = 0x1b14;
pub const AFE_DL2_CUR: u32 = 0x1b1c;
pub const AFE_DL2_END: u32 = 0x1b24;
pub const AFE_DL2_CON0: u32 = 0x1b28;

pub const AFE_DL3_BASE: u32 = 0x1b54;
pub const AFE_DL3_CUR: u32 = 0x1b5c;
pub const AFE_DL3_END: u32 = 0x1b64;
pub const AFE_DL3_CON0: u32 = 0x1b68;

pub const AFE_UL4_BASE: u32 = 0x1dc4;
pub const AFE_UL4_CUR: u32 = 0x1dcc;
pub const AFE_UL4_END: u32 = 0x1dd4;
pub const AFE_UL4_CON0: u32 = 0x1dd8;

pub const AFE_UL5_BASE: u32 = 0x1e04;
pub const AFE_UL5_CUR: u32 = 0x1e0c;
pub const AFE_UL5_END: u32 = 0x1e14;
pub const AFE_UL5_CON0: u32 = 0x1e18;

pub const AFE_UL10_BASE: u32 = 0x1f44;
pub const AFE_UL10_CUR: u32 = 0x1f4c;
pub const AFE_UL10_END: u32 = 0x1f54;
pub const AFE_UL10_CON0: u32 = 0x1f58;

pub const AFE_MEMIF_AGENT_FS_CON0: u32 = 0x2e40;
pub const AFE_MEMIF_AGENT_FS_CON2: u32 = 0x2e48;
pub const AFE_MEMIF_AGENT_FS_CON3: u32 = 0x2e4c;

pub const AFE_NORMAL_BASE_ADR_MSB: u32 = 0x2e50;
pub const AFE_NORMAL_END_ADR_MSB: u32 = 0x2e54;

// Field widths shared by every memif and CM entry.
pub const FS_MASK: u32 = 0x1f;
pub const CH_NUM_MASK: u32 = 0x1f;
pub const CM_SEL_MASK: u32 = 0x1;
pub const CM_EN_MASK: u32 = 0x1;
pub const CM_UPDATE_CNT_MASK: u32 = 0x1fff;

// Bit 5 of every memif CON0.
pub const MEMIF_HD_SHIFT: u8 = 5;
// UL memif CON0.
pub const UL_MONO_SHIFT: u8 = 1;
pub const UL_ODD_FLAG_SHIFT: u8 = 0;
