//! MediaTek MT8188 audio front-end platform description.
//!
//! Static register layout of the MT8188 AFE as seen from the audio DSP:
//! five memifs (DL2, DL3 for playback, UL4, UL5, UL10 for capture), one
//! channel-merge unit (CM2, in front of UL10 for multi-line DMIC capture) and
//! the sample-rate table. [`Mt8188`] exposes all of it to the generic
//! [`afe_drv::Afe`] driver through [`afe_drv::AfePlatform`].
//!
//! # Features
//!
//! - `memif-32bit`: report 32-bit memif transfers as supported. Off by
//!   default; use [`Mt8188::with_memif_32bit`] to pick at runtime instead.
//!
//! # Example
//!
//! ```
//! use afe_drv::AfePlatform;
//! use afe_mt8188::{CmId, MemifId, PLATFORM};
//!
//! assert_eq!(PLATFORM.afe_fs(48000, 0).unwrap().get(), 5);
//! assert_eq!(PLATFORM.found_cm(MemifId::Ul10), Some(CmId::Cm2));
//! assert_eq!(PLATFORM.found_cm(MemifId::Dl2), None);
//! ```

#![cfg_attr(not(test), no_std)]

pub mod common;
pub mod platform;
pub mod regs;

pub use common::{CmId, DaiId, MemifId};
pub use platform::{CM_DATA, IRQ_DATA, MEMIF_DATA, Mt8188, PLATFORM, RATES, resolve_cm, resolve_rate};
