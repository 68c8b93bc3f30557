//! Chip-independent side of the MediaTek audio front-end (AFE).
//!
//! The AFE moves audio samples between system memory and the audio
//! peripherals. Each data path is a memory interface ("memif"): DL memifs
//! feed playback backends, UL memifs are filled by capture backends. Some
//! capture memifs sit behind a channel-merge (CM) unit that combines several
//! physical input lines into one high channel count stream.
//!
//! Everything chip-specific lives in a platform crate that fills in an
//! [`AfePlatformDesc`] and implements [`AfePlatform`]. This crate only knows
//! how to read those tables and program the fields they describe:
//!
//! - [`reg`]: register fields and register access ([`RegisterIo`], [`Mmio`])
//! - [`desc`]: memif, channel-merge, IRQ and rate table entry types
//! - [`platform`]: the capability trait a chip implements
//! - [`driver`]: [`Afe`], which programs memifs through a platform
//!
//! # Example
//!
//! ```rust,ignore
//! use afe_drv::{Afe, Mmio};
//! use afe_mt8188::{MemifId, PLATFORM};
//!
//! let io = unsafe { Mmio::new(PLATFORM.desc().base_addr as usize) };
//! let mut afe = Afe::new(&PLATFORM, io);
//! afe.memif_set_rate(MemifId::Dl2, 48000)?;
//! afe.memif_set_enable(MemifId::Dl2, true)?;
//! ```

#![cfg_attr(not(test), no_std)]

pub mod desc;
pub mod driver;
pub mod error;
pub mod platform;
pub mod reg;

pub use desc::{ChannelMerge, FsCode, IrqData, MemifData, RateEntry, lookup_rate};
pub use driver::{Afe, MemifConfig};
pub use error::AfeError;
pub use platform::{AfeCaps, AfePlatform, AfePlatformDesc, HwId};
pub use reg::{Mmio, RegField, RegisterIo};
