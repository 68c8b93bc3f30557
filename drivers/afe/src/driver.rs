//! Generic memif programming on top of a platform's tables.

use log::{debug, warn};

use crate::desc::{ChannelMerge, MemifData};
use crate::error::AfeError;
use crate::platform::{AfePlatform, HwId};
use crate::reg::{RegField, RegisterIo};

/// Highest address bit the base/end registers plus MSB extension can hold.
const ADDR_BITS: u32 = 33;

/// Stream parameters for [`Afe::memif_configure`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MemifConfig {
    pub rate: u32,
    pub channels: u32,
    /// Sample container width: 16, 24 or 32.
    pub bits: u32,
    pub buffer_addr: u64,
    pub buffer_size: u32,
}

/// AFE driver bound to one platform and one register block.
pub struct Afe<'p, P: AfePlatform, R: RegisterIo> {
    platform: &'p P,
    io: R,
}

impl<'p, P: AfePlatform, R: RegisterIo> Afe<'p, P, R> {
    pub fn new(platform: &'p P, io: R) -> Self {
        Self { platform, io }
    }

    pub fn platform(&self) -> &'p P {
        self.platform
    }

    pub fn io(&self) -> &R {
        &self.io
    }

    pub fn release(self) -> R {
        self.io
    }

    fn memif(&self, memif: P::Memif) -> Result<&'static MemifData, AfeError> {
        self.platform.desc().memif(memif.index())
    }

    fn cm(&self, cm: P::Cm) -> Result<&'static ChannelMerge, AfeError> {
        self.platform.desc().cm(cm.index())
    }

    fn set_opt(&mut self, field: Option<RegField>, name: &'static str, value: u32) -> Result<(), AfeError> {
        let field = field.ok_or(AfeError::NoSuchField(name))?;
        self.io.update_field(field, value)
    }

    /// Base below 4 GiB, end above it.
    fn crosses_4g(&self, data: &MemifData) -> bool {
        let hi = |field: Option<RegField>| field.map_or(0, |f| self.io.read_field(f));
        hi(data.msb) == 0 && hi(data.msb2) != 0
    }

    pub fn memif_set_rate(&mut self, memif: P::Memif, rate: u32) -> Result<(), AfeError> {
        let data = self.memif(memif)?;
        let code = self.platform.afe_fs(rate, memif.index()).inspect_err(|_| {
            warn!("{}: rate {} not supported", data.name, rate);
        })?;
        debug!("{}: rate {} -> fs code {}", data.name, rate, code.get());
        self.io.update_field(data.fs, code.get())
    }

    /// Playback memifs take the count directly. Capture memifs are mono or
    /// stereo, unless a channel-merge unit feeds them, in which case the unit
    /// carries the count.
    pub fn memif_set_channels(&mut self, memif: P::Memif, channels: u32) -> Result<(), AfeError> {
        let data = self.memif(memif)?;
        if channels == 0 {
            return Err(AfeError::InvalidChannels(channels));
        }

        if let Some(cm) = self.platform.found_cm(memif) {
            let cm = self.cm(cm)?;
            debug!("{}: {} channels through CM{}", data.name, channels, cm.id);
            self.io
                .update_field(cm.ch_num, channels - 1)
                .map_err(|_| AfeError::InvalidChannels(channels))?;
            self.io.update_field(cm.sel, cm.sel_default)?;
            self.io.update_field(cm.update_cnt, cm.update_cnt_default)?;
            if let Some(mono) = data.mono {
                self.io.update_field(mono, (channels == 1) as u32)?;
            }
            return Ok(());
        }

        if let Some(ch_num) = data.ch_num {
            debug!("{}: {} channels", data.name, channels);
            return self
                .io
                .update_field(ch_num, channels)
                .map_err(|_| AfeError::InvalidChannels(channels));
        }

        match (data.mono, channels) {
            (Some(mono), 1 | 2) => {
                debug!("{}: {}", data.name, if channels == 1 { "mono" } else { "stereo" });
                self.io.update_field(mono, (channels == 1) as u32)
            }
            (Some(_), _) => {
                warn!("{}: {} channels needs a channel-merge unit", data.name, channels);
                Err(AfeError::InvalidChannels(channels))
            }
            (None, _) => Err(AfeError::NoSuchField("ch_num")),
        }
    }

    pub fn memif_set_format(&mut self, memif: P::Memif, bits: u32) -> Result<(), AfeError> {
        let data = self.memif(memif)?;
        let hd = match bits {
            16 => 0,
            24 | 32 => 1,
            _ => return Err(AfeError::InvalidFormat(bits)),
        };
        debug!("{}: {}-bit samples", data.name, bits);
        self.set_opt(data.hd, "hd", hd)
    }

    /// Program the ring buffer `[addr, addr + size)`.
    pub fn memif_set_addr(&mut self, memif: P::Memif, addr: u64, size: u32) -> Result<(), AfeError> {
        let data = self.memif(memif)?;
        if size == 0 {
            return Err(AfeError::InvalidBuffer);
        }
        let end = addr
            .checked_add(size as u64 - 1)
            .ok_or(AfeError::InvalidBuffer)?;
        if end >> ADDR_BITS != 0 {
            return Err(AfeError::InvalidBuffer);
        }

        let base_hi = (addr >> 32) as u32;
        let end_hi = (end >> 32) as u32;
        // Check both extension bits before touching any register.
        if (base_hi != 0 && data.msb.is_none()) || (end_hi != 0 && data.msb2.is_none()) {
            return Err(AfeError::InvalidBuffer);
        }

        debug!("{}: buffer {:#x}..={:#x}", data.name, addr, end);
        self.io.write(data.reg_ofs_base, addr as u32);
        self.io.write(data.reg_ofs_end, end as u32);
        if let Some(msb) = data.msb {
            self.io.update_field(msb, base_hi)?;
        }
        if let Some(msb2) = data.msb2 {
            self.io.update_field(msb2, end_hi)?;
        }
        Ok(())
    }

    /// Hardware position as a byte offset into the buffer. Zero before the
    /// memif has fetched anything.
    pub fn memif_pointer(&self, memif: P::Memif) -> Result<u32, AfeError> {
        let data = self.memif(memif)?;
        let cur = self.io.read(data.reg_ofs_cur);
        // A zero low word is a real position in a buffer that crosses 4 GiB.
        if cur == 0 && !self.crosses_4g(data) {
            return Ok(0);
        }
        Ok(cur.wrapping_sub(self.io.read(data.reg_ofs_base)))
    }

    pub fn memif_set_enable(&mut self, memif: P::Memif, enable: bool) -> Result<(), AfeError> {
        let data = self.memif(memif)?;
        let cm = self.platform.found_cm(memif);
        debug!("{}: {}", data.name, if enable { "enable" } else { "disable" });

        if enable {
            if let Some(agent_disable) = data.agent_disable {
                self.io.update_field(agent_disable, 0)?;
            }
            if let Some(cm) = cm {
                self.cm_set_enable(cm, true)?;
            }
            self.io.update_field(data.enable, 1)
        } else {
            self.io.update_field(data.enable, 0)?;
            if let Some(cm) = cm {
                self.cm_set_enable(cm, false)?;
            }
            Ok(())
        }
    }

    pub fn cm_set_enable(&mut self, cm: P::Cm, enable: bool) -> Result<(), AfeError> {
        let cm = self.cm(cm)?;
        self.io.update_field(cm.en, enable as u32)
    }

    /// Rate, channels, format and buffer in one go. Leaves the memif disabled.
    pub fn memif_configure(&mut self, memif: P::Memif, config: &MemifConfig) -> Result<(), AfeError> {
        self.memif_set_addr(memif, config.buffer_addr, config.buffer_size)?;
        self.memif_set_rate(memif, config.rate)?;
        self.memif_set_channels(memif, config.channels)?;
        self.memif_set_format(memif, config.bits)
    }
}
