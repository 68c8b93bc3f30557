//! Register fields and register access.
//!
//! Every field the AFE tables describe is a right-aligned mask at some bit
//! offset inside a 32-bit register. Offsets are relative to the AFE base
//! address. A field a memif doesn't have is `None` in the tables, so offset
//! zero is always a real register.

use core::ops::Range;

use bit_field::BitField;
use volatile_register::RW;

use crate::error::AfeError;

/// One bit field inside a 32-bit AFE register.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegField {
    /// Register offset from the AFE base address.
    pub reg: u32,
    /// Bit position of the field's LSB.
    pub shift: u8,
    /// Right-aligned mask, e.g. `0x1f` for a 5-bit field.
    pub mask: u32,
}

impl RegField {
    pub const fn new(reg: u32, shift: u8, mask: u32) -> Self {
        assert!(mask != 0 && mask & mask.wrapping_add(1) == 0, "mask must be contiguous from bit 0");
        assert!(shift as u32 + mask.count_ones() <= 32, "field runs past bit 31");
        Self { reg, shift, mask }
    }

    /// Single-bit field.
    pub const fn bit(reg: u32, shift: u8) -> Self {
        Self::new(reg, shift, 0x1)
    }

    pub const fn width(&self) -> u32 {
        self.mask.count_ones()
    }

    fn bits(&self) -> Range<usize> {
        let lo = self.shift as usize;
        lo..lo + self.width() as usize
    }

    /// Pull this field out of a full register value.
    pub fn get(&self, regval: u32) -> u32 {
        regval.get_bits(self.bits())
    }

    /// Replace this field inside a full register value.
    pub fn set(&self, regval: u32, value: u32) -> Result<u32, AfeError> {
        if value & !self.mask != 0 {
            return Err(AfeError::FieldOverflow {
                reg: self.reg,
                value,
            });
        }
        let mut regval = regval;
        regval.set_bits(self.bits(), value);
        Ok(regval)
    }
}

/// 32-bit register access relative to the AFE base.
pub trait RegisterIo {
    fn read(&self, offset: u32) -> u32;
    fn write(&mut self, offset: u32, value: u32);

    fn read_field(&self, field: RegField) -> u32 {
        field.get(self.read(field.reg))
    }

    /// Read-modify-write of one field. The register is untouched on overflow.
    fn update_field(&mut self, field: RegField, value: u32) -> Result<(), AfeError> {
        let regval = field.set(self.read(field.reg), value)?;
        self.write(field.reg, regval);
        Ok(())
    }
}

/// Memory-mapped AFE register block.
pub struct Mmio {
    base: usize,
}

impl Mmio {
    /// # Safety
    /// `base` must be the mapped AFE register block, valid for volatile
    /// 32-bit access at every offset the platform tables name, for as long
    /// as this `Mmio` lives. The caller must ensure exclusive access.
    pub const unsafe fn new(base: usize) -> Self {
        Self { base }
    }

    #[inline(always)]
    fn reg(&self, offset: u32) -> &RW<u32> {
        unsafe { &*((self.base + offset as usize) as *const RW<u32>) }
    }
}

impl RegisterIo for Mmio {
    #[inline(always)]
    fn read(&self, offset: u32) -> u32 {
        self.reg(offset).read()
    }

    #[inline(always)]
    fn write(&mut self, offset: u32, value: u32) {
        unsafe { self.reg(offset).write(value) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_get_and_set() {
        let fs = RegField::new(0x2e40, 10, 0x1f);
        let regval = fs.set(0xffff_ffff, 5).unwrap();
        assert_eq!(fs.get(regval), 5);
        // bits outside the field survive
        assert_eq!(regval | (0x1f << 10), 0xffff_ffff);
        assert_eq!(regval & (0x1f << 10), 5 << 10);
    }

    #[test]
    fn field_overflow_is_rejected() {
        let sel = RegField::bit(0x0e70, 30);
        assert_eq!(
            sel.set(0, 2),
            Err(AfeError::FieldOverflow { reg: 0x0e70, value: 2 })
        );
    }

    #[test]
    fn top_bit_field() {
        let top = RegField::bit(0x0, 31);
        assert_eq!(top.set(0, 1).unwrap(), 0x8000_0000);
        assert_eq!(top.get(0x8000_0000), 1);
    }

    #[test]
    fn mmio_reads_and_writes_backing_memory() {
        let mut block = [0u32; 4];
        let mut io = unsafe { Mmio::new(block.as_mut_ptr() as usize) };
        io.write(0x8, 0xdead_beef);
        io.update_field(RegField::new(0x4, 4, 0xf), 0xa).unwrap();
        assert_eq!(io.read(0x8), 0xdead_beef);
        assert_eq!(io.read_field(RegField::new(0x4, 4, 0xf)), 0xa);
        assert_eq!(block, [0, 0xa0, 0xdead_beef, 0]);
    }
}
