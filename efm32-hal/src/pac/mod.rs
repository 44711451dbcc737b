//! Register access layer for the CMU and MSC blocks.
//!
//! Clock bring-up only touches a handful of 32-bit registers, so instead of a
//! generated PAC this module exposes raw addresses and bit-field constants
//! ([`cmu`], [`msc`]) and a [`RegisterAccess`] trait that the `rcc` code is
//! generic over. [`Mmio`] is the on-target implementation.

pub mod cmu;
pub mod msc;

/// 32-bit register read/write/poll primitives.
pub trait RegisterAccess {
    /// Read the register at `addr`.
    fn read(&mut self, addr: u32) -> u32;

    /// Write `value` to the register at `addr`.
    fn write(&mut self, addr: u32, value: u32);

    /// Read-modify-write the register at `addr`.
    fn modify(&mut self, addr: u32, f: impl FnOnce(u32) -> u32) {
        let value = self.read(addr);
        self.write(addr, f(value));
    }

    /// Spin until at least one bit of `mask` reads as set at `addr`.
    ///
    /// There is no timeout: hardware that never reports ready blocks forever.
    fn wait_for(&mut self, addr: u32, mask: u32) {
        while self.read(addr) & mask == 0 {}
    }
}

/// Direct memory-mapped register access.
pub struct Mmio {
    _private: (),
}

impl Mmio {
    /// Get a handle to the memory-mapped registers.
    ///
    /// # Safety
    ///
    /// Nothing else may be reconfiguring CMU/MSC registers while the handle
    /// is in use.
    pub unsafe fn steal() -> Self {
        Self { _private: () }
    }
}

impl RegisterAccess for Mmio {
    #[inline(always)]
    fn read(&mut self, addr: u32) -> u32 {
        unsafe { core::ptr::read_volatile(addr as *const u32) }
    }

    #[inline(always)]
    fn write(&mut self, addr: u32, value: u32) {
        unsafe { core::ptr::write_volatile(addr as *mut u32, value) }
    }

    fn wait_for(&mut self, addr: u32, mask: u32) {
        while self.read(addr) & mask == 0 {
            cortex_m::asm::nop();
        }
    }
}
