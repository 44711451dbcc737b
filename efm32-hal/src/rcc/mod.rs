//! Clock management (CMU) and flash wait states (MSC).
//!
//! [`crate::init`] runs the bring-up sequence once at boot:
//!
//! 1. switch HFCLK to the configured oscillator, with flash wait states
//!    raised to the maximum across the switch and lowered afterwards,
//! 2. optionally start AUXHFRCO,
//! 3. select the LFACLK and LFBCLK sources,
//! 4. gate on the GPIO clock.
//!
//! The resulting frequencies are available through [`clocks()`].

use critical_section::CriticalSection;

mod clock;
pub use clock::*;

mod clock_config;
pub use clock_config::{Config, ConfigBuilder};
pub(crate) use clock_config::init;

mod flash;
pub use flash::ReadMode;

mod lfclk;
pub use lfclk::LfDomain;

mod osc;
pub use osc::Oscillator;

#[cfg(test)]
mod sim;

use crate::pac::Mmio;

/// Gates on the GPIO clock.
pub fn enable_gpio_with_cs(_cs: CriticalSection) {
    let mut regs = unsafe { Mmio::steal() };
    clock_config::enable_gpio_clock(&mut regs, &crate::chip::CURRENT);
}

/// Gates on the GPIO clock.
///
/// [`crate::init`] already does this; it is only needed if the gate was
/// turned off afterwards.
pub fn enable_gpio() {
    critical_section::with(|cs| enable_gpio_with_cs(cs));
}

pub fn test_print_clocks() {
    let clocks = clocks();
    info!("Clock frequencies: {:?}", clocks);
}
