#![no_std]
#![no_main]

use cortex_m_rt::entry;
use defmt::*;
use defmt_rtt as _;
use panic_probe as _;

// Reset configuration: HFRCO at 14 MHz, LF domains off.
#[entry]
fn main() -> ! {
    efm32_hal::init(Default::default());

    info!("Hello World!");
    efm32_hal::rcc::test_print_clocks();

    loop {
        cortex_m::asm::wfi();
    }
}
