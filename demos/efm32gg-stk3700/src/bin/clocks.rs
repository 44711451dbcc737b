#![no_std]
#![no_main]

use cortex_m_rt::entry;
use defmt::info;
use defmt_rtt as _;
use panic_probe as _;

use efm32_hal::rcc::{self, ConfigBuilder, Hfclksel, LfClock, Lfsel, OscFreqs};
use efm32_hal::time::mhz;

// EFM32GG-STK3700: 48 MHz HFXO, 32.768 kHz LFXO.
// HFXO above 32 MHz needs the boosted buffer current and HFLE, both handled
// by init.
#[entry]
fn main() -> ! {
    info!("Hello World!");
    let mut config = efm32_hal::Config::default();

    config.rcc = const {
        ConfigBuilder::new()
            .with_hfclk(Hfclksel::Hfxo)
            .with_osc(OscFreqs::new().with_hfxo(mhz(48)))
            // LETIMER/RTC from the LFRCO, LEUART from HFCORECLK/2
            .with_lfa(LfClock::new(Lfsel::Lfrco))
            .with_lfb(LfClock::new(Lfsel::HfcoreclkLeDiv2))
            .checked()
    };

    efm32_hal::init(config);

    info!("Clock configuration complete");
    rcc::test_print_clocks();

    if let Some(f) = rcc::clocks().lfbclk.to_hertz() {
        info!("LEUART clock: {} Hz", f.0);
    }

    loop {
        cortex_m::asm::wfi();
    }
}
