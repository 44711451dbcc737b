//! Clock configuration and boot-time initialization.

use critical_section::CriticalSection;

use super::flash;
use super::lfclk::{self, LfDomain};
use super::osc::{self, Oscillator};
use super::set_freqs;
use super::{Clocks, Hfclksel, LfClock, OscFreqs};
use crate::chip::{self, Chip};
use crate::pac::cmu::{self, cmd, ctrl, hfcoreclkdiv};
use crate::pac::{Mmio, RegisterAccess};
use crate::time::Hertz;

/// Clock configuration
///
/// Describes how the board is wired: which oscillator drives HFCLK, what the
/// two LF domains run from, and the fitted oscillator frequencies.
///
/// Out of reset the part runs from HFRCO at 14 MHz with both LF domains off,
/// which is also what [`ConfigBuilder::new()`] describes.
#[non_exhaustive]
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ConfigBuilder {
    /// HFCLK source
    pub hfclk: Hfclksel,
    /// HFCLK divider (CMU_CTRL.HFCLKDIV). Only 0 is supported.
    pub hfclkdiv: u8,
    /// HFCORECLK prescaler. Only 0 is supported.
    pub hfcoreclkdiv: u8,
    /// HFPERCLK prescaler. Only 0 is supported.
    pub hfperclkdiv: u8,

    /// LFACLK source
    pub lfa: LfClock,
    /// LFBCLK source
    pub lfb: LfClock,

    /// Start AUXHFRCO explicitly.
    ///
    /// MSC and LESENSE start it on demand, but SWO needs it running.
    pub auxhfrco: bool,

    pub osc: OscFreqs,
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigBuilder {
    pub const fn new() -> Self {
        Self {
            hfclk: Hfclksel::Hfrco,
            hfclkdiv: 0,
            hfcoreclkdiv: 0,
            hfperclkdiv: 0,
            lfa: LfClock::DISABLED,
            lfb: LfClock::DISABLED,
            auxhfrco: false,
            osc: OscFreqs::new(),
        }
    }

    pub const fn with_hfclk(mut self, hfclk: Hfclksel) -> Self {
        self.hfclk = hfclk;
        self
    }

    pub const fn with_lfa(mut self, lfa: LfClock) -> Self {
        self.lfa = lfa;
        self
    }

    pub const fn with_lfb(mut self, lfb: LfClock) -> Self {
        self.lfb = lfb;
        self
    }

    pub const fn with_auxhfrco(mut self, auxhfrco: bool) -> Self {
        self.auxhfrco = auxhfrco;
        self
    }

    pub const fn with_osc(mut self, osc: OscFreqs) -> Self {
        self.osc = osc;
        self
    }

    /// Frequency HFCLK will run at.
    pub const fn hfclk_freq(&self) -> Hertz {
        self.osc.hfclk(self.hfclk)
    }

    /// Validate the clock configuration for the selected chip.
    ///
    /// Panics with a descriptive message if the configuration is invalid.
    /// Use inside `const { }` blocks to get compile-time errors.
    pub const fn check(&self) {
        self.check_for(&chip::CURRENT);
    }

    /// Validate the clock configuration against `chip`.
    ///
    /// Note: Uses `::core::panic!` to bypass defmt's panic override,
    /// which is not const-compatible.
    pub const fn check_for(&self, chip: &Chip) {
        if self.hfclkdiv != 0 {
            ::core::panic!("HFCLK divisor not yet supported");
        }
        if self.hfcoreclkdiv != 0 {
            ::core::panic!("HFCORECLK divisor not yet supported");
        }
        if self.hfperclkdiv != 0 {
            ::core::panic!("HFPERCLK divisor not yet supported");
        }

        let hfclk = self.hfclk_freq();
        if hfclk.0 == 0 {
            ::core::panic!("HFCLK source frequency is zero");
        }
        if chip.wait_states_for(hfclk).is_none() {
            ::core::panic!("HFCLK frequency exceeds the flash wait-state limit");
        }

        if !chip.lf_ulfrco_select {
            if self.lfa.ulfrco {
                ::core::panic!("ULFRCO cannot drive LFACLK on this part");
            }
            if self.lfb.ulfrco {
                ::core::panic!("ULFRCO cannot drive LFBCLK on this part");
            }
        }
    }

    /// Validate and return a [`Config`]. Use in `const { }` blocks for compile-time checking.
    ///
    /// ```rust,ignore
    /// const { rcc::ConfigBuilder::new().with_hfclk(Hfclksel::Hfxo).checked() }
    /// ```
    pub const fn checked(self) -> Config {
        self.check();
        Config(self)
    }
}

/// A validated clock configuration.
///
/// Can only be constructed via [`ConfigBuilder::checked()`], which validates at
/// compile time when used inside a `const { }` block.
pub struct Config(pub(crate) ConfigBuilder);

impl Default for Config {
    fn default() -> Self {
        ConfigBuilder::new().checked()
    }
}

// =============================================================================
// HFCLK
// =============================================================================

/// Set the HFXO buffer current for the crystal frequency, with HFLE above the
/// part's limit.
fn configure_hfxo_drive<R: RegisterAccess>(regs: &mut R, chip: &Chip, hfxo: Hertz) {
    // The HFXO frequency decides this, not the LFXO one: a 32 kHz crystal
    // never needs the boost.
    if chip.needs_hfle(hfxo) {
        regs.modify(cmu::CTRL, |v| {
            (v & !ctrl::HFXOBUFCUR_MASK) | ctrl::HFXOBUFCUR_BOOSTABOVE32MHZ | ctrl::HFLE
        });

        // LE accesses must also be divided down if the LE clock is already on
        if regs.read(cmu::HFCORECLKEN0) & chip.le_clock_en != 0 {
            regs.modify(cmu::HFCORECLKDIV, |v| v | hfcoreclkdiv::HFCORECLKLEDIV_DIV4);
        }
    } else {
        regs.modify(cmu::CTRL, |v| {
            (v & !(ctrl::HFXOBUFCUR_MASK | ctrl::HFLE)) | ctrl::HFXOBUFCUR_BOOSTUPTO32MHZ
        });
    }
}

/// Switch HFCLK to the configured source and return its frequency.
///
/// The part keeps running from HFRCO until the new oscillator reports ready.
/// Flash runs with the maximum wait states across the switch and only drops
/// to the minimum once the new source is active.
fn hfclk_config<R: RegisterAccess>(regs: &mut R, chip: &Chip, config: &ConfigBuilder) -> Hertz {
    let sel = config.hfclk;
    let frequency = config.hfclk_freq();

    if sel == Hfclksel::Hfxo && chip.hfle_limit.is_some() {
        configure_hfxo_drive(regs, chip, frequency);
    }

    osc::enable(regs, sel.into());

    flash::set_max_wait_states(regs, chip);

    info!("rcc: HFCLK <- {:?} ({} Hz)", sel, frequency.0);
    regs.write(cmu::CMD, sel.to_bits() << cmd::HFCLKSEL_SHIFT);

    flash::set_wait_states(regs, chip, frequency);
    frequency
}

/// Gate on the GPIO clock in CMU_HFPERCLKEN0.
pub(crate) fn enable_gpio_clock<R: RegisterAccess>(regs: &mut R, chip: &Chip) {
    regs.modify(cmu::HFPERCLKEN0, |v| v | chip.gpio_clock_en);
}

/// Run the full clock bring-up sequence against `regs`.
pub(crate) fn configure<R: RegisterAccess>(regs: &mut R, chip: &Chip, config: &ConfigBuilder) -> Clocks {
    let hfclk = hfclk_config(regs, chip, config);

    // Prescalers are rejected by `check()`, so both run at HFCLK.
    let hfcoreclk = hfclk;
    let hfperclk = hfclk;

    let auxclk = if config.auxhfrco {
        osc::enable(regs, Oscillator::Auxhfrco);
        Some(config.osc.auxhfrco)
    } else {
        None
    };

    let lfaclk = lfclk::configure(regs, chip, LfDomain::A, config.lfa, &config.osc, hfcoreclk);
    let lfbclk = lfclk::configure(regs, chip, LfDomain::B, config.lfb, &config.osc, hfcoreclk);

    enable_gpio_clock(regs, chip);

    Clocks {
        hfclk: hfclk.into(),
        hfcoreclk: hfcoreclk.into(),
        hfperclk: hfperclk.into(),
        lfaclk: lfaclk.into(),
        lfbclk: lfbclk.into(),
        auxclk: auxclk.into(),
    }
}

// =============================================================================
// Initialization
// =============================================================================

pub(crate) unsafe fn init(_cs: CriticalSection, config: Config) {
    let mut regs = unsafe { Mmio::steal() };
    let clocks = configure(&mut regs, &chip::CURRENT, &config.0);

    // Store the final clock frequencies for later access via clocks()
    unsafe { set_freqs(clocks) };
}
