//! Clock types, constants, and global state.

use crate::time::{Hertz, MaybeHertz};
use core::sync::atomic::{AtomicBool, Ordering};

// =============================================================================
// Global Clock State
// =============================================================================

/// Whether `CLOCK_FREQS` has been initialized by `set_freqs()`.
static CLOCK_FREQS_INIT: AtomicBool = AtomicBool::new(false);

/// Clock frequencies resulting from `init()`.
static mut CLOCK_FREQS: Clocks = Clocks::ZERO;

/// Sets the clock frequencies.
///
/// Safety: Sets a mutable global.
pub(crate) unsafe fn set_freqs(freqs: Clocks) {
    debug!("rcc: {:?}", freqs);
    unsafe { CLOCK_FREQS = freqs };
    CLOCK_FREQS_INIT.store(true, Ordering::Release);
}

/// Safety: Reads a mutable global. Must be called after `set_freqs()`.
pub(crate) unsafe fn get_freqs() -> &'static Clocks {
    unsafe { &*core::ptr::addr_of!(CLOCK_FREQS) }
}

/// Get the clock configuration applied at boot.
///
/// # Panics
///
/// Panics if called before `init()`.
pub fn clocks() -> &'static Clocks {
    assert!(
        CLOCK_FREQS_INIT.load(Ordering::Acquire),
        "rcc: clocks() called before init()"
    );
    unsafe { get_freqs() }
}

// =============================================================================
// Constants
// =============================================================================

pub const CLK_LFRCO_FREQ: Hertz = Hertz(32_768);
pub const CLK_LFXO_FREQ: Hertz = Hertz(32_768);
/// HFRCO band selected out of reset.
pub const CLK_HFRCO_FREQ: Hertz = Hertz(14_000_000);
pub const CLK_HFXO_FREQ: Hertz = Hertz(48_000_000);
pub const CLK_ULFRCO_FREQ: Hertz = Hertz(1_000);
pub const CLK_AUXHFRCO_FREQ: Hertz = Hertz(14_000_000);

// =============================================================================
// Source selectors
// =============================================================================

/// HFCLK source, encoded as the CMU_CMD.HFCLKSEL command value.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Hfclksel {
    Hfrco = 1,
    Hfxo = 2,
    Lfrco = 3,
    Lfxo = 4,
}

impl Hfclksel {
    pub const fn to_bits(self) -> u32 {
        self as u32
    }
}

/// LFACLK/LFBCLK source, encoded as the CMU_LFCLKSEL.LFA/LFB field value.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Lfsel {
    Disabled = 0,
    Lfrco = 1,
    Lfxo = 2,
    /// HFCORECLK through the LE interface, divided by two.
    HfcoreclkLeDiv2 = 3,
}

impl Lfsel {
    pub const fn to_bits(self) -> u32 {
        self as u32
    }
}

/// One low-frequency clock domain (LFA or LFB).
///
/// When `ulfrco` is set it wins over `sel`: the domain is clocked from the
/// always-on ULFRCO and `sel` is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LfClock {
    pub sel: Lfsel,
    pub ulfrco: bool,
}

impl LfClock {
    pub const DISABLED: LfClock = LfClock {
        sel: Lfsel::Disabled,
        ulfrco: false,
    };

    pub const fn new(sel: Lfsel) -> Self {
        Self { sel, ulfrco: false }
    }

    /// Clock the domain from ULFRCO.
    pub const fn ulfrco() -> Self {
        Self {
            sel: Lfsel::Disabled,
            ulfrco: true,
        }
    }

    pub const fn with_ulfrco(mut self, ulfrco: bool) -> Self {
        self.ulfrco = ulfrco;
        self
    }
}

impl Default for LfClock {
    fn default() -> Self {
        Self::DISABLED
    }
}

/// Oscillator frequencies as fitted on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct OscFreqs {
    pub lfrco: Hertz,
    pub lfxo: Hertz,
    pub hfrco: Hertz,
    pub hfxo: Hertz,
    pub ulfrco: Hertz,
    pub auxhfrco: Hertz,
}

impl OscFreqs {
    pub const fn new() -> Self {
        Self {
            lfrco: CLK_LFRCO_FREQ,
            lfxo: CLK_LFXO_FREQ,
            hfrco: CLK_HFRCO_FREQ,
            hfxo: CLK_HFXO_FREQ,
            ulfrco: CLK_ULFRCO_FREQ,
            auxhfrco: CLK_AUXHFRCO_FREQ,
        }
    }

    pub const fn with_lfrco(mut self, lfrco: Hertz) -> Self {
        self.lfrco = lfrco;
        self
    }

    pub const fn with_lfxo(mut self, lfxo: Hertz) -> Self {
        self.lfxo = lfxo;
        self
    }

    pub const fn with_hfrco(mut self, hfrco: Hertz) -> Self {
        self.hfrco = hfrco;
        self
    }

    pub const fn with_hfxo(mut self, hfxo: Hertz) -> Self {
        self.hfxo = hfxo;
        self
    }

    pub const fn with_ulfrco(mut self, ulfrco: Hertz) -> Self {
        self.ulfrco = ulfrco;
        self
    }

    pub const fn with_auxhfrco(mut self, auxhfrco: Hertz) -> Self {
        self.auxhfrco = auxhfrco;
        self
    }

    /// Frequency of the oscillator behind an HFCLK selection.
    pub const fn hfclk(&self, sel: Hfclksel) -> Hertz {
        match sel {
            Hfclksel::Hfrco => self.hfrco,
            Hfclksel::Hfxo => self.hfxo,
            Hfclksel::Lfrco => self.lfrco,
            Hfclksel::Lfxo => self.lfxo,
        }
    }
}

impl Default for OscFreqs {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Clocks struct
// =============================================================================

/// Clock frequencies after configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Clocks {
    pub hfclk: MaybeHertz,
    /// CPU and core modules (MSC, DMA, LE interface).
    pub hfcoreclk: MaybeHertz,
    pub hfperclk: MaybeHertz,
    /// None when LFACLK is disabled.
    pub lfaclk: MaybeHertz,
    /// None when LFBCLK is disabled.
    pub lfbclk: MaybeHertz,
    /// Only reported when AUXHFRCO was started explicitly.
    pub auxclk: MaybeHertz,
}

impl Clocks {
    pub(crate) const ZERO: Self = Self {
        hfclk: MaybeHertz::NONE,
        hfcoreclk: MaybeHertz::NONE,
        hfperclk: MaybeHertz::NONE,
        lfaclk: MaybeHertz::NONE,
        lfbclk: MaybeHertz::NONE,
        auxclk: MaybeHertz::NONE,
    };
}
