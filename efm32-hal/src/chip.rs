//! Silicon variant capabilities.
//!
//! The clock code never branches on the part number directly; it asks the
//! [`Chip`] record what the part supports. [`CURRENT`] is picked by Cargo
//! feature at build time.

use crate::pac::cmu::{hfcoreclken0, hfperclken0};
use crate::time::Hertz;

/// What one EFM32 family supports, as far as clock bring-up is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Chip {
    pub name: &'static str,
    /// Highest HFCORECLK each flash wait-state count can sustain, indexed by
    /// wait states. Strictly increasing, at least one entry.
    pub flash_ws_limits: &'static [Hertz],
    /// HFCORECLK above which CMU_CTRL.HFLE and the LE DIV4 divider are
    /// required. `None` on parts without HFLE.
    pub hfle_limit: Option<Hertz>,
    /// CMU_LFCLKSEL has the LFAE/LFBE bits that route ULFRCO.
    pub lf_ulfrco_select: bool,
    /// CMU_HFCORECLKEN0.LE, the HFCORECLK to LE interface gate.
    pub le_clock_en: u32,
    /// CMU_HFPERCLKEN0.GPIO.
    pub gpio_clock_en: u32,
}

const WS_LIMITS_32MHZ: [Hertz; 2] = [Hertz(16_000_000), Hertz(32_000_000)];
const WS_LIMITS_48MHZ: [Hertz; 3] = [Hertz(16_000_000), Hertz(32_000_000), Hertz(48_000_000)];
const HFLE_LIMIT: Hertz = Hertz(32_000_000);

impl Chip {
    pub const GECKO: Chip = Chip {
        name: "EFM32G",
        flash_ws_limits: &WS_LIMITS_32MHZ,
        hfle_limit: None,
        lf_ulfrco_select: false,
        le_clock_en: hfcoreclken0::LE_GECKO,
        gpio_clock_en: hfperclken0::GPIO_GECKO,
    };

    pub const TINY_GECKO: Chip = Chip {
        name: "EFM32TG",
        flash_ws_limits: &WS_LIMITS_32MHZ,
        hfle_limit: None,
        lf_ulfrco_select: true,
        le_clock_en: hfcoreclken0::LE_GECKO,
        gpio_clock_en: hfperclken0::GPIO_TINY_GECKO,
    };

    pub const GIANT_GECKO: Chip = Chip {
        name: "EFM32GG",
        flash_ws_limits: &WS_LIMITS_48MHZ,
        hfle_limit: Some(HFLE_LIMIT),
        lf_ulfrco_select: true,
        le_clock_en: hfcoreclken0::LE_GIANT_GECKO,
        gpio_clock_en: hfperclken0::GPIO_GIANT_GECKO,
    };

    pub const LEOPARD_GECKO: Chip = Chip {
        name: "EFM32LG",
        ..Self::GIANT_GECKO
    };

    pub const WONDER_GECKO: Chip = Chip {
        name: "EFM32WG",
        ..Self::GIANT_GECKO
    };

    /// Highest wait-state count the flash controller accepts.
    pub const fn max_wait_states(&self) -> u8 {
        (self.flash_ws_limits.len() - 1) as u8
    }

    /// Highest HFCORECLK any wait-state setting can sustain.
    pub const fn max_frequency(&self) -> Hertz {
        self.flash_ws_limits[self.flash_ws_limits.len() - 1]
    }

    /// Smallest wait-state count valid at `freq`, or `None` if `freq` is
    /// above every limit.
    pub const fn wait_states_for(&self, freq: Hertz) -> Option<u8> {
        let mut ws = 0;
        while ws < self.flash_ws_limits.len() {
            if freq.0 <= self.flash_ws_limits[ws].0 {
                return Some(ws as u8);
            }
            ws += 1;
        }
        None
    }

    /// Whether `hfcoreclk` needs HFLE. Always `false` on parts without it.
    pub const fn needs_hfle(&self, hfcoreclk: Hertz) -> bool {
        match self.hfle_limit {
            Some(limit) => hfcoreclk.0 > limit.0,
            None => false,
        }
    }
}

cfg_if::cfg_if! {
    if #[cfg(feature = "efm32g")] {
        pub const CURRENT: Chip = Chip::GECKO;
    } else if #[cfg(feature = "efm32tg")] {
        pub const CURRENT: Chip = Chip::TINY_GECKO;
    } else if #[cfg(feature = "efm32gg")] {
        pub const CURRENT: Chip = Chip::GIANT_GECKO;
    } else if #[cfg(feature = "efm32lg")] {
        pub const CURRENT: Chip = Chip::LEOPARD_GECKO;
    } else if #[cfg(feature = "efm32wg")] {
        pub const CURRENT: Chip = Chip::WONDER_GECKO;
    } else {
        compile_error!("No chip selected: enable one of the `efm32g`, `efm32tg`, `efm32gg`, `efm32lg`, `efm32wg` features");
    }
}
