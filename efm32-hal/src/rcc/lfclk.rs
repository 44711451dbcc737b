//! LFACLK / LFBCLK selection.

use super::osc::{self, Oscillator};
use super::{LfClock, Lfsel, OscFreqs};
use crate::chip::Chip;
use crate::pac::cmu::{self, ctrl, hfcoreclkdiv, lfclksel};
use crate::pac::RegisterAccess;
use crate::time::Hertz;

/// The two low-frequency clock domains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LfDomain {
    A,
    B,
}

impl LfDomain {
    const fn sel_shift(self) -> u32 {
        match self {
            LfDomain::A => lfclksel::LFA_SHIFT,
            LfDomain::B => lfclksel::LFB_SHIFT,
        }
    }

    const fn sel_mask(self) -> u32 {
        match self {
            LfDomain::A => lfclksel::LFA_MASK,
            LfDomain::B => lfclksel::LFB_MASK,
        }
    }

    /// LFAE / LFBE, the ULFRCO extension bit.
    const fn ulfrco_mask(self) -> u32 {
        match self {
            LfDomain::A => lfclksel::LFAE_MASK,
            LfDomain::B => lfclksel::LFBE_MASK,
        }
    }
}

/// Clock the LE interface from HFCORECLK.
pub(crate) fn enable_le_clocking<R: RegisterAccess>(regs: &mut R, chip: &Chip) {
    regs.modify(cmu::HFCORECLKEN0, |v| v | chip.le_clock_en);
}

/// Above the part's HFLE limit, set HFLE and divide the LE clock by four.
pub(crate) fn enable_hfle<R: RegisterAccess>(regs: &mut R, chip: &Chip, hfcoreclk: Hertz) {
    if chip.needs_hfle(hfcoreclk) {
        debug!("rcc: HFLE on, LE clock DIV4 at {} Hz", hfcoreclk.0);
        regs.modify(cmu::CTRL, |v| v | ctrl::HFLE);
        regs.modify(cmu::HFCORECLKDIV, |v| v | hfcoreclkdiv::HFCORECLKLEDIV_DIV4);
    }
}

/// Start the source of one LF domain and select it in CMU_LFCLKSEL.
///
/// Returns the domain frequency, `None` when disabled.
pub(crate) fn configure<R: RegisterAccess>(
    regs: &mut R,
    chip: &Chip,
    domain: LfDomain,
    clock: LfClock,
    osc: &OscFreqs,
    hfcoreclk: Hertz,
) -> Option<Hertz> {
    let (sel, freq) = if clock.ulfrco {
        // ULFRCO is always running
        (Lfsel::Disabled, Some(osc.ulfrco))
    } else {
        let freq = match clock.sel {
            Lfsel::Disabled => None,
            Lfsel::Lfrco => {
                osc::enable(regs, Oscillator::Lfrco);
                Some(osc.lfrco)
            }
            Lfsel::Lfxo => {
                osc::enable(regs, Oscillator::Lfxo);
                Some(osc.lfxo)
            }
            Lfsel::HfcoreclkLeDiv2 => {
                enable_le_clocking(regs, chip);
                enable_hfle(regs, chip, hfcoreclk);
                osc::enable(regs, Oscillator::Hfxo);
                Some(hfcoreclk / 2)
            }
        };
        (clock.sel, freq)
    };

    let mut clear = domain.sel_mask();
    let mut set = sel.to_bits() << domain.sel_shift();
    if chip.lf_ulfrco_select {
        clear |= domain.ulfrco_mask();
        if clock.ulfrco {
            set |= domain.ulfrco_mask();
        }
    }
    regs.modify(cmu::LFCLKSEL, |v| (v & !clear) | set);

    debug!("rcc: LF{:?} <- {:?} (ulfrco: {})", domain, sel, clock.ulfrco);
    freq
}
