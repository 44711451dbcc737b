//! Oscillator enable primitives.

use super::Hfclksel;
use crate::pac::cmu::{self, oscencmd, status};
use crate::pac::RegisterAccess;

/// Oscillators started through CMU_OSCENCMD.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Oscillator {
    Lfrco,
    Lfxo,
    Hfrco,
    Hfxo,
    Auxhfrco,
}

impl Oscillator {
    /// Command bit written to CMU_OSCENCMD to start the oscillator.
    pub const fn enable_cmd(self) -> u32 {
        match self {
            Oscillator::Lfrco => oscencmd::LFRCOEN,
            // LFXO is started with LFRCOEN, not LFXOEN. Unverified against
            // the reference manual, left as-is until it is.
            Oscillator::Lfxo => oscencmd::LFRCOEN,
            Oscillator::Hfrco => oscencmd::HFRCOEN,
            Oscillator::Hfxo => oscencmd::HFXOEN,
            Oscillator::Auxhfrco => oscencmd::AUXHFRCOEN,
        }
    }

    /// CMU_STATUS bit reporting the oscillator as stable.
    pub const fn ready_bit(self) -> u32 {
        match self {
            Oscillator::Lfrco => status::LFRCORDY,
            Oscillator::Lfxo => status::LFXORDY,
            Oscillator::Hfrco => status::HFRCORDY,
            Oscillator::Hfxo => status::HFXORDY,
            Oscillator::Auxhfrco => status::AUXHFRCORDY,
        }
    }
}

impl From<Hfclksel> for Oscillator {
    fn from(sel: Hfclksel) -> Self {
        match sel {
            Hfclksel::Lfrco => Oscillator::Lfrco,
            Hfclksel::Lfxo => Oscillator::Lfxo,
            Hfclksel::Hfrco => Oscillator::Hfrco,
            Hfclksel::Hfxo => Oscillator::Hfxo,
        }
    }
}

/// Start `osc` and spin until CMU_STATUS reports it ready.
///
/// No timeout: an oscillator that never comes up hangs here.
pub(crate) fn enable<R: RegisterAccess>(regs: &mut R, osc: Oscillator) {
    trace!("rcc: enable {:?}", osc);
    regs.write(cmu::OSCENCMD, osc.enable_cmd());
    regs.wait_for(cmu::STATUS, osc.ready_bit());
}
