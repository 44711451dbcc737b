//! Flash wait states (MSC_READCTRL.MODE).
//!
//! The MODE field packs the wait-state count together with the SCBTP flag.
//! Whatever SCBTP setting is already programmed is carried over on every
//! update; only the wait-state count changes.

use crate::chip::Chip;
use crate::pac::msc::{self, readctrl};
use crate::pac::RegisterAccess;
use crate::time::Hertz;

/// Decoded READCTRL.MODE.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ReadMode {
    pub wait_states: u8,
    /// Suppressed conditional branch target prefetch.
    pub scbtp: bool,
}

impl ReadMode {
    pub const fn from_bits(mode: u32) -> Self {
        let (wait_states, scbtp) = match mode {
            readctrl::MODE_WS0 => (0, false),
            readctrl::MODE_WS1 => (1, false),
            readctrl::MODE_WS0SCBTP => (0, true),
            readctrl::MODE_WS1SCBTP => (1, true),
            readctrl::MODE_WS2 => (2, false),
            readctrl::MODE_WS2SCBTP => (2, true),
            // reserved encodings carry no SCBTP
            _ => (0, false),
        };
        Self { wait_states, scbtp }
    }

    pub const fn to_bits(self) -> u32 {
        match (self.wait_states, self.scbtp) {
            (0, false) => readctrl::MODE_WS0,
            (1, false) => readctrl::MODE_WS1,
            (2, false) => readctrl::MODE_WS2,
            (0, true) => readctrl::MODE_WS0SCBTP,
            (1, true) => readctrl::MODE_WS1SCBTP,
            (2, true) => readctrl::MODE_WS2SCBTP,
            _ => ::core::panic!("READCTRL has no mode above two wait states"),
        }
    }

    fn read<R: RegisterAccess>(regs: &mut R) -> (u32, Self) {
        let regval = regs.read(msc::READCTRL);
        let mode = (regval & readctrl::MODE_MASK) >> readctrl::MODE_SHIFT;
        (regval & !readctrl::MODE_MASK, Self::from_bits(mode))
    }
}

fn write_wait_states<R: RegisterAccess>(regs: &mut R, wait_states: u8) {
    let (rest, current) = ReadMode::read(regs);
    let mode = ReadMode {
        wait_states,
        scbtp: current.scbtp,
    };
    regs.write(msc::READCTRL, rest | (mode.to_bits() << readctrl::MODE_SHIFT));
}

/// Program the highest wait-state count the part supports.
pub(crate) fn set_max_wait_states<R: RegisterAccess>(regs: &mut R, chip: &Chip) {
    write_wait_states(regs, chip.max_wait_states());
}

/// Program the smallest wait-state count valid at `hfcoreclk`.
///
/// Halts if `hfcoreclk` is above every limit of `chip`.
pub(crate) fn set_wait_states<R: RegisterAccess>(regs: &mut R, chip: &Chip, hfcoreclk: Hertz) {
    let Some(wait_states) = chip.wait_states_for(hfcoreclk) else {
        panic!(
            "rcc: HFCORECLK {} Hz above {} flash limit of {} Hz",
            hfcoreclk.0,
            chip.name,
            chip.max_frequency().0
        );
    };

    debug!("rcc: {} flash wait states for {} Hz", wait_states, hfcoreclk.0);
    write_wait_states(regs, wait_states);
}
