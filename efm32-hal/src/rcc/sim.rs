//! Simulated CMU/MSC register file for host tests.
//!
//! Plain registers just store what is written. CMU_OSCENCMD and CMU_CMD are
//! command registers: writing them updates CMU_STATUS the way the hardware
//! would, except for ready bits marked as stuck. Every access is logged in
//! program order.

use std::collections::BTreeMap;

use crate::pac::cmu::{self, cmd, oscencmd, status};
use crate::pac::msc::{self, readctrl};
use crate::pac::RegisterAccess;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Access {
    Read(u32, u32),
    Write(u32, u32),
    Wait(u32, u32),
}

pub(crate) struct SimRegisters {
    regs: BTreeMap<u32, u32>,
    stuck: u32,
    pub log: Vec<Access>,
}

const ENABLE_CMDS: [u32; 5] = [
    oscencmd::HFRCOEN,
    oscencmd::HFXOEN,
    oscencmd::AUXHFRCOEN,
    oscencmd::LFRCOEN,
    oscencmd::LFXOEN,
];

const SEL_BITS: u32 = status::HFRCOSEL | status::HFXOSEL | status::LFRCOSEL | status::LFXOSEL;

impl SimRegisters {
    /// Reset state: HFRCO running and selected, one flash wait state.
    pub fn new() -> Self {
        let mut regs = BTreeMap::new();
        regs.insert(
            cmu::STATUS,
            status::HFRCOENS | status::HFRCORDY | status::HFRCOSEL,
        );
        regs.insert(msc::READCTRL, readctrl::MODE_WS1);
        Self {
            regs,
            stuck: 0,
            log: Vec::new(),
        }
    }

    /// Preset a register without logging.
    pub fn with_reg(mut self, addr: u32, value: u32) -> Self {
        self.regs.insert(addr, value);
        self
    }

    /// Ready bits in `mask` never come up.
    pub fn with_stuck(mut self, mask: u32) -> Self {
        self.stuck |= mask;
        self
    }

    /// Current value, without logging.
    pub fn peek(&self, addr: u32) -> u32 {
        self.regs.get(&addr).copied().unwrap_or(0)
    }

    /// Log index of the first occurrence of `access`.
    pub fn position(&self, access: Access) -> Option<usize> {
        self.log.iter().position(|a| *a == access)
    }

    /// `(log index, value)` of every write to `addr`, in order.
    pub fn writes_to(&self, addr: u32) -> Vec<(usize, u32)> {
        self.log
            .iter()
            .enumerate()
            .filter_map(|(i, a)| match *a {
                Access::Write(a, v) if a == addr => Some((i, v)),
                _ => None,
            })
            .collect()
    }

    fn oscillator_command(&mut self, value: u32) {
        // enable bit n starts the oscillator whose ENS/RDY bits are n and n + 1
        let mut st = self.peek(cmu::STATUS);
        for en in ENABLE_CMDS {
            if value & en != 0 {
                st |= en;
                if self.stuck & (en << 1) == 0 {
                    st |= en << 1;
                }
            }
        }
        self.regs.insert(cmu::STATUS, st);
    }

    fn clock_select(&mut self, value: u32) {
        let sel = match (value & cmd::HFCLKSEL_MASK) >> cmd::HFCLKSEL_SHIFT {
            1 => status::HFRCOSEL,
            2 => status::HFXOSEL,
            3 => status::LFRCOSEL,
            4 => status::LFXOSEL,
            _ => return,
        };
        let st = self.peek(cmu::STATUS);
        self.regs.insert(cmu::STATUS, (st & !SEL_BITS) | sel);
    }
}

impl RegisterAccess for SimRegisters {
    fn read(&mut self, addr: u32) -> u32 {
        let value = self.peek(addr);
        self.log.push(Access::Read(addr, value));
        value
    }

    fn write(&mut self, addr: u32, value: u32) {
        self.log.push(Access::Write(addr, value));
        match addr {
            cmu::OSCENCMD => self.oscillator_command(value),
            cmu::CMD => self.clock_select(value),
            _ => {
                self.regs.insert(addr, value);
            }
        }
    }

    /// Nothing changes between polls here, so a bit that is not already set
    /// never will be. Panic instead of spinning forever.
    fn wait_for(&mut self, addr: u32, mask: u32) {
        self.log.push(Access::Wait(addr, mask));
        if self.peek(addr) & mask == 0 {
            panic!("register {:#010x} never reported {:#x}", addr, mask);
        }
    }
}
