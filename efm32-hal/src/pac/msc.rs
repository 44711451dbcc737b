//! Memory System Controller.

pub const BASE: u32 = 0x400C_0000;

pub const READCTRL: u32 = BASE + 0x004;

pub mod readctrl {
    pub const MODE_SHIFT: u32 = 0;
    pub const MODE_MASK: u32 = 0x7 << MODE_SHIFT;

    pub const MODE_WS0: u32 = 0;
    pub const MODE_WS1: u32 = 1;
    pub const MODE_WS0SCBTP: u32 = 2;
    pub const MODE_WS1SCBTP: u32 = 3;
    pub const MODE_WS2: u32 = 4;
    pub const MODE_WS2SCBTP: u32 = 5;
}
