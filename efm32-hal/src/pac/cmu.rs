//! Clock Management Unit.
//!
//! Offsets and fields follow the Gecko/Giant Gecko register layout. Fields
//! that only exist on some parts (HFLE, LFAE/LFBE) are always
//! defined here; `crate::chip::Chip` says whether they may be touched.
//! Clock gate bits move between families and are listed per layout.

pub const BASE: u32 = 0x400C_8000;

pub const CTRL: u32 = BASE + 0x000;
pub const HFCORECLKDIV: u32 = BASE + 0x004;
pub const OSCENCMD: u32 = BASE + 0x020;
pub const CMD: u32 = BASE + 0x024;
pub const LFCLKSEL: u32 = BASE + 0x028;
pub const STATUS: u32 = BASE + 0x02C;
pub const HFCORECLKEN0: u32 = BASE + 0x040;
pub const HFPERCLKEN0: u32 = BASE + 0x044;

pub mod ctrl {
    pub const HFXOBUFCUR_SHIFT: u32 = 5;
    pub const HFXOBUFCUR_MASK: u32 = 0x3 << HFXOBUFCUR_SHIFT;
    pub const HFXOBUFCUR_BOOSTUPTO32MHZ: u32 = 0x1 << HFXOBUFCUR_SHIFT;
    pub const HFXOBUFCUR_BOOSTABOVE32MHZ: u32 = 0x3 << HFXOBUFCUR_SHIFT;
    pub const HFLE: u32 = 1 << 30;
}

pub mod hfcoreclkdiv {
    pub const HFCORECLKLEDIV_DIV4: u32 = 1 << 8;
}

pub mod oscencmd {
    pub const HFRCOEN: u32 = 1 << 0;
    pub const HFXOEN: u32 = 1 << 2;
    pub const AUXHFRCOEN: u32 = 1 << 4;
    pub const LFRCOEN: u32 = 1 << 6;
    pub const LFXOEN: u32 = 1 << 8;
}

pub mod cmd {
    pub const HFCLKSEL_SHIFT: u32 = 0;
    pub const HFCLKSEL_MASK: u32 = 0x7 << HFCLKSEL_SHIFT;
}

pub mod lfclksel {
    pub const LFA_SHIFT: u32 = 0;
    pub const LFA_MASK: u32 = 0x3 << LFA_SHIFT;
    pub const LFB_SHIFT: u32 = 2;
    pub const LFB_MASK: u32 = 0x3 << LFB_SHIFT;
    pub const LFAE_SHIFT: u32 = 16;
    pub const LFAE_MASK: u32 = 0x1 << LFAE_SHIFT;
    pub const LFBE_SHIFT: u32 = 20;
    pub const LFBE_MASK: u32 = 0x1 << LFBE_SHIFT;
}

pub mod status {
    pub const HFRCOENS: u32 = 1 << 0;
    pub const HFRCORDY: u32 = 1 << 1;
    pub const HFXOENS: u32 = 1 << 2;
    pub const HFXORDY: u32 = 1 << 3;
    pub const AUXHFRCOENS: u32 = 1 << 4;
    pub const AUXHFRCORDY: u32 = 1 << 5;
    pub const LFRCOENS: u32 = 1 << 6;
    pub const LFRCORDY: u32 = 1 << 7;
    pub const LFXOENS: u32 = 1 << 8;
    pub const LFXORDY: u32 = 1 << 9;
    pub const HFRCOSEL: u32 = 1 << 10;
    pub const HFXOSEL: u32 = 1 << 11;
    pub const LFRCOSEL: u32 = 1 << 12;
    pub const LFXOSEL: u32 = 1 << 13;
}

/// Clock gate positions differ between families; `crate::chip::Chip` picks
/// the one that applies.
pub mod hfcoreclken0 {
    /// EFM32G, EFM32TG: AES, DMA, LE, EBI.
    pub const LE_GECKO: u32 = 1 << 2;
    /// EFM32GG, EFM32LG, EFM32WG: DMA, AES, USBC, USB, LE, EBI.
    pub const LE_GIANT_GECKO: u32 = 1 << 4;
}

pub mod hfperclken0 {
    pub const GPIO_GECKO: u32 = 1 << 12;
    pub const GPIO_TINY_GECKO: u32 = 1 << 8;
    pub const GPIO_GIANT_GECKO: u32 = 1 << 13;
}
