#![cfg_attr(not(test), no_std)]
#![doc = include_str!("../README.md")]

// This mod MUST go first, so that the others see its macros.
pub(crate) mod fmt;

pub mod chip;
pub mod pac;
pub mod rcc;
pub mod time;

/// HAL configuration for EFM32
pub mod config {
    use crate::rcc;

    /// HAL configuration passed when initializing.
    #[non_exhaustive]
    #[derive(Default)]
    pub struct Config {
        pub rcc: rcc::Config,
    }
}
pub use config::Config;

/// Initialize the clock tree with the provided configuration.
///
/// This should only be called once at startup, before anything depends on
/// the core or peripheral clocks.
pub fn init(config: Config) {
    critical_section::with(|cs| unsafe {
        rcc::init(cs, config.rcc);
    });
}
