#![cfg_attr(not(any(test, doctest, feature = "std")), no_std)]
#![doc = include_str!("../README.md")]

extern crate alloc;

mod accu;
pub use accu::*;
mod config;
pub use config::*;
mod dsm;
pub use dsm::*;
mod num;
pub use num::*;
mod period;
pub use period::*;
mod process;
pub use process::*;
mod sim;
pub use sim::*;

#[cfg(test)]
pub mod testing;
