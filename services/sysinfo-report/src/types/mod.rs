//! Fact records reported by the platform

mod cpu;
mod memory;
mod os;

pub use cpu::*;
pub use memory::*;
pub use os::*;
