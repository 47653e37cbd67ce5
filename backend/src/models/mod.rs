pub mod availability;
pub mod macros;
pub mod measures;
pub mod school;

pub use availability::*;
pub use measures::*;
pub use school::*;
