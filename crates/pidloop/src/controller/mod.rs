//! PID controller module
pub mod pid;

pub use self::pid::{Controller, PidTerms};
