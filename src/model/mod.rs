pub mod forward;

pub use forward::{forward, Forward};
