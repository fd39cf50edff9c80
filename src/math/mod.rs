pub mod approx;

pub use approx::{approx, DEFAULT_EPS};
