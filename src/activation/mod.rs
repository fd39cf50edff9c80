pub mod softmax;

pub use softmax::Softmax;
