pub mod consensus;
pub mod detector;
pub mod layout;
pub mod sampler;
pub mod scanner;
pub mod source;
