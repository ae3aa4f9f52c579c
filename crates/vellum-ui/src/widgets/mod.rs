pub mod progress;
pub mod stack;
