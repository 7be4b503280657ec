pub mod color;
pub mod debounce;
pub mod timer;
