pub mod carousel;
pub mod typewriter;
