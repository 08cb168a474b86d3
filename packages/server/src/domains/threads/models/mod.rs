pub mod thread;

pub use thread::Thread;
