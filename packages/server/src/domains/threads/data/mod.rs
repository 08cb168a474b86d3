pub mod thread;

pub use thread::{ThreadAuthorData, ThreadData, ThreadReplyData};
