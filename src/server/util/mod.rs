//! Small pure helpers shared by the model, service and seed layers.

pub mod format;
pub mod parse;
pub mod slug;
pub mod time;
