pub mod codec;
pub mod label;
pub mod policy;
pub mod time_format;
pub mod view;
