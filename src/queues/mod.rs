pub mod buffer;
pub mod device;
pub mod request;
