pub mod decode;
pub mod encode;
pub mod explain;
pub mod record_file;
pub mod render;
pub mod session;
