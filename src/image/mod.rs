pub mod buffer;
pub mod io;
pub mod u8;

pub use self::buffer::GrayBuffer;
pub use self::u8::ImageU8;
