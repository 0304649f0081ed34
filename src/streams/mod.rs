pub mod generators;
pub mod stream;

pub use generators::UniformByteGenerator;
pub use stream::ByteStream;
