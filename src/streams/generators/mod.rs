mod uniform_byte;

pub use uniform_byte::UniformByteGenerator;
