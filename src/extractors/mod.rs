mod multipart;

pub use multipart::*;
