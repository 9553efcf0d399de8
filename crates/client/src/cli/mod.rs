pub mod args;
pub mod op;
pub mod ops;

pub use ops::{Identity, Images, Index, Init, Login, Tag, Upload, Version};
