pub mod generated;
pub mod options;

pub use generated::GeneratedText;
pub use options::{Font, FontSize, GenerationOptions, Mode, Typography};
