//! Output sinks for accepted boards
//!
//! The search core has no opinion about presentation; these sinks render an
//! accepted board losslessly:
//! - Text (terminal block rendering, `# `/`. ` file marks, and the parser)
//! - PNG rasterization via the `image` crate

pub mod png;
pub mod text;
