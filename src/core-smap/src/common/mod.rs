pub mod compression;
pub mod limits;
pub mod logging;
