pub mod create;
pub mod options;
pub mod variant;
