pub mod callback;
pub mod callbacks;
pub mod error;
pub mod outputs;
