// Core modules implementing the pattern demonstrations and error modeling.
pub mod adapt;
pub mod display;
pub mod error;
pub mod reader;
pub mod shared;
pub mod token;
