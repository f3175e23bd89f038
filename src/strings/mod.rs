//! Random alphanumeric string generation

mod random;

pub use random::{random_string, random_string_with, RandomStringError, ALPHANUMERIC};
