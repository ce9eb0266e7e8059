use crate::Config;
use std::error::Error;

pub type ConfigResult = Result<Config, Box<dyn Error>>;
pub type StringResult = Result<String, Box<dyn Error>>;
pub type UnitResult = Result<(), Box<dyn Error>>;
pub type U64Result = Result<u64, Box<dyn Error>>;
pub type VecStringResult = Result<Vec<String>, Box<dyn Error>>;
