pub mod mapquest;
pub mod notify;
pub mod unconfigured;
