pub mod forensics;
pub mod logger;
