pub mod ranks;
pub mod replay;
