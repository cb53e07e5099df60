pub mod dispatch;
pub mod parse;
pub mod render;
pub mod script;
pub mod session;
