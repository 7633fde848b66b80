pub mod compose;
pub mod export;
pub mod industry;
pub mod interview;
pub mod menu;
pub mod save;
pub mod session;
pub mod template;
