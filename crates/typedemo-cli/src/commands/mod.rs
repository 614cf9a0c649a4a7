pub mod list;
pub mod play;
pub mod run;
pub mod show;
