pub mod all_star;
pub mod common;
pub mod draw;
pub mod match_day;
pub mod participation;
pub mod player;
