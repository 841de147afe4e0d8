pub mod draw_engine;
pub mod tally;
