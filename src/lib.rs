pub mod confetti;
pub mod draw;
pub mod gui;
pub mod logging;
pub mod name_gen;
pub mod pool;
pub mod raffle;
pub mod settings;
pub mod ticker;
