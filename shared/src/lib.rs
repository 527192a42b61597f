pub mod countdown;
pub mod game;
pub mod rules;
pub mod wordset;
