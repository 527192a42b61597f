pub mod use_game_sync;
