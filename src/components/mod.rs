pub mod app;
pub mod mood_legend;
pub mod mood_map;
pub mod playlist_card;
pub mod track_detail;
