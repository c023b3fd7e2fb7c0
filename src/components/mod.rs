pub mod app;
pub mod click_game_view;
pub mod confetti_overlay;
pub mod countdown;
pub mod invite_view;
pub mod leaderboard_panel;
pub mod photo_carousel;
pub mod photos_view;
pub mod rsvp_form;
pub mod useful_links;

pub use app::App;
