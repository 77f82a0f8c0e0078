pub mod episode_details;
pub mod mvi;
