pub mod events;
pub mod pipeline;
pub mod settings;
pub mod state;
