//! Export contents of `replay` folder
mod replay_frame;
mod replay_session;

pub use self::{
    replay_frame::*,
    replay_session::*,
};
