//! Export contents of `trajectory` folder
mod trajectory_errors;
mod trajectory_buffer;
mod direction;
mod config;
mod trail;
mod estimator;

pub use self::{
    trajectory_errors::*,
    trajectory_buffer::*,
    direction::*,
    config::*,
    trail::*,
    estimator::*,
};
