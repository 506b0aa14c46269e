//! Export contents of `utils` folder
mod utils;
mod fps;

pub use self::{
    utils::*,
    fps::*,
};
