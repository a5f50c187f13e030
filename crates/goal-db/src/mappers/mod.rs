//! Row → Entity mappers

mod goal;
mod user;
