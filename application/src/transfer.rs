mod book;
mod member;
mod rent;

pub use self::{book::*, member::*, rent::*};
