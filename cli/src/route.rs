mod book;
mod catalog;
mod member;
mod rent;

pub use self::{book::*, catalog::*, member::*, rent::*};
