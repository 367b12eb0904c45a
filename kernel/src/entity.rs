mod book;
mod catalog;
mod common;
mod member;

pub use self::{book::*, catalog::*, common::*, member::*};
