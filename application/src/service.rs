mod book;
mod catalog;
mod member;
mod rent;

#[cfg(test)]
pub(crate) mod mock;

pub use self::{book::*, catalog::*, member::*, rent::*};
