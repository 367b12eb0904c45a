mod book;
mod catalog;
mod member;
mod rent;

pub use self::{book::*, catalog::*, member::*, rent::*};

fn listing<T: std::fmt::Display>(heading: &str, lines: impl IntoIterator<Item = T>) -> String {
    lines
        .into_iter()
        .fold(heading.to_string(), |text, line| format!("{text}\n - {line}"))
}
