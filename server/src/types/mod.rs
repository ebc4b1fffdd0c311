pub mod fact;
pub mod page;
pub mod pattern;
pub mod term;

pub use fact::{Fact, Term};
pub use page::{PAGE_SIZE, PageResult};
pub use pattern::TriplePattern;
pub use term::{Identifier, Literal, MalformedLiteral};
