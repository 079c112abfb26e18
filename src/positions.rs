// Position functions of the augmented syntax tree:
//
//   nullable(n), firstpos(n), lastpos(n)  per node   (annotate)
//   followpos(p)                          per leaf   (followpos)

mod annotate;
mod followpos;

pub use annotate::{Annotations, Attributes};
pub use followpos::Followpos;

#[cfg(test)]
mod tests;
