mod element_class;
mod tag;
mod tag_hash;

pub use self::element_class::ElementClass;
pub use self::tag::Tag;
pub use self::tag_hash::TagHash;
