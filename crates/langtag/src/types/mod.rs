mod language_tag;

pub use language_tag::LanguageTag;
