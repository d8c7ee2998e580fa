//! CLI command implementations.

pub(crate) mod parse;
pub(crate) mod typefaces;

pub(crate) use parse::ParseArgs;
pub(crate) use typefaces::TypefacesArgs;
