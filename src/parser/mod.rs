//! OSF parsing module.

mod osf_parser;
pub mod package;
mod runs;

pub use osf_parser::OsfParser;
pub(crate) use osf_parser::parse_xml;
