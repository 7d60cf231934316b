//! Contains common text reading and writing functionality.

mod text_reader;
pub(crate) use self::text_reader::*;

mod text_writer;
pub(crate) use self::text_writer::*;
