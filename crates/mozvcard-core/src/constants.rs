/// vCard wire constants shared across crates
pub const VCARD_VERSION: &str = "4.0";

pub const LINE_TERMINATOR: &str = "\r\n";

pub const BEGIN_LINE: &str = "BEGIN:VCARD";
pub const END_LINE: &str = "END:VCARD";
pub const VERSION_LINE: &str = const_str::concat!("VERSION:", VCARD_VERSION);

/// Continuation lines start with exactly one of these.
pub const FOLD_MARKER: char = ' ';

/// Default physical line width, in characters.
pub const DEFAULT_FOLD_WIDTH: usize = 78;

/// Narrowest width the folder accepts.
pub const MIN_FOLD_WIDTH: usize = 20;
