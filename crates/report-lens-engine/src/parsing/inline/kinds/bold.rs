/// Bold emphasis `**text**`.
///
/// The closing delimiter is the first `**` after the opening one, so the
/// match is as short as possible.
pub struct Bold;

impl Bold {
    pub const DELIM: &'static [u8; 2] = b"**";
}
