pub(crate) mod bytes;
#[macro_use]
pub(crate) mod serde_workaround;

pub mod encoding;
