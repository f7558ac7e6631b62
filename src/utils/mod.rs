pub mod text;

pub use text::{REF_PREFIX, normalize_ref_name, split_message};
