pub mod path;
pub mod roots;
pub mod slashes;

pub use path::{normalize, try_normalize};
pub use roots::{is_absolute_path, is_absolute_path_opt, is_unc_root, is_unix_root, is_win_root};
pub use slashes::{
    ensure_leading_slash, ensure_leading_slash_opt, ensure_trailing_slash,
    ensure_trailing_slash_opt, remove_leading_slash, remove_leading_slash_checked,
    remove_trailing_slash, remove_trailing_slash_checked, PathStrExt,
};
