pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(not(windows))]
pub const EXEC_NAME: &str = "regpush";
#[cfg(windows)]
pub const EXEC_NAME: &str = "regpush.exe";

pub const CONTEXT_STORE_PATH: &str = ".regpush/context.json";
