use std::time::Duration;

/// Apps Script deployment backing the results spreadsheet.
pub const DEFAULT_ENDPOINT: &str = "https://script.google.com/macros/s/AKfycbwEkhEDAMFvPTHClIJNrijs49xhqRf6RvzyU7oR2ZbfJWy9KySPljH-36OUr7AmXkNsPw/exec";

/// Prefix of the generated callback name sent with every read.
pub const CALLBACK_PREFIX: &str = "__jsonp_cb_";

/// Number of random alphanumerics appended to [`CALLBACK_PREFIX`].
pub const CALLBACK_SUFFIX_LEN: usize = 10;

/// Content type of write requests. Plain text keeps the backend from
/// answering with a preflight-style rejection.
pub const WRITE_CONTENT_TYPE: &str = "text/plain;charset=utf-8";

/// Apps Script answers POSTs with a redirect to the script output.
pub const MAX_REDIRECTS: usize = 10;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
