pub mod draft;
pub mod http;
pub mod time;

pub use draft::FileDraftRepository;
pub use http::{HttpClientConfig, HttpClientError, HttpConsoleClient};
pub use time::SystemClock;
