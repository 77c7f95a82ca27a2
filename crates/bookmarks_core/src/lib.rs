pub mod domain;
pub mod guard;
pub mod ports;
pub mod session;

#[cfg(test)]
pub(crate) mod testing;

pub use domain::{Bookmark, Download, DownloadStatus, Folder, Id, Tag, User};
pub use guard::{Navigation, Route, RouteGuard, DEFAULT_LOGIN_ROUTE};
pub use ports::{PortError, PortResult, StorageService};
pub use session::{SessionSnapshot, SessionStore, TOKEN_KEY, USER_KEY};
