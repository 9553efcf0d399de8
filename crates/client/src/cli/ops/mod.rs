pub mod identity;
pub mod images;
pub mod index;
pub mod init;
pub mod login;
pub mod tag;
pub mod upload;
pub mod version;

pub use identity::Identity;
pub use images::Images;
pub use index::Index;
pub use init::Init;
pub use login::Login;
pub use tag::Tag;
pub use upload::Upload;
pub use version::Version;
