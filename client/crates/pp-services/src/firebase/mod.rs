//! REST clients for the managed backend.

pub(crate) mod auth_messages;
pub mod cloud_storage;
pub mod firestore;
pub(crate) mod firestore_value;
pub mod identity_toolkit;

pub use cloud_storage::CloudStorageBlobStore;
pub use firestore::FirestoreProfileStore;
pub use identity_toolkit::IdentityToolkitAuthority;
