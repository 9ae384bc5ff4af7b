pub mod appwrite;

pub use appwrite::{queries, AppwriteClient, DocumentList};
