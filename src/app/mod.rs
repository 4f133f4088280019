// Application layer - Use case interactors

pub mod container;
pub mod grab_interactor;
pub mod links_interactor;
pub mod metadata_interactor;

#[cfg(test)]
pub(crate) mod testing;

// Re-export interactors
pub use grab_interactor::{GrabInteractor, GrabReport, GrabRequest};
pub use links_interactor::LinksInteractor;
pub use metadata_interactor::MetadataInteractor;
