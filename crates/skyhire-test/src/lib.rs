//! SkyHire availability server - integration test support.
//!
//! Re-exports the workspace crates so integration tests can use
//! `skyhire_test::` paths.

pub mod component {
    pub use skyhire_service::availability;
    pub use skyhire_service::error;
    pub use skyhire_service::ranking;

    pub mod config {
        pub use skyhire_app::config::ConfigHandler;
        pub use skyhire_core::config::*;
    }

    pub mod types {
        pub use skyhire_core::types::*;
    }
}

pub mod app {
    pub use skyhire_app::*;
}
