//! Data-driven unit content and loaders.
//!
//! Static data lives in a data directory and is read once at startup:
//! - Units with their buffs and situations (RON)
//! - Shared buff templates (RON)
//! - Database configuration (TOML)
//! - User settings (TOML)
//!
//! Raw file records use plain strings for enumerated keys so that an unknown
//! element, class or species fails the load with the offending unit named.
//! Everything is converted into `tactics-core` types before it leaves this
//! crate.

pub mod loaders;

pub use loaders::{
    BuffTemplateLoader, BuffTemplates, ConfigLoader, ContentFactory, LoadResult, SettingLoader,
    UnitLoader,
};
