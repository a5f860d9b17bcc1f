// Internal types - not persisted, not exposed over any wire
pub mod context;
pub mod login;
