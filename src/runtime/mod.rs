pub mod deferred;
pub mod focus;
