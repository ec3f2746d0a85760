//! Reactive primitives: observable values and change-event fan-out.
//!
//! Settings are built on these; nothing here knows about storage.

pub mod feed;
pub mod observable;

pub use {feed::ChangeFeed, observable::Observable};
