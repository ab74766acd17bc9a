use strum::{Display, EnumIter};

/// Built-in object kinds that carry internal state the equality rules do not
/// look into. Values of these kinds are only equal to themselves.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumIter,
)]
pub enum ExoticKind {
    Map,
    Set,
    WeakMap,
    WeakSet,
    WeakRef,
    Error,
    Promise,
    Arguments,
    ArrayBuffer,
    DataView,
}
