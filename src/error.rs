use snafu::prelude::*;

/// Errors returned by [`List`](crate::List) and its cursors.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    /// The operation needs at least one element, but the list is empty.
    #[snafu(display("list is empty"))]
    EmptyContainer,

    /// A scan for the target value reached the end of a non-empty list.
    #[snafu(display("element not found"))]
    ValueNotFound,

    /// The value or the next link was accessed at the end position, which
    /// does not denote a real node.
    #[snafu(display("cannot access a node past the end of the list"))]
    InvalidNodeAccess,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
