/// The observation an agent receives about one neighbouring tile of its current location.
///
/// The handle is an opaque, identity-comparable reference into the environment's state graph;
/// the agent never dereferences it, it only hands it back inside an [`Action`].
///
/// [`Action`]: crate::search::Action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile<S> {
    /// The state handle of the tile.
    pub handle: S,
    /// The grid position of the tile, used by heuristics.
    pub position: (i32, i32),
    /// Whether an agent may occupy the tile.
    pub passable: bool,
    /// Whether the tile is marked as a goal location.
    pub goal: bool,
}
