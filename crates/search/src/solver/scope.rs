use crate::*;
use ismcts_core::Player;

/// How many trees a search keeps and which one drives each decision.
///
/// Zero-sized strategy types select the variant at compile time, the same
/// way tree policies and execution strategies do.
pub trait Scope<G>: Default + Send + Sync
where
    G: Game,
{
    /// Number of trees grown from `root`.
    fn observers(root: &G) -> usize;
    /// Tree that chooses moves for `player`.
    fn observer(player: Player) -> usize;
}

/// Single observer: one tree for every seat, determinized from the root
/// player's point of view.
#[derive(Debug, Clone, Copy, Default)]
pub struct Single;

impl<G> Scope<G> for Single
where
    G: Game,
{
    fn observers(_: &G) -> usize {
        1
    }
    fn observer(_: Player) -> usize {
        0
    }
}

/// Multiple observers: one tree per seat. Each seat picks its own moves
/// from its own tree, so a player's statistics only ever reflect what
/// that player could tell apart.
#[derive(Debug, Clone, Copy, Default)]
pub struct Multi;

impl<G> Scope<G> for Multi
where
    G: PomGame,
{
    fn observers(root: &G) -> usize {
        root.players()
    }
    fn observer(player: Player) -> usize {
        player
    }
}
