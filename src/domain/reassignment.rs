//! Structural edits to the war tree.
//!
//! Unresolvable references and out-of-range source indexes are treated as
//! cancelled drag gestures and ignored. Moving a ready player is rejected
//! with `Locked`; adding a name that already appears anywhere in the tree
//! is rejected with `DuplicatePlayer`.

use super::errors::RosterError;
use super::models::{MatchRef, Player, ShadowWar};

/// Move the player at `from_index` to `to_index` in the destination match.
///
/// Source and destination may be the same match (a reorder). The
/// destination index is clamped to the end of the list, matching the
/// splice semantics of the drag-and-drop surface.
pub fn move_player(
    war: &mut ShadowWar,
    from: MatchRef,
    from_index: usize,
    to: MatchRef,
    to_index: usize,
) -> Result<(), RosterError> {
    if war.match_at(to).is_none() {
        return Ok(());
    }

    let removed = match war.match_at_mut(from) {
        Some(source) => match source.players.get(from_index) {
            Some(player) if player.is_ready => {
                return Err(RosterError::Locked(player.name.clone()));
            }
            Some(_) => source.players.remove(from_index),
            None => return Ok(()),
        },
        None => return Ok(()),
    };

    // the destination was resolved before the removal and removal never
    // changes the tier/match layout
    if let Some(destination) = war.match_at_mut(to) {
        let insert_at = to_index.min(destination.players.len());
        destination.players.insert(insert_at, removed);
    }

    Ok(())
}

/// Append a player to a match; duplicates by name are rejected tree-wide
pub fn add_player(
    war: &mut ShadowWar,
    target: MatchRef,
    player: Player,
) -> Result<(), RosterError> {
    if war.contains_player(&player.name) {
        return Err(RosterError::DuplicatePlayer(player.name));
    }

    if let Some(war_match) = war.match_at_mut(target) {
        war_match.players.push(player);
    }
    Ok(())
}

/// Remove the player at `index`; out-of-range is a no-op
pub fn remove_player(war: &mut ShadowWar, target: MatchRef, index: usize) {
    if let Some(war_match) = war.match_at_mut(target) {
        if index < war_match.players.len() {
            war_match.players.remove(index);
        }
    }
}

/// Flip the readiness flag, returning the new state when the player exists
pub fn toggle_ready(war: &mut ShadowWar, target: MatchRef, index: usize) -> Option<bool> {
    let player = war.match_at_mut(target)?.players.get_mut(index)?;
    player.is_ready = !player.is_ready;
    Some(player.is_ready)
}
