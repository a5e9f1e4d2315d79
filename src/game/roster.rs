use alloc::format;
use alloc::string::String;
use core::cmp::Ordering;

use log::debug;
use rand::RngCore;

use crate::error::PlayerError;
use crate::player::{Player, PlayerId};

use super::Game;

const SEED_DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// A player attribute edited directly by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerField<'a> {
    /// Display name.
    Name(&'a str),
    /// Score override.
    Score(i64),
}

/// Index that keeps pointing at the same player after `removed` leaves.
///
/// Pointing at the removed player itself resets to the first seat.
fn index_after_removal(index: usize, removed: usize) -> usize {
    match index.cmp(&removed) {
        Ordering::Less => index,
        Ordering::Equal => 0,
        Ordering::Greater => index - 1,
    }
}

impl Game {
    /// Draws a base-36 avatar seed from the game's RNG.
    fn next_avatar_seed(&mut self) -> String {
        let mut value = self.rng.next_u64();
        let mut seed = String::new();
        loop {
            seed.push(char::from(SEED_DIGITS[(value % 36) as usize]));
            value /= 36;
            if value == 0 {
                break;
            }
        }
        seed
    }

    fn player_index(&self, id: PlayerId) -> Result<usize, PlayerError> {
        self.players
            .iter()
            .position(|p| p.id() == id)
            .ok_or(PlayerError::PlayerNotFound)
    }

    /// Seats a new player at the end of the table.
    ///
    /// Returns the assigned player ID.
    pub fn add_player(&mut self) -> PlayerId {
        let id = PlayerId(self.next_id);
        self.next_id += 1;

        let name = format!("{} {}", self.options.player_label, self.players.len() + 1);
        let seed = self.next_avatar_seed();
        self.players.push(Player::new(id, name, seed));
        debug!("player {id} joined");

        id
    }

    /// Removes a player from the table.
    ///
    /// Turn indices keep pointing at the same players; if the active or
    /// answering player is removed, that index resets to the first seat.
    ///
    /// # Errors
    ///
    /// Returns an error if the player is not found.
    pub fn remove_player(&mut self, id: PlayerId) -> Result<Player, PlayerError> {
        let removed = self.player_index(id)?;
        let player = self.players.remove(removed);

        self.turn.active = index_after_removal(self.turn.active, removed);
        self.turn.answering = index_after_removal(self.turn.answering, removed);
        debug!("player {id} left");

        Ok(player)
    }

    /// Hands the turn to the player at `index`.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no player at that index.
    pub fn set_active_player(&mut self, index: usize) -> Result<PlayerId, PlayerError> {
        let id = self
            .players
            .get(index)
            .map(Player::id)
            .ok_or(PlayerError::PlayerNotFound)?;
        self.turn.active = index;
        Ok(id)
    }

    /// Edits a player's name or score.
    ///
    /// # Errors
    ///
    /// Returns an error if the player is not found.
    pub fn set_player_field(
        &mut self,
        id: PlayerId,
        field: PlayerField<'_>,
    ) -> Result<(), PlayerError> {
        let index = self.player_index(id)?;
        let player = &mut self.players[index];
        match field {
            PlayerField::Name(name) => player.set_name(name),
            PlayerField::Score(score) => player.set_score(score),
        }
        Ok(())
    }

    /// Gives a player a fresh avatar seed and returns it.
    ///
    /// # Errors
    ///
    /// Returns an error if the player is not found.
    pub fn change_avatar(&mut self, id: PlayerId) -> Result<&str, PlayerError> {
        let index = self.player_index(id)?;
        let seed = self.next_avatar_seed();
        let player = &mut self.players[index];
        player.set_avatar_seed(seed);
        Ok(player.avatar_seed())
    }
}
