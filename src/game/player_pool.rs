use smallvec::SmallVec;

pub trait Player {
    type Id: PartialEq + Copy;

    fn id(&self) -> Self::Id;
}

/// Fixed rotation of players. The player under the cursor owns the current turn.
#[derive(Clone, Debug)]
pub struct PlayerQueue<T> {
    players: SmallVec<[T; 2]>,
    current: usize,
}

impl<T: Player> PlayerQueue<T> {
    pub fn new(players: impl IntoIterator<Item = T>) -> Self {
        Self {
            players: players.into_iter().collect(),
            current: 0,
        }
    }

    pub fn as_slice(&self) -> &[T] {
        self.players.as_slice()
    }

    /// Get current element from pool without advancing
    pub fn get_current(&self) -> Option<&T> {
        self.players.get(self.current)
    }

    /// Advance by one, wrapping around, and return the new current element
    pub fn next(&mut self) -> Option<&T> {
        if self.players.is_empty() {
            return None;
        }
        self.current = (self.current + 1) % self.players.len();
        self.get_current()
    }

    /// Make the player with `id` current without changing the rotation order
    pub fn rotate_to(&mut self, id: T::Id) -> Option<&T> {
        self.current = self.players.iter().position(|player| player.id() == id)?;
        self.get_current()
    }

    pub fn find(&self, id: T::Id) -> Option<&T> {
        self.players.iter().find(|player| player.id() == id)
    }

    pub fn find_if<F>(&self, f: F) -> Option<&T>
    where
        F: FnMut(&&T) -> bool,
    {
        self.players.iter().find(f)
    }
}
