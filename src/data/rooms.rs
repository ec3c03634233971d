//! The manor map: a binary tree of rooms
//!
//! Each room optionally holds one clue and owns up to two child rooms.
//! The map is assembled once at startup and never changes during play;
//! dropping the root releases every room beneath it.

use super::Direction;

/// A room in the manor
#[derive(Debug)]
pub struct Room {
    name: String,
    clue: Option<String>,
    left: Option<Box<Room>>,
    right: Option<Box<Room>>,
}

impl Room {
    /// Create a room with no clue and no passages
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            clue: None,
            left: None,
            right: None,
        }
    }

    /// Create a room holding a clue
    pub fn with_clue(name: &str, clue: &str) -> Self {
        Self {
            name: name.to_string(),
            clue: Some(clue.to_string()),
            left: None,
            right: None,
        }
    }

    /// Attach a room behind the left passage
    pub fn left(mut self, room: Room) -> Self {
        self.left = Some(Box::new(room));
        self
    }

    /// Attach a room behind the right passage
    pub fn right(mut self, room: Room) -> Self {
        self.right = Some(Box::new(room));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn clue(&self) -> Option<&str> {
        self.clue.as_deref()
    }

    /// The room behind the given passage, if there is one
    pub fn child(&self, direction: Direction) -> Option<&Room> {
        match direction {
            Direction::Left => self.left.as_deref(),
            Direction::Right => self.right.as_deref(),
        }
    }

    /// A room with no passages out is a dead end
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_story() -> Room {
        Room::new("Hall")
            .left(Room::with_clue("Study", "ink stain"))
            .right(Room::new("Cellar").left(Room::new("Vault")))
    }

    #[test]
    fn child_access_follows_passages() {
        let root = two_story();
        let study = root.child(Direction::Left).unwrap();
        assert_eq!(study.name(), "Study");
        assert_eq!(study.clue(), Some("ink stain"));

        let cellar = root.child(Direction::Right).unwrap();
        assert_eq!(cellar.name(), "Cellar");
        assert_eq!(cellar.clue(), None);
        assert!(cellar.child(Direction::Right).is_none());
    }

    #[test]
    fn leaf_detection() {
        let root = two_story();
        assert!(!root.is_leaf());
        assert!(root.child(Direction::Left).unwrap().is_leaf());
        // one passage out is enough to not be a dead end
        assert!(!root.child(Direction::Right).unwrap().is_leaf());
    }
}
