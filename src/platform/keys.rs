//! Keyboard mapping

/// Game actions a key can drive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Fire,
    Missile,
}

impl Key {
    /// Map a DOM-style key name ("ArrowUp", "w", " ", ...) to an action
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ArrowUp" | "w" | "W" => Some(Key::Up),
            "ArrowDown" | "s" | "S" => Some(Key::Down),
            "ArrowLeft" | "a" | "A" => Some(Key::Left),
            "ArrowRight" | "d" | "D" => Some(Key::Right),
            " " | "Space" => Some(Key::Fire),
            "m" | "M" => Some(Key::Missile),
            _ => None,
        }
    }
}
