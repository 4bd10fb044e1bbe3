use crate::utils::error::{DemoError, Result};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Hard,
}

impl Difficulty {
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Hard => "Hard",
        }
    }
}

impl FromStr for Difficulty {
    type Err = DemoError;

    fn from_str(label: &str) -> Result<Self> {
        match label.to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(DemoError::invalid_argument("difficulty", label)),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub trait GameItemsFactory {
    fn weapon(&self) -> &str;
    fn power_up(&self) -> &str;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct EasyGameItems;

impl GameItemsFactory for EasyGameItems {
    fn weapon(&self) -> &str {
        "Basic Sword"
    }

    fn power_up(&self) -> &str {
        "Small Health Pack"
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct HardGameItems;

impl GameItemsFactory for HardGameItems {
    fn weapon(&self) -> &str {
        "Advanced Laser Gun"
    }

    fn power_up(&self) -> &str {
        "Large Shield Boost"
    }
}

pub fn items_factory(difficulty: Difficulty) -> Box<dyn GameItemsFactory> {
    match difficulty {
        Difficulty::Easy => Box::new(EasyGameItems),
        Difficulty::Hard => Box::new(HardGameItems),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Enemy {
    Zombie,
    Alien,
}

impl Enemy {
    pub fn name(&self) -> &'static str {
        match self {
            Enemy::Zombie => "Zombie",
            Enemy::Alien => "Alien",
        }
    }

    pub fn attack(&self) -> &'static str {
        match self {
            Enemy::Zombie => "Zombie attacks with a bite!",
            Enemy::Alien => "Alien attacks with a laser blast!",
        }
    }
}

/// Enemy type lookup is case-insensitive; the label is kept as given in the error.
pub fn create_enemy(kind: &str) -> Result<Enemy> {
    match kind.to_lowercase().as_str() {
        "zombie" => Ok(Enemy::Zombie),
        "alien" => Ok(Enemy::Alien),
        _ => Err(DemoError::invalid_argument("enemy type", kind)),
    }
}
