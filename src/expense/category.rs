//! The fixed set of spending categories offered by the expense forms.

use std::{fmt::Display, str::FromStr};

use crate::Error;

/// A spending category.
///
/// Storage keeps categories as plain text, so this type only guards user
/// input. Rows written by other tools may hold labels outside this set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    /// Groceries, eating out and snacks.
    Food,
    /// Fuel, fares and parking.
    Transport,
    /// Clothes, gadgets and other purchases.
    Shopping,
    /// Medical and pharmacy costs.
    Health,
    /// Outings, subscriptions and hobbies.
    Entertainment,
    /// Power, water, internet and phone bills.
    Utilities,
    /// Anything else.
    Other,
}

impl Category {
    /// Every category in the order shown in the category dropdown.
    pub const ALL: [Category; 7] = [
        Category::Food,
        Category::Transport,
        Category::Shopping,
        Category::Health,
        Category::Entertainment,
        Category::Utilities,
        Category::Other,
    ];

    /// The label stored in the database and shown to users.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Transport => "Transport",
            Category::Shopping => "Shopping",
            Category::Health => "Health",
            Category::Entertainment => "Entertainment",
            Category::Utilities => "Utilities",
            Category::Other => "Other",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| Error::InvalidCategory(s.to_owned()))
    }
}
