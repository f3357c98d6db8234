//! Sports accepted by the registration form.
//!
//! The list is grouped into categories for display only. Validation treats
//! it as one flat set and compares names exactly.

#[derive(Debug, Clone, Copy)]
pub struct SportCategory {
    pub label: &'static str,
    pub sports: &'static [&'static str],
}

pub const TRADITIONAL_SPORTS: &[&str] = &[
    "Baseball",
    "Basket Ball",
    "Foot Ball",
    "Tennis",
    "Volleyball",
];

pub const HOBBY_SPORTS: &[&str] = &[
    "Table Tennis",
    "Bungee Jumping",
    "Rock Climbing",
    "Squirrel Suit",
];

pub const SCHOOL_SPORTS: &[&str] = &["Dodgeball", "Four Square"];

pub const SPORT_CATEGORIES: &[SportCategory] = &[
    SportCategory {
        label: "Traditional",
        sports: TRADITIONAL_SPORTS,
    },
    SportCategory {
        label: "Hobby",
        sports: HOBBY_SPORTS,
    },
    SportCategory {
        label: "School",
        sports: SCHOOL_SPORTS,
    },
];

pub fn allowed_sports() -> impl Iterator<Item = &'static str> {
    SPORT_CATEGORIES
        .iter()
        .flat_map(|category| category.sports.iter().copied())
}

pub fn is_allowed_sport(sport: &str) -> bool {
    allowed_sports().any(|allowed| allowed == sport)
}
