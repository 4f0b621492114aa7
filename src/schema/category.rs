//! Category tags ("types") and their badge colours.

/// Badge colour for tags outside the known vocabulary (the Normal colour).
pub const DEFAULT_TAG_COLOR: &str = "#A8A878";

/// Known elemental category tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Normal,
    Fire,
    Water,
    Electric,
    Grass,
    Ice,
    Fighting,
    Poison,
    Ground,
    Flying,
    Psychic,
    Bug,
    Rock,
    Ghost,
    Dragon,
    Dark,
    Steel,
    Fairy,
}

impl Category {
    pub const ALL: [Category; 18] = [
        Category::Normal,
        Category::Fire,
        Category::Water,
        Category::Electric,
        Category::Grass,
        Category::Ice,
        Category::Fighting,
        Category::Poison,
        Category::Ground,
        Category::Flying,
        Category::Psychic,
        Category::Bug,
        Category::Rock,
        Category::Ghost,
        Category::Dragon,
        Category::Dark,
        Category::Steel,
        Category::Fairy,
    ];

    /// Look up a tag by its exact served name. Unknown tags yield `None`.
    pub fn parse(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.as_str() == tag)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Normal => "Normal",
            Category::Fire => "Fire",
            Category::Water => "Water",
            Category::Electric => "Electric",
            Category::Grass => "Grass",
            Category::Ice => "Ice",
            Category::Fighting => "Fighting",
            Category::Poison => "Poison",
            Category::Ground => "Ground",
            Category::Flying => "Flying",
            Category::Psychic => "Psychic",
            Category::Bug => "Bug",
            Category::Rock => "Rock",
            Category::Ghost => "Ghost",
            Category::Dragon => "Dragon",
            Category::Dark => "Dark",
            Category::Steel => "Steel",
            Category::Fairy => "Fairy",
        }
    }

    /// Hex badge colour.
    pub fn color(&self) -> &'static str {
        match self {
            Category::Normal => "#A8A878",
            Category::Fire => "#F08030",
            Category::Water => "#6890F0",
            Category::Electric => "#F8D030",
            Category::Grass => "#78C850",
            Category::Ice => "#98D8D8",
            Category::Fighting => "#C03028",
            Category::Poison => "#A040A0",
            Category::Ground => "#E0C068",
            Category::Flying => "#A890F0",
            Category::Psychic => "#F85888",
            Category::Bug => "#A8B820",
            Category::Rock => "#B8A038",
            Category::Ghost => "#705898",
            Category::Dragon => "#7038F8",
            Category::Dark => "#705848",
            Category::Steel => "#B8B8D0",
            Category::Fairy => "#EE99AC",
        }
    }
}

/// Badge colour for a raw tag string, falling back to [`DEFAULT_TAG_COLOR`].
pub fn tag_color(tag: &str) -> &'static str {
    Category::parse(tag)
        .map(|category| category.color())
        .unwrap_or(DEFAULT_TAG_COLOR)
}
