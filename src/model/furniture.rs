use serde::{Deserialize, Serialize};
use std::fmt;

/// A style variant. Every item produced by one factory belongs to the same family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Family {
    Modern,
    Victorian,
    ArtDeco,
}

impl Family {
    /// Every family, in declaration order.
    pub const ALL: [Family; 3] = [Family::Modern, Family::Victorian, Family::ArtDeco];

    /// Canonical lowercase tag. No tag is a substring of another.
    pub fn tag(self) -> &'static str {
        match self {
            Family::Modern => "modern",
            Family::Victorian => "victorian",
            Family::ArtDeco => "art-deco",
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// One axis of a furnished room. Each family supplies exactly one item per category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Chair,
    Table,
    Sofa,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Chair, Category::Table, Category::Sofa];

    /// Position in [`Category::ALL`].
    pub(crate) fn index(self) -> usize {
        self as usize
    }

    pub fn noun(self) -> &'static str {
        match self {
            Category::Chair => "chair",
            Category::Table => "table",
            Category::Sofa => "sofa",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.noun())
    }
}

/// A piece of furniture produced by a [`FurnitureFactory`](crate::furniture_factory::FurnitureFactory).
///
/// Items carry no identity beyond their variant; two items with the same family and
/// category are interchangeable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FurnitureItem {
    family: Family,
    category: Category,
}

impl FurnitureItem {
    pub fn new(family: Family, category: Category) -> Self {
        Self { family, category }
    }

    pub fn family(&self) -> Family {
        self.family
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Human-readable description, e.g. `I am a modern chair!`.
    pub fn describe(&self) -> String {
        let article = match self.family {
            Family::ArtDeco => "an",
            _ => "a",
        };
        format!("I am {} {} {}!", article, self.family, self.category)
    }
}
