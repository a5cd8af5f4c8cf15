//! 内置种子数据

use crate::models::Restaurant;

/// 种子中的评分有数字也有文本
#[derive(Debug, Clone, Copy)]
pub enum SeedRating {
    Number(u8),
    Text(&'static str),
}

#[derive(Debug, Clone, Copy)]
pub struct SeedRecord {
    pub name: &'static str,
    pub address: &'static str,
    pub phone: &'static str,
    pub cuisine: &'static str,
    pub rating: SeedRating,
}

pub const SEED: &[SeedRecord] = &[
    SeedRecord {
        name: "Pizza Place",
        address: "1 A St",
        phone: "111",
        cuisine: "Italian",
        rating: SeedRating::Number(5),
    },
    SeedRecord {
        name: "Taqueria Sol",
        address: "48 Mission Rd",
        phone: "555-0142",
        cuisine: "Mexican",
        rating: SeedRating::Text("4"),
    },
    SeedRecord {
        name: "Golden Lotus",
        address: "310 Harbor Ave",
        phone: "555-0178",
        cuisine: "Chinese",
        rating: SeedRating::Number(3),
    },
    SeedRecord {
        name: "Le Petit Bistro",
        address: "9 Rue Lane",
        phone: "555-0199",
        cuisine: "French",
        rating: SeedRating::Text("5"),
    },
];

impl SeedRecord {
    pub fn to_restaurant(&self) -> Restaurant {
        let rating = match self.rating {
            SeedRating::Number(n) => n.to_string(),
            SeedRating::Text(s) => s.to_string(),
        };
        Restaurant::new(self.name, self.address, self.phone, self.cuisine, rating)
    }
}

/// 内置种子的副本
pub fn seed() -> Vec<Restaurant> {
    SEED.iter().map(SeedRecord::to_restaurant).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_preserves_order_and_normalises_rating() {
        let records = seed();
        assert_eq!(records.len(), SEED.len());
        assert_eq!(records[0].name, "Pizza Place");
        assert_eq!(records[0].rating, "5");
        assert_eq!(records[1].rating, "4");
        assert_eq!(records[3].cuisine, "French");
    }
}
