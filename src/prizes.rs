use rand::Rng;

// One outcome on the wheel
pub struct PrizeEntry {
    pub name: &'static str,
    pub weight: u32,
}

// Immutable weighted prize catalog - validated once at startup, before
// the listener binds
pub struct PrizeTable {
    entries: Vec<PrizeEntry>,
    total: u32,
}

impl PrizeTable {
    pub fn new(entries: Vec<PrizeEntry>) -> Self {
        if entries.is_empty() {
            panic!("prize table must not be empty");
        }
        if entries.iter().any(|e| e.weight == 0) {
            panic!("prize weights must be positive");
        }
        let total = entries.iter().map(|e| e.weight).sum();
        Self { entries, total }
    }

    // The canonical wheel
    pub fn standard() -> Self {
        Self::new(vec![
            PrizeEntry { name: "10% OFF", weight: 40 },
            PrizeEntry { name: "Premium 24h", weight: 20 },
            PrizeEntry { name: "Free Content", weight: 15 },
            PrizeEntry { name: "Jackpot", weight: 5 },
            PrizeEntry { name: "Nothing", weight: 20 },
        ])
    }

    // Weighted draw: r uniform in [0, total), walk the table subtracting
    // weights until the remainder falls inside an entry
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> &'static str {
        let mut r = rng.gen_range(0..self.total);
        for entry in &self.entries {
            if r < entry.weight {
                return entry.name;
            }
            r -= entry.weight;
        }
        // unreachable with integer arithmetic; still a valid name
        self.entries[self.entries.len() - 1].name
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|e| e.name == name)
    }
}
