use std::collections::HashSet;

use rand::Rng;
use rand::seq::SliceRandom;

/// Names handed out to freshly created roster entries
pub const PLAYER_NAMES: &[&str] = &[
    "Son Heung-min",
    "Kim Min-jae",
    "Lee Kang-in",
    "Hwang Hee-chan",
    "Cho Gue-sung",
    "Jo Hyeon-woo",
    "Park Ji-sung",
    "Cha Bum-kun",
    "Lionel Messi",
    "Cristiano Ronaldo",
    "Kylian Mbappe",
    "Erling Haaland",
    "Kevin De Bruyne",
    "Luka Modric",
    "Virgil van Dijk",
    "Mohamed Salah",
    "Harry Kane",
    "Jude Bellingham",
    "Vinicius Junior",
    "Rodri",
    "Bukayo Saka",
    "Pedri",
    "Bernardo Silva",
    "Antoine Griezmann",
    "Robert Lewandowski",
    "Thibaut Courtois",
    "Alisson Becker",
    "Joshua Kimmich",
    "Achraf Hakimi",
    "Ruben Dias",
    "Declan Rice",
    "Martin Odegaard",
    "Florian Wirtz",
    "Jamal Musiala",
    "Lautaro Martinez",
    "Federico Valverde",
];

/// Draws display names, never repeating one that is already taken
#[derive(Debug, Clone)]
pub struct NamePool {
    names: &'static [&'static str],
}

impl Default for NamePool {
    fn default() -> Self {
        Self::new(PLAYER_NAMES)
    }
}

impl NamePool {
    pub fn new(names: &'static [&'static str]) -> Self {
        Self { names }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Pick a random unused name, or a numbered placeholder once every
    /// pooled name is taken.
    pub fn draw<R: Rng + ?Sized>(&self, taken: &HashSet<String>, rng: &mut R) -> String {
        let available: Vec<&str> = self
            .names
            .iter()
            .copied()
            .filter(|name| !taken.contains(*name))
            .collect();

        match available.choose(rng) {
            Some(name) => name.to_string(),
            None => placeholder(taken),
        }
    }

    /// Every pooled name in random order
    pub fn shuffled<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<String> {
        let mut names: Vec<String> = self.names.iter().map(|n| n.to_string()).collect();
        names.shuffle(rng);
        names
    }
}

/// `Player N` with the smallest N above the taken count that is still free
pub fn placeholder(taken: &HashSet<String>) -> String {
    (taken.len() + 1..)
        .map(|n| format!("Player {}", n))
        .find(|candidate| !taken.contains(candidate))
        .unwrap_or_else(|| "Player".to_string())
}
