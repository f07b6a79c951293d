use rand::Rng;

const ADJECTIVES: &[&str] = &[
    "Secret", "Silent", "Hidden", "Nameless", "Mystery", "Rookie", "Veteran", "Shadow",
    "Sneaky", "Swift", "Coiled", "Hungry",
];

const NOUNS: &[&str] = &[
    "Hunter", "Ninja", "Player", "Stranger", "Cobra", "Viper", "Python", "Adder",
    "Mamba", "Charmer",
];

/// Name for a scoreboard entry when the player does not give one.
pub fn generate_anonymous_name() -> String {
    let mut rng = rand::rng();
    let adjective = ADJECTIVES[rng.random_range(0..ADJECTIVES.len())];
    let noun = NOUNS[rng.random_range(0..NOUNS.len())];
    let number: u32 = rng.random_range(1..=999);
    format!("{} {} #{}", adjective, noun, number)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anonymous_name_shape() {
        for _ in 0..50 {
            let name = generate_anonymous_name();
            let (words, number) = name.split_once(" #").unwrap();
            let (adjective, noun) = words.split_once(' ').unwrap();
            assert!(ADJECTIVES.contains(&adjective));
            assert!(NOUNS.contains(&noun));
            let number: u32 = number.parse().unwrap();
            assert!((1..=999).contains(&number));
        }
    }
}
