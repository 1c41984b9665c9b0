//! Static page content: breeds, facts, about text and name parts
//!
//! Everything here is fixed at compile time. Lists the rest of the app
//! indexes into are non-empty, which the tests below pin down.

use serde::Serialize;

pub const PAGE_TITLE: &str = "All About Cats";

/// Banner image shown on the About tab
pub const BANNER_IMAGE: &str =
    "https://upload.wikimedia.org/wikipedia/commons/thumb/3/3a/Cat03.jpg/1200px-Cat03.jpg";
pub const BANNER_ALT: &str = "A cute cat";

pub const ABOUT_TITLE: &str = "Fascinating Felines";
pub const ABOUT_SUBTITLE: &str = "Learn about the charm and characteristics of cats";
pub const ABOUT_TEXT: &str = "Cats are fascinating creatures that have been domesticated for \
thousands of years. They are known for their independence, agility, and affectionate nature.";

pub const CHARACTERISTICS: &[&str] = &[
    "Excellent hunters with sharp claws and teeth",
    "Flexible bodies and quick reflexes",
    "Keen senses, especially their night vision",
    "Soft fur and a variety of coat patterns",
    "Communicate through meowing, purring, and body language",
];

pub const BREEDS_TITLE: &str = "Popular Cat Breeds";
pub const BREEDS_SUBTITLE: &str = "Explore some of the most beloved cat breeds";

/// One cat breed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Breed {
    pub name: &'static str,
    pub origin: &'static str,
    pub temperament: &'static str,
    pub image: &'static str,
    pub description: &'static str,
}

pub const BREEDS: &[Breed] = &[
    Breed {
        name: "Siamese",
        origin: "Thailand",
        temperament: "Vocal, Affectionate, Intelligent",
        image: "https://upload.wikimedia.org/wikipedia/commons/2/25/Siam_lilacpoint.jpg",
        description: "Slender and blue-eyed, the Siamese is famous for its pointed coat \
and its habit of holding long conversations with its people.",
    },
    Breed {
        name: "Persian",
        origin: "Iran",
        temperament: "Gentle, Quiet, Docile",
        image: "https://upload.wikimedia.org/wikipedia/commons/1/15/White_Persian_Cat.jpg",
        description: "A long-haired, flat-faced lap cat that prefers calm homes and a \
daily brushing.",
    },
    Breed {
        name: "Maine Coon",
        origin: "United States",
        temperament: "Gentle, Intelligent, Independent",
        image: "https://upload.wikimedia.org/wikipedia/commons/5/5f/Maine_Coon_cat_by_Tomitheos.JPG",
        description: "One of the largest domestic breeds, with tufted ears, a shaggy coat \
and a famously friendly disposition.",
    },
    Breed {
        name: "Bengal",
        origin: "United States",
        temperament: "Energetic, Playful, Curious",
        image: "https://upload.wikimedia.org/wikipedia/commons/b/ba/Paintedcats_Red_Star_standing.jpg",
        description: "A spotted, athletic breed with a wild look that loves climbing, \
fetching and sometimes water.",
    },
    Breed {
        name: "Scottish Fold",
        origin: "Scotland",
        temperament: "Sweet-tempered, Intelligent, Soft-voiced",
        image: "https://upload.wikimedia.org/wikipedia/commons/5/5d/Adult_Scottish_Fold.jpg",
        description: "Known for ears that fold forward and down, giving the face an owl-like \
roundness.",
    },
];

pub const FACTS: &[&str] = &[
    "Cats spend 70% of their lives sleeping.",
    "A group of cats is called a clowder.",
    "Cats have five toes on their front paws, but only four on the back.",
    "A cat's nose print is unique, much like a human fingerprint.",
    "Cats can rotate their ears 180 degrees.",
    "The oldest known pet cat was buried with its owner about 9,500 years ago in Cyprus.",
    "Cats walk like camels and giraffes, moving both right feet and then both left feet.",
    "Adult cats mostly meow to communicate with humans, not with other cats.",
    "A cat's whiskers are roughly as wide as its body.",
    "Cats can jump up to six times their own length.",
];

pub const NAME_PREFIXES: &[&str] = &[
    "Sir", "Lady", "Captain", "Professor", "Duchess", "Lord", "Princess", "Doctor",
    "Baron", "Admiral",
];

pub const NAME_SUFFIXES: &[&str] = &[
    "Whiskers", "Paws", "Fluffington", "Purrsalot", "Mittens", "Snugglebottom",
    "Meowington", "Biscuit", "Pounce", "Tumbleweed",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lists_are_non_empty() {
        assert!(!BREEDS.is_empty());
        assert_eq!(FACTS.len(), 10);
        assert!(!NAME_PREFIXES.is_empty());
        assert!(!NAME_SUFFIXES.is_empty());
    }

    #[test]
    fn test_breed_json() {
        let json = serde_json::to_value(BREEDS[0]).unwrap();
        assert_eq!(json["name"], "Siamese");
        assert_eq!(json["origin"], "Thailand");
    }
}
