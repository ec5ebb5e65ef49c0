//! Built-in passphrase word list.

/// Read-only word table handed to the passphrase generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordList<'a> {
    words: &'a [&'a str],
}

impl<'a> WordList<'a> {
    pub const fn new(words: &'a [&'a str]) -> Self {
        WordList { words }
    }

    pub fn words(&self) -> &'a [&'a str] {
        self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl WordList<'static> {
    pub const fn builtin() -> Self {
        WordList::new(WORDS)
    }
}

impl Default for WordList<'static> {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Five-letter, lowercase, distinct.
pub const WORDS: &[&str] = &[
    "acorn", "actor", "adobe", "adult", "agent", "alarm", "album", "alert", "alley", "allow",
    "aloft", "alpha", "altar", "amber", "amble", "angel", "angle", "ankle", "apple", "apron",
    "arbor", "arena", "argue", "armor", "aroma", "arrow", "ashen", "aside", "asset", "atlas",
    "attic", "audio", "audit", "award", "awake", "bacon", "badge", "bagel", "baker", "banjo",
    "barge", "basil", "basin", "batch", "beach", "beard", "beast", "bench", "berry", "bison",
    "blade", "blame", "blank", "blaze", "bloom", "blues", "board", "boost", "booth", "brain",
    "brass", "brave", "bread", "brick", "bride", "brook", "broom", "brush", "buddy", "bugle",
    "build", "bunch", "cabin", "cable", "cadet", "camel", "canal", "candy", "canoe", "cargo",
    "carol", "carve", "cedar", "chain", "chalk", "charm", "chart", "chase", "cheek", "chess",
    "chest", "chief", "chime", "chord", "cider", "civic", "claim", "clamp", "clerk", "cliff",
    "climb", "clock", "cloth", "cloud", "clove", "coach", "coast", "cobra", "cocoa", "comet",
    "coral", "couch", "cough", "crane", "crate", "creek", "crest", "crisp", "crown", "crumb",
    "crust", "cubic", "curve", "cycle", "daisy", "dance", "delta", "denim", "depot", "diary",
    "diner", "disco", "ditch", "dodge", "donor", "dough", "draft", "drain", "drama", "dream",
    "dress", "drift", "drill", "drink", "drove", "dwarf", "eagle", "early", "earth", "easel",
    "elbow", "elder", "ember", "empty", "equal", "essay", "ethic", "event", "exact", "fable",
    "facet", "fairy", "faith", "feast", "fence", "ferry", "fever", "fiber", "field", "final",
    "flame", "flank", "flask", "fleet", "flint", "float", "flock", "flora", "flour", "fluid",
    "flute", "focus", "forge", "forty", "forum", "frame", "frost", "fruit", "fudge", "gamma",
    "gauge", "ghost", "giant", "glade", "glass", "gleam", "globe", "glove", "grace", "grain",
    "grand", "grape", "graph", "grass", "gravy", "green", "grove", "guard", "guest", "guide",
    "habit", "hatch", "haven", "hazel", "heart", "hedge", "heron", "hinge", "hobby", "honey",
    "horse", "hotel", "human", "humor", "husky", "icing", "igloo", "image", "inlet", "irony",
    "ivory", "jelly", "jewel", "joint", "judge", "juice", "jumbo", "kayak", "kebab", "knack",
    "kneel", "knife", "knock", "koala", "label", "laser", "latch", "lemon", "level", "lever",
    "light", "lilac", "linen", "llama", "lodge", "lotus", "lucky", "lunar", "lyric", "macro",
    "magic", "mango", "manor", "maple", "march", "marsh", "match", "mayor", "medal", "melon",
    "mercy", "merit", "metal", "meter", "mimic", "minor", "mirth", "mixer", "model", "mocha",
    "moose", "motor", "mound", "mouse", "movie", "mural", "music", "nacho", "nerve", "noble",
    "north", "notch", "novel", "nurse", "oasis", "ocean", "olive", "omega", "onion", "opera",
    "orbit", "order", "otter", "outer", "oxide", "paddy", "paint", "panda", "panel", "paper",
    "party", "pasta", "patch", "pearl", "pedal", "penny", "perch", "piano", "pilot", "pinch",
    "pixel", "pizza", "plaid", "plain", "plane", "plank", "plant", "plaza", "plume", "polar",
    "polka", "porch", "pouch", "power", "prism", "prize", "probe", "proud", "prune", "pulse",
    "punch", "pupil", "quail", "quake", "quart", "queen", "quest", "quick", "quiet", "quill",
    "quilt", "quota", "radar", "radio", "rally", "ranch", "raven", "razor", "relay", "rhyme",
    "ridge", "rival", "river", "roast", "robin", "robot", "rocky", "rodeo", "rogue", "rouge",
    "round", "route", "rover", "royal", "ruler", "rumba", "salad", "salon", "sauce", "scale",
    "scarf", "scone", "scout", "shade", "shark", "sheep", "shelf", "shell", "shine", "shirt",
    "shore", "siren", "skate", "skill", "slate", "sleet", "slope", "smile", "smoke", "snack",
    "snail", "solar", "sonic", "spade", "spark", "spear", "spice", "spine", "spoon", "sport",
    "spray", "squad", "stack", "staff", "stage", "stair", "stamp", "steam", "steel", "stern",
    "stone", "stool", "storm", "story", "stove", "straw", "strip", "sugar", "suite", "sunny",
    "swamp", "swift", "sword", "table", "tango", "taste", "teach", "tempo", "theme", "thorn",
    "tiger", "toast", "token", "topaz", "torch", "tower", "track", "trail", "train", "treat",
    "trend", "tribe", "trout", "truck", "trunk", "tulip", "tuner", "twist", "ultra", "uncle",
    "union", "unity", "upper", "urban", "usher", "valid", "valve", "vapor", "vault", "venue",
    "verse", "vigor", "vinyl", "viola", "viper", "vivid", "vocal", "wafer", "wagon", "waltz",
    "watch", "water", "whale", "wheat", "wheel", "whirl", "width", "witch", "woman", "world",
    "woven", "wrist", "yacht", "yearn", "yeast", "yield", "young", "zebra", "zesty",
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn builtin_words_are_distinct_lowercase() {
        let list = WordList::builtin();
        assert!(!list.is_empty());
        let unique: HashSet<_> = list.words().iter().collect();
        assert_eq!(unique.len(), list.len());
        for word in list.words() {
            assert_eq!(word.len(), 5, "{word}");
            assert!(word.bytes().all(|b| b.is_ascii_lowercase()), "{word}");
        }
    }
}
