//! Word lists shared by the tagger and the lemmatizer.
//!
//! Lookups are linear scans over small static slices; all entries are
//! lowercase.

pub(crate) const PRONOUNS: &[&str] = &[
    "i", "you", "he", "she", "it", "we", "they", "me", "him", "us", "them", "myself",
    "yourself", "himself", "herself", "itself", "ourselves", "themselves", "yourselves",
];

/// Subject pronouns that take the 3rd-person singular verb form.
pub(crate) const THIRD_SINGULAR_PRONOUNS: &[&str] = &["he", "she", "it"];

pub(crate) const POSSESSIVES: &[&str] = &["my", "your", "his", "her", "its", "our", "their"];

pub(crate) const DETERMINERS: &[&str] = &[
    "a", "an", "the", "this", "that", "these", "those", "some", "any", "every", "each", "no",
    "all", "both", "another", "either", "neither",
];

pub(crate) const PREPOSITIONS: &[&str] = &[
    "in", "on", "at", "of", "for", "with", "from", "by", "about", "into", "over", "under",
    "after", "before", "between", "through", "during", "without", "off", "up", "down", "near",
    "since", "until", "than", "because", "if", "while", "across", "behind", "inside",
    "outside", "around", "against", "towards",
];

pub(crate) const CONJUNCTIONS: &[&str] = &["and", "or", "but", "nor", "so", "yet"];

pub(crate) const MODALS: &[&str] = &[
    "will", "would", "shall", "should", "can", "could", "may", "might", "must", "ought", "wo",
    "ca", "sha",
];

pub(crate) const WH_PRONOUNS: &[&str] = &["what", "who", "whom", "whose", "which"];

pub(crate) const WH_ADVERBS: &[&str] = &["where", "when", "why", "how"];

pub(crate) const INTERJECTIONS: &[&str] = &["hello", "hi", "hey", "yes", "oh", "ok", "okay", "bye", "wow"];

pub(crate) const CARDINALS: &[&str] = &[
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "eleven", "twelve", "twenty", "hundred", "thousand",
];

pub(crate) const ADVERBS: &[&str] = &[
    "not", "never", "very", "too", "also", "now", "here", "there", "always", "often", "soon",
    "already", "again", "just", "still", "then", "really", "only", "well", "away", "back",
    "together", "sometimes", "usually", "everywhere", "quickly", "slowly",
];

/// Forms of "be", "have" and "do" with their fixed tags.
///
/// "have" and "do" are listed as present; the tagger turns them into base
/// forms after a modal or "to".
pub(crate) const AUXILIARIES: &[(&str, AuxTag)] = &[
    ("am", AuxTag::Present),
    ("are", AuxTag::Present),
    ("is", AuxTag::ThirdSingular),
    ("was", AuxTag::Past),
    ("were", AuxTag::Past),
    ("be", AuxTag::Base),
    ("been", AuxTag::Participle),
    ("being", AuxTag::Gerund),
    ("have", AuxTag::Present),
    ("has", AuxTag::ThirdSingular),
    ("had", AuxTag::Past),
    ("having", AuxTag::Gerund),
    ("do", AuxTag::Present),
    ("does", AuxTag::ThirdSingular),
    ("did", AuxTag::Past),
    ("doing", AuxTag::Gerund),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AuxTag {
    Base,
    Present,
    ThirdSingular,
    Past,
    Participle,
    Gerund,
}

/// Words after which a past form is a participle ("has gone", "was taken").
pub(crate) const PERFECT_AUXILIARIES: &[&str] = &[
    "have", "has", "had", "having", "is", "am", "are", "was", "were", "be", "been", "being",
    "get", "got",
];

/// Irregular past forms: (form, base, is simple past, is past participle).
pub(crate) const IRREGULAR_VERBS: &[(&str, &str, bool, bool)] = &[
    ("went", "go", true, false),
    ("gone", "go", false, true),
    ("ate", "eat", true, false),
    ("eaten", "eat", false, true),
    ("saw", "see", true, false),
    ("seen", "see", false, true),
    ("came", "come", true, false),
    ("done", "do", false, true),
    ("made", "make", true, true),
    ("took", "take", true, false),
    ("taken", "take", false, true),
    ("gave", "give", true, false),
    ("given", "give", false, true),
    ("said", "say", true, true),
    ("told", "tell", true, true),
    ("knew", "know", true, false),
    ("known", "know", false, true),
    ("got", "get", true, true),
    ("gotten", "get", false, true),
    ("found", "find", true, true),
    ("thought", "think", true, true),
    ("bought", "buy", true, true),
    ("brought", "bring", true, true),
    ("ran", "run", true, false),
    ("wrote", "write", true, false),
    ("written", "write", false, true),
    ("spoke", "speak", true, false),
    ("spoken", "speak", false, true),
    ("sat", "sit", true, true),
    ("stood", "stand", true, true),
    ("left", "leave", true, true),
    ("felt", "feel", true, true),
    ("kept", "keep", true, true),
    ("slept", "sleep", true, true),
    ("met", "meet", true, true),
    ("paid", "pay", true, true),
    ("sold", "sell", true, true),
    ("sent", "send", true, true),
    ("spent", "spend", true, true),
    ("built", "build", true, true),
    ("lost", "lose", true, true),
    ("won", "win", true, true),
    ("began", "begin", true, false),
    ("begun", "begin", false, true),
    ("drank", "drink", true, false),
    ("drunk", "drink", false, true),
    ("drove", "drive", true, false),
    ("driven", "drive", false, true),
    ("flew", "fly", true, false),
    ("flown", "fly", false, true),
    ("forgot", "forget", true, false),
    ("forgotten", "forget", false, true),
    ("heard", "hear", true, true),
    ("held", "hold", true, true),
    ("taught", "teach", true, true),
    ("caught", "catch", true, true),
    ("fought", "fight", true, true),
    ("understood", "understand", true, true),
    ("became", "become", true, false),
    ("broke", "break", true, false),
    ("broken", "break", false, true),
    ("chose", "choose", true, false),
    ("chosen", "choose", false, true),
    ("fell", "fall", true, false),
    ("fallen", "fall", false, true),
    ("rode", "ride", true, false),
    ("ridden", "ride", false, true),
    ("sang", "sing", true, false),
    ("sung", "sing", false, true),
    ("swam", "swim", true, false),
    ("swum", "swim", false, true),
    ("threw", "throw", true, false),
    ("thrown", "throw", false, true),
    ("woke", "wake", true, false),
    ("woken", "wake", false, true),
    ("wore", "wear", true, false),
    ("worn", "wear", false, true),
    ("grew", "grow", true, false),
    ("grown", "grow", false, true),
    ("drew", "draw", true, false),
    ("drawn", "draw", false, true),
    ("meant", "mean", true, true),
    ("led", "lead", true, true),
    ("fed", "feed", true, true),
    ("hid", "hide", true, false),
    ("hidden", "hide", false, true),
    ("stole", "steal", true, false),
    ("stolen", "steal", false, true),
    ("shook", "shake", true, false),
    ("shaken", "shake", false, true),
    ("was", "be", true, false),
    ("were", "be", true, false),
    ("been", "be", false, true),
    ("had", "have", true, true),
    ("did", "do", true, false),
    ("is", "be", false, false),
    ("am", "be", false, false),
    ("are", "be", false, false),
    ("has", "have", false, false),
    ("does", "do", false, false),
    ("goes", "go", false, false),
];

pub(crate) const BASE_VERBS: &[&str] = &[
    "go", "come", "eat", "drink", "see", "make", "take", "give", "get", "know", "think", "want",
    "need", "like", "love", "help", "play", "work", "read", "write", "speak", "talk", "say",
    "tell", "run", "walk", "sit", "stand", "sleep", "wake", "live", "study", "learn", "teach",
    "buy", "sell", "pay", "open", "close", "call", "ask", "answer", "start", "stop", "wait",
    "watch", "look", "listen", "hear", "feel", "meet", "leave", "bring", "cook", "clean",
    "wash", "dance", "sing", "swim", "drive", "ride", "fly", "jump", "cry", "laugh", "smile",
    "hope", "try", "use", "find", "keep", "put", "understand", "remember", "forget", "thank",
    "visit", "travel", "arrive", "return", "finish", "begin", "become", "build", "carry",
    "change", "choose", "draw", "fall", "fight", "follow", "grow", "hold", "hurt", "lose",
    "move", "send", "show", "spend", "turn", "win", "wear", "catch", "pray", "marry",
    "prepare", "rest", "bathe", "sign", "be", "have", "do", "mean", "lead", "feed", "hide",
    "steal", "shake", "break", "throw", "believe", "enjoy", "hate", "miss", "plan", "shop",
    "stay", "tie", "die", "lie", "paint", "copy", "jog",
];

pub(crate) const NOUNS: &[&str] = &[
    "home", "food", "water", "name", "school", "house", "family", "friend", "mother", "father",
    "brother", "sister", "baby", "child", "man", "woman", "boy", "girl", "teacher", "student",
    "doctor", "book", "day", "night", "morning", "evening", "afternoon", "time", "year",
    "week", "month", "world", "city", "country", "market", "office", "hospital", "car", "bus",
    "train", "money", "phone", "tea", "coffee", "milk", "rice", "bread", "fruit", "apple",
    "dog", "cat", "bird", "thing", "something", "nothing", "everything", "anything",
    "everyone", "someone", "news", "class", "glass", "address", "business", "india", "john",
    "today", "tomorrow", "yesterday", "tonight", "king", "ring", "meeting", "building",
    "wedding", "birthday", "festival", "ceiling", "spring", "string", "evening", "lunch",
    "dinner", "breakfast", "room", "door", "table", "language", "question", "place",
    "person", "bus", "gas", "lens", "series", "species", "sign",
];

/// Plural nouns that do not end in a regular suffix.
pub(crate) const IRREGULAR_PLURALS: &[(&str, &str)] = &[
    ("children", "child"),
    ("people", "person"),
    ("men", "man"),
    ("women", "woman"),
    ("feet", "foot"),
    ("teeth", "tooth"),
    ("mice", "mouse"),
    ("geese", "goose"),
    ("wives", "wife"),
    ("knives", "knife"),
    ("lives", "life"),
    ("leaves", "leaf"),
];

pub(crate) const ADJECTIVES: &[&str] = &[
    "happy", "sad", "good", "bad", "big", "small", "ready", "hot", "cold", "new", "old",
    "beautiful", "young", "tall", "short", "long", "fast", "slow", "hungry", "thirsty",
    "tired", "sick", "angry", "busy", "free", "easy", "hard", "great", "nice", "fine",
    "important", "dirty", "rich", "poor", "strong", "weak", "right", "wrong", "late", "early",
    "kind", "sorry", "late", "high", "low", "cheap", "dear", "large", "little", "pretty",
    "ugly", "wise", "safe", "warm", "cool", "dry", "wet", "heavy", "light", "full", "empty",
    "clean",
];

/// Irregular comparative and superlative forms.
pub(crate) const IRREGULAR_ADJECTIVES: &[(&str, &str, Degree)] = &[
    ("better", "good", Degree::Comparative),
    ("best", "good", Degree::Superlative),
    ("worse", "bad", Degree::Comparative),
    ("worst", "bad", Degree::Superlative),
    ("elder", "old", Degree::Comparative),
    ("eldest", "old", Degree::Superlative),
    ("further", "far", Degree::Comparative),
    ("furthest", "far", Degree::Superlative),
    ("farther", "far", Degree::Comparative),
    ("farthest", "far", Degree::Superlative),
    ("more", "much", Degree::Comparative),
    ("most", "much", Degree::Superlative),
    ("less", "little", Degree::Comparative),
    ("least", "little", Degree::Superlative),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Degree {
    Comparative,
    Superlative,
}

pub(crate) fn contains(list: &[&str], word: &str) -> bool {
    list.contains(&word)
}

pub(crate) fn irregular_verb(word: &str) -> Option<(&'static str, bool, bool)> {
    IRREGULAR_VERBS
        .iter()
        .find(|(form, ..)| *form == word)
        .map(|(_, base, past, participle)| (*base, *past, *participle))
}

pub(crate) fn irregular_adjective(word: &str) -> Option<(&'static str, Degree)> {
    IRREGULAR_ADJECTIVES
        .iter()
        .find(|(form, ..)| *form == word)
        .map(|(_, base, degree)| (*base, *degree))
}

pub(crate) fn irregular_plural(word: &str) -> Option<&'static str> {
    IRREGULAR_PLURALS
        .iter()
        .find(|(form, _)| *form == word)
        .map(|(_, base)| *base)
}

/// Whether any word list knows `word` as a base form.
pub(crate) fn is_known_base(word: &str) -> bool {
    contains(BASE_VERBS, word) || contains(NOUNS, word) || contains(ADJECTIVES, word)
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

/// "runn" -> "run", "bigg" -> "big"; leaves "ll", "ss" and "zz" alone.
pub(crate) fn undouble(stem: &str) -> Option<&str> {
    let mut chars = stem.chars().rev();
    match (chars.next(), chars.next()) {
        (Some(a), Some(b)) if a == b && !is_vowel(a) && !matches!(a, 'l' | 's' | 'z') => {
            Some(&stem[..stem.len() - a.len_utf8()])
        }
        _ => None,
    }
}

/// Base form of a comparative/superlative adjective, if the stem is a known
/// adjective: "happier" -> "happy", "bigger" -> "big", "nicest" -> "nice".
pub(crate) fn adjective_stem(word: &str) -> Option<(String, Degree)> {
    let (stem, degree) = if let Some(stem) = word.strip_suffix("est") {
        (stem, Degree::Superlative)
    } else if let Some(stem) = word.strip_suffix("er") {
        (stem, Degree::Comparative)
    } else {
        return None;
    };

    if stem.is_empty() {
        return None;
    }

    let mut candidates = vec![stem.to_string(), format!("{}e", stem)];
    if let Some(s) = stem.strip_suffix('i') {
        candidates.push(format!("{}y", s));
    }
    if let Some(s) = undouble(stem) {
        candidates.push(s.to_string());
    }

    candidates
        .into_iter()
        .find(|c| contains(ADJECTIVES, c))
        .map(|c| (c, degree))
}
