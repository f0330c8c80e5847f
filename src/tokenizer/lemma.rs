// Morphy-style lemmatizer: irregular-form exceptions first, then
// part-of-speech specific suffix detachment.
//
// There is no dictionary to validate candidates against, so each rule is
// guarded by minimum stem lengths and a handful of spelling checks
// (doubled consonants, silent e) instead of trying every candidate.

use super::traits::{Lemmatizer, PartOfSpeech};

/// Rule-based lemmatizer modeled on WordNet's morphy.
#[derive(Debug, Clone, Default)]
pub struct MorphyLemmatizer;

impl MorphyLemmatizer {
    pub fn new() -> Self {
        Self
    }
}

impl Lemmatizer for MorphyLemmatizer {
    fn lemmatize(&self, word: &str, pos: PartOfSpeech) -> String {
        let lemma = match pos {
            PartOfSpeech::Noun => noun_exception(word).map(str::to_string).or_else(|| noun_rules(word)),
            PartOfSpeech::Verb => verb_exception(word).map(str::to_string).or_else(|| verb_rules(word)),
            PartOfSpeech::Adjective => adjective_exception(word)
                .map(str::to_string)
                .or_else(|| adjective_rules(word)),
            PartOfSpeech::Adverb => adverb_exception(word).map(str::to_string),
            _ => None,
        };
        lemma.unwrap_or_else(|| word.to_string())
    }
}

fn noun_exception(word: &str) -> Option<&'static str> {
    Some(match word {
        "men" => "man",
        "women" => "woman",
        "children" => "child",
        "feet" => "foot",
        "teeth" => "tooth",
        "mice" => "mouse",
        "geese" => "goose",
        "lives" => "life",
        "wives" => "wife",
        "knives" => "knife",
        "leaves" => "leaf",
        "halves" => "half",
        "selves" => "self",
        "wolves" => "wolf",
        "shelves" => "shelf",
        "oxen" => "ox",
        "phenomena" => "phenomenon",
        "criteria" => "criterion",
        "bacteria" => "bacterium",
        "analyses" => "analysis",
        "crises" => "crisis",
        "theses" => "thesis",
        "hypotheses" => "hypothesis",
        _ => return None,
    })
}

fn noun_rules(word: &str) -> Option<String> {
    if word.chars().count() <= 3 || !word.ends_with('s') {
        return None;
    }
    // Latin/Greek singulars and -ss words are not plurals
    if ["ss", "us", "is"].iter().any(|s| word.ends_with(s)) {
        return None;
    }
    if let Some(stem) = word.strip_suffix("ies") {
        return (stem.len() >= 2).then(|| format!("{stem}y"));
    }
    for suffix in ["sses", "ches", "shes", "xes", "zes"] {
        if word.ends_with(suffix) {
            return Some(word[..word.len() - 2].to_string());
        }
    }
    word.strip_suffix('s').map(str::to_string)
}

fn verb_exception(word: &str) -> Option<&'static str> {
    Some(match word {
        "am" | "is" | "are" | "was" | "were" | "been" | "being" => "be",
        "has" | "had" | "having" => "have",
        "does" | "did" | "done" => "do",
        "goes" | "went" | "gone" => "go",
        "made" | "making" => "make",
        "said" | "says" => "say",
        "got" | "gotten" => "get",
        "took" | "taken" | "taking" => "take",
        "saw" | "seen" => "see",
        "came" | "coming" => "come",
        "knew" | "known" => "know",
        "thought" => "think",
        "gave" | "given" | "giving" => "give",
        "told" => "tell",
        "felt" => "feel",
        "found" => "find",
        "left" => "leave",
        "became" => "become",
        "began" | "begun" => "begin",
        "brought" => "bring",
        "bought" => "buy",
        "built" => "build",
        "kept" => "keep",
        "meant" => "mean",
        "ran" => "run",
        "sat" => "sit",
        "stood" => "stand",
        "understood" => "understand",
        "wrote" | "written" | "writing" => "write",
        "spoke" | "spoken" => "speak",
        "heard" => "hear",
        "held" => "hold",
        "led" => "lead",
        "lost" => "lose",
        "met" => "meet",
        "paid" => "pay",
        "sent" => "send",
        "spent" => "spend",
        "taught" => "teach",
        "won" => "win",
        "grew" | "grown" => "grow",
        "drew" | "drawn" => "draw",
        "fell" | "fallen" => "fall",
        "ate" | "eaten" => "eat",
        "drove" | "driven" => "drive",
        "flew" | "flown" => "fly",
        "forgot" | "forgotten" => "forget",
        "chose" | "chosen" => "choose",
        "broke" | "broken" => "break",
        "wore" | "worn" => "wear",
        "threw" | "thrown" => "throw",
        "caught" => "catch",
        "fought" => "fight",
        "sold" => "sell",
        "slept" => "sleep",
        "used" | "using" | "uses" => "use",
        "lived" | "living" => "live",
        "loved" | "loving" => "love",
        "moved" | "moving" => "move",
        _ => return None,
    })
}

fn verb_rules(word: &str) -> Option<String> {
    if word.chars().count() <= 3 {
        return None;
    }
    if let Some(stem) = word.strip_suffix("ies").or_else(|| word.strip_suffix("ied")) {
        return (stem.len() >= 2).then(|| format!("{stem}y"));
    }
    if let Some(stem) = word.strip_suffix("ing") {
        return (stem.len() >= 2).then(|| restore_stem(stem));
    }
    if let Some(stem) = word.strip_suffix("ed") {
        if word.ends_with("eed") {
            return None;
        }
        return (stem.len() >= 2).then(|| restore_stem(stem));
    }
    for suffix in ["sses", "ches", "shes", "xes", "zes"] {
        if word.ends_with(suffix) {
            return Some(word[..word.len() - 2].to_string());
        }
    }
    if word.ends_with("ss") || word.ends_with("us") {
        return None;
    }
    word.strip_suffix('s').map(str::to_string)
}

/// Undo spelling changes made when "-ing"/"-ed" was attached.
fn restore_stem(stem: &str) -> String {
    let chars: Vec<char> = stem.chars().collect();
    let n = chars.len();
    let last = chars[n - 1];

    // running -> run, stopped -> stop (but falling, passing, buzzing keep theirs)
    if n >= 3 && last == chars[n - 2] && !is_vowel(last) && !matches!(last, 'l' | 's' | 'z' | 'f') {
        return chars[..n - 1].iter().collect();
    }

    // hoping -> hope, making -> make: short consonant-vowel-consonant stems
    let short_cvc = n == 3
        && !is_vowel(chars[0])
        && is_vowel(chars[1])
        && !is_vowel(last)
        && !matches!(last, 'w' | 'x' | 'y');

    // living -> live, producing -> produce, judging -> judge, continuing -> continue
    let needs_e = matches!(last, 'v' | 'u')
        || (last == 'c' && n >= 2 && chars[n - 2] != 'c')
        || stem.ends_with("dg")
        || stem.ends_with("rg");

    if short_cvc || needs_e {
        format!("{stem}e")
    } else {
        stem.to_string()
    }
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

fn adjective_exception(word: &str) -> Option<&'static str> {
    Some(match word {
        "better" | "best" => "good",
        "worse" | "worst" => "bad",
        "further" | "furthest" => "far",
        "bigger" | "biggest" => "big",
        "larger" | "largest" => "large",
        "smaller" | "smallest" => "small",
        "older" | "oldest" | "elder" | "eldest" => "old",
        "newer" | "newest" => "new",
        "higher" | "highest" => "high",
        "lower" | "lowest" => "low",
        "longer" | "longest" => "long",
        "greater" | "greatest" => "great",
        "harder" | "hardest" => "hard",
        "stronger" | "strongest" => "strong",
        "faster" | "fastest" => "fast",
        "younger" | "youngest" => "young",
        "wider" | "widest" => "wide",
        "deeper" | "deepest" => "deep",
        "simpler" | "simplest" => "simple",
        "hotter" | "hottest" => "hot",
        _ => return None,
    })
}

fn adjective_rules(word: &str) -> Option<String> {
    // easier -> easy, happiest -> happy
    if word.chars().count() <= 5 {
        return None;
    }
    word.strip_suffix("iest")
        .or_else(|| word.strip_suffix("ier"))
        .filter(|stem| stem.len() >= 2)
        .map(|stem| format!("{stem}y"))
}

fn adverb_exception(word: &str) -> Option<&'static str> {
    Some(match word {
        "better" | "best" => "well",
        "harder" | "hardest" => "hard",
        "faster" | "fastest" => "fast",
        "further" | "furthest" | "farther" | "farthest" => "far",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lemma(word: &str, pos: PartOfSpeech) -> String {
        MorphyLemmatizer::new().lemmatize(word, pos)
    }

    #[test]
    fn test_noun_plurals() {
        assert_eq!(lemma("ideas", PartOfSpeech::Noun), "idea");
        assert_eq!(lemma("cities", PartOfSpeech::Noun), "city");
        assert_eq!(lemma("boxes", PartOfSpeech::Noun), "box");
        assert_eq!(lemma("churches", PartOfSpeech::Noun), "church");
        assert_eq!(lemma("women", PartOfSpeech::Noun), "woman");
        assert_eq!(lemma("children", PartOfSpeech::Noun), "child");
    }

    #[test]
    fn test_noun_singulars_untouched() {
        assert_eq!(lemma("glass", PartOfSpeech::Noun), "glass");
        assert_eq!(lemma("virus", PartOfSpeech::Noun), "virus");
        assert_eq!(lemma("analysis", PartOfSpeech::Noun), "analysis");
        assert_eq!(lemma("bus", PartOfSpeech::Noun), "bus");
    }

    #[test]
    fn test_verb_forms() {
        assert_eq!(lemma("running", PartOfSpeech::Verb), "run");
        assert_eq!(lemma("walked", PartOfSpeech::Verb), "walk");
        assert_eq!(lemma("hoping", PartOfSpeech::Verb), "hope");
        assert_eq!(lemma("studied", PartOfSpeech::Verb), "study");
        assert_eq!(lemma("producing", PartOfSpeech::Verb), "produce");
        assert_eq!(lemma("falling", PartOfSpeech::Verb), "fall");
        assert_eq!(lemma("went", PartOfSpeech::Verb), "go");
        assert_eq!(lemma("thinks", PartOfSpeech::Verb), "think");
        assert_eq!(lemma("needed", PartOfSpeech::Verb), "need");
    }

    #[test]
    fn test_adjective_and_adverb_forms() {
        assert_eq!(lemma("better", PartOfSpeech::Adjective), "good");
        assert_eq!(lemma("happiest", PartOfSpeech::Adjective), "happy");
        assert_eq!(lemma("bigger", PartOfSpeech::Adjective), "big");
        assert_eq!(lemma("quickly", PartOfSpeech::Adverb), "quickly");
        assert_eq!(lemma("better", PartOfSpeech::Adverb), "well");
    }

    #[test]
    fn test_other_pos_unchanged() {
        assert_eq!(lemma("the", PartOfSpeech::Determiner), "the");
    }
}
