// Rule-based part-of-speech tagger.
//
// The tokenizer only cares whether a token is a noun, verb, adverb or
// adjective, so a closed-class lexicon plus suffix heuristics gets close
// enough for topic modeling: function words are listed exhaustively, a
// short open-class lexicon covers the most frequent irregular cases, and
// everything else falls back to morphology with noun as the default.

use super::traits::{PartOfSpeech, PosTagger, TaggedToken};

/// Contraction suffixes split off as their own tokens ("don't" -> "do", "n't").
const CONTRACTIONS: [&str; 7] = ["n't", "'s", "'re", "'ve", "'ll", "'d", "'m"];

/// Lexicon-and-suffix tagger with one token of left context.
#[derive(Debug, Clone, Default)]
pub struct LexiconTagger;

impl LexiconTagger {
    pub fn new() -> Self {
        Self
    }

    /// Tag a single word given the previous token, if any.
    pub fn tag_word(&self, word: &str, prev: Option<&TaggedToken>) -> PartOfSpeech {
        if word.chars().all(|c| c.is_ascii_punctuation()) {
            return PartOfSpeech::Punctuation;
        }
        if word.chars().any(|c| c.is_ascii_digit()) {
            return PartOfSpeech::Numeral;
        }
        if let Some(pos) = closed_class(word) {
            return pos;
        }
        if let Some(pos) = open_class(word) {
            // "the work", "a talk": a base-form verb after a determiner,
            // adjective or possessive is being used as a noun.
            if pos == PartOfSpeech::Verb && prev.is_some_and(introduces_noun) {
                return PartOfSpeech::Noun;
            }
            return pos;
        }
        by_suffix(word)
    }
}

impl PosTagger for LexiconTagger {
    fn tag(&self, text: &str) -> Vec<TaggedToken> {
        let mut tagged: Vec<TaggedToken> = Vec::new();
        for piece in split_tokens(text) {
            let pos = self.tag_word(piece, tagged.last());
            tagged.push(TaggedToken {
                text: piece.to_string(),
                pos,
            });
        }
        tagged
    }
}

/// Split whitespace-separated chunks into words, contraction suffixes and
/// leading/trailing punctuation marks.
pub fn split_tokens(text: &str) -> Vec<&str> {
    let mut out = Vec::new();
    for chunk in text.split_whitespace() {
        let core_start = chunk
            .char_indices()
            .find(|(_, c)| !c.is_ascii_punctuation())
            .map(|(i, _)| i)
            .unwrap_or(chunk.len());

        // Entirely punctuation: one token per mark
        if core_start == chunk.len() {
            out.extend(chunk.char_indices().map(|(i, c)| &chunk[i..i + c.len_utf8()]));
            continue;
        }

        let core_end = chunk
            .char_indices()
            .rev()
            .find(|(_, c)| !c.is_ascii_punctuation())
            .map(|(i, c)| i + c.len_utf8())
            .unwrap_or(chunk.len());

        out.extend(
            chunk[..core_start]
                .char_indices()
                .map(|(i, c)| &chunk[i..i + c.len_utf8()]),
        );

        let core = &chunk[core_start..core_end];
        match CONTRACTIONS
            .iter()
            .find(|suffix| core.len() > suffix.len() && core.ends_with(*suffix))
        {
            Some(suffix) => {
                let split = core.len() - suffix.len();
                out.push(&core[..split]);
                out.push(&core[split..]);
            }
            None => out.push(core),
        }

        let tail = &chunk[core_end..];
        out.extend(tail.char_indices().map(|(i, c)| &tail[i..i + c.len_utf8()]));
    }
    out
}

fn introduces_noun(prev: &TaggedToken) -> bool {
    matches!(prev.pos, PartOfSpeech::Determiner | PartOfSpeech::Adjective)
        || matches!(
            prev.text.as_str(),
            "my" | "your" | "his" | "her" | "its" | "our" | "their"
        )
}

fn closed_class(word: &str) -> Option<PartOfSpeech> {
    let pos = match word {
        "the" | "a" | "an" | "this" | "that" | "these" | "those" | "some" | "any" | "each"
        | "every" | "no" | "another" | "either" | "neither" | "all" | "both" | "half"
        | "such" | "what" | "which" | "whose" => PartOfSpeech::Determiner,

        "i" | "me" | "my" | "mine" | "myself" | "you" | "your" | "yours" | "yourself"
        | "yourselves" | "he" | "him" | "his" | "himself" | "she" | "her" | "hers"
        | "herself" | "it" | "its" | "itself" | "we" | "us" | "our" | "ours" | "ourselves"
        | "they" | "them" | "their" | "theirs" | "themselves" | "who" | "whom"
        | "someone" | "something" | "anyone" | "anything" | "everyone" | "everything"
        | "nobody" | "nothing" | "somebody" | "anybody" | "everybody" => PartOfSpeech::Pronoun,

        "of" | "in" | "on" | "at" | "by" | "for" | "with" | "about" | "against" | "between"
        | "into" | "through" | "during" | "before" | "after" | "above" | "below" | "from"
        | "up" | "down" | "out" | "off" | "over" | "under" | "around" | "among" | "across"
        | "along" | "behind" | "beyond" | "within" | "without" | "upon" | "toward"
        | "towards" | "like" | "than" | "per" | "via" | "since" | "until" | "onto"
        | "inside" | "outside" | "throughout" => PartOfSpeech::Preposition,

        "and" | "or" | "but" | "nor" | "so" | "because" | "if" | "while" | "although"
        | "though" | "unless" | "whether" | "whereas" | "when" | "where" | "why" | "how" => {
            PartOfSpeech::Conjunction
        }

        "be" | "am" | "is" | "are" | "was" | "were" | "been" | "being" | "have" | "has"
        | "had" | "having" | "do" | "does" | "did" | "will" | "would" | "shall" | "should"
        | "can" | "could" | "may" | "might" | "must" | "ca" | "wo" | "'ll" | "'d" | "'re"
        | "'ve" | "'m" => PartOfSpeech::Auxiliary,

        "to" | "not" | "n't" | "'s" | "'" => PartOfSpeech::Particle,

        "oh" | "ah" | "um" | "uh" | "yeah" | "yes" | "ya" | "wow" | "hey" | "okay" | "ok"
        | "hi" | "hello" | "please" | "thanks" => PartOfSpeech::Interjection,

        "one" | "two" | "three" | "four" | "five" | "six" | "seven" | "eight" | "nine"
        | "ten" | "eleven" | "twelve" | "twenty" | "thirty" | "forty" | "fifty" | "hundred"
        | "thousand" | "million" | "billion" | "trillion" => PartOfSpeech::Numeral,

        _ => return None,
    };
    Some(pos)
}

fn open_class(word: &str) -> Option<PartOfSpeech> {
    let pos = match word {
        "very" | "also" | "just" | "really" | "now" | "then" | "here" | "there" | "always"
        | "never" | "often" | "still" | "even" | "already" | "soon" | "again" | "ever"
        | "too" | "quite" | "almost" | "together" | "away" | "back" | "maybe" | "perhaps"
        | "instead" | "yet" | "sometimes" | "today" | "tomorrow" | "yesterday" | "once"
        | "twice" | "rather" | "else" | "ago" | "much" | "more" | "most" | "less" | "least"
        | "well" | "only" | "enough" | "anyway" | "everywhere" | "somewhere" | "forward"
        | "actually" | "literally" => PartOfSpeech::Adverb,

        "good" | "great" | "new" | "old" | "big" | "small" | "little" | "large" | "long"
        | "high" | "low" | "different" | "important" | "able" | "bad" | "best" | "better"
        | "worse" | "worst" | "nice" | "real" | "true" | "whole" | "same" | "few" | "many"
        | "own" | "other" | "last" | "next" | "first" | "early" | "late" | "young" | "right"
        | "wrong" | "free" | "full" | "sure" | "possible" | "hard" | "easy" | "simple"
        | "clear" | "certain" | "strong" | "human" | "happy" | "sad" | "amazing" | "huge"
        | "tiny" | "major" | "main" | "poor" | "rich" | "open" | "short" | "deep" | "dark"
        | "hot" | "cold" | "wide" | "entire" | "final" | "common" | "single" | "likely"
        | "bigger" | "biggest" | "larger" | "largest" | "smaller" | "smallest" | "older"
        | "oldest" | "greater" | "greatest" | "higher" | "highest" => PartOfSpeech::Adjective,

        "go" | "goes" | "went" | "gone" | "get" | "gets" | "got" | "gotten" | "make"
        | "makes" | "made" | "know" | "knows" | "knew" | "known" | "think" | "thinks"
        | "thought" | "take" | "takes" | "took" | "taken" | "see" | "sees" | "saw" | "seen"
        | "come" | "comes" | "came" | "want" | "wants" | "look" | "looks" | "use" | "uses"
        | "find" | "finds" | "found" | "give" | "gives" | "gave" | "given" | "tell"
        | "tells" | "told" | "work" | "works" | "call" | "calls" | "try" | "tries" | "ask"
        | "asks" | "need" | "needs" | "feel" | "feels" | "felt" | "become" | "becomes"
        | "became" | "leave" | "leaves" | "left" | "put" | "puts" | "mean" | "means"
        | "meant" | "keep" | "keeps" | "kept" | "let" | "lets" | "begin" | "begins"
        | "began" | "begun" | "seem" | "seems" | "help" | "helps" | "talk" | "talks"
        | "turn" | "turns" | "start" | "starts" | "show" | "shows" | "hear" | "hears"
        | "heard" | "play" | "plays" | "run" | "runs" | "ran" | "move" | "moves" | "live"
        | "lives" | "believe" | "believes" | "say" | "says" | "said" | "bring" | "brings"
        | "brought" | "build" | "builds" | "built" | "buy" | "bought" | "write" | "wrote"
        | "written" | "sit" | "sat" | "stand" | "stood" | "lose" | "lost" | "pay" | "paid"
        | "meet" | "met" | "send" | "sent" | "spend" | "spent" | "teach" | "taught"
        | "understand" | "understood" | "grow" | "grew" | "grown" | "speak" | "spoke"
        | "spoken" | "create" | "happen" | "happens" | "change" | "changes" | "imagine"
        | "remember" | "learn" | "learns" | "realize" | "love" | "wait" => PartOfSpeech::Verb,

        // Suffix look-alikes that are nouns
        "thing" | "king" | "ring" | "spring" | "string" | "morning" | "evening" | "ceiling"
        | "wedding" | "family" | "supply" | "reply" | "ally" | "assembly" | "hundred"
        | "animal" | "signal" | "hospital" | "capital" | "individual" | "material"
        | "journal" | "festival" | "metal" | "interval" | "proposal" | "criminal" | "music"
        | "topic" | "logic" | "clinic" | "traffic" | "republic" | "panic" | "native"
        | "detective" | "objective" | "table" | "cable" | "bible" | "vegetable" => {
            PartOfSpeech::Noun
        }

        _ => return None,
    };
    Some(pos)
}

fn by_suffix(word: &str) -> PartOfSpeech {
    let len = word.chars().count();
    if len <= 3 {
        return PartOfSpeech::Noun;
    }
    if word.ends_with("ly") && len > 4 {
        return PartOfSpeech::Adverb;
    }
    if word.ends_with("ing") || word.ends_with("ed") {
        return PartOfSpeech::Verb;
    }
    const ADJECTIVE_SUFFIXES: [&str; 9] =
        ["ous", "ful", "ive", "able", "ible", "al", "ic", "less", "ish"];
    if ADJECTIVE_SUFFIXES.iter().any(|s| word.ends_with(s)) {
        return PartOfSpeech::Adjective;
    }
    PartOfSpeech::Noun
}
