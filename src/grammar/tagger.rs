//! Part-of-speech tagging.

use super::lexicon::{
    self, adjective_stem, contains, irregular_adjective, irregular_plural, irregular_verb, AuxTag,
    Degree, ADJECTIVES, ADVERBS, AUXILIARIES, BASE_VERBS, CARDINALS, CONJUNCTIONS, DETERMINERS,
    INTERJECTIONS, MODALS, NOUNS, PERFECT_AUXILIARIES, POSSESSIVES, PREPOSITIONS, PRONOUNS,
    THIRD_SINGULAR_PRONOUNS, WH_ADVERBS, WH_PRONOUNS,
};
use super::tags::PosTag;
use crate::error::CapabilityError;

/// External part-of-speech tagging capability.
pub trait PosTagger: Send + Sync {
    /// One tag per word, in order. Words are lowercase and alphabetic.
    fn tag(&self, words: &[String]) -> Result<Vec<PosTag>, CapabilityError>;
}

const ADJECTIVE_SUFFIXES: &[&str] = &["ful", "less", "ous", "ive", "able", "ible", "al", "ic", "ish"];

/// Lexicon and suffix based tagger.
///
/// Closed-class words come from fixed lists. Open-class words are resolved
/// from the base-form lexicon and the tags to their left, then by suffix;
/// anything left over is a noun.
#[derive(Debug, Default, Clone, Copy)]
pub struct RuleTagger;

/// Left context of the word being tagged, skipping adverbs.
struct Context<'a> {
    word: Option<&'a str>,
    tag: Option<PosTag>,
}

impl<'a> Context<'a> {
    fn before(words: &'a [String], tags: &[PosTag], index: usize) -> Self {
        (0..index)
            .rev()
            .find(|&i| tags[i] != PosTag::Adverb)
            .map(|i| Context {
                word: Some(words[i].as_str()),
                tag: Some(tags[i]),
            })
            .unwrap_or(Context {
                word: None,
                tag: None,
            })
    }

    fn is(&self, tags: &[PosTag]) -> bool {
        self.tag.is_some_and(|t| tags.contains(&t))
    }

    fn wants_base_form(&self) -> bool {
        self.is(&[PosTag::Modal, PosTag::To])
    }

    fn is_perfect(&self) -> bool {
        self.word.is_some_and(|w| contains(PERFECT_AUXILIARIES, w))
    }

    fn is_third_singular_subject(&self) -> bool {
        self.word.is_some_and(|w| contains(THIRD_SINGULAR_PRONOUNS, w))
            || self.is(&[PosTag::Noun, PosTag::WhPronoun])
    }

    /// A word that can be the subject of a following finite verb.
    fn is_subject(&self) -> bool {
        self.is(&[
            PosTag::Pronoun,
            PosTag::Noun,
            PosTag::PluralNoun,
            PosTag::WhPronoun,
        ])
    }

    fn is_nominal_modifier(&self) -> bool {
        self.is(&[
            PosTag::Determiner,
            PosTag::PossessivePronoun,
            PosTag::Adjective,
            PosTag::Cardinal,
        ])
    }
}

impl RuleTagger {
    fn closed_class(word: &str) -> Option<PosTag> {
        let tag = if word == "to" {
            PosTag::To
        } else if contains(PRONOUNS, word) {
            PosTag::Pronoun
        } else if contains(POSSESSIVES, word) {
            PosTag::PossessivePronoun
        } else if contains(MODALS, word) {
            PosTag::Modal
        } else if contains(DETERMINERS, word) {
            PosTag::Determiner
        } else if contains(WH_PRONOUNS, word) {
            PosTag::WhPronoun
        } else if contains(WH_ADVERBS, word) {
            PosTag::WhAdverb
        } else if contains(CONJUNCTIONS, word) {
            PosTag::Conjunction
        } else if contains(PREPOSITIONS, word) {
            PosTag::Preposition
        } else if contains(INTERJECTIONS, word) {
            PosTag::Interjection
        } else if contains(CARDINALS, word) {
            PosTag::Cardinal
        } else if contains(ADVERBS, word) {
            PosTag::Adverb
        } else {
            return None;
        };
        Some(tag)
    }

    fn auxiliary(word: &str, context: &Context) -> Option<PosTag> {
        let (_, aux) = AUXILIARIES.iter().find(|(form, _)| *form == word)?;
        Some(match aux {
            AuxTag::Present if context.wants_base_form() => PosTag::Verb,
            AuxTag::Base => PosTag::Verb,
            AuxTag::Present => PosTag::VerbPresent,
            AuxTag::ThirdSingular => PosTag::VerbThirdSingular,
            AuxTag::Past if context.is_perfect() => PosTag::PastParticiple,
            AuxTag::Past => PosTag::PastTense,
            AuxTag::Participle => PosTag::PastParticiple,
            AuxTag::Gerund => PosTag::Gerund,
        })
    }

    fn irregular(word: &str, context: &Context) -> Option<PosTag> {
        if let Some((_, past, participle)) = irregular_verb(word) {
            return Some(match (past, participle) {
                (true, true) if context.is_perfect() => PosTag::PastParticiple,
                (true, _) => PosTag::PastTense,
                (false, true) => PosTag::PastParticiple,
                (false, false) => PosTag::VerbThirdSingular,
            });
        }
        if let Some((_, degree)) = irregular_adjective(word) {
            return Some(match degree {
                Degree::Comparative => PosTag::Comparative,
                Degree::Superlative => PosTag::Superlative,
            });
        }
        irregular_plural(word).map(|_| PosTag::PluralNoun)
    }

    /// Tag for a word the base-form lexicon knows.
    fn known_base(word: &str, context: &Context) -> Option<PosTag> {
        let is_verb = contains(BASE_VERBS, word);
        let is_noun = contains(NOUNS, word);
        let is_adjective = contains(ADJECTIVES, word);

        if is_verb {
            if context.wants_base_form() {
                return Some(PosTag::Verb);
            }
            if context.is_nominal_modifier() {
                return Some(if is_adjective && !is_noun {
                    PosTag::Adjective
                } else {
                    PosTag::Noun
                });
            }
            if context.is(&[PosTag::Pronoun, PosTag::PluralNoun]) {
                return Some(PosTag::VerbPresent);
            }
        }

        if is_noun {
            Some(PosTag::Noun)
        } else if is_adjective {
            Some(PosTag::Adjective)
        } else if is_verb {
            Some(PosTag::Verb)
        } else {
            None
        }
    }

    fn by_suffix(word: &str, context: &Context) -> PosTag {
        let len = word.chars().count();

        // Unknown "-ing"/"-ed" words are verbs only in verb position:
        // "the pudding" and "need speed" stay nouns.
        if word.ends_with("ing") && len > 4 && !context.is_nominal_modifier() {
            return PosTag::Gerund;
        }
        if word.ends_with("ed") && len > 3 {
            if context.is_perfect() {
                return PosTag::PastParticiple;
            }
            if context.is_subject() {
                return PosTag::PastTense;
            }
        }
        if word.ends_with("ly") && len > 3 {
            return PosTag::Adverb;
        }
        if let Some((_, degree)) = adjective_stem(word) {
            return match degree {
                Degree::Comparative => PosTag::Comparative,
                Degree::Superlative => PosTag::Superlative,
            };
        }
        if ADJECTIVE_SUFFIXES.iter().any(|s| word.ends_with(s)) && len > 4 {
            return PosTag::Adjective;
        }
        if word.ends_with('s') && len > 3 && !["ss", "us", "is"].iter().any(|s| word.ends_with(s)) {
            return if context.is_third_singular_subject() {
                PosTag::VerbThirdSingular
            } else {
                PosTag::PluralNoun
            };
        }
        PosTag::Noun
    }

    fn tag_word(words: &[String], tags: &[PosTag], index: usize) -> PosTag {
        let word = words[index].as_str();
        let context = Context::before(words, tags, index);

        Self::closed_class(word)
            .or_else(|| Self::auxiliary(word, &context))
            .or_else(|| Self::irregular(word, &context))
            .or_else(|| Self::known_base(word, &context))
            .unwrap_or_else(|| Self::by_suffix(word, &context))
    }
}

impl PosTagger for RuleTagger {
    fn tag(&self, words: &[String]) -> Result<Vec<PosTag>, CapabilityError> {
        if let Some(bad) = words
            .iter()
            .find(|w| w.is_empty() || !w.chars().all(char::is_alphabetic))
        {
            return Err(CapabilityError::Tagging(format!(
                "cannot tag non-alphabetic token '{}'",
                bad
            )));
        }

        let mut tags = Vec::with_capacity(words.len());
        for index in 0..words.len() {
            let tag = Self::tag_word(words, &tags, index);
            tags.push(tag);
        }
        Ok(tags)
    }
}

/// Whether `word` is in any of the open-class word lists.
pub fn is_known_word(word: &str) -> bool {
    lexicon::is_known_base(word)
        || irregular_verb(word).is_some()
        || irregular_adjective(word).is_some()
        || irregular_plural(word).is_some()
}
