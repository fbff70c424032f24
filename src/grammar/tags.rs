//! Part-of-speech tags, following the Penn Treebank tag set.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PosTag {
    /// MD
    Modal,
    /// VB
    Verb,
    /// VBP, non-3rd-person singular present
    VerbPresent,
    /// VBZ
    VerbThirdSingular,
    /// VBG, gerund or present participle
    Gerund,
    /// VBD
    PastTense,
    /// VBN
    PastParticiple,
    /// NN
    Noun,
    /// NNS
    PluralNoun,
    /// JJ
    Adjective,
    /// JJR
    Comparative,
    /// JJS
    Superlative,
    /// RB
    Adverb,
    /// RBR
    AdverbComparative,
    /// RBS
    AdverbSuperlative,
    /// PRP
    Pronoun,
    /// PRP$
    PossessivePronoun,
    /// DT
    Determiner,
    /// IN
    Preposition,
    /// CC
    Conjunction,
    /// TO
    To,
    /// WP
    WhPronoun,
    /// WRB
    WhAdverb,
    /// UH
    Interjection,
    /// CD
    Cardinal,
}

impl PosTag {
    pub fn as_penn(&self) -> &'static str {
        match self {
            PosTag::Modal => "MD",
            PosTag::Verb => "VB",
            PosTag::VerbPresent => "VBP",
            PosTag::VerbThirdSingular => "VBZ",
            PosTag::Gerund => "VBG",
            PosTag::PastTense => "VBD",
            PosTag::PastParticiple => "VBN",
            PosTag::Noun => "NN",
            PosTag::PluralNoun => "NNS",
            PosTag::Adjective => "JJ",
            PosTag::Comparative => "JJR",
            PosTag::Superlative => "JJS",
            PosTag::Adverb => "RB",
            PosTag::AdverbComparative => "RBR",
            PosTag::AdverbSuperlative => "RBS",
            PosTag::Pronoun => "PRP",
            PosTag::PossessivePronoun => "PRP$",
            PosTag::Determiner => "DT",
            PosTag::Preposition => "IN",
            PosTag::Conjunction => "CC",
            PosTag::To => "TO",
            PosTag::WhPronoun => "WP",
            PosTag::WhAdverb => "WRB",
            PosTag::Interjection => "UH",
            PosTag::Cardinal => "CD",
        }
    }

    pub fn is_verb(&self) -> bool {
        matches!(
            self,
            PosTag::Verb
                | PosTag::VerbPresent
                | PosTag::VerbThirdSingular
                | PosTag::Gerund
                | PosTag::PastTense
                | PosTag::PastParticiple
        )
    }
}

impl std::fmt::Display for PosTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_penn())
    }
}
