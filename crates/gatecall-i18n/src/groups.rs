//! Boarding group phrases.

use gatecall_common::{BoardingGroup, Language};
use std::collections::BTreeSet;

/// Row-range descriptor per group, indexed by [`BoardingGroup::index`].
type GroupTable = [&'static str; BoardingGroup::ALL.len()];

const GROUPS_ES: GroupTable = [
    "grupo 1, filas 1 a 8",
    "grupo 2, filas 9 a 16",
    "grupo 3, filas 17 a 24",
    "grupo 4, filas 25 a 32",
];

const GROUPS_EN: GroupTable = [
    "Group 1, rows 1 to 8",
    "Group 2, rows 9 to 16",
    "Group 3, rows 17 to 24",
    "Group 4, rows 25 to 32",
];

const GROUPS_PT: GroupTable = [
    "grupo 1, fileiras de 1 a 8",
    "grupo 2, fileiras de 9 a 16",
    "grupo 3, fileiras de 17 a 24",
    "grupo 4, fileiras de 25 a 32",
];

/// Row-range phrase for one group in one language
pub const fn group_descriptor(group: BoardingGroup, language: Language) -> &'static str {
    let table = match language {
        Language::Spanish => &GROUPS_ES,
        Language::English => &GROUPS_EN,
        Language::Portuguese => &GROUPS_PT,
    };
    table[group.index()]
}

/// Joined group phrase for each language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupPhrase {
    /// Spanish phrase
    pub es: String,
    /// English phrase
    pub en: String,
    /// Portuguese phrase
    pub pt: String,
}

impl GroupPhrase {
    /// Phrase for a language
    pub fn get(&self, language: Language) -> &str {
        match language {
            Language::Spanish => &self.es,
            Language::English => &self.en,
            Language::Portuguese => &self.pt,
        }
    }
}

fn join(groups: &BTreeSet<BoardingGroup>, language: Language) -> String {
    groups
        .iter()
        .map(|group| group_descriptor(*group, language))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Describe the selected groups in every language.
///
/// Groups are listed in ascending id order no matter how they were selected.
/// Returns `None` for an empty selection so scripts can tell "no groups"
/// apart from an empty phrase.
pub fn build_group_phrase<I>(groups: I) -> Option<GroupPhrase>
where
    I: IntoIterator<Item = BoardingGroup>,
{
    let groups: BTreeSet<BoardingGroup> = groups.into_iter().collect();
    if groups.is_empty() {
        return None;
    }

    Some(GroupPhrase {
        es: join(&groups, Language::Spanish),
        en: join(&groups, Language::English),
        pt: join(&groups, Language::Portuguese),
    })
}
