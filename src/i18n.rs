// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Localized labels for the archived/template badge pill.

/// Locale used when the requested one has no translations.
pub const DEFAULT_LOCALE: &str = "en";

/// Labels rendered on a repository card.
#[derive(Debug, Clone, Copy, PartialEq, Eq,)]
pub struct Translations
{
    pub template: &'static str,
    pub archived: &'static str,
}

const TABLE: &[(&str, Translations,)] = &[
    ("en", Translations {
        template: "Template", archived: "Archived",
    },),
    ("de", Translations {
        template: "Vorlage", archived: "Archiviert",
    },),
    ("fr", Translations {
        template: "Modèle", archived: "Archivé",
    },),
    ("es", Translations {
        template: "Plantilla", archived: "Archivado",
    },),
    ("pt-br", Translations {
        template: "Modelo", archived: "Arquivado",
    },),
    ("it", Translations {
        template: "Template", archived: "Archiviata",
    },),
    ("ja", Translations {
        template: "テンプレート", archived: "アーカイブ済み",
    },),
    ("cn", Translations {
        template: "模板", archived: "已归档",
    },),
    ("ru", Translations {
        template: "Шаблон", archived: "Архивирован",
    },),
    ("uk-ua", Translations {
        template: "Шаблон", archived: "Архівовано",
    },),
];

impl Translations
{
    /// Returns the labels for `locale`, case-insensitively, or English.
    pub fn for_locale(locale: &str,) -> Self
    {
        let wanted = locale.trim().to_ascii_lowercase();
        TABLE
            .iter()
            .find(|(code, _,)| *code == wanted,)
            .or_else(|| TABLE.iter().find(|(code, _,)| *code == DEFAULT_LOCALE,),)
            .map(|(_, translations,)| *translations,)
            .unwrap_or(Translations {
                template: "Template", archived: "Archived",
            },)
    }

    /// Whether `locale` has its own translations.
    pub fn is_supported(locale: &str,) -> bool
    {
        let wanted = locale.trim().to_ascii_lowercase();
        TABLE.iter().any(|(code, _,)| *code == wanted,)
    }
}
