//! Typed translations for the gallery UI
//!
//! Every user-visible string is a [`Message`] variant. Each locale maps every
//! variant in an exhaustive `match`, so a missing translation fails to compile
//! instead of showing a raw key at runtime.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// Supported UI languages
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Hu,
}

/// Declares [`Message`] together with [`Message::ALL`] and the key table
///
/// Variants, the list and the keys come from one declaration, so a message
/// cannot exist without being served to the browser.
macro_rules! messages {
    ($($variant:ident => $key:literal,)+) => {
        /// UI strings
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Message {
            $($variant,)+
        }

        impl Message {
            /// Every message, in declaration order
            pub const ALL: &'static [Message] = &[$(Message::$variant,)+];

            /// Stable key used by the browser UI
            pub fn key(self) -> &'static str {
                match self {
                    $(Message::$variant => $key,)+
                }
            }
        }
    };
}

messages! {
    LibraryTitle => "library.title",
    LibraryIntro => "library.intro",
    FilterByMaterial => "filter.by_material",
    ClearFilters => "filter.clear",
    Loading => "common.loading",
    NoDesignsFound => "library.no_designs",
    MaterialLabel => "design.material",
    ContributorLabel => "design.contributor",
    Anonymous => "design.anonymous",
    SubmittedOn => "design.submitted_on",
    ViewDesignFile => "design.view_file",
    AddToBooklet => "booklet.add",
    RemoveFromBooklet => "booklet.remove",
    BookletTitle => "booklet.title",
    BookletEmpty => "booklet.empty",
    DownloadBooklet => "booklet.download",
    GeneratingBooklet => "booklet.generating",
    BookletReady => "booklet.ready",
    BookletFailed => "booklet.failed",
    BookletInProgress => "booklet.in_progress",
    BookletEmptySelection => "booklet.empty_selection",
    MaterialsLoadFailed => "catalog.materials_failed",
    DesignsLoadFailed => "catalog.designs_failed",
    Reload => "common.reload",
    Language => "common.language",
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Hu];

    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Hu => "hu",
        }
    }

    /// Translated text for `message`
    pub fn text(self, message: Message) -> &'static str {
        match self {
            Locale::En => english(message),
            Locale::Hu => hungarian(message),
        }
    }

    /// Full key -> text map, served to the browser UI
    pub fn messages(self) -> BTreeMap<&'static str, &'static str> {
        Message::ALL
            .iter()
            .map(|&message| (message.key(), self.text(message)))
            .collect()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = Error;

    /// Accepts `en`, `HU`, `hu-HU`, `en_GB` and similar tags
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let language = s
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        match language.as_str() {
            "en" => Ok(Locale::En),
            "hu" => Ok(Locale::Hu),
            _ => Err(Error::InvalidInput(format!("Unsupported locale: {}", s))),
        }
    }
}

fn english(message: Message) -> &'static str {
    match message {
        Message::LibraryTitle => "Design Library",
        Message::LibraryIntro => {
            "Browse shelter designs built from reused materials and collect your favourites into a booklet."
        }
        Message::FilterByMaterial => "Filter by material",
        Message::ClearFilters => "Clear filters",
        Message::Loading => "Loading...",
        Message::NoDesignsFound => "No designs match the selected materials.",
        Message::MaterialLabel => "Material",
        Message::ContributorLabel => "Contributor",
        Message::Anonymous => "Anonymous",
        Message::SubmittedOn => "Submitted on",
        Message::ViewDesignFile => "View design file",
        Message::AddToBooklet => "Add to booklet",
        Message::RemoveFromBooklet => "Remove from booklet",
        Message::BookletTitle => "Your booklet",
        Message::BookletEmpty => "No designs selected yet.",
        Message::DownloadBooklet => "Download booklet",
        Message::GeneratingBooklet => "Generating booklet...",
        Message::BookletReady => "Your booklet has been downloaded.",
        Message::BookletFailed => "Failed to generate the booklet. Please try again.",
        Message::BookletInProgress => "A booklet is already being generated.",
        Message::BookletEmptySelection => "Select at least one design first.",
        Message::MaterialsLoadFailed => "Could not load materials.",
        Message::DesignsLoadFailed => "Could not load designs.",
        Message::Reload => "Reload",
        Message::Language => "Language",
    }
}

fn hungarian(message: Message) -> &'static str {
    match message {
        Message::LibraryTitle => "Tervkönyvtár",
        Message::LibraryIntro => {
            "Böngésszen az újrahasznosított anyagokból épülő menedéktervek között, és gyűjtse kedvenceit egy füzetbe."
        }
        Message::FilterByMaterial => "Szűrés anyag szerint",
        Message::ClearFilters => "Szűrők törlése",
        Message::Loading => "Betöltés...",
        Message::NoDesignsFound => "Nincs a kiválasztott anyagoknak megfelelő terv.",
        Message::MaterialLabel => "Anyag",
        Message::ContributorLabel => "Beküldő",
        Message::Anonymous => "Névtelen",
        Message::SubmittedOn => "Beküldve",
        Message::ViewDesignFile => "Tervfájl megtekintése",
        Message::AddToBooklet => "Hozzáadás a füzethez",
        Message::RemoveFromBooklet => "Eltávolítás a füzetből",
        Message::BookletTitle => "Saját füzet",
        Message::BookletEmpty => "Még nincs kiválasztott terv.",
        Message::DownloadBooklet => "Füzet letöltése",
        Message::GeneratingBooklet => "Füzet készítése...",
        Message::BookletReady => "A füzet letöltése megtörtént.",
        Message::BookletFailed => "Nem sikerült elkészíteni a füzetet. Kérjük, próbálja újra.",
        Message::BookletInProgress => "A füzet készítése már folyamatban van.",
        Message::BookletEmptySelection => "Előbb válasszon ki legalább egy tervet.",
        Message::MaterialsLoadFailed => "Nem sikerült betölteni az anyagokat.",
        Message::DesignsLoadFailed => "Nem sikerült betölteni a terveket.",
        Message::Reload => "Újratöltés",
        Message::Language => "Nyelv",
    }
}
