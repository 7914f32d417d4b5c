//! Greetings in a handful of fixed languages.
//!
//! A greeting is always `prefix + name`. The prefix comes from the language
//! tag alone; unknown tags fall back to English and an empty name falls
//! back to [`DEFAULT_NAME`]. Nothing here can fail.

use serde::Serialize;

pub const DEFAULT_NAME: &str = "World";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Language {
    English,
    Spanish,
    French,
    Portuguese,
}

impl Language {
    pub const ALL: [Language; 4] = [
        Language::English,
        Language::Spanish,
        Language::French,
        Language::Portuguese,
    ];

    /// Exact, case-sensitive match. Anything unrecognized is English.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "Spanish" => Language::Spanish,
            "French" => Language::French,
            "Portuguese" => Language::Portuguese,
            _ => Language::English,
        }
    }

    pub fn prefix(self) -> &'static str {
        match self {
            Language::English => "Hello, ",
            Language::Spanish => "Hola, ",
            Language::French => "Bonjour, ",
            Language::Portuguese => "Olá, ",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Spanish => "Spanish",
            Language::French => "French",
            Language::Portuguese => "Portuguese",
        }
    }
}

pub fn resolve_name(name: &str) -> &str {
    if name.is_empty() {
        DEFAULT_NAME
    } else {
        name
    }
}

pub fn greet_in(name: &str, language: Language) -> String {
    format!("{}{}", language.prefix(), resolve_name(name))
}

/// Greet `name` in the language named by `language_tag`.
pub fn greet(name: &str, language_tag: &str) -> String {
    greet_in(name, Language::from_tag(language_tag))
}

/// One rendered greeting together with the inputs it was resolved from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Greeting {
    pub language: Language,
    pub name: String,
    pub message: String,
}

impl Greeting {
    pub fn new(name: &str, language_tag: &str) -> Self {
        let language = Language::from_tag(language_tag);
        Self {
            language,
            name: resolve_name(name).to_string(),
            message: greet_in(name, language),
        }
    }
}
