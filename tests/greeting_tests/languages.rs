//! Named cases, one per language and fallback

use greeter::greet;

use super::test_utils::assert_correct_message;

#[test]
fn test_saying_ola_to_people() {
    assert_correct_message(&greet("meleu", "Portuguese"), "Olá, meleu");
}

#[test]
fn test_saying_bonjour_to_people() {
    assert_correct_message(&greet("meleu", "French"), "Bonjour, meleu");
}

#[test]
fn test_saying_hola_to_people() {
    assert_correct_message(&greet("meleu", "Spanish"), "Hola, meleu");
}

#[test]
fn test_saying_hello_to_people() {
    assert_correct_message(&greet("meleu", ""), "Hello, meleu");
}

#[test]
fn test_hello_world_when_empty_string_supplied() {
    assert_correct_message(&greet("", ""), "Hello, World");
}

#[test]
fn test_unknown_language_falls_back_to_english() {
    assert_correct_message(&greet("meleu", "Klingon"), "Hello, meleu");
}

#[test]
fn test_empty_name_with_known_language() {
    assert_correct_message(&greet("", "Portuguese"), "Olá, World");
}

#[test]
fn test_table() {
    let cases = [
        ("meleu", "Portuguese", "Olá, meleu"),
        ("meleu", "French", "Bonjour, meleu"),
        ("meleu", "Spanish", "Hola, meleu"),
        ("meleu", "", "Hello, meleu"),
        ("", "", "Hello, World"),
        ("", "Spanish", "Hola, World"),
        ("", "French", "Bonjour, World"),
        ("meleu", "Klingon", "Hello, meleu"),
    ];

    for (name, language, want) in cases {
        assert_correct_message(&greet(name, language), want);
    }
}
