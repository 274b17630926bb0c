use anyhow::Result;
use passgen_password::{
    generate, generate_many, generate_secure, Configuration, Error,
    RandomOptions, SecureRandom, SeededRandom, DIGITS, SYMBOLS, UPPERCASE,
};
use passgen_unit_tests::{composed_of, FixedSequence};
use secrecy::ExposeSecret;

#[test]
fn passgen_alpha_numeric_length() -> Result<()> {
    let config = Configuration::Random(RandomOptions {
        length: 12,
        uppercase: true,
        lowercase: true,
        digits: true,
        symbols: false,
        ..Default::default()
    });
    for _ in 0..100 {
        let result = generate_secure(&config)?;
        let password = result.password.expose_secret();
        assert_eq!(12, password.len());
        assert!(password.chars().all(|c| c.is_ascii_alphanumeric()));
    }
    Ok(())
}

#[test]
fn passgen_every_length() -> Result<()> {
    let mut random = SeededRandom::new(7);
    for length in 4..=64 {
        let config = RandomOptions::new(length)
            .lower()
            .custom_words(["tea"])
            .custom_numbers(["1"])
            .into();
        let result = generate(&config, &mut random)?;
        assert_eq!(length, result.password.expose_secret().chars().count());
    }
    Ok(())
}

#[test]
fn passgen_characters_from_sources() -> Result<()> {
    let config = RandomOptions::new(24)
        .numeric()
        .symbols()
        .custom_words(["Moon"])
        .custom_symbols(["~~"])
        .into();
    let alphabet = format!("{}{}", DIGITS, SYMBOLS);
    for _ in 0..100 {
        let result = generate_secure(&config)?;
        let password = result.password.expose_secret();
        assert!(
            composed_of(password, &alphabet, &["Moon", "~~"]),
            "unexpected characters in {}",
            password
        );
    }
    Ok(())
}

#[test]
fn passgen_fragments_verbatim() -> Result<()> {
    let config = RandomOptions::new(16)
        .upper()
        .custom_words(["  owl  "])
        .custom_numbers(["2024"])
        .custom_symbols(["$"])
        .into();
    let result = generate_secure(&config)?;
    let password = result.password.expose_secret();
    assert_eq!(16, password.len());
    assert!(composed_of(password, UPPERCASE, &["owl", "2024", "$"]));
    assert!(!password.contains(' '));
    Ok(())
}

#[test]
fn passgen_draw_count() -> Result<()> {
    // One draw per base character plus one per fragment.
    let config = RandomOptions::new(10)
        .lower()
        .custom_words(["ab", "", "cd"])
        .into();
    let mut random = FixedSequence::new(&[3, 1, 4, 1, 5, 9]);
    let result = generate(&config, &mut random)?;
    assert_eq!(10, result.password.expose_secret().len());
    assert_eq!(8, random.draws());
    Ok(())
}

#[test]
fn passgen_fixed_sequence() -> Result<()> {
    let config = RandomOptions::new(6).lower().custom_numbers(["42"]).into();
    let mut random = FixedSequence::new(&[0, 1, 2, 3, 1]);
    let result = generate(&config, &mut random)?;
    assert_eq!("a42bcd", result.password.expose_secret());
    Ok(())
}

#[test]
fn passgen_basic_options() -> Result<()> {
    let config = RandomOptions::new_basic(8, false, false).into();
    let result = generate_secure(&config)?;
    assert!(result
        .password
        .expose_secret()
        .chars()
        .all(|c| c.is_ascii_alphabetic()));
    Ok(())
}

#[test]
fn passgen_no_character_source() {
    let config = Configuration::Random(RandomOptions {
        length: 16,
        uppercase: false,
        lowercase: false,
        digits: false,
        symbols: false,
        ..Default::default()
    });
    let result = generate_secure(&config);
    assert!(matches!(result, Err(Error::NoCharacterSource)));
}

#[test]
fn passgen_custom_only_with_spare_length() {
    let config = RandomOptions::new(8).custom_words(["ab"]).into();
    let error = generate_secure(&config).unwrap_err();
    assert_eq!(Error::NoCharacterSource, error);
    assert_eq!(
        "select at least one character type or add custom elements that fill the whole length",
        error.to_string()
    );
}

#[test]
fn passgen_length_too_short() {
    let config = Configuration::Random(RandomOptions {
        length: 3,
        ..RandomOptions::new(3).lower().custom_words(["abcdef"])
    });
    let error = generate_secure(&config).unwrap_err();
    assert_eq!(Error::LengthTooShort { required: 6 }, error);
    assert_eq!(
        "password length must be at least 6 to include all custom elements",
        error.to_string()
    );
}

#[test]
fn passgen_fragments_exceed_length() {
    let config = RandomOptions::new(4)
        .upper()
        .custom_words(["abc"])
        .custom_symbols(["!?"])
        .into();
    assert!(matches!(
        generate_secure(&config),
        Err(Error::LengthTooShort { required: 5 })
    ));
}

#[test]
fn passgen_seeded_repeats() -> Result<()> {
    let config = Configuration::default();
    let first = generate(&config, &mut SeededRandom::new(99))?;
    let second = generate(&config, &mut SeededRandom::new(99))?;
    assert_eq!(
        first.password.expose_secret(),
        second.password.expose_secret()
    );
    Ok(())
}

#[test]
fn passgen_generate_many() -> Result<()> {
    let config = Configuration::default();
    let passwords = generate_many(&config, &mut SecureRandom, 5)?;
    assert_eq!(5, passwords.len());
    for result in passwords {
        assert_eq!(16, result.password.expose_secret().len());
    }
    Ok(())
}

#[test]
fn passgen_generate_many_error() {
    let config = RandomOptions::new(8).into();
    assert!(generate_many(&config, &mut SecureRandom, 3).is_err());
}

#[test]
#[cfg_attr(CI, ignore)]
fn passgen_uses_whole_charset() -> Result<()> {
    let config = RandomOptions::new(64).numeric().into();
    let mut seen = std::collections::HashSet::new();
    for _ in 0..20 {
        let result = generate_secure(&config)?;
        seen.extend(result.password.expose_secret().chars());
    }
    assert_eq!(DIGITS.len(), seen.len());
    Ok(())
}
