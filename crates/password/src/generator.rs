//! Utility for generating passwords from a [`Configuration`].
use secrecy::SecretString;

use crate::{
    config::{Configuration, RandomOptions},
    memorable::memorable_password,
    random::{RandomSource, SecureRandom},
    Result,
};

/// Generated password result.
#[derive(Debug)]
pub struct GeneratedPassword {
    /// The generated password.
    pub password: SecretString,
}

/// Generate a password.
///
/// Random passwords are validated first; memorable passwords
/// cannot fail.
pub fn generate<R>(
    config: &Configuration,
    random: &mut R,
) -> Result<GeneratedPassword>
where
    R: RandomSource + ?Sized,
{
    warn_insecure(config, random);
    generate_one(config, random)
}

/// Generate a password using the operating system's
/// secure random number generator.
pub fn generate_secure(config: &Configuration) -> Result<GeneratedPassword> {
    generate(config, &mut SecureRandom)
}

/// Generate multiple passwords.
pub fn generate_many<R>(
    config: &Configuration,
    random: &mut R,
    count: usize,
) -> Result<Vec<GeneratedPassword>>
where
    R: RandomSource + ?Sized,
{
    warn_insecure(config, random);
    let mut results = Vec::with_capacity(count);
    for _ in 0..count {
        results.push(generate_one(config, random)?);
    }
    Ok(results)
}

fn warn_insecure<R>(config: &Configuration, random: &R)
where
    R: RandomSource + ?Sized,
{
    if !random.is_secure() {
        tracing::warn!(
            mode = %config.mode(),
            "generate::insecure_random_source"
        );
    }
}

fn generate_one<R>(
    config: &Configuration,
    random: &mut R,
) -> Result<GeneratedPassword>
where
    R: RandomSource + ?Sized,
{
    let password = match config {
        Configuration::Random(options) => random_password(options, random)?,
        Configuration::Memorable(options) => {
            memorable_password(options, random)
        }
    };

    Ok(GeneratedPassword {
        password: SecretString::from(password),
    })
}

fn random_password<R>(options: &RandomOptions, random: &mut R) -> Result<String>
where
    R: RandomSource + ?Sized,
{
    if let Err(error) = options.validate() {
        tracing::debug!(error = %error, "generate::invalid_options");
        return Err(error);
    }

    let characters: Vec<char> = options.charset().chars().collect();
    let fragments = options.fragments();
    let base_len = options.length - options.custom_len();

    let mut password = Vec::with_capacity(options.length);
    for _ in 0..base_len {
        password.push(characters[random.next_index(characters.len())]);
    }

    // Each fragment position is chosen before the next is inserted.
    for fragment in &fragments {
        let position = random.next_index(password.len() + 1);
        password.splice(position..position, fragment.chars());
    }

    tracing::debug!(
        length = password.len(),
        charset = characters.len(),
        fragments = fragments.len(),
        "generate::random"
    );

    Ok(password.into_iter().collect())
}
