use crate::{config::MemorableOptions, random::RandomSource, DIGITS};

/// Words used for memorable passwords.
pub const WORD_LIST: &[&str] = &[
    "apple",
    "banana",
    "cherry",
    "dragon",
    "elephant",
    "forest",
    "galaxy",
    "harmony",
    "island",
    "jupiter",
    "kangaroo",
    "lightning",
    "mountain",
    "nebula",
    "ocean",
    "penguin",
    "quantum",
    "river",
    "sunshine",
    "tiger",
    "universe",
    "volcano",
    "waterfall",
    "xylophone",
    "yellow",
    "zebra",
    "abstract",
    "bicycle",
    "camera",
    "diamond",
    "eclipse",
    "feather",
    "guitar",
    "horizon",
    "infinity",
    "jungle",
    "keyboard",
    "lighthouse",
    "moonlight",
    "northern",
    "octopus",
    "paradise",
    "quicksand",
    "rainbow",
    "silhouette",
    "thunder",
    "umbrella",
    "velocity",
    "whisper",
    "yellowstone",
    "zenith",
];

/// Memorable password generator.
pub(crate) fn memorable_password<R>(
    options: &MemorableOptions,
    random: &mut R,
) -> String
where
    R: RandomSource + ?Sized,
{
    let digits = DIGITS.as_bytes();
    let mut words = Vec::with_capacity(options.word_count);
    for _ in 0..options.word_count {
        let word = WORD_LIST[random.next_index(WORD_LIST.len())];
        let mut word = if options.capitalize {
            capitalize(word)
        } else {
            word.to_owned()
        };

        if options.append_digit {
            word.push(char::from(digits[random.next_index(digits.len())]));
        }

        words.push(word);
    }

    let mut password = words.join(options.separator.as_str());

    if let Some(prefix) = non_blank(&options.prefix_word) {
        password = format!("{}{}{}", prefix, options.separator, password);
    }

    if let Some(number) = non_blank(&options.suffix_number) {
        password.push_str(number);
    }

    if let Some(symbol) = non_blank(&options.suffix_symbol) {
        password.push_str(symbol);
    }

    tracing::debug!(
        words = options.word_count,
        capitalize = options.capitalize,
        append_digit = options.append_digit,
        "generate::memorable"
    );

    password
}

/// Uppercase the first character of a word.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|value| !value.trim().is_empty())
}
